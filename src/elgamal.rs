// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! ElGamal encryption of points.
//!
//! Enc(Y) = (r * G, Y + r * P) for a recipient key P = x * G.
//! Ciphertexts add pairwise, so Enc(Y1) + Enc(Y2) decrypts to Y1 + Y2.

use std::ops::Add;

use rand::Rng;

use crate::point::Point;
use crate::scalar::Scalar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    pub c1: Point,
    pub c2: Point,
}

/// Encrypts `message` to the holder of `public`.
pub fn encrypt<R: Rng + ?Sized>(message: &Point, public: &Point, rng: &mut R) -> Ciphertext {
    let r = Scalar::random(rng);
    Ciphertext {
        c1: &r * Point::generator(),
        c2: message + &r * public,
    }
}

impl Ciphertext {
    /// `C2 - x * C1`
    pub fn decrypt(&self, secret: &Scalar) -> Point {
        &self.c2 - secret * &self.c1
    }
}

impl<'a, 'b> Add<&'b Ciphertext> for &'a Ciphertext {
    type Output = Ciphertext;

    fn add(self, other: &'b Ciphertext) -> Ciphertext {
        Ciphertext {
            c1: &self.c1 + &other.c1,
            c2: &self.c2 + &other.c2,
        }
    }
}

impl Add for Ciphertext {
    type Output = Ciphertext;

    fn add(self, other: Ciphertext) -> Ciphertext {
        &self + &other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commitment::pedersen_h;
    use crate::keys::Keypair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_encrypt_decrypt() {
        let mut rng = StdRng::from_seed([61u8; 32]);
        let keypair = Keypair::generate(&mut rng);
        let message = Point::random(&mut rng);
        let ciphertext = encrypt(&message, keypair.public(), &mut rng);
        assert_eq!(ciphertext.decrypt(keypair.secret()), message);

        let other = Keypair::generate(&mut rng);
        assert_ne!(ciphertext.decrypt(other.secret()), message);
    }

    #[test]
    fn test_additive_homomorphism() {
        let mut rng = StdRng::from_seed([62u8; 32]);
        let keypair = Keypair::generate(&mut rng);
        let h = pedersen_h();
        let a = encrypt(&(Scalar::from(69000) * h), keypair.public(), &mut rng);
        let b = encrypt(&(Scalar::from(420) * h), keypair.public(), &mut rng);
        let sum = a + b;
        assert_eq!(sum.decrypt(keypair.secret()), Scalar::from(69420) * h);
    }
}
