// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Key pairs `(x, x * G)` and Diffie-Hellman key agreement.

use rand::{thread_rng, Rng};

use crate::hash::hash_to_scalar;
use crate::params::labels;
use crate::point::Point;
use crate::scalar::Scalar;

#[derive(Clone)]
pub struct Keypair {
    secret: Scalar,
    public: Point,
}

impl Keypair {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_secret(Scalar::random_nonzero(rng))
    }

    pub fn random() -> Self {
        Self::generate(&mut thread_rng())
    }

    pub fn from_secret(secret: Scalar) -> Self {
        let public = &secret * Point::generator();
        Keypair { secret, public }
    }

    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    pub fn public(&self) -> &Point {
        &self.public
    }

    /// Shared key with the holder of `their_public`.
    pub fn diffie_hellman(&self, their_public: &Point) -> Scalar {
        diffie_hellman(&self.secret, their_public)
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair").field("public", &self.public).finish()
    }
}

/// `H("Diffie-Hellman", x * Y)`
pub fn diffie_hellman(secret: &Scalar, their_public: &Point) -> Scalar {
    let shared = secret * their_public;
    hash_to_scalar(labels::DIFFIE_HELLMAN, &[&shared])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_keypair() {
        let mut rng = StdRng::from_seed([41u8; 32]);
        let keypair = Keypair::generate(&mut rng);
        assert_eq!(keypair.public(), &(keypair.secret() * Point::generator()));
        assert!(keypair.public().is_in_main_subgroup());
        assert!(!format!("{:?}", keypair).contains("secret"));
    }

    #[test]
    fn test_diffie_hellman_agreement() {
        let mut rng = StdRng::from_seed([42u8; 32]);
        let alice = Keypair::generate(&mut rng);
        let bob = Keypair::generate(&mut rng);
        let k_ab = alice.diffie_hellman(bob.public());
        let k_ba = bob.diffie_hellman(alice.public());
        assert_eq!(k_ab, k_ba);

        let eve = Keypair::generate(&mut rng);
        assert_ne!(eve.diffie_hellman(bob.public()), k_ab);
    }
}
