// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Shamir (m, n) threshold secret sharing over the scalar field.
//!
//! P(x) = a_0 + a_1*x + ... + a_(m-1)*x^(m-1), degree m - 1
//! s = P(0) = a_0
//! s_i = P(i)
//!
//! Any m shares determine P and hence s. Fewer than m shares carry no
//! information about s, and interpolating them silently yields a different
//! value.

use std::collections::HashSet;
use std::fmt;

use log::warn;
use rand::Rng;

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::vector::ScalarVector;

/// Evaluates `Σ c_i * x^i` with Horner's rule.
pub fn poly_eval(x: &Scalar, coefficients: &ScalarVector) -> Scalar {
    coefficients
        .iter()
        .rev()
        .fold(Scalar::zero(), |acc, c| acc * x + c)
}

/// A point `(x, P(x))` on the dealer's polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub x: Scalar,
    pub y: Scalar,
}

impl Share {
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Share { x, y }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: ScalarVector,
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish()
    }
}

impl Polynomial {
    /// Random polynomial of degree `threshold - 1` with `P(0) = secret`.
    pub fn random<R: Rng + ?Sized>(secret: Scalar, threshold: usize, rng: &mut R) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::Domain("threshold must be at least one"));
        }
        let mut coefficients = ScalarVector::new();
        coefficients.push(secret);
        // [1, threshold) random coefficients
        for _ in 1..threshold {
            coefficients.push(Scalar::random(rng));
        }
        Ok(Polynomial { coefficients })
    }

    /// `coefficients[0]` is the secret.
    pub fn from_coefficients(coefficients: ScalarVector) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::Domain("polynomial without coefficients"));
        }
        Ok(Polynomial { coefficients })
    }

    pub fn coefficients(&self) -> &ScalarVector {
        &self.coefficients
    }

    pub fn secret(&self) -> &Scalar {
        &self.coefficients[0]
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Number of shares needed for recovery.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    pub fn evaluate(&self, x: &Scalar) -> Scalar {
        poly_eval(x, &self.coefficients)
    }

    /// The share for participant `x`. `x = 0` would reveal the secret.
    pub fn share(&self, x: Scalar) -> Result<Share> {
        if x.is_zero() {
            return Err(Error::Domain("share identifier must be nonzero"));
        }
        let y = self.evaluate(&x);
        Ok(Share { x, y })
    }

    pub fn deal(&self, ids: &[Scalar]) -> Result<Vec<Share>> {
        ids.iter().map(|x| self.share(x.clone())).collect()
    }
}

/// Lagrange interpolation at zero: `Σ y_i Π_(j≠i) x_j / (x_j - x_i)`.
///
/// The number of shares is not checked against any threshold.
pub fn recover(shares: &[Share]) -> Result<Scalar> {
    if shares.is_empty() {
        return Err(Error::InsufficientShares { got: 0, need: 1 });
    }
    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if share.x.is_zero() {
            return Err(Error::Domain("share identifier must be nonzero"));
        }
        if !seen.insert(&share.x) {
            return Err(Error::Domain("duplicate share identifier"));
        }
    }

    let mut secret = Scalar::zero();
    for (i, share) in shares.iter().enumerate() {
        let mut numerator = Scalar::one();
        let mut denominator = Scalar::one();
        for (j, other) in shares.iter().enumerate() {
            if i != j {
                numerator = numerator * &other.x;
                denominator = denominator * (&other.x - &share.x);
            }
        }
        secret = secret + &share.y * numerator * denominator.invert()?;
    }
    Ok(secret)
}

/// Like [`recover`], but refuses fewer than `threshold` shares.
pub fn recover_with_threshold(shares: &[Share], threshold: usize) -> Result<Scalar> {
    if shares.len() < threshold {
        warn!(
            "sharing: {} shares cannot reach threshold {}",
            shares.len(),
            threshold
        );
        return Err(Error::InsufficientShares {
            got: shares.len(),
            need: threshold,
        });
    }
    recover(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(n: u64) -> Vec<Scalar> {
        (1..=n).map(Scalar::from).collect()
    }

    fn dealt(seed: u8) -> (Scalar, Vec<Share>) {
        let mut rng = StdRng::from_seed([seed; 32]);
        let secret = Scalar::random(&mut rng);
        let polynomial = Polynomial::random(secret.clone(), 3, &mut rng).unwrap();
        (secret, polynomial.deal(&ids(5)).unwrap())
    }

    #[test]
    fn test_poly_eval() {
        // 3 + 2x + x^2 at x = 5
        let coefficients: ScalarVector = vec![Scalar::from(3), Scalar::from(2), Scalar::one()].into();
        assert_eq!(poly_eval(&Scalar::from(5), &coefficients), Scalar::from(38));
        assert_eq!(poly_eval(&Scalar::from(5), &ScalarVector::new()), Scalar::zero());
    }

    #[test]
    fn test_polynomial_shape() {
        let mut rng = StdRng::from_seed([31u8; 32]);
        let polynomial = Polynomial::random(Scalar::from(42), 4, &mut rng).unwrap();
        assert_eq!(polynomial.degree(), 3);
        assert_eq!(polynomial.threshold(), 4);
        assert_eq!(polynomial.secret(), &Scalar::from(42));
        assert_eq!(polynomial.evaluate(&Scalar::zero()), Scalar::from(42));
        assert!(Polynomial::random(Scalar::one(), 0, &mut rng).is_err());
        assert!(Polynomial::from_coefficients(ScalarVector::new()).is_err());
    }

    #[test]
    fn test_polynomial_debug_hides_coefficients() {
        let mut rng = StdRng::from_seed([35u8; 32]);
        let secret = Scalar::random(&mut rng);
        let polynomial = Polynomial::random(secret.clone(), 3, &mut rng).unwrap();
        let printed = format!("{:?}", polynomial);
        assert_eq!(printed, "Polynomial { degree: 2 }");
        assert!(!printed.contains(&format!("{:?}", secret)));
    }

    #[test]
    fn test_any_three_of_five_recover() {
        let (secret, shares) = dealt(32);
        for a in 0..5 {
            for b in (a + 1)..5 {
                for c in (b + 1)..5 {
                    let subset = [shares[a].clone(), shares[b].clone(), shares[c].clone()];
                    assert_eq!(recover(&subset).unwrap(), secret);
                }
            }
        }
        assert_eq!(recover(&shares).unwrap(), secret);
    }

    #[test]
    fn test_two_shares_miss_secret() {
        let (secret, shares) = dealt(33);
        assert_ne!(recover(&shares[..2]).unwrap(), secret);
        assert_eq!(
            recover_with_threshold(&shares[..2], 3),
            Err(Error::InsufficientShares { got: 2, need: 3 })
        );
        assert_eq!(recover_with_threshold(&shares[1..4], 3).unwrap(), secret);
    }

    #[test]
    fn test_invalid_shares() {
        let mut rng = StdRng::from_seed([34u8; 32]);
        let polynomial = Polynomial::random(Scalar::from(7), 2, &mut rng).unwrap();
        assert_eq!(
            polynomial.share(Scalar::zero()),
            Err(Error::Domain("share identifier must be nonzero"))
        );
        assert!(polynomial.deal(&[Scalar::one(), Scalar::zero()]).is_err());

        let share = polynomial.share(Scalar::one()).unwrap();
        assert_eq!(
            recover(&[share.clone(), share]),
            Err(Error::Domain("duplicate share identifier"))
        );
        assert_eq!(
            recover(&[]),
            Err(Error::InsufficientShares { got: 0, need: 1 })
        );
    }

    #[test]
    fn test_single_share_of_constant() {
        let polynomial = Polynomial::from_coefficients(vec![Scalar::from(9)].into()).unwrap();
        let share = polynomial.share(Scalar::from(4)).unwrap();
        assert_eq!(recover(&[share]).unwrap(), Scalar::from(9));
    }
}
