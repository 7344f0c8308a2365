// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use num_bigint::{BigInt, BigUint, Sign, ToBigInt};
use num_integer::Integer;
use num_traits::identities::{One, Zero};

pub struct Util {}

impl Util {
    /// Finds the greatest common denominator of two integers *a* and *b*, and two
    /// integers *x* and *y* such that *ax* + *by* is the greatest common
    /// denominator of *a* and *b* (Bézout coefficients).
    ///
    /// This function is an implementation of the [extended Euclidean
    /// algorithm](https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm).
    pub fn extend_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
        if a.is_zero() {
            (b.clone(), BigInt::zero(), BigInt::one())
        } else {
            let (g, x, y) = Util::extend_gcd(&b.mod_floor(a), a);
            let q = b.div_floor(a);
            (g, y - q * &x, x)
        }
    }

    /// Calculates the [modular multiplicative
    /// inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse) *x*
    /// of an integer *a* such that *ax* ≡ 1 (mod *m*).
    ///
    /// Returns `None` when *a* and *m* are not coprime, which for the prime
    /// moduli used in this crate only happens for *a* ≡ 0.
    pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
        let a = a.to_bigint()?;
        let m = modulus.to_bigint()?;
        let (g, x, _) = Util::extend_gcd(&a.mod_floor(&m), &m);
        if g != BigInt::one() {
            None
        } else {
            x.mod_floor(&m).to_biguint()
        }
    }

    /// Canonical representative of a signed integer in `[0, modulus - 1]`.
    pub fn reduce(value: &BigInt, modulus: &BigUint) -> BigUint {
        let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
        // mod_floor with a positive modulus is never negative
        value.mod_floor(&m).to_biguint().unwrap_or_else(BigUint::zero)
    }

    /// Writes `value` into a fixed 32-byte little-endian buffer.
    ///
    /// Callers guarantee `value < 2^256`.
    pub fn to_le_32(value: &BigUint) -> [u8; 32] {
        let bytes = value.to_bytes_le();
        let mut out = [0u8; 32];
        let len = bytes.len().min(32);
        out[..len].copy_from_slice(&bytes[..len]);
        out
    }
}
