// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Integers modulo the main subgroup order `l`.
//!
//! A `Scalar` always holds its canonical representative in `[0, l - 1]`, so
//! arithmetic wraps around: `1 - 2 == l - 1`. Ordering is provided for
//! display and sorting only and carries no cryptographic meaning.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::identities::{One, Zero};
use num_traits::ToPrimitive;
use rand::Rng;

use crate::error::{Error, Result};
use crate::params::{params, ENCODING_LENGTH};
use crate::util::Util;

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scalar(BigUint);

impl Scalar {
    pub fn zero() -> Self {
        Scalar(BigUint::zero())
    }

    pub fn one() -> Self {
        Scalar(BigUint::one())
    }

    /// Canonicalizes any non-negative integer mod `l`.
    pub fn from_biguint(value: &BigUint) -> Self {
        Scalar(value % &params().l)
    }

    /// Canonicalizes any integer mod `l`; negative values wrap around.
    pub fn from_bigint(value: &BigInt) -> Self {
        Scalar(Util::reduce(value, &params().l))
    }

    /// Uniformly random scalar in `[0, l - 1]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Scalar(rng.gen_biguint_below(&params().l))
    }

    /// Uniformly random scalar in `[1, l - 1]`.
    pub fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let s = Scalar::random(rng);
            if !s.is_zero() {
                return s;
            }
        }
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplicative inverse mod `l`; zero has none.
    pub fn invert(&self) -> Result<Self> {
        Util::mod_inverse(&self.0, &params().l)
            .map(Scalar)
            .ok_or(Error::Domain("inverse of zero scalar"))
    }

    /// `self^exp` by square-and-multiply.
    pub fn pow(&self, exp: u64) -> Self {
        let mut result = Scalar::one();
        let mut base = self.clone();
        let mut bits = exp;
        while bits > 0 {
            if bits & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            bits >>= 1;
        }
        result
    }

    /// Remainder of the canonical representative divided by `n`.
    ///
    /// Panics if `n` is zero, like integer `%`.
    pub fn rem_u64(&self, n: u64) -> u64 {
        (&self.0 % BigUint::from(n)).to_u64().unwrap_or(0)
    }

    /// 32-byte little-endian encoding of the canonical representative.
    pub fn to_bytes(&self) -> [u8; ENCODING_LENGTH] {
        Util::to_le_32(&self.0)
    }

    /// Decodes a 32-byte little-endian value, rejecting values `>= l`.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENCODING_LENGTH {
            return Err(Error::InvalidLength {
                expected: ENCODING_LENGTH,
                got: bytes.len(),
            });
        }
        let value = BigUint::from_bytes_le(bytes);
        if value >= params().l {
            return Err(Error::Domain("non-canonical scalar"));
        }
        Ok(Scalar(value))
    }

    /// Interprets any little-endian byte string as an integer and reduces
    /// it mod `l`. Used for wide (64-byte) hash outputs.
    pub fn from_bytes_mod_order(bytes: &[u8]) -> Self {
        Scalar::from_biguint(&BigUint::from_bytes_le(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::Domain("invalid hex"))?;
        Scalar::from_canonical_bytes(&bytes)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::from_biguint(&BigUint::from(value))
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn add(self, other: &'b Scalar) -> Scalar {
        Scalar((&self.0 + &other.0) % &params().l)
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn sub(self, other: &'b Scalar) -> Scalar {
        let l = &params().l;
        Scalar((&self.0 + l - &other.0) % l)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn mul(self, other: &'b Scalar) -> Scalar {
        Scalar((&self.0 * &other.0) % &params().l)
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        if self.is_zero() {
            Scalar::zero()
        } else {
            Scalar(&params().l - &self.0)
        }
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -&self
    }
}

macro_rules! forward_scalar_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Scalar> for Scalar {
            type Output = Scalar;

            fn $method(self, other: Scalar) -> Scalar {
                (&self).$method(&other)
            }
        }

        impl<'b> $imp<&'b Scalar> for Scalar {
            type Output = Scalar;

            fn $method(self, other: &'b Scalar) -> Scalar {
                (&self).$method(other)
            }
        }

        impl<'a> $imp<Scalar> for &'a Scalar {
            type Output = Scalar;

            fn $method(self, other: Scalar) -> Scalar {
                self.$method(&other)
            }
        }
    };
}

forward_scalar_binop!(Add, add);
forward_scalar_binop!(Sub, sub);
forward_scalar_binop!(Mul, mul);

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::zero(), |acc, s| &acc + &s)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::zero(), |acc, s| &acc + s)
    }
}

impl fmt::Display for Scalar {
    /// Hex of the little-endian encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::from_seed([7u8; 32])
    }

    #[test]
    fn test_subtraction_wraps() {
        let l_minus_one = Scalar(&params().l - BigUint::one());
        assert_eq!(Scalar::from(1) - Scalar::from(2), l_minus_one);
        assert_eq!(-Scalar::one(), l_minus_one);
    }

    #[test]
    fn test_add_then_sub() {
        let mut rng = rng();
        for _ in 0..16 {
            let a = Scalar::random(&mut rng);
            let b = Scalar::random(&mut rng);
            assert_eq!(&(&a + &b) - &b, a);
        }
    }

    #[test]
    fn test_invert() {
        let mut rng = rng();
        for _ in 0..16 {
            let a = Scalar::random(&mut rng);
            let b = Scalar::random_nonzero(&mut rng);
            let inv = b.invert().unwrap();
            assert_eq!(&a * &inv * &b, a);
        }
        assert_eq!(
            Scalar::zero().invert(),
            Err(Error::Domain("inverse of zero scalar"))
        );
    }

    #[test]
    fn test_half() {
        let two = Scalar::from(2);
        let half = Scalar::one() * two.invert().unwrap();
        assert_eq!(&two * &half, Scalar::one());
    }

    #[test]
    fn test_pow() {
        assert_eq!(Scalar::from(2).pow(3), Scalar::from(8));
        assert_eq!(Scalar::from(12345).pow(0), Scalar::one());
        let a = Scalar::from(3);
        assert_eq!(a.pow(5), &(&a * &a) * &(&a * &(&a * &a)));
    }

    #[test]
    fn test_reduce_from_integer() {
        let l = BigInt::from_biguint(num_bigint::Sign::Plus, params().l.clone());
        assert_eq!(Scalar::from_bigint(&l), Scalar::zero());
        assert_eq!(Scalar::from_bigint(&BigInt::from(-1)), -Scalar::one());
        assert_eq!(
            Scalar::from_biguint(&(&params().l + BigUint::from(5u32))),
            Scalar::from(5)
        );
    }

    #[test]
    fn test_bytes() {
        let a = Scalar::from(0xdead_beef);
        let bytes = a.to_bytes();
        assert_eq!(&bytes[..4], &[0xef, 0xbe, 0xad, 0xde]);
        assert_eq!(Scalar::from_canonical_bytes(&bytes).unwrap(), a);
        assert_eq!(Scalar::from_hex(&a.to_string()).unwrap(), a);

        let l_bytes = Util::to_le_32(&params().l);
        assert_eq!(
            Scalar::from_canonical_bytes(&l_bytes),
            Err(Error::Domain("non-canonical scalar"))
        );
        assert_eq!(Scalar::from_bytes_mod_order(&l_bytes), Scalar::zero());
        assert_eq!(
            Scalar::from_canonical_bytes(&bytes[..31]),
            Err(Error::InvalidLength {
                expected: 32,
                got: 31
            })
        );
        assert!(Scalar::from_hex("01").is_err());
    }

    #[test]
    fn test_rem_u64() {
        assert_eq!(Scalar::from(64).rem_u64(8), 0);
        assert_eq!(Scalar::from(69).rem_u64(8), 5);
        // l = 5 (mod 8)
        assert_eq!((-Scalar::one()).rem_u64(8), 4);
    }
}
