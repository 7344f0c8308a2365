// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Arithmetic in the prime field of order `q = 2^255 - 19`.
//!
//! Field elements are the coordinates of curve points. Every operation
//! returns the canonical representative in `[0, q - 1]`; division only
//! exists as multiplication by an inverse.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::identities::{One, Zero};

use crate::error::{Error, Result};
use crate::params::{params, ENCODING_LENGTH};
use crate::util::Util;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn zero() -> Self {
        FieldElement(BigUint::zero())
    }

    pub fn one() -> Self {
        FieldElement(BigUint::one())
    }

    /// Reduces an arbitrary non-negative integer mod `q`.
    pub fn from_biguint(value: BigUint) -> Self {
        FieldElement(value % &params().q)
    }

    pub fn from_u64(value: u64) -> Self {
        FieldElement::from_biguint(BigUint::from(value))
    }

    /// The Edwards curve constant `d`.
    pub fn d() -> Self {
        FieldElement(params().d.clone())
    }

    pub(crate) fn d2() -> Self {
        FieldElement(params().d2.clone())
    }

    pub(crate) fn sqrt_m1() -> Self {
        FieldElement(params().sqrt_m1.clone())
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The low bit of the canonical value, i.e. the "sign" used by point
    /// compression.
    pub fn is_negative(&self) -> bool {
        self.0.to_bytes_le()[0] & 1 == 1
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn pow(&self, exp: &BigUint) -> Self {
        FieldElement(self.0.modpow(exp, &params().q))
    }

    /// Multiplicative inverse; zero has none.
    pub fn invert(&self) -> Result<Self> {
        Util::mod_inverse(&self.0, &params().q)
            .map(FieldElement)
            .ok_or(Error::Domain("inverse of zero field element"))
    }

    /// Computes `sqrt(u / v)` if it exists.
    ///
    /// Uses the candidate `x = u * v^3 * (u * v^7)^((q - 5) / 8)`, which is
    /// correct up to a factor of `sqrt(-1)`.
    pub(crate) fn sqrt_ratio(u: &Self, v: &Self) -> Option<Self> {
        let v3 = &v.square() * v;
        let v7 = &v3.square() * v;
        let x = &(u * &v3) * &(u * &v7).pow(&params().sqrt_exp);

        let vx2 = v * &x.square();
        if vx2 == *u {
            Some(x)
        } else if vx2 == -u {
            Some(&x * &FieldElement::sqrt_m1())
        } else {
            None
        }
    }

    /// 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; ENCODING_LENGTH] {
        Util::to_le_32(&self.0)
    }

    /// Decodes a canonical 32-byte little-endian value; values `>= q` are
    /// rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENCODING_LENGTH {
            return Err(Error::InvalidLength {
                expected: ENCODING_LENGTH,
                got: bytes.len(),
            });
        }
        let value = BigUint::from_bytes_le(bytes);
        if value >= params().q {
            return Err(Error::Domain("non-canonical field element"));
        }
        Ok(FieldElement(value))
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn add(self, other: &'b FieldElement) -> FieldElement {
        FieldElement((&self.0 + &other.0) % &params().q)
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &'b FieldElement) -> FieldElement {
        let q = &params().q;
        // both operands are < q, so the sum never underflows
        FieldElement((&self.0 + q - &other.0) % q)
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &'b FieldElement) -> FieldElement {
        FieldElement((&self.0 * &other.0) % &params().q)
    }
}

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            FieldElement::zero()
        } else {
            FieldElement(&params().q - &self.0)
        }
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self.0)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
