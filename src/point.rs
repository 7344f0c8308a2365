// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Points of the ed25519 curve group.
//!
//! Points are kept in extended twisted Edwards coordinates `(X : Y : Z : T)`
//! with `x = X/Z`, `y = Y/Z` and `x*y = T/Z`, so group operations need no
//! field inversions. The addition and doubling formulas are the complete
//! ones from RFC 8032 section 5.1.4, valid for every pair of curve points
//! including the identity and the small-order points.
//!
//! # Main subgroup
//!
//! The curve group has order `8 * l`. Every point handed out by a public
//! constructor (`generator`, `random`, `hash_to_point`, scalar multiples of
//! those) lies in the subgroup of prime order `l`. Points decoded from bytes
//! only satisfy the curve equation: an attacker can add a small-order
//! component to a valid point and obtain up to eight distinct encodings
//! that collapse to the same value once multiplied by a multiple of the
//! cofactor. Code that checks uniqueness of untrusted points (key images)
//! MUST validate them with [`Point::ensure_main_subgroup`] first.
//!
//! Scalar multiplication is plain double-and-add on `BigUint` arithmetic;
//! it is not constant time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use log::debug;
use num_bigint::BigUint;
use rand::Rng;

use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::hash::hash_to_point;
use crate::params::{params, ENCODING_LENGTH};
use crate::scalar::Scalar;

#[derive(Clone)]
pub struct Point {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

impl Point {
    /// The neutral element `Z = (0, 1)`.
    pub fn identity() -> Self {
        Point {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::one(),
            t: FieldElement::zero(),
        }
    }

    /// The base point `G` of the main subgroup.
    pub fn generator() -> Self {
        let p = params();
        Point::from_affine_unchecked(
            FieldElement::from_biguint(p.gx.clone()),
            FieldElement::from_biguint(p.gy.clone()),
        )
    }

    /// A generator of the order 8 torsion subgroup. Never a valid key or
    /// commitment; exposed to demonstrate cofactor pitfalls.
    pub fn torsion_generator() -> Self {
        let p = params();
        Point::from_affine_unchecked(
            FieldElement::from_biguint(p.torsion_x.clone()),
            FieldElement::from_biguint(p.torsion_y.clone()),
        )
    }

    /// Random point of the main subgroup with unknown discrete logarithm.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut seed = [0u8; 32];
        rng.fill(&mut seed);
        hash_to_point("random point", &[&seed])
    }

    /// Builds a point from affine coordinates, checking the curve equation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Point::from_affine_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(Error::Domain("point is not on the curve"));
        }
        Ok(point)
    }

    fn from_affine_unchecked(x: FieldElement, y: FieldElement) -> Self {
        let t = &x * &y;
        Point {
            x,
            y,
            z: FieldElement::one(),
            t,
        }
    }

    /// Affine coordinates `(x, y)`.
    pub fn to_affine(&self) -> (FieldElement, FieldElement) {
        let z_inv = self
            .z
            .invert()
            .expect("Z coordinate of a curve point is never zero");
        (&self.x * &z_inv, &self.y * &z_inv)
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// Checks `-x^2 + y^2 = 1 + d*x^2*y^2` and the consistency of `T`.
    pub fn is_on_curve(&self) -> bool {
        if self.z.is_zero() {
            return false;
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let lhs = &(&yy - &xx) * &zz;
        let rhs = &zz.square() + &(&FieldElement::d() * &(&xx * &yy));
        lhs == rhs && &self.x * &self.y == &self.t * &self.z
    }

    /// `l * P == Z`.
    pub fn is_in_main_subgroup(&self) -> bool {
        self.mul_biguint(&params().l).is_identity()
    }

    /// `8 * P == Z`.
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Rejects points outside the main subgroup.
    pub fn ensure_main_subgroup(&self) -> Result<()> {
        if self.is_in_main_subgroup() {
            Ok(())
        } else {
            debug!("rejected point {} outside the main subgroup", self);
            Err(Error::Subgroup)
        }
    }

    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = &self.z.square() + &self.z.square();
        let h = &a + &b;
        let e = &h - &(&self.x + &self.y).square();
        let g = &a - &b;
        let f = &c + &g;
        Point {
            x: &e * &f,
            y: &g * &h,
            z: &f * &g,
            t: &e * &h,
        }
    }

    /// `n * P` for any non-negative integer `n`, including multiples of `l`
    /// that have no representation as a `Scalar`.
    pub fn mul_biguint(&self, n: &BigUint) -> Self {
        let mut result = Point::identity();
        for byte in n.to_bytes_be() {
            for i in (0..8).rev() {
                result = result.double();
                if (byte >> i) & 1 == 1 {
                    result = &result + self;
                }
            }
        }
        result
    }

    pub fn mul_by_cofactor(&self) -> Self {
        self.double().double().double()
    }

    /// Compressed encoding: `y` little-endian with the sign of `x` in the
    /// top bit of the last byte.
    pub fn to_bytes(&self) -> [u8; ENCODING_LENGTH] {
        let (x, y) = self.to_affine();
        let mut bytes = y.to_bytes();
        if x.is_negative() {
            bytes[31] |= 0x80;
        }
        bytes
    }

    /// Decompresses a point. The result is on the curve but NOT necessarily
    /// in the main subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENCODING_LENGTH {
            return Err(Error::InvalidLength {
                expected: ENCODING_LENGTH,
                got: bytes.len(),
            });
        }
        let mut y_bytes = [0u8; ENCODING_LENGTH];
        y_bytes.copy_from_slice(bytes);
        let sign = y_bytes[31] >> 7 == 1;
        y_bytes[31] &= 0x7f;

        let y = FieldElement::from_bytes(&y_bytes)?;
        let one = FieldElement::one();
        let yy = y.square();
        let u = &yy - &one;
        let v = &(&FieldElement::d() * &yy) + &one;
        let mut x = FieldElement::sqrt_ratio(&u, &v)
            .ok_or(Error::Domain("point is not on the curve"))?;

        if x.is_zero() && sign {
            return Err(Error::Domain("non-canonical point encoding"));
        }
        if x.is_negative() != sign {
            x = -&x;
        }
        Point::from_affine(x, y)
    }

    /// Decompresses a point and enforces main subgroup membership.
    pub fn from_bytes_in_main_subgroup(bytes: &[u8]) -> Result<Self> {
        let point = Point::from_bytes(bytes)?;
        point.ensure_main_subgroup()?;
        Ok(point)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::Domain("invalid hex"))?;
        Point::from_bytes(&bytes)
    }
}

impl PartialEq for Point {
    /// Compares the affine coordinates `X1/Z1 == X2/Z2` and `Y1/Z1 == Y2/Z2`
    /// without inverting.
    fn eq(&self, other: &Self) -> bool {
        &self.x * &other.z == &other.x * &self.z
            && &self.y * &other.z == &other.y * &self.z
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl<'a, 'b> Add<&'b Point> for &'a Point {
    type Output = Point;

    fn add(self, other: &'b Point) -> Point {
        let a = &(&self.y - &self.x) * &(&other.y - &other.x);
        let b = &(&self.y + &self.x) * &(&other.y + &other.x);
        let c = &(&self.t * &FieldElement::d2()) * &other.t;
        let zz = &self.z * &other.z;
        let d = &zz + &zz;
        let e = &b - &a;
        let f = &d - &c;
        let g = &d + &c;
        let h = &b + &a;
        Point {
            x: &e * &f,
            y: &g * &h,
            z: &f * &g,
            t: &e * &h,
        }
    }
}

impl<'a> Neg for &'a Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: -&self.x,
            y: self.y.clone(),
            z: self.z.clone(),
            t: -&self.t,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Point> for &'a Point {
    type Output = Point;

    fn sub(self, other: &'b Point) -> Point {
        self + &(-other)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Point {
    type Output = Point;

    fn mul(self, scalar: &'b Scalar) -> Point {
        self.mul_biguint(scalar.value())
    }
}

impl<'a, 'b> Mul<&'b Point> for &'a Scalar {
    type Output = Point;

    fn mul(self, point: &'b Point) -> Point {
        point.mul_biguint(self.value())
    }
}

macro_rules! forward_point_binop {
    ($imp:ident, $method:ident, $lhs:ty, $rhs:ty) => {
        impl $imp<$rhs> for $lhs {
            type Output = Point;

            fn $method(self, other: $rhs) -> Point {
                (&self).$method(&other)
            }
        }

        impl<'b> $imp<&'b $rhs> for $lhs {
            type Output = Point;

            fn $method(self, other: &'b $rhs) -> Point {
                (&self).$method(other)
            }
        }

        impl<'a> $imp<$rhs> for &'a $lhs {
            type Output = Point;

            fn $method(self, other: $rhs) -> Point {
                self.$method(&other)
            }
        }
    };
}

forward_point_binop!(Add, add, Point, Point);
forward_point_binop!(Sub, sub, Point, Point);
forward_point_binop!(Mul, mul, Point, Scalar);
forward_point_binop!(Mul, mul, Scalar, Point);

impl Sum for Point {
    fn sum<I: Iterator<Item = Point>>(iter: I) -> Point {
        iter.fold(Point::identity(), |acc, p| &acc + &p)
    }
}

impl<'a> Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Point {
        iter.fold(Point::identity(), |acc, p| &acc + p)
    }
}

impl fmt::Display for Point {
    /// Hex of the compressed encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", self)
    }
}
