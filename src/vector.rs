// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Ordered sequences of scalars and points.
//!
//! Element-wise binary operations, the dot product and multiscalar
//! multiplication require operands of equal length and fail with
//! [`Error::LengthMismatch`] otherwise. Slicing clamps out-of-range bounds
//! to the vector length.

use std::fmt;
use std::ops::{Bound, Index, Mul, Neg, RangeBounds};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::scalar::Scalar;

/// Number of terms handled by one Straus pass in `multiscalar_mul`.
const MSM_CHUNK: usize = 16;

/// Bit length of the largest canonical scalar (`l < 2^253`).
const SCALAR_BITS: usize = 253;

fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::LengthMismatch { left, right });
    }
    Ok(())
}

fn clamp_range<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    let end = end.min(len);
    (start.min(end), end)
}

fn fmt_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScalarVector(Vec<Scalar>);

impl ScalarVector {
    pub fn new() -> Self {
        ScalarVector(Vec::new())
    }

    /// `[1, x, x^2, ..., x^(n-1)]`
    pub fn powers(x: &Scalar, n: usize) -> Self {
        let mut powers = Vec::with_capacity(n);
        let mut current = Scalar::one();
        for _ in 0..n {
            let next = &current * x;
            powers.push(current);
            current = next;
        }
        ScalarVector(powers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, scalar: Scalar) {
        self.0.push(scalar);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Scalar> {
        self.0
    }

    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let (start, end) = clamp_range(range, self.len());
        ScalarVector(self.0[start..end].to_vec())
    }

    /// Appends the elements of `other`.
    pub fn extend(&mut self, other: &ScalarVector) {
        self.0.extend_from_slice(&other.0);
    }

    fn zip_with<F>(&self, other: &ScalarVector, op: F) -> Result<Self>
    where
        F: Fn(&Scalar, &Scalar) -> Scalar,
    {
        check_lengths(self.len(), other.len())?;
        Ok(self.0.iter().zip(other.0.iter()).map(|(a, b)| op(a, b)).collect())
    }

    pub fn add(&self, other: &ScalarVector) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &ScalarVector) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn mul(&self, other: &ScalarVector) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise `a_i * b_i^-1`.
    pub fn div(&self, other: &ScalarVector) -> Result<Self> {
        check_lengths(self.len(), other.len())?;
        self.mul(&other.invert()?)
    }

    /// Element-wise inverse; fails if any element is zero.
    pub fn invert(&self) -> Result<Self> {
        self.0.iter().map(Scalar::invert).collect()
    }

    /// `[k * a_i]`
    pub fn scale(&self, k: &Scalar) -> Self {
        self.0.iter().map(|a| a * k).collect()
    }

    pub fn sum(&self) -> Scalar {
        self.0.iter().sum()
    }

    /// `Σ a_i * b_i`
    pub fn dot(&self, other: &ScalarVector) -> Result<Scalar> {
        check_lengths(self.len(), other.len())?;
        Ok(self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum())
    }
}

impl From<Vec<Scalar>> for ScalarVector {
    fn from(scalars: Vec<Scalar>) -> Self {
        ScalarVector(scalars)
    }
}

impl FromIterator<Scalar> for ScalarVector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        ScalarVector(iter.into_iter().collect())
    }
}

impl Index<usize> for ScalarVector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.0[index]
    }
}

impl<'a> Neg for &'a ScalarVector {
    type Output = ScalarVector;

    fn neg(self) -> ScalarVector {
        self.0.iter().map(|a| -a).collect()
    }
}

impl Neg for ScalarVector {
    type Output = ScalarVector;

    fn neg(self) -> ScalarVector {
        -&self
    }
}

impl fmt::Display for ScalarVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(f, &self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointVector(Vec<Point>);

impl PointVector {
    pub fn new() -> Self {
        PointVector(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, point: Point) {
        self.0.push(point);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }

    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let (start, end) = clamp_range(range, self.len());
        PointVector(self.0[start..end].to_vec())
    }

    pub fn extend(&mut self, other: &PointVector) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn add(&self, other: &PointVector) -> Result<Self> {
        check_lengths(self.len(), other.len())?;
        Ok(self.0.iter().zip(other.0.iter()).map(|(p, q)| p + q).collect())
    }

    pub fn sub(&self, other: &PointVector) -> Result<Self> {
        check_lengths(self.len(), other.len())?;
        Ok(self.0.iter().zip(other.0.iter()).map(|(p, q)| p - q).collect())
    }

    /// `[k * P_i]`
    pub fn scale(&self, k: &Scalar) -> Self {
        PointVector(self.0.par_iter().map(|p| k * p).collect())
    }

    pub fn sum(&self) -> Point {
        self.0.iter().sum()
    }

    /// `Σ a_i * P_i`
    ///
    /// Straus' interleaved double-and-add: one chain of doublings is shared
    /// by a chunk of terms, and chunks run in parallel.
    pub fn multiscalar_mul(&self, scalars: &ScalarVector) -> Result<Point> {
        check_lengths(scalars.len(), self.len())?;
        Ok(self
            .0
            .par_chunks(MSM_CHUNK)
            .zip(scalars.0.par_chunks(MSM_CHUNK))
            .map(|(points, scalars)| straus(scalars, points))
            .reduce(Point::identity, |a, b| &a + &b))
    }

    /// Reference implementation: one scalar multiplication per term.
    pub fn multiscalar_mul_naive(&self, scalars: &ScalarVector) -> Result<Point> {
        check_lengths(scalars.len(), self.len())?;
        Ok(self
            .0
            .iter()
            .zip(scalars.0.iter())
            .map(|(p, a)| a * p)
            .sum())
    }
}

fn straus(scalars: &[Scalar], points: &[Point]) -> Point {
    let encodings: Vec<[u8; 32]> = scalars.iter().map(Scalar::to_bytes).collect();
    let mut result = Point::identity();
    for bit in (0..SCALAR_BITS).rev() {
        result = result.double();
        for (bytes, point) in encodings.iter().zip(points) {
            if (bytes[bit / 8] >> (bit % 8)) & 1 == 1 {
                result = &result + point;
            }
        }
    }
    result
}

impl From<Vec<Point>> for PointVector {
    fn from(points: Vec<Point>) -> Self {
        PointVector(points)
    }
}

impl FromIterator<Point> for PointVector {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointVector(iter.into_iter().collect())
    }
}

impl Index<usize> for PointVector {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

impl<'a> Neg for &'a PointVector {
    type Output = PointVector;

    fn neg(self) -> PointVector {
        self.0.iter().map(|p| -p).collect()
    }
}

impl<'a, 'b> Mul<&'b PointVector> for &'a Scalar {
    type Output = PointVector;

    fn mul(self, points: &'b PointVector) -> PointVector {
        points.scale(self)
    }
}

impl fmt::Display for PointVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(f, &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scalars(values: &[u64]) -> ScalarVector {
        values.iter().map(|v| Scalar::from(*v)).collect()
    }

    fn random_scalars(rng: &mut StdRng, n: usize) -> ScalarVector {
        (0..n).map(|_| Scalar::random(rng)).collect()
    }

    #[test]
    fn test_elementwise() {
        let x1 = scalars(&[1, 2, 3]);
        let x2 = scalars(&[4, 5, 6]);
        assert_eq!(x1.add(&x2).unwrap(), scalars(&[5, 7, 9]));
        assert_eq!(x2.sub(&x1).unwrap(), scalars(&[3, 3, 3]));
        assert_eq!(x1.mul(&x2).unwrap(), scalars(&[4, 10, 18]));
        assert_eq!(x1.sum(), Scalar::from(6));
        assert_eq!(x1.dot(&x2).unwrap(), Scalar::from(32));
        assert_eq!((-&x1).add(&x1).unwrap(), scalars(&[0, 0, 0]));
        assert_eq!(x1.scale(&Scalar::from(2)), scalars(&[2, 4, 6]));

        let quotient = x1.mul(&x2).unwrap().div(&x2).unwrap();
        assert_eq!(quotient, x1);
    }

    #[test]
    fn test_div_by_zero_element() {
        let x1 = scalars(&[1, 2]);
        let x2 = scalars(&[3, 0]);
        assert_eq!(
            x1.div(&x2),
            Err(Error::Domain("inverse of zero scalar"))
        );
    }

    #[test]
    fn test_length_mismatch() {
        let x1 = scalars(&[1, 2, 3]);
        let x2 = scalars(&[4, 5]);
        let expected = Err(Error::LengthMismatch { left: 3, right: 2 });
        assert_eq!(x1.add(&x2), expected);
        assert_eq!(x1.dot(&x2), Err(Error::LengthMismatch { left: 3, right: 2 }));

        let g = Point::generator();
        let points: PointVector = vec![g.clone(), g].into();
        assert_eq!(
            points.multiscalar_mul(&x1),
            Err(Error::LengthMismatch { left: 3, right: 2 })
        );
        assert!(points.add(&PointVector::new()).is_err());
    }

    #[test]
    fn test_slice_and_extend() {
        let x1 = scalars(&[1, 2, 3]);
        assert_eq!(x1.slice(..2), scalars(&[1, 2]));
        assert_eq!(x1.slice(1..), scalars(&[2, 3]));
        assert_eq!(x1.slice(2..10), scalars(&[3]));
        assert!(x1.slice(5..).is_empty());
        assert_eq!(x1.slice(0..=usize::MAX), x1);
        assert_eq!(x1.slice(1..=1), scalars(&[2]));
        assert!(x1.slice((Bound::Excluded(usize::MAX), Bound::Unbounded)).is_empty());

        let mut x3 = x1.slice(..);
        x3.extend(&scalars(&[4, 5, 6]));
        assert_eq!(x3.len(), 6);
        assert_eq!(x3[5], Scalar::from(6));
    }

    #[test]
    fn test_powers() {
        let p = ScalarVector::powers(&Scalar::from(3), 4);
        assert_eq!(p, scalars(&[1, 3, 9, 27]));
        assert!(ScalarVector::powers(&Scalar::from(3), 0).is_empty());
    }

    #[test]
    fn test_dot_distributes() {
        let mut rng = StdRng::from_seed([11u8; 32]);
        let a = random_scalars(&mut rng, 5);
        let b = random_scalars(&mut rng, 5);
        let c = random_scalars(&mut rng, 5);
        let lhs = a.add(&b).unwrap().dot(&c).unwrap();
        let rhs = &a.dot(&c).unwrap() + &b.dot(&c).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_point_vector_ops() {
        let g = Point::generator();
        let y1: PointVector = (1..=3).map(|i| &Scalar::from(i) * &g).collect();
        let y2: PointVector = (4..=6).map(|i| &Scalar::from(i) * &g).collect();
        let sum = y1.add(&y2).unwrap();
        assert_eq!(sum[0], &Scalar::from(5) * &g);
        assert_eq!(y2.sub(&y1).unwrap()[2], &Scalar::from(3) * &g);
        assert_eq!((&Scalar::from(2) * &y1)[1], &Scalar::from(4) * &g);
        assert!((&(-&y1).add(&y1).unwrap()[0]).is_identity());
        assert_eq!(y1.sum(), &Scalar::from(6) * &g);
        assert_eq!(y1.slice(..2).len(), 2);
    }

    #[test]
    fn test_multiscalar_mul_small() {
        // tutorial example: x1 ** (x2 * G) == (x1 ** x2) * G
        let g = Point::generator();
        let x1 = scalars(&[1, 2, 3]);
        let x2 = scalars(&[4, 5, 6]);
        let y2: PointVector = x2.iter().map(|x| x * &g).collect();
        let expected = &x1.dot(&x2).unwrap() * &g;
        assert_eq!(y2.multiscalar_mul(&x1).unwrap(), expected);
    }

    #[test]
    fn test_multiscalar_mul_matches_naive() {
        let mut rng = StdRng::from_seed([12u8; 32]);
        // spans more than one chunk
        let n = MSM_CHUNK + 3;
        let x = random_scalars(&mut rng, n);
        let y: PointVector = (0..n).map(|_| Point::random(&mut rng)).collect();
        let fast = y.multiscalar_mul(&x).unwrap();
        let naive = y.multiscalar_mul_naive(&x).unwrap();
        assert_eq!(fast, naive);
        assert!(PointVector::new()
            .multiscalar_mul(&ScalarVector::new())
            .unwrap()
            .is_identity());
    }

    #[test]
    fn test_display() {
        let x = scalars(&[1]);
        assert_eq!(
            x.to_string(),
            "[0100000000000000000000000000000000000000000000000000000000000000]"
        );
    }
}
