// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Pedersen commitments `C = r * G + x * H`.
//!
//! `H` is derived by hashing to the curve, so nobody knows `log_G(H)`.
//! Commitments are perfectly hiding, computationally binding and additively
//! homomorphic.

use std::sync::OnceLock;

use rand::Rng;

use crate::hash::hash_to_point;
use crate::params::labels;
use crate::point::Point;
use crate::scalar::Scalar;

static PEDERSEN_H: OnceLock<Point> = OnceLock::new();

/// The second generator `H = hash_to_point("Pedersen")`.
pub fn pedersen_h() -> &'static Point {
    PEDERSEN_H.get_or_init(|| hash_to_point(labels::PEDERSEN, &[]))
}

pub struct Pedersen;

impl Pedersen {
    /// Commits to `value` under a fresh blinding factor, returned with the
    /// commitment.
    pub fn commit<R: Rng + ?Sized>(value: &Scalar, rng: &mut R) -> (Scalar, Point) {
        let blinding = Scalar::random(rng);
        let commitment = Self::commit_with_blinding(value, &blinding);
        (blinding, commitment)
    }

    pub fn commit_with_blinding(value: &Scalar, blinding: &Scalar) -> Point {
        blinding * Point::generator() + value * pedersen_h()
    }

    pub fn open(commitment: &Point, value: &Scalar, blinding: &Scalar) -> bool {
        &Self::commit_with_blinding(value, blinding) == commitment
    }
}
