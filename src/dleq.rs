// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! DLEQ (Discrete Logarithm Equality) proof on the main subgroup.
//!
//! This module implements the Chaum-Pedersen protocol for proving that
//! log_g1(h1) = log_g2(h2), made non-interactive with a Fiat-Shamir challenge.
//!
//! # Chaum and Pedersen Scheme
//!
//! The prover knows α such that h1 = α·g1 and h2 = α·g2:
//!
//! - The prover computes a1 = w·g1 and a2 = w·g2, with w ∈R Z_l
//! - The challenge is c = H("DLEQ", g1, h1, g2, h2, a1, a2)
//! - The prover responds with r = w - α·c (mod l)
//! - The verifier recomputes a1 = r·g1 + c·h1 and a2 = r·g2 + c·h2 and
//!   checks that they hash to c

use log::debug;
use rand::Rng;

use crate::hash::hash_to_scalar;
use crate::params::labels;
use crate::point::Point;
use crate::scalar::Scalar;

/// The four points a DLEQ proof speaks about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DleqStatement {
    pub g1: Point,
    pub h1: Point,
    pub g2: Point,
    pub h2: Point,
}

impl DleqStatement {
    pub fn new(g1: Point, h1: Point, g2: Point, h2: Point) -> Self {
        DleqStatement { g1, h1, g2, h2 }
    }

    fn challenge(&self, a1: &Point, a2: &Point) -> Scalar {
        hash_to_scalar(
            labels::DLEQ,
            &[&self.g1, &self.h1, &self.g2, &self.h2, a1, a2],
        )
    }
}

/// Non-interactive Chaum-Pedersen proof `(c, r)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DleqProof {
    pub c: Scalar,
    pub r: Scalar,
}

impl DleqProof {
    /// Proves `h1 = alpha * g1` and `h2 = alpha * g2`.
    pub fn prove<R: Rng + ?Sized>(statement: &DleqStatement, alpha: Scalar, rng: &mut R) -> Self {
        let w = Scalar::random(rng);
        let a1 = &w * &statement.g1;
        let a2 = &w * &statement.g2;
        let c = statement.challenge(&a1, &a2);
        // r = w - alpha*c (mod l)
        let r = w - alpha * &c;
        DleqProof { c, r }
    }

    pub fn verify(&self, statement: &DleqStatement) -> bool {
        let a1 = &self.r * &statement.g1 + &self.c * &statement.h1;
        let a2 = &self.r * &statement.g2 + &self.c * &statement.h2;
        let accepted = statement.challenge(&a1, &a2) == self.c;
        if !accepted {
            debug!("dleq: challenge mismatch");
        }
        accepted
    }
}
