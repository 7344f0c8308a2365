// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Ed25519 group arithmetic, scalar/point vectors, Schnorr proofs and Shamir
//! secret sharing.
//!
//! Everything is built on plain big-integer arithmetic and favors
//! readability over speed. None of it runs in constant time; do not use it to
//! protect real secrets.
//!
//! - [`FieldElement`]: integers mod `q = 2^255 - 19`
//! - [`Scalar`]: integers mod the main subgroup order `l`
//! - [`Point`]: points of the twisted Edwards curve, cofactor 8
//! - [`hash_to_scalar`] / [`hash_to_point`]: domain-separated hashing
//! - [`ScalarVector`] / [`PointVector`]: element-wise algebra and
//!   multiscalar multiplication
//! - [`schnorr`], [`dleq`]: zero-knowledge proofs
//! - [`sharing`]: (m, n) threshold sharing
//! - [`keys`], [`commitment`], [`elgamal`]: small protocols on top

pub mod commitment;
pub mod dleq;
pub mod elgamal;
pub mod error;
pub mod field;
pub mod hash;
pub mod keys;
pub mod params;
pub mod point;
pub mod scalar;
pub mod schnorr;
pub mod sharing;
pub mod util;
pub mod vector;

pub use error::{Error, Result};
pub use field::FieldElement;
pub use hash::{hash_to_point, hash_to_scalar, Hashable};
pub use keys::Keypair;
pub use point::Point;
pub use scalar::Scalar;
pub use schnorr::{NISchnorrProof, SchnorrProof};
pub use sharing::{Polynomial, Share};
pub use vector::{PointVector, ScalarVector};
