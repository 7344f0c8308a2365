// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Error type shared by every module of the crate.

use thiserror::Error;

use crate::schnorr::ProtocolState;

/// Errors surfaced by field, group, vector, proof and sharing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Arithmetic or decoding outside the domain of the operation:
    /// inverting zero, an off-curve point, a zero share identifier, ...
    #[error("domain error: {0}")]
    Domain(&'static str),

    #[error("invalid encoding length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// The point is on the curve but `l * P != Z`.
    #[error("point is not in the main subgroup")]
    Subgroup,

    #[error("vector length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("insufficient shares: got {got}, need {need}")]
    InsufficientShares { got: usize, need: usize },

    #[error("cannot {action} in protocol state {state:?}")]
    Protocol {
        state: ProtocolState,
        action: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
