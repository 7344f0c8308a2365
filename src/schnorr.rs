// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Schnorr proofs of knowledge of a discrete logarithm.
//!
//! The prover knows `x` with `P = x * G` and convinces a verifier of it:
//!
//! - The prover picks a nonce `r` and sends `Q = r * G`
//! - The verifier sends a random challenge `c`
//! - The prover responds with `s = r + c * x (mod l)`
//! - The verifier accepts iff `s * G == Q + c * P`
//!
//! The interactive exchange is driven by [`Prover`] and [`Verifier`], each
//! tracking its position in the exchange. [`NISchnorrProof`] replaces the
//! verifier by the Fiat-Shamir challenge `c = H(label, P, Q)`.
//!
//! A nonce must never answer two different challenges: from two such
//! transcripts [`extract_witness`] recovers `x`.
//!
//! Verification checks only the equation. `P` and `Q` taken from untrusted
//! bytes may carry a small-order component, and a forger can retry until it
//! cancels in `s * G == Q + c * P`. Validate them with
//! [`Point::ensure_main_subgroup`] first, or use
//! [`NISchnorrProof::verify_strict`].

use std::fmt;

use log::debug;
use rand::{thread_rng, Rng};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::hash::hash_to_scalar;
use crate::params::labels;
use crate::point::Point;
use crate::scalar::Scalar;

/// Position of a party in the interactive exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolState {
    Init,
    CommitmentSent,
    ChallengeReceived,
    ResponseSent,
    Verified,
    Rejected,
}

fn out_of_order(state: ProtocolState, action: &'static str) -> Error {
    debug!("schnorr: cannot {} in state {:?}", action, state);
    Error::Protocol { state, action }
}

/// `s * G == Q + c * P`
fn check_response(public: &Point, commitment: &Point, challenge: &Scalar, response: &Scalar) -> bool {
    response * Point::generator() == commitment + challenge * public
}

/// Interactive prover. The nonce lives only between `commit` and `respond`.
pub struct Prover {
    secret: Scalar,
    public: Point,
    nonce: Option<Scalar>,
    state: ProtocolState,
}

impl Prover {
    pub fn new(secret: Scalar, public: Point) -> Self {
        Prover {
            secret,
            public,
            nonce: None,
            state: ProtocolState::Init,
        }
    }

    pub fn state(&self) -> ProtocolState {
        self.state
    }

    pub fn public(&self) -> &Point {
        &self.public
    }

    /// Draws a fresh nonce `r` and returns `Q = r * G`.
    pub fn commit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Point> {
        if self.state != ProtocolState::Init {
            return Err(out_of_order(self.state, "commit"));
        }
        let nonce = Scalar::random(rng);
        let commitment = &nonce * Point::generator();
        self.nonce = Some(nonce);
        self.state = ProtocolState::CommitmentSent;
        Ok(commitment)
    }

    /// Answers the challenge with `s = r + c * x`, consuming the nonce.
    pub fn respond(&mut self, challenge: &Scalar) -> Result<Scalar> {
        if self.state != ProtocolState::CommitmentSent {
            return Err(out_of_order(self.state, "respond"));
        }
        self.state = ProtocolState::ChallengeReceived;
        let nonce = self
            .nonce
            .take()
            .ok_or_else(|| out_of_order(self.state, "respond"))?;
        self.state = ProtocolState::ResponseSent;
        Ok(nonce + challenge * &self.secret)
    }
}

impl fmt::Debug for Prover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prover")
            .field("public", &self.public)
            .field("state", &self.state)
            .finish()
    }
}

/// Interactive verifier.
#[derive(Debug)]
pub struct Verifier {
    public: Point,
    commitment: Option<Point>,
    challenge: Option<Scalar>,
    state: ProtocolState,
}

impl Verifier {
    pub fn new(public: Point) -> Self {
        Verifier {
            public,
            commitment: None,
            challenge: None,
            state: ProtocolState::Init,
        }
    }

    pub fn state(&self) -> ProtocolState {
        self.state
    }

    pub fn receive_commitment(&mut self, commitment: Point) -> Result<()> {
        if self.state != ProtocolState::Init {
            return Err(out_of_order(self.state, "receive a commitment"));
        }
        self.commitment = Some(commitment);
        self.state = ProtocolState::CommitmentSent;
        Ok(())
    }

    /// Samples the challenge. Only possible once the commitment is fixed.
    pub fn challenge<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Scalar> {
        if self.state != ProtocolState::CommitmentSent {
            return Err(out_of_order(self.state, "issue a challenge"));
        }
        let challenge = Scalar::random(rng);
        self.challenge = Some(challenge.clone());
        self.state = ProtocolState::ChallengeReceived;
        Ok(challenge)
    }

    /// Checks the response and moves to `Verified` or `Rejected`.
    pub fn verify(&mut self, response: &Scalar) -> Result<bool> {
        let (commitment, challenge) = match (&self.commitment, &self.challenge) {
            (Some(q), Some(c)) if self.state == ProtocolState::ChallengeReceived => (q, c),
            _ => return Err(out_of_order(self.state, "verify")),
        };
        let accepted = check_response(&self.public, commitment, challenge, response);
        self.state = if accepted {
            ProtocolState::Verified
        } else {
            debug!("schnorr: interactive response rejected");
            ProtocolState::Rejected
        };
        Ok(accepted)
    }
}

/// Public transcript `(P, Q, c, s)` of one interactive exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchnorrProof {
    pub public: Point,
    pub commitment: Point,
    pub challenge: Scalar,
    pub response: Scalar,
}

impl SchnorrProof {
    pub fn new(secret: Scalar, public: Point) -> Result<Self> {
        Self::prove_with_rng(secret, public, &mut thread_rng())
    }

    /// Runs a prover and a verifier against each other.
    pub fn prove_with_rng<R: Rng + ?Sized>(
        secret: Scalar,
        public: Point,
        rng: &mut R,
    ) -> Result<Self> {
        let mut prover = Prover::new(secret, public.clone());
        let mut verifier = Verifier::new(public.clone());

        let commitment = prover.commit(rng)?;
        verifier.receive_commitment(commitment.clone())?;
        let challenge = verifier.challenge(rng)?;
        let response = prover.respond(&challenge)?;

        Ok(SchnorrProof {
            public,
            commitment,
            challenge,
            response,
        })
    }

    pub fn verify(&self) -> bool {
        check_response(&self.public, &self.commitment, &self.challenge, &self.response)
    }
}

/// Recovers `x = (s1 - s2) / (c1 - c2)` from two accepting transcripts that
/// share the same commitment.
pub fn extract_witness(first: &SchnorrProof, second: &SchnorrProof) -> Result<Scalar> {
    if first.public != second.public || first.commitment != second.commitment {
        return Err(Error::Domain("transcripts do not share a commitment"));
    }
    if first.challenge == second.challenge {
        return Err(Error::Domain("transcripts share a challenge"));
    }
    let challenge_diff = &first.challenge - &second.challenge;
    Ok((&first.response - &second.response) * challenge_diff.invert()?)
}

/// Non-interactive Schnorr proof `(P, Q, s)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NISchnorrProof {
    pub public: Point,
    pub commitment: Point,
    pub response: Scalar,
}

impl NISchnorrProof {
    pub fn new(secret: Scalar, public: Point) -> Self {
        Self::prove_with_rng(secret, public, &mut thread_rng())
    }

    pub fn prove_with_rng<R: Rng + ?Sized>(secret: Scalar, public: Point, rng: &mut R) -> Self {
        Self::prove_with_label(labels::SCHNORR, secret, public, rng)
    }

    pub fn prove_with_label<R: Rng + ?Sized>(
        label: &str,
        secret: Scalar,
        public: Point,
        rng: &mut R,
    ) -> Self {
        let nonce = Scalar::random(rng);
        let commitment = &nonce * Point::generator();
        let challenge = hash_to_scalar(label, &[&public, &commitment]);
        let response = nonce + challenge * secret;
        NISchnorrProof {
            public,
            commitment,
            response,
        }
    }

    /// `c = H("Schnorr Proof", P, Q)`
    pub fn challenge(&self) -> Scalar {
        self.challenge_with_label(labels::SCHNORR)
    }

    pub fn challenge_with_label(&self, label: &str) -> Scalar {
        hash_to_scalar(label, &[&self.public, &self.commitment])
    }

    pub fn verify(&self) -> bool {
        self.verify_with_label(labels::SCHNORR)
    }

    /// Rejects `P` or `Q` outside the main subgroup with
    /// [`Error::Subgroup`] before checking the proof.
    pub fn verify_strict(&self) -> Result<bool> {
        self.public.ensure_main_subgroup()?;
        self.commitment.ensure_main_subgroup()?;
        Ok(self.verify())
    }

    pub fn verify_with_label(&self, label: &str) -> bool {
        let challenge = self.challenge_with_label(label);
        let accepted = check_response(&self.public, &self.commitment, &challenge, &self.response);
        if !accepted {
            debug!("schnorr: proof for {} rejected under label {:?}", self.public, label);
        }
        accepted
    }
}

/// Verifies every proof under `label` in parallel.
pub fn verify_batch(proofs: &[NISchnorrProof], label: &str) -> bool {
    proofs.par_iter().all(|proof| proof.verify_with_label(label))
}
