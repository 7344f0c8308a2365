// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Fixed parameters of the ed25519 twisted Edwards curve
//!
//! `-x^2 + y^2 = 1 + d*x^2*y^2` over the prime field of order `q = 2^255 - 19`.
//!
//! The full group has order `8 * l` where
//!
//!    l = 2^252 + 27742317777372353535851937790883648493
//!
//! is prime. Points of order `l` form the main subgroup, generated by the
//! standard base point `G` with `y = 4/5` and even `x`.
//!
//! The parameters are computed once per process and never change.

use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::identities::One;

use crate::util::Util;

/// Domain separation labels used by the proof and protocol modules.
pub mod labels {
    pub const SCHNORR: &str = "Schnorr Proof";
    pub const DLEQ: &str = "DLEQ";
    pub const PEDERSEN: &str = "Pedersen";
    pub const DIFFIE_HELLMAN: &str = "Diffie-Hellman";
}

/// Size in bytes of every canonical encoding (field element, scalar, point).
pub const ENCODING_LENGTH: usize = 32;

/// Number of points in the small torsion subgroup.
pub const COFACTOR: u64 = 8;

#[derive(Debug, Clone)]
pub struct CurveParams {
    /// Field modulus `2^255 - 19`
    pub q: BigUint,
    /// Main subgroup order
    pub l: BigUint,
    /// Edwards `d = -121665 / 121666 (mod q)`
    pub d: BigUint,
    /// `2 * d (mod q)`, used by the addition formula
    pub d2: BigUint,
    /// `sqrt(-1) = 2^((q - 1) / 4) (mod q)`
    pub sqrt_m1: BigUint,
    /// `(q - 5) / 8`, exponent of the square root candidate
    pub sqrt_exp: BigUint,
    pub cofactor: u64,
    /// Affine coordinates of the base point `G`
    pub gx: BigUint,
    pub gy: BigUint,
    /// Affine coordinates of a generator of the order 8 subgroup
    pub torsion_x: BigUint,
    pub torsion_y: BigUint,
}

static PARAMS: OnceLock<CurveParams> = OnceLock::new();

/// Process-wide curve parameters.
pub fn params() -> &'static CurveParams {
    PARAMS.get_or_init(CurveParams::new)
}

fn constant(digits: &[u8]) -> BigUint {
    BigUint::parse_bytes(digits, 10).expect("hard-coded decimal constant")
}

impl CurveParams {
    fn new() -> Self {
        let one = BigUint::one();
        let q: BigUint = (&one << 255) - BigUint::from(19u32);
        let l: BigUint = (&one << 252)
            + constant(b"27742317777372353535851937790883648493");

        // d = -121665 * 121666^-1
        let inv = Util::mod_inverse(&BigUint::from(121666u32), &q)
            .expect("121666 is invertible mod q");
        let d = (&q - BigUint::from(121665u32)) * inv % &q;
        let d2 = (&d << 1) % &q;

        let sqrt_m1 =
            BigUint::from(2u32).modpow(&((&q - &one) >> 2), &q);
        let sqrt_exp = (&q - BigUint::from(5u32)) >> 3;

        CurveParams {
            q,
            l,
            d,
            d2,
            sqrt_m1,
            sqrt_exp,
            cofactor: COFACTOR,
            gx: constant(b"15112221349535400772501151409588531511454012693041857206046113283949847762202"),
            gy: constant(b"46316835694926478169428394003475163141307993866256225615783033603165251855960"),
            // compressed c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac03fa
            torsion_x: constant(b"43496726750457979451437558183816721346016168361625936758514574428539776020131"),
            torsion_y: constant(b"55188659117513257062467267217118295137698188065244968500265048394206261417927"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_primes::Verification;

    #[test]
    fn test_moduli_are_prime() {
        let p = params();
        assert!(Verification::is_prime(&p.q));
        assert!(Verification::is_prime(&p.l));
        assert_eq!(p.cofactor, 8);
    }

    #[test]
    fn test_d_and_sqrt_m1() {
        let p = params();
        assert_eq!(
            p.d,
            constant(b"37095705934669439343138083508754565189542113879843219016388785533085940283555")
        );
        // sqrt(-1)^2 == q - 1
        assert_eq!(
            p.sqrt_m1.modpow(&BigUint::from(2u32), &p.q),
            &p.q - BigUint::one()
        );
    }

    #[test]
    fn test_base_point_y_is_four_fifths() {
        let p = params();
        assert_eq!(&p.gy * BigUint::from(5u32) % &p.q, BigUint::from(4u32));
        // x is the even root
        assert_eq!(&p.gx % BigUint::from(2u32), BigUint::from(0u32));
    }
}
