// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Hashing to scalars and to points.
//!
//! Both maps take a domain separation label and an ordered list of
//! heterogeneous inputs. Every input is absorbed as `tag || len || bytes`,
//! so distinct input lists never collide by concatenation.
//!
//! - `hash_to_scalar`: SHA-512 of the transcript, reduced mod `l`.
//! - `hash_to_point`: try-and-increment over SHA-256 digests decoded as
//!   compressed points, then multiplied by the cofactor.
//!
//! The two maps use different hash functions and different family
//! prefixes, so for identical inputs the scalar output is not the discrete
//! logarithm of the point output.

use log::trace;
use sha2::{Digest, Sha256, Sha512};

use crate::point::Point;
use crate::scalar::Scalar;
use crate::vector::{PointVector, ScalarVector};

const SCALAR_FAMILY: &[u8] = b"curve25519-zk/hash_to_scalar/v1";
const POINT_FAMILY: &[u8] = b"curve25519-zk/hash_to_point/v1";

/// Values with a canonical byte encoding that can be fed into the hashes.
pub trait Hashable {
    /// One byte distinguishing the kind of value.
    fn hash_tag(&self) -> u8;

    fn hash_bytes(&self) -> Vec<u8>;
}

impl<T: Hashable + ?Sized> Hashable for &T {
    fn hash_tag(&self) -> u8 {
        (**self).hash_tag()
    }

    fn hash_bytes(&self) -> Vec<u8> {
        (**self).hash_bytes()
    }
}

impl Hashable for [u8] {
    fn hash_tag(&self) -> u8 {
        0x01
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<const N: usize> Hashable for [u8; N] {
    fn hash_tag(&self) -> u8 {
        0x01
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl Hashable for Vec<u8> {
    fn hash_tag(&self) -> u8 {
        0x01
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

impl Hashable for str {
    fn hash_tag(&self) -> u8 {
        0x02
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Hashable for String {
    fn hash_tag(&self) -> u8 {
        0x02
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Hashable for Scalar {
    fn hash_tag(&self) -> u8 {
        0x03
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

impl Hashable for Point {
    fn hash_tag(&self) -> u8 {
        0x04
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

impl Hashable for u64 {
    fn hash_tag(&self) -> u8 {
        0x05
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }
}

impl Hashable for ScalarVector {
    fn hash_tag(&self) -> u8 {
        0x06
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.iter().flat_map(|s| s.to_bytes().to_vec()).collect()
    }
}

impl Hashable for PointVector {
    fn hash_tag(&self) -> u8 {
        0x07
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.iter().flat_map(|p| p.to_bytes().to_vec()).collect()
    }
}

fn absorb<D: Digest>(hasher: &mut D, label: &str, inputs: &[&dyn Hashable]) {
    absorb_one(hasher, &label);
    hasher.update((inputs.len() as u64).to_le_bytes());
    for input in inputs {
        absorb_one(hasher, *input);
    }
}

fn absorb_one<D: Digest>(hasher: &mut D, input: &dyn Hashable) {
    let bytes = input.hash_bytes();
    hasher.update([input.hash_tag()]);
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

/// Deterministically maps `(label, inputs)` to a scalar.
pub fn hash_to_scalar(label: &str, inputs: &[&dyn Hashable]) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(SCALAR_FAMILY);
    absorb(&mut hasher, label, inputs);
    Scalar::from_bytes_mod_order(&hasher.finalize())
}

/// Deterministically maps `(label, inputs)` to a point of the main
/// subgroup other than the identity.
pub fn hash_to_point(label: &str, inputs: &[&dyn Hashable]) -> Point {
    let mut prefix = Sha256::new();
    prefix.update(POINT_FAMILY);
    absorb(&mut prefix, label, inputs);

    let mut counter: u64 = 0;
    loop {
        let mut hasher = prefix.clone();
        hasher.update(counter.to_le_bytes());
        let digest = hasher.finalize();
        if let Ok(candidate) = Point::from_bytes(&digest) {
            let point = candidate.mul_by_cofactor();
            if !point.is_identity() {
                return point;
            }
        }
        trace!("hash_to_point({}): candidate {} rejected", label, counter);
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_to_scalar_deterministic() {
        let a = hash_to_scalar("tutorial", &[&Scalar::from(12)]);
        let b = hash_to_scalar("tutorial", &[&Scalar::from(12)]);
        assert_eq!(a, b);
        assert_ne!(a, hash_to_scalar("tutorial", &[&Scalar::from(13)]));
    }

    #[test]
    fn test_labels_separate_domains() {
        let g = Point::generator();
        assert_ne!(
            hash_to_scalar("Schnorr Proof", &[&g]),
            hash_to_scalar("Other Proof", &[&g])
        );
        assert_ne!(hash_to_point("Pedersen", &[]), hash_to_point("pedersen", &[]));
    }

    #[test]
    fn test_inputs_do_not_collide_by_concatenation() {
        let ab = hash_to_scalar("t", &[&"ab", &"c"]);
        let a_bc = hash_to_scalar("t", &[&"a", &"bc"]);
        assert_ne!(ab, a_bc);
        // same bytes, different kinds
        let s = Scalar::from(5);
        let raw = s.to_bytes();
        assert_ne!(hash_to_scalar("t", &[&s]), hash_to_scalar("t", &[&raw]));
    }

    #[test]
    fn test_hash_to_point_in_main_subgroup() {
        let p = hash_to_point("tutorial", &[&Point::generator()]);
        assert_eq!(p, hash_to_point("tutorial", &[&Point::generator()]));
        assert!(p.is_on_curve());
        assert!(!p.is_identity());
        assert!(p.is_in_main_subgroup());
    }

    #[test]
    fn test_scalar_and_point_families_unrelated() {
        let s = hash_to_scalar("tutorial", &[&"x"]);
        let p = hash_to_point("tutorial", &[&"x"]);
        assert_ne!(&s * &Point::generator(), p);
    }
}
