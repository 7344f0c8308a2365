// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use std::collections::HashSet;

use curve25519_zk::params::params;
use curve25519_zk::{Error, Point, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// `P + k * T` for `k = 0..8`, with `T` of order 8.
fn variants(p: &Point) -> Vec<Point> {
    let torsion = Point::torsion_generator();
    (0..8u64)
        .map(|k| p + Scalar::from(k) * &torsion)
        .collect()
}

fn key_image_of(p: &Point) -> Point {
    // any multiple of the cofactor
    Scalar::from(8 * 1_000_003) * p
}

#[test]
fn test_torsion_generator_has_order_eight() {
    let t = Point::torsion_generator();
    assert!(t.is_on_curve());
    assert!(t.is_small_order());
    assert!(!(Scalar::from(4) * &t).is_identity());
    assert!(!t.is_in_main_subgroup());
}

#[test]
fn test_variants_are_distinct() {
    let mut rng = StdRng::from_seed([71u8; 32]);
    let p = Point::random(&mut rng);
    let encodings: HashSet<[u8; 32]> = variants(&p).iter().map(Point::to_bytes).collect();
    assert_eq!(encodings.len(), 8);
}

#[test]
fn test_cofactor_multiple_collapses_variants() {
    let mut rng = StdRng::from_seed([72u8; 32]);
    let p = Point::random(&mut rng);
    let images: Vec<Point> = variants(&p).iter().map(key_image_of).collect();
    for image in &images {
        assert_eq!(image, &images[0]);
    }

    let x = loop {
        let x = Scalar::random(&mut rng);
        if x.rem_u64(8) == 0 {
            break x;
        }
    };
    let images: HashSet<[u8; 32]> = variants(&p)
        .iter()
        .map(|v| (&x * v).to_bytes())
        .collect();
    assert_eq!(images.len(), 1);
}

#[test]
fn test_order_l_identifies_main_subgroup_point() {
    let mut rng = StdRng::from_seed([73u8; 32]);
    let p = Point::random(&mut rng);
    let l = &params().l;
    for (k, v) in variants(&p).iter().enumerate() {
        assert_eq!(v.mul_biguint(l).is_identity(), k == 0);
        assert_eq!(v.is_in_main_subgroup(), k == 0);
    }
}

#[test]
fn test_validation_rejects_variants() {
    let mut rng = StdRng::from_seed([74u8; 32]);
    let p = Point::random(&mut rng);
    let all = variants(&p);

    assert!(Point::from_bytes_in_main_subgroup(&all[0].to_bytes()).is_ok());
    for v in &all[1..] {
        // decodes fine, but is not a usable point
        assert!(Point::from_bytes(&v.to_bytes()).is_ok());
        assert_eq!(
            Point::from_bytes_in_main_subgroup(&v.to_bytes()),
            Err(Error::Subgroup)
        );
        assert_eq!(v.ensure_main_subgroup(), Err(Error::Subgroup));
    }
}
