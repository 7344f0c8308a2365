// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Eight encodings of one key that collide once multiplied by the cofactor.

use std::collections::HashSet;

use curve25519_zk::params::params;
use curve25519_zk::{Point, Scalar};

fn main() {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let p = Point::random(&mut rng);
    let torsion = Point::torsion_generator();
    let variants: Vec<Point> = (0..8u64)
        .map(|k| &p + &(Scalar::from(k) * &torsion))
        .collect();

    for (k, v) in variants.iter().enumerate() {
        println!("P + {}T = {}", k, v);
    }

    let spent = Scalar::from(8 * 1_000_003);
    let images: HashSet<[u8; 32]> = variants.iter().map(|v| (&spent * v).to_bytes()).collect();
    println!("distinct key images after multiplying by 8k: {}", images.len());

    for (k, v) in variants.iter().enumerate() {
        let order_l = v.mul_biguint(&params().l).is_identity();
        println!("l * (P + {}T) is identity: {}", k, order_l);
    }

    let accepted = variants
        .iter()
        .filter(|v| Point::from_bytes_in_main_subgroup(&v.to_bytes()).is_ok())
        .count();
    println!("variants passing subgroup validation: {}", accepted);
}
