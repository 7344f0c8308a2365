// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use curve25519_zk::params::params;
use curve25519_zk::{hash_to_point, hash_to_scalar, Point, Scalar};

fn main() -> curve25519_zk::Result<()> {
    env_logger::init();

    // scalars wrap around the group order
    let a = Scalar::from(1);
    let b = Scalar::from(2);
    println!("1 - 2 = {:?}", &a - &b);
    println!("l - 1 = {}", &params().l - num_bigint::BigUint::from(1u32));
    println!("1 / 2 = {}", &a * &b.invert()?);
    println!("3 ** 5 = {:?}", Scalar::from(3).pow(5));

    let mut rng = rand::thread_rng();
    let x = Scalar::random(&mut rng);
    println!("random scalar x = {}", x);

    let g = Point::generator();
    let p = &x * &g;
    println!("G = {}", g);
    println!("P = x * G = {}", p);
    println!("P - P is identity: {}", (&p - &p).is_identity());
    println!("P in main subgroup: {}", p.is_in_main_subgroup());

    let decoded = Point::from_hex(&p.to_string())?;
    println!("decode(encode(P)) == P: {}", decoded == p);

    println!(
        "hash_to_scalar(\"demo\", x) = {}",
        hash_to_scalar("demo", &[&x])
    );
    println!("hash_to_point(\"demo\", x) = {}", hash_to_point("demo", &[&x]));

    match Scalar::zero().invert() {
        Ok(_) => println!("zero has an inverse?"),
        Err(err) => println!("1 / 0: {}", err),
    }
    Ok(())
}
