// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use curve25519_zk::sharing::{poly_eval, recover, recover_with_threshold};
use curve25519_zk::{Point, PointVector, Polynomial, Scalar, ScalarVector};

fn main() -> curve25519_zk::Result<()> {
    env_logger::init();

    let x1: ScalarVector = (1..=3u64).map(Scalar::from).collect();
    let x2: ScalarVector = (4..=6u64).map(Scalar::from).collect();
    println!("x1 + x2 = {:?}", x1.add(&x2)?);
    println!("x1 * x2 = {:?}", x1.mul(&x2)?);
    println!("x1 . x2 = {:?}", x1.dot(&x2)?);
    println!("x1[..2] = {:?}", x1.slice(..2));

    let g = Point::generator();
    let y2: PointVector = x2.iter().map(|x| x * &g).collect();
    let msm = y2.multiscalar_mul(&x1)?;
    println!("x1 ** (x2 * G) == (x1 . x2) * G: {}", msm == x1.dot(&x2)? * &g);

    if let Err(err) = x1.add(&x1.slice(..2)) {
        println!("x1 + x1[..2]: {}", err);
    }

    // 3 + 2x + x^2
    let coefficients: ScalarVector = vec![Scalar::from(3), Scalar::from(2), Scalar::one()].into();
    println!("P(5) = {:?}", poly_eval(&Scalar::from(5), &coefficients));

    let mut rng = rand::thread_rng();
    let secret = Scalar::random(&mut rng);
    let polynomial = Polynomial::random(secret.clone(), 3, &mut rng)?;
    let ids: Vec<Scalar> = (1..=5u64).map(Scalar::from).collect();
    let shares = polynomial.deal(&ids)?;
    println!("secret = {}", secret);
    let subset = [shares[0].clone(), shares[2].clone(), shares[4].clone()];
    println!("recovered from shares 1,3,5 = {}", recover(&subset)?);
    println!("recovered from shares 1,2 = {}", recover(&shares[..2])?);
    if let Err(err) = recover_with_threshold(&shares[..2], polynomial.threshold()) {
        println!("checked recovery from shares 1,2: {}", err);
    }
    Ok(())
}
