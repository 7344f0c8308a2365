// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use curve25519_zk::schnorr::{extract_witness, Prover, Verifier};
use curve25519_zk::{Keypair, NISchnorrProof, Point, Scalar, SchnorrProof};

fn main() -> curve25519_zk::Result<()> {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let keypair = Keypair::generate(&mut rng);
    println!("P = {}", keypair.public());

    // interactive, step by step
    let mut prover = Prover::new(keypair.secret().clone(), keypair.public().clone());
    let mut verifier = Verifier::new(keypair.public().clone());
    let q = prover.commit(&mut rng)?;
    println!("prover -> Q = {}", q);
    verifier.receive_commitment(q)?;
    let c = verifier.challenge(&mut rng)?;
    println!("verifier -> c = {}", c);
    let s = prover.respond(&c)?;
    println!("prover -> s = {}", s);
    println!("accepted: {} ({:?})", verifier.verify(&s)?, verifier.state());
    if let Err(err) = prover.respond(&c) {
        println!("responding twice: {}", err);
    }

    // a lying prover
    let x = keypair.secret().clone();
    let wrong = (&x + &Scalar::one()) * Point::generator();
    let proof = SchnorrProof::prove_with_rng(x.clone(), wrong, &mut rng)?;
    println!("proof for (x+1)G verifies: {}", proof.verify());

    // Fiat-Shamir
    let proof = NISchnorrProof::prove_with_rng(x.clone(), keypair.public().clone(), &mut rng);
    println!("non-interactive proof verifies: {}", proof.verify());
    println!("under another label: {}", proof.verify_with_label("Not Schnorr"));

    // reusing a nonce for two challenges
    let r = Scalar::random(&mut rng);
    let q = &r * Point::generator();
    let transcript = |c: Scalar| SchnorrProof {
        public: keypair.public().clone(),
        commitment: q.clone(),
        response: &r + &(&c * &x),
        challenge: c,
    };
    let t1 = transcript(Scalar::random(&mut rng));
    let t2 = transcript(Scalar::random(&mut rng));
    let extracted = extract_witness(&t1, &t2)?;
    println!("extracted x == x: {}", &extracted == keypair.secret());
    Ok(())
}
