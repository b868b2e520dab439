// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

#[macro_use]
extern crate criterion;

use criterion::Criterion;

mod vrf_benches {
    use super::*;
    use ecvrf_dalek::{Proof, SecretKey};

    const SEED: [u8; 32] = [
        157, 097, 177, 157, 239, 253, 090, 096, 186, 132, 074, 244, 146, 236, 044, 196, 068, 073,
        197, 105, 123, 050, 105, 025, 112, 059, 172, 003, 028, 174, 127, 096,
    ];

    fn prove(c: &mut Criterion) {
        let secret_key = SecretKey::from_seed(&SEED);
        let alpha: &[u8] = b"";

        c.bench_function("ECVRF proving", move |b| {
            b.iter(|| secret_key.prove(alpha))
        });
    }

    fn verify(c: &mut Criterion) {
        let secret_key = SecretKey::from_seed(&SEED);
        let verifying_key = secret_key.verifying_key();
        let alpha: &[u8] = b"";
        let (proof, _) = secret_key.prove(alpha).unwrap();

        c.bench_function("ECVRF proof verification", move |b| {
            b.iter(|| verifying_key.verify(&proof, alpha))
        });
    }

    fn decode_proof(c: &mut Criterion) {
        let secret_key = SecretKey::from_seed(&SEED);
        let (proof, _) = secret_key.prove(b"").unwrap();
        let proof_bytes = proof.to_bytes();

        c.bench_function("ECVRF proof decoding", move |b| {
            b.iter(|| Proof::from_bytes(&proof_bytes))
        });
    }

    fn output_from_proof(c: &mut Criterion) {
        let secret_key = SecretKey::from_seed(&SEED);
        let (proof, _) = secret_key.prove(b"").unwrap();

        c.bench_function("ECVRF output hashing", move |b| b.iter(|| proof.to_hash()));
    }

    criterion_group! {
        name = vrf_benches;
        config = Criterion::default();
        targets =
            prove,
            verify,
            decode_proof,
            output_from_proof,
    }
}

criterion_main!(vrf_benches::vrf_benches);
