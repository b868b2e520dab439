// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

//! Deterministic mapping of messages onto the prime-order subgroup.
//!
//! This is the legacy try-and-increment construction: hash a one-byte
//! counter, the compressed public key, and the message with SHA-256,
//! interpret the digest as a compressed point, and bump the counter until
//! decompression succeeds.  The decoded point is multiplied by the cofactor
//! to clear any small-torsion component; skipping that step would let a
//! prover present several valid outputs for one message.
//!
//! New deployments that do not need wire compatibility with this
//! construction should prefer the RFC 9381 ELL2 suite.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};

use sha2::{Digest, Sha256};

use crate::constants::HASH_TO_CURVE_ATTEMPTS;
use crate::encoding::decode_point;
use crate::errors::{InternalError, VrfError};

/// Map `alpha` onto the prime-order subgroup, keyed by the compressed
/// public key.
///
/// Roughly half of all counter values yield a decodable point, so the loop
/// terminates almost immediately in practice.  It is nonetheless bounded by
/// the one-byte counter range and fails with `HashToCurveExhausted` beyond
/// that, an event of probability around 2^-256.
pub(crate) fn try_and_increment(
    public_key: &CompressedEdwardsY,
    alpha: &[u8],
) -> Result<EdwardsPoint, VrfError> {
    for ctr in 0..HASH_TO_CURVE_ATTEMPTS {
        let candidate: [u8; 32] = Sha256::new()
            .chain_update([ctr as u8])
            .chain_update(public_key.as_bytes())
            .chain_update(alpha)
            .finalize()
            .into();
        if let Some(point) = decode_point(&candidate) {
            return Ok(point.mul_by_cofactor());
        }
    }
    Err(InternalError::HashToCurveExhausted.into())
}

#[cfg(test)]
mod test {
    use super::*;

    use curve25519_dalek::edwards::EdwardsPoint;
    use curve25519_dalek::scalar::Scalar;
    use rand::{thread_rng, RngCore};

    fn random_public_key() -> CompressedEdwardsY {
        let mut rng = thread_rng();
        EdwardsPoint::mul_base(&Scalar::random(&mut rng)).compress()
    }

    #[test]
    fn output_is_deterministic() {
        let public_key = random_public_key();
        let h1 = try_and_increment(&public_key, b"alpha").unwrap();
        let h2 = try_and_increment(&public_key, b"alpha").unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn output_depends_on_key_and_message() {
        let public_key = random_public_key();
        let other_key = random_public_key();
        let h = try_and_increment(&public_key, b"alpha").unwrap();
        assert_ne!(h, try_and_increment(&public_key, b"beta").unwrap());
        assert_ne!(h, try_and_increment(&other_key, b"alpha").unwrap());
    }

    #[test]
    fn output_lies_in_the_prime_order_subgroup() {
        let mut rng = thread_rng();
        let public_key = random_public_key();
        let mut message = [0u8; 32];
        for _ in 0..1000 {
            rng.fill_bytes(&mut message);
            let h = try_and_increment(&public_key, &message).unwrap();
            assert!(h.is_torsion_free());
        }
    }
}
