// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

//! An ECVRF proof and the VRF output it commits to.

use core::fmt::Debug;

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;

use sha2::{Digest, Sha256};

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::encoding::*;
use crate::errors::*;

/// An ECVRF proof.
///
/// # Note
///
/// Proofs are "detached": they include neither the message they were
/// produced over nor the public key needed to verify them.  The VRF output
/// is not carried either; it is recomputed from the proof with
/// [`Proof::to_hash`].
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Proof {
    /// `gamma` is the VRF commitment `x·H`, where `H` is the message mapped
    /// onto the prime-order subgroup and `x` is the expanded secret scalar.
    /// The VRF output is a digest of this point alone.
    pub(crate) gamma: EdwardsPoint,

    /// `c` is the challenge: a SHA-256 digest over the basepoint, the
    /// public key, `H`, and the prover's two commitments, truncated to 16
    /// octets and kept in its big-endian wire form.
    pub(crate) challenge: [u8; CHALLENGE_LENGTH],

    /// `s` is the response scalar `k − c·x mod ℓ`, where `k` is the
    /// deterministic nonce the commitments were built from.
    pub(crate) response: Scalar,
}

impl Debug for Proof {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(
            f,
            "Proof( gamma: {:?}, c: {:?}, s: {:?} )",
            &self.gamma, &self.challenge, &self.response
        )
    }
}

impl Proof {
    /// Convert this proof to its 81-byte wire form: `gamma ‖ c ‖ s`, with
    /// `gamma` in its tagged point form and `c` and `s` big-endian.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PROOF_LENGTH] {
        let mut proof_bytes: [u8; PROOF_LENGTH] = [0u8; PROOF_LENGTH];

        proof_bytes[..POINT_LENGTH].copy_from_slice(&point_to_octets(&self.gamma));
        proof_bytes[POINT_LENGTH..POINT_LENGTH + CHALLENGE_LENGTH]
            .copy_from_slice(&self.challenge);
        proof_bytes[POINT_LENGTH + CHALLENGE_LENGTH..]
            .copy_from_slice(&scalar_to_octets(&self.response));
        proof_bytes
    }

    /// Construct a `Proof` from its wire form.
    ///
    /// Rejects encodings whose point does not decode canonically onto the
    /// curve, whose point carries a small-torsion component, and whose
    /// response scalar is not reduced modulo the group order.
    pub fn from_bytes(bytes: &[u8; PROOF_LENGTH]) -> Result<Proof, VrfError> {
        let mut gamma_octets: [u8; POINT_LENGTH] = [0u8; POINT_LENGTH];
        let mut challenge: [u8; CHALLENGE_LENGTH] = [0u8; CHALLENGE_LENGTH];
        let mut response_octets: [u8; RESPONSE_LENGTH] = [0u8; RESPONSE_LENGTH];

        gamma_octets.copy_from_slice(&bytes[..POINT_LENGTH]);
        challenge.copy_from_slice(&bytes[POINT_LENGTH..POINT_LENGTH + CHALLENGE_LENGTH]);
        response_octets.copy_from_slice(&bytes[POINT_LENGTH + CHALLENGE_LENGTH..]);

        let gamma = octets_to_point(&gamma_octets)?;
        if !gamma.is_torsion_free() {
            return Err(InternalError::TorsionComponent.into());
        }
        let response =
            scalar_from_octets(&response_octets).ok_or(InternalError::ScalarFormat)?;

        Ok(Proof {
            gamma,
            challenge,
            response,
        })
    }

    /// Compute the VRF output `beta` this proof commits to: a SHA-256
    /// digest of the tagged encoding of `gamma` alone.
    ///
    /// The result is bitwise identical to the output returned alongside the
    /// proof by [`SecretKey::prove`](crate::SecretKey::prove).
    pub fn to_hash(&self) -> [u8; OUTPUT_LENGTH] {
        Sha256::digest(point_to_octets(&self.gamma)).into()
    }
}

impl TryFrom<&[u8]> for Proof {
    type Error = VrfError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Proof, VrfError> {
        let bytes: &[u8; PROOF_LENGTH] =
            bytes.try_into().map_err(|_| InternalError::BytesLength {
                name: "Proof",
                length: PROOF_LENGTH,
            })?;
        Proof::from_bytes(bytes)
    }
}

/// Compute the 16-octet challenge over a sequence of points: a SHA-256
/// digest of their concatenated tagged encodings, truncated to the first 16
/// octets and read big-endian.
pub(crate) fn challenge(points: &[&EdwardsPoint]) -> [u8; CHALLENGE_LENGTH] {
    let mut h = Sha256::new();
    for point in points {
        h.update(point_to_octets(point));
    }
    let mut challenge: [u8; CHALLENGE_LENGTH] = [0u8; CHALLENGE_LENGTH];
    challenge.copy_from_slice(&h.finalize()[..CHALLENGE_LENGTH]);
    challenge
}

#[cfg(feature = "serde")]
impl Serialize for Proof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes()[..])
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for Proof {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct ProofVisitor;

        impl<'d> Visitor<'d> for ProofVisitor {
            type Value = Proof;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str("An ECVRF proof as 81 bytes: a tagged curve point, a 16-byte challenge, and a 32-byte response.")
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Proof, E>
            where
                E: SerdeError,
            {
                Proof::try_from(bytes).map_err(E::custom)
            }
        }
        deserializer.deserialize_bytes(ProofVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use curve25519_dalek::constants::{ED25519_BASEPOINT_POINT, EIGHT_TORSION};
    use rand::{thread_rng, RngCore};

    fn sample_proof() -> Proof {
        let mut rng = thread_rng();
        let mut challenge = [0u8; CHALLENGE_LENGTH];
        rng.fill_bytes(&mut challenge);
        Proof {
            gamma: EdwardsPoint::mul_base(&Scalar::random(&mut rng)),
            challenge,
            response: Scalar::random(&mut rng),
        }
    }

    #[test]
    fn wire_form_round_trips() {
        for _ in 0..32 {
            let proof = sample_proof();
            let decoded = Proof::from_bytes(&proof.to_bytes()).unwrap();
            assert_eq!(decoded, proof);
            assert_eq!(decoded.to_hash(), proof.to_hash());
        }
    }

    #[test]
    fn decoding_rejects_unreduced_response() {
        let mut bytes = sample_proof().to_bytes();
        // overwrite s with the group order, big-endian
        bytes[POINT_LENGTH + CHALLENGE_LENGTH..].copy_from_slice(&[
            0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6, 0x58, 0x12, 0x63, 0x1a,
            0x5c, 0xf5, 0xd3, 0xed,
        ]);
        assert_eq!(
            Proof::from_bytes(&bytes),
            Err(VrfError(InternalError::ScalarFormat))
        );
    }

    #[test]
    fn decoding_rejects_bad_point_tags() {
        let mut bytes = sample_proof().to_bytes();
        bytes[0] = 0x05;
        assert_eq!(
            Proof::from_bytes(&bytes),
            Err(VrfError(InternalError::PointFormat))
        );
    }

    #[test]
    fn decoding_rejects_torsion_points() {
        let mut proof = sample_proof();
        proof.gamma = ED25519_BASEPOINT_POINT + EIGHT_TORSION[1];
        assert_eq!(
            Proof::from_bytes(&proof.to_bytes()),
            Err(VrfError(InternalError::TorsionComponent))
        );
    }

    #[test]
    fn slices_of_the_wrong_length_are_rejected() {
        let bytes = sample_proof().to_bytes();
        assert!(Proof::try_from(&bytes[..]).is_ok());
        assert!(Proof::try_from(&bytes[..PROOF_LENGTH - 1]).is_err());
    }

    #[test]
    fn challenge_is_order_sensitive() {
        let b = ED25519_BASEPOINT_POINT;
        let p = EdwardsPoint::mul_base(&Scalar::from(7u64));
        assert_ne!(challenge(&[&b, &p]), challenge(&[&p, &b]));
    }
}
