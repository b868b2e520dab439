// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

//! ECVRF public keys and proof verification.

use core::fmt::Debug;
use core::hash::{Hash, Hasher};

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::VartimeMultiscalarMul;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::encoding::{challenge_to_scalar, decode_point};
use crate::errors::*;
use crate::hash_to_curve::try_and_increment;
use crate::proof::{challenge, Proof};
use crate::proving::{ExpandedSecretKey, SecretKey};

/// An ECVRF public key.
///
/// # Note
///
/// The `Eq` and `Hash` impls here use the compressed Edwards y encoding,
/// _not_ the algebraic representation.  Since the constructor refuses
/// non-canonical encodings outright, two keys over the same point always
/// compare equal.
// Invariant: VerifyingKey.point is always the decompression of VerifyingKey.compressed
#[derive(Copy, Clone, Eq)]
pub struct VerifyingKey {
    /// Serialized compressed Edwards-y point.
    pub(crate) compressed: CompressedEdwardsY,

    /// Decompressed Edwards point used for curve arithmetic operations.
    pub(crate) point: EdwardsPoint,
}

impl Debug for VerifyingKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "VerifyingKey({:?})", self.compressed)
    }
}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Hash for VerifyingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<VerifyingKey> for VerifyingKey {
    fn eq(&self, other: &VerifyingKey) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl From<&ExpandedSecretKey> for VerifyingKey {
    /// Derive this public key from its corresponding `ExpandedSecretKey`.
    fn from(expanded: &ExpandedSecretKey) -> VerifyingKey {
        let point = EdwardsPoint::mul_base(&expanded.key);

        // Invariant: VerifyingKey.point is always the decompression of VerifyingKey.compressed
        VerifyingKey {
            compressed: point.compress(),
            point,
        }
    }
}

impl From<&SecretKey> for VerifyingKey {
    fn from(secret_key: &SecretKey) -> VerifyingKey {
        secret_key.verifying_key()
    }
}

impl VerifyingKey {
    /// Convert this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &(self.compressed).0
    }

    /// Construct a `VerifyingKey` from its 32-byte compressed form.
    ///
    /// Rejects non-canonical encodings, values that are not on the curve,
    /// and points outside the prime-order subgroup.
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a `VerifyingKey` or whose error value
    /// is a `VrfError` describing the error that occurred.
    #[inline]
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<VerifyingKey, VrfError> {
        let point = decode_point(bytes).ok_or(InternalError::PointDecompression)?;
        if !point.is_torsion_free() {
            return Err(InternalError::TorsionComponent.into());
        }

        // Invariant: VerifyingKey.point is always the decompression of VerifyingKey.compressed
        Ok(VerifyingKey {
            compressed: CompressedEdwardsY(*bytes),
            point,
        })
    }

    /// Returns whether this is a _weak_ public key, i.e., if this public key
    /// has low order.
    ///
    /// The constructor already refuses keys with torsion components, so of
    /// the small-order points only the identity can reach this predicate;
    /// callers vetting keys from elsewhere may still want the check before
    /// extending trust to a key.
    pub fn is_weak(&self) -> bool {
        self.point.is_small_order()
    }

    /// Verify `proof` against this public key and the message `alpha`.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when the proof is valid, `Ok(false)` on a clean
    /// cryptographic mismatch, and `Err` only when an input is structurally
    /// unusable.  Callers should treat the error case as "the predicate
    /// could not be evaluated", not as a failed verification.
    #[allow(non_snake_case)]
    pub fn verify(&self, proof: &Proof, alpha: &[u8]) -> Result<bool, VrfError> {
        let H = try_and_increment(&self.compressed, alpha)?;
        let c = challenge_to_scalar(&proof.challenge);

        // For an honest proof U and V recover the prover's commitments:
        //   U = c·P + s·B = c·x·B + (k − c·x)·B = k·B
        //   V = c·gamma + s·H = c·x·H + (k − c·x)·H = k·H
        // No secrets here, so the faster vartime routines are fine.
        let U = EdwardsPoint::vartime_double_scalar_mul_basepoint(&c, &self.point, &proof.response);
        let V = EdwardsPoint::vartime_multiscalar_mul([c, proof.response], [proof.gamma, H]);

        let expected = challenge(&[&ED25519_BASEPOINT_POINT, &self.point, &H, &U, &V]);
        Ok(expected == proof.challenge)
    }

    /// Verify `proof` and, when it is valid, return the VRF output it
    /// commits to.
    pub fn verify_to_hash(
        &self,
        proof: &Proof,
        alpha: &[u8],
    ) -> Result<Option<[u8; OUTPUT_LENGTH]>, VrfError> {
        Ok(self.verify(proof, alpha)?.then(|| proof.to_hash()))
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = VrfError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<VerifyingKey, VrfError> {
        let bytes: &[u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| InternalError::BytesLength {
                name: "VerifyingKey",
                length: PUBLIC_KEY_LENGTH,
            })?;
        VerifyingKey::from_bytes(bytes)
    }
}

#[cfg(feature = "serde")]
impl Serialize for VerifyingKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.as_bytes()[..])
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for VerifyingKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct VerifyingKeyVisitor;

        impl<'d> Visitor<'d> for VerifyingKeyVisitor {
            type Value = VerifyingKey;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str("An ECVRF verifying (public) key as 32 bytes, compressed Edwards-y form.")
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> Result<VerifyingKey, E>
            where
                E: SerdeError,
            {
                VerifyingKey::try_from(bytes).map_err(E::custom)
            }
        }
        deserializer.deserialize_bytes(VerifyingKeyVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use curve25519_dalek::constants::EIGHT_TORSION;
    use curve25519_dalek::traits::Identity;

    #[test]
    fn decoding_rejects_torsion_points() {
        let torsioned = (ED25519_BASEPOINT_POINT + EIGHT_TORSION[1]).compress();
        assert_eq!(
            VerifyingKey::from_bytes(torsioned.as_bytes()).unwrap_err(),
            VrfError(InternalError::TorsionComponent)
        );
    }

    #[test]
    fn decoding_rejects_off_curve_values() {
        // y = 2 is not the y-coordinate of any curve point
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes[0] = 2;
        assert_eq!(
            VerifyingKey::from_bytes(&bytes).unwrap_err(),
            VrfError(InternalError::PointDecompression)
        );
    }

    #[test]
    fn the_identity_is_weak() {
        let identity = CompressedEdwardsY::identity();
        let key = VerifyingKey::from_bytes(identity.as_bytes()).unwrap();
        assert!(key.is_weak());

        let honest = VerifyingKey::from(&SecretKey::from_seed(&[0x15; SEED_LENGTH]));
        assert!(!honest.is_weak());
    }
}
