// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

//! ECVRF secret keys and proof generation.

use core::fmt::Debug;

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::{clamp_integer, Scalar};

use sha2::{Digest, Sha512};

use subtle::{Choice, ConstantTimeEq};

use zeroize::Zeroize;

use crate::constants::*;
use crate::encoding::challenge_to_scalar;
use crate::errors::*;
use crate::hash_to_curve::try_and_increment;
use crate::proof::{challenge, Proof};
use crate::verifying::VerifyingKey;

/// An ECVRF secret key.
///
/// Follows the Ed25519 keypair convention: a 32-byte seed followed by the
/// 32-byte public key derived from it.  The byte constructor checks that the
/// two halves are consistent.
///
/// Instances of this secret are automatically overwritten with zeroes when
/// they fall out of scope.
#[derive(Clone)]
pub struct SecretKey {
    /// The seed half, expanded on demand into the secret scalar and the
    /// nonce prefix.
    pub(crate) seed: [u8; SEED_LENGTH],
    /// The public key derived from the seed.
    pub(crate) verifying_key: VerifyingKey,
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.seed.zeroize()
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("SecretKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.seed[..].ct_eq(&other.seed[..])
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl SecretKey {
    /// Expand a 32-byte seed into a full secret key, deriving the public
    /// half the way Ed25519 does.
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> SecretKey {
        let expanded = ExpandedSecretKey::from_seed(seed);
        let verifying_key = VerifyingKey::from(&expanded);

        SecretKey {
            seed: *seed,
            verifying_key,
        }
    }

    /// Construct a `SecretKey` from its 64-byte form, seed followed by
    /// public key.
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a `SecretKey`, or whose error value
    /// wraps `KeyMismatch` if the public-key half is not the public key
    /// derived from the seed half.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> Result<SecretKey, VrfError> {
        let mut seed: [u8; SEED_LENGTH] = [0u8; SEED_LENGTH];
        seed.copy_from_slice(&bytes[..SEED_LENGTH]);

        let secret_key = SecretKey::from_seed(&seed);
        seed.zeroize();

        let matches: bool = secret_key.verifying_key.as_bytes()[..]
            .ct_eq(&bytes[SEED_LENGTH..])
            .into();
        if !matches {
            return Err(InternalError::KeyMismatch.into());
        }
        Ok(secret_key)
    }

    /// Convert this secret key back to its 64-byte form.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        let mut bytes: [u8; SECRET_KEY_LENGTH] = [0u8; SECRET_KEY_LENGTH];

        bytes[..SEED_LENGTH].copy_from_slice(&self.seed);
        bytes[SEED_LENGTH..].copy_from_slice(self.verifying_key.as_bytes());
        bytes
    }

    /// The public key derived from this secret key.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }

    /// Produce a proof over `alpha` under this key, together with the VRF
    /// output the proof commits to.
    ///
    /// Proving is deterministic: the nonce is derived from the seed and the
    /// hashed-to-curve message, so repeated calls return bitwise-identical
    /// proofs and outputs.
    ///
    /// # Example
    ///
    /// ```
    /// use ecvrf_dalek::SecretKey;
    ///
    /// let secret_key = SecretKey::from_seed(&[0x42; 32]);
    /// let (proof, output) = secret_key.prove(b"an arbitrary message")?;
    ///
    /// assert_eq!(proof.to_hash(), output);
    /// # Ok::<(), ecvrf_dalek::VrfError>(())
    /// ```
    #[allow(non_snake_case)]
    pub fn prove(&self, alpha: &[u8]) -> Result<(Proof, [u8; OUTPUT_LENGTH]), VrfError> {
        let expanded = ExpandedSecretKey::from_seed(&self.seed);

        let H = try_and_increment(&self.verifying_key.compressed, alpha)?;
        let gamma = &expanded.key * &H;

        let mut k = expanded.vrf_nonce(&H.compress());
        let k_base = EdwardsPoint::mul_base(&k);
        let k_H = &k * &H;

        let challenge = challenge(&[
            &ED25519_BASEPOINT_POINT,
            &self.verifying_key.point,
            &H,
            &k_base,
            &k_H,
        ]);
        let response = k - challenge_to_scalar(&challenge) * expanded.key;
        k.zeroize();

        let proof = Proof {
            gamma,
            challenge,
            response,
        };
        let output = proof.to_hash();
        Ok((proof, output))
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = VrfError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<SecretKey, VrfError> {
        let bytes: &[u8; SECRET_KEY_LENGTH] =
            bytes.try_into().map_err(|_| InternalError::BytesLength {
                name: "SecretKey",
                length: SECRET_KEY_LENGTH,
            })?;
        SecretKey::from_bytes(bytes)
    }
}

/// An "expanded" secret key.
///
/// Produced by digesting the seed with SHA-512.  The lower half is clamped
/// into the secret scalar `x`; the upper half becomes the prefix from which
/// per-message nonces are derived, the same split Ed25519 signing uses.
///
/// Instances of this secret are automatically overwritten with zeroes when
/// they fall out of scope.
pub(crate) struct ExpandedSecretKey {
    pub(crate) key: Scalar,
    pub(crate) nonce: [u8; 32],
}

impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.key.zeroize();
        self.nonce.zeroize()
    }
}

impl ExpandedSecretKey {
    /// Expand a seed with SHA-512, clamping the scalar half.
    pub(crate) fn from_seed(seed: &[u8; SEED_LENGTH]) -> ExpandedSecretKey {
        let mut hash: [u8; 64] = [0u8; 64];
        let mut lower: [u8; 32] = [0u8; 32];
        let mut upper: [u8; 32] = [0u8; 32];

        hash.copy_from_slice(Sha512::digest(seed).as_slice());
        lower.copy_from_slice(&hash[00..32]);
        upper.copy_from_slice(&hash[32..64]);
        hash.zeroize();

        let key = Scalar::from_bytes_mod_order(clamp_integer(lower));
        lower.zeroize();

        ExpandedSecretKey { key, nonce: upper }
    }

    /// Derive the deterministic nonce scalar for the curve point `h`:
    /// SHA-512 over the nonce prefix and the compressed point, reduced
    /// modulo the group order.
    ///
    /// Binding the nonce to (seed, h) makes proving deterministic and rules
    /// out nonce reuse across messages.
    pub(crate) fn vrf_nonce(&self, h: &CompressedEdwardsY) -> Scalar {
        let digest = Sha512::new()
            .chain_update(self.nonce)
            .chain_update(h.as_bytes());

        Scalar::from_hash(digest)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use hex_literal::hex;

    #[test]
    fn public_key_derivation_matches_ed25519() {
        // seed and public key from the RFC 8032 test vectors
        let seed = hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
        let public = hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");

        let secret_key = SecretKey::from_seed(&seed);
        assert_eq!(secret_key.verifying_key().to_bytes(), public);
    }

    #[test]
    fn keypair_bytes_round_trip() {
        let secret_key = SecretKey::from_seed(&[0x15; SEED_LENGTH]);
        let bytes = secret_key.to_bytes();
        assert_eq!(SecretKey::from_bytes(&bytes).unwrap(), secret_key);
    }

    #[test]
    fn mismatched_public_half_is_rejected() {
        let mut bytes = SecretKey::from_seed(&[0x15; SEED_LENGTH]).to_bytes();
        bytes[SECRET_KEY_LENGTH - 1] ^= 0x01;
        assert_eq!(
            SecretKey::from_bytes(&bytes).unwrap_err(),
            VrfError(InternalError::KeyMismatch)
        );
    }

    #[test]
    fn nonces_differ_across_points() {
        let expanded = ExpandedSecretKey::from_seed(&[0x15; SEED_LENGTH]);
        let h1 = EdwardsPoint::mul_base(&Scalar::from(2u64)).compress();
        let h2 = EdwardsPoint::mul_base(&Scalar::from(3u64)).compress();
        assert_ne!(expanded.vrf_nonce(&h1), expanded.vrf_nonce(&h2));
        assert_eq!(expanded.vrf_nonce(&h1), expanded.vrf_nonce(&h1));
    }

    #[test]
    fn secret_key_zeroize_on_drop() {
        let secret_ptr: *const u8;

        {
            // scope for the secret to ensure it's been dropped
            let secret = SecretKey::from_seed(&[0x15; SEED_LENGTH]);
            secret_ptr = secret.seed.as_ptr();
        }

        let memory: &[u8] = unsafe { ::std::slice::from_raw_parts(secret_ptr, SEED_LENGTH) };
        assert!(!memory.contains(&0x15));
    }
}
