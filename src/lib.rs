// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

//! # ecvrf-dalek
//!
//! An Elliptic Curve Verifiable Random Function (ECVRF) over the
//! Edwards25519 curve, built on [`curve25519-dalek`](https://docs.rs/curve25519-dalek).
//!
//! A VRF maps a secret key and a message `alpha` to a 32-byte pseudorandom
//! output `beta` together with a proof `pi`.  The output is deterministic,
//! indistinguishable from random without the secret key, and uniquely
//! determined by the public key and message: anyone holding the public key
//! can check that `pi` proves `beta` is *the* output for `alpha`, and the
//! prover cannot choose among several valid outputs.
//!
//! Keys follow the Ed25519 convention: a secret key is a 32-byte seed
//! followed by the 32-byte public key derived from it, and the public key is
//! a compressed Edwards point.  Proofs are 81 bytes on the wire; outputs are
//! 32 bytes.
//!
//! This crate reproduces the legacy SHA-256 try-and-increment ciphersuite
//! byte-for-byte for compatibility with existing deployments.  It predates
//! RFC 9381; new systems free to pick their own wire format should use the
//! ECVRF-EDWARDS25519-SHA512-ELL2 suite instead.
//!
//! # Example
//!
//! ```
//! use ecvrf_dalek::SecretKey;
//!
//! let seed: [u8; 32] = [
//!    157, 097, 177, 157, 239, 253, 090, 096,
//!    186, 132, 074, 244, 146, 236, 044, 196,
//!    068, 073, 197, 105, 123, 050, 105, 025,
//!    112, 059, 172, 003, 028, 174, 127, 096, ];
//!
//! let secret_key = SecretKey::from_seed(&seed);
//! let verifying_key = secret_key.verifying_key();
//!
//! let alpha: &[u8] = b"all that is gold does not glitter";
//! let (proof, output) = secret_key.prove(alpha)?;
//!
//! assert!(verifying_key.verify(&proof, alpha)?);
//! assert_eq!(proof.to_hash(), output);
//! # Ok::<(), ecvrf_dalek::VrfError>(())
//! ```
//!
//! Everything here is a pure function of its inputs: there is no randomness
//! on the proving or verification path, no I/O, and no shared state, so
//! concurrent use needs no coordination.  Multiplications involving the
//! secret scalar and the nonce are constant-time; verification handles only
//! public data and uses the faster variable-time routines.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

use sha2::{Digest, Sha256};

pub mod constants;
pub mod encoding;

mod errors;
mod hash_to_curve;
mod proof;
mod proving;
mod verifying;

pub use crate::constants::*;
pub use crate::errors::VrfError;
pub use crate::proof::Proof;
pub use crate::proving::SecretKey;
pub use crate::verifying::VerifyingKey;

/// Produce a proof and the VRF output for `alpha` under the keypair
/// `(public_key, secret_key)`, both in wire form.
///
/// This is the byte-oriented entry point; [`SecretKey::prove`] is the typed
/// equivalent.  Fails if `public_key` does not decode to a prime-order
/// subgroup point, if the halves of `secret_key` are inconsistent, or if
/// `public_key` is not the key belonging to `secret_key`.
pub fn prove(
    public_key: &[u8; PUBLIC_KEY_LENGTH],
    secret_key: &[u8; SECRET_KEY_LENGTH],
    alpha: &[u8],
) -> Result<([u8; PROOF_LENGTH], [u8; OUTPUT_LENGTH]), VrfError> {
    let verifying_key = VerifyingKey::from_bytes(public_key)?;
    let secret_key = SecretKey::from_bytes(secret_key)?;
    if verifying_key != secret_key.verifying_key() {
        return Err(crate::errors::InternalError::KeyMismatch.into());
    }

    let (proof, output) = secret_key.prove(alpha)?;
    Ok((proof.to_bytes(), output))
}

/// Verify an 81-byte proof against a public key and the message `alpha`.
///
/// Returns `Ok(true)` when the proof is valid and `Ok(false)` on a clean
/// cryptographic mismatch; `Err` means an input was structurally unusable
/// and the predicate could not be evaluated at all.  [`VerifyingKey::verify`]
/// is the typed equivalent.
pub fn verify(
    public_key: &[u8; PUBLIC_KEY_LENGTH],
    proof: &[u8; PROOF_LENGTH],
    alpha: &[u8],
) -> Result<bool, VrfError> {
    let verifying_key = VerifyingKey::from_bytes(public_key)?;
    let proof = Proof::from_bytes(proof)?;

    verifying_key.verify(&proof, alpha)
}

/// Compute the VRF output an 81-byte proof commits to.
///
/// The output depends on the `gamma` octets alone, so no decoding is
/// needed and identical proofs always map to identical outputs, bitwise
/// equal to what [`prove`] returned for the proof.
pub fn proof_to_hash(proof: &[u8; PROOF_LENGTH]) -> [u8; OUTPUT_LENGTH] {
    Sha256::digest(&proof[..POINT_LENGTH]).into()
}
