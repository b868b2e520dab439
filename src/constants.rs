// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

//! Common constants such as the byte lengths of keys, proofs, and outputs.

/// The length of an ECVRF secret key, in bytes: a 32-byte seed followed by
/// the 32-byte public key derived from it, per the Ed25519 convention.
pub const SECRET_KEY_LENGTH: usize = 64;

/// The length of the seed half of an ECVRF secret key, in bytes.
pub const SEED_LENGTH: usize = 32;

/// The length of an ECVRF public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// The length of a curve point in its tagged octet form, in bytes: a parity
/// tag byte followed by the compressed Edwards y-coordinate.
pub const POINT_LENGTH: usize = 33;

/// The length of the challenge component `c` of a proof, in bytes.
pub const CHALLENGE_LENGTH: usize = 16;

/// The length of the response component `s` of a proof, in bytes.
pub const RESPONSE_LENGTH: usize = 32;

/// The length of an ECVRF proof, in bytes: `gamma ‖ c ‖ s`.
pub const PROOF_LENGTH: usize = POINT_LENGTH + CHALLENGE_LENGTH + RESPONSE_LENGTH;

/// The length of a VRF output `beta`, in bytes.
pub const OUTPUT_LENGTH: usize = 32;

/// Bound on the one-byte counter driving the try-and-increment loop.
pub(crate) const HASH_TO_CURVE_ATTEMPTS: usize = 256;
