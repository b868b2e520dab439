// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

//! Conversions between integers, scalars, curve points, and their
//! fixed-length octet-string wire forms.
//!
//! Protocol integers travel big-endian ("network order"), while
//! `curve25519-dalek` scalars are little-endian.  The helpers in this module
//! are the only places where the byte order flips.

use alloc::vec::Vec;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;

use crate::constants::{CHALLENGE_LENGTH, POINT_LENGTH, RESPONSE_LENGTH};
use crate::errors::{InternalError, VrfError};

/// Tag byte prefixed to the 32-byte compressed form of a curve point.
///
/// The x parity itself lives in the high bit of the final y byte, so
/// encoding always emits `0x02`; decoding also accepts `0x03` from
/// SEC1-style producers.
pub(crate) const POINT_TAG: u8 = 0x02;

/// Encode a non-negative integer as `len` big-endian octets.
///
/// Fails if `n` does not fit in `len` octets.  Integers wider than a machine
/// word never travel through here: the 16- and 32-octet protocol integers
/// have their own fixed-width converters in this module.
pub fn i2osp(n: u64, len: usize) -> Result<Vec<u8>, VrfError> {
    if len < 8 && n >= 1u64 << (8 * len) {
        return Err(InternalError::IntegerTooLarge { length: len }.into());
    }
    let be = n.to_be_bytes();
    if len <= 8 {
        Ok(be[8 - len..].to_vec())
    } else {
        let mut os = Vec::with_capacity(len);
        os.resize(len - 8, 0);
        os.extend_from_slice(&be);
        Ok(os)
    }
}

/// Decode a big-endian octet string to an integer.
///
/// Fails if the encoded value does not fit in a `u64`; it always does for
/// the octet strings this crate itself produces.
pub fn os2ip(octets: &[u8]) -> Result<u64, VrfError> {
    let mut n: u64 = 0;
    for &octet in octets {
        n = n
            .checked_mul(256)
            .and_then(|n| n.checked_add(u64::from(octet)))
            .ok_or(InternalError::IntegerTooLarge {
                length: octets.len(),
            })?;
    }
    Ok(n)
}

/// Encode a curve point in its tagged 33-octet wire form.
pub(crate) fn point_to_octets(point: &EdwardsPoint) -> [u8; POINT_LENGTH] {
    let mut octets = [0u8; POINT_LENGTH];
    octets[0] = POINT_TAG;
    octets[1..].copy_from_slice(point.compress().as_bytes());
    octets
}

/// Decode a tagged 33-octet wire form back to a curve point.
///
/// Rejects unknown tag bytes, non-canonical y encodings, and off-curve
/// values.
pub(crate) fn octets_to_point(octets: &[u8; POINT_LENGTH]) -> Result<EdwardsPoint, VrfError> {
    if octets[0] != POINT_TAG && octets[0] != POINT_TAG + 1 {
        return Err(InternalError::PointFormat.into());
    }
    let mut y = [0u8; 32];
    y.copy_from_slice(&octets[1..]);
    decode_point(&y).ok_or_else(|| InternalError::PointDecompression.into())
}

/// Canonical decompression: the decoded point must recompress to the input
/// bytes, so non-canonical field encodings are rejected alongside off-curve
/// values.
pub(crate) fn decode_point(bytes: &[u8; 32]) -> Option<EdwardsPoint> {
    let compressed = CompressedEdwardsY(*bytes);
    let point = compressed.decompress()?;
    if point.compress() != compressed {
        return None;
    }
    Some(point)
}

/// Convert a scalar to its 32-octet big-endian wire form.
pub(crate) fn scalar_to_octets(scalar: &Scalar) -> [u8; RESPONSE_LENGTH] {
    let mut octets = scalar.to_bytes();
    octets.reverse();
    octets
}

/// Parse a 32-octet big-endian wire form into a canonical scalar.
///
/// Returns `None` when the value is not fully reduced mod the group order.
pub(crate) fn scalar_from_octets(octets: &[u8; RESPONSE_LENGTH]) -> Option<Scalar> {
    let mut le = *octets;
    le.reverse();
    Scalar::from_canonical_bytes(le).into()
}

/// Widen a 16-octet big-endian challenge into a scalar.
///
/// Always canonical: the challenge is bounded by 2^128, far below the group
/// order.
pub(crate) fn challenge_to_scalar(challenge: &[u8; CHALLENGE_LENGTH]) -> Scalar {
    let mut le = [0u8; 32];
    for (i, &octet) in challenge.iter().rev().enumerate() {
        le[i] = octet;
    }
    Scalar::from_bytes_mod_order(le)
}
