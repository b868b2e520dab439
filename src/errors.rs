// -*- mode: rust; -*-
//
// This file is part of ecvrf-dalek.
// Copyright (c) 2026 the ecvrf-dalek authors
// See LICENSE for licensing information.

//! Errors which may occur when parsing keys and/or proofs to or from wire formats.

use core::fmt;
use core::fmt::Display;

/// Internal errors.  Most application-level developers will likely not
/// need to pay any attention to these.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum InternalError {
    PointDecompression,
    /// A tagged point encoding did not start with a recognized parity tag.
    PointFormat,
    /// A decoded point carries a component in the small torsion subgroup.
    TorsionComponent,
    /// A response scalar was not reduced modulo the group order.
    ScalarFormat,
    /// An error in the length of bytes handed to a constructor.
    ///
    /// To use this, pass a string specifying the `name` of the type which is
    /// returning the error, and the `length` in bytes which its constructor
    /// expects.
    BytesLength {
        name: &'static str,
        length: usize,
    },
    /// The public-key half of a secret key did not match the public key
    /// derived from the seed half.
    KeyMismatch,
    /// An integer did not fit into the requested octet-string length.
    IntegerTooLarge {
        length: usize,
    },
    /// The try-and-increment counter space was exhausted without finding a
    /// curve point.
    HashToCurveExhausted,
}

impl Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InternalError::PointDecompression => write!(f, "Cannot decompress Edwards point"),
            InternalError::PointFormat => write!(f, "Point encoding has an unrecognized tag byte"),
            InternalError::TorsionComponent => {
                write!(f, "Point is not in the prime-order subgroup")
            }
            InternalError::ScalarFormat => {
                write!(f, "Cannot use scalar that is not reduced modulo the group order")
            }
            InternalError::BytesLength { name: n, length: l } => {
                write!(f, "{} must be {} bytes in length", n, l)
            }
            InternalError::KeyMismatch => {
                write!(f, "Public-key half of the secret key does not match its seed")
            }
            InternalError::IntegerTooLarge { length: l } => {
                write!(f, "Integer does not fit in {} octets", l)
            }
            InternalError::HashToCurveExhausted => {
                write!(f, "Counter space exhausted while hashing to the curve")
            }
        }
    }
}

/// Errors which may occur while processing proofs and keys.
///
/// This error may arise due to:
///
/// * Being given bytes with a length different to what was expected.
///
/// * A problem decompressing `gamma`, a curve point, in the `Proof`, or the
///   curve point for a `VerifyingKey`: the encoding may be non-canonical,
///   off-curve, or carry a small-torsion component.
///
/// * A problem with the format of `s`, a scalar, in the `Proof`.  This is
///   only raised if the scalar is not fully reduced modulo the group order.
///
/// * The public-key half of a 64-byte secret key failing to match the key
///   derived from its seed half.
///
/// A *cryptographic* mismatch during verification is not an error: `verify`
/// returns `Ok(false)` for a well-formed proof that does not check out.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct VrfError(pub(crate) InternalError);

impl Display for VrfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<InternalError> for VrfError {
    fn from(err: InternalError) -> VrfError {
        VrfError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InternalError {}

#[cfg(feature = "std")]
impl std::error::Error for VrfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
