// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Validity Combinator** - *Output validity of a binary kernel*
//!
//! A result position is valid iff every contributing operand position is valid.
//! Arrays contribute their validity bit at `offset + i`, scalars contribute one
//! flag repeated at every position, and a missing bitmap counts as all valid.
//!
//! Computed from the operands' validity alone, independent of the values, so
//! the value loop is free to evaluate null positions.

use minarrow::{Bitmask, BitmaskVT};

use crate::kernels::bitmask::std::and_masks;

/// Validity contribution of one operand.
#[derive(Debug, Clone, Copy)]
pub enum ValiditySource<'a> {
    /// Array operand: its validity window, `None` when every position is valid.
    Array(Option<BitmaskVT<'a>>),
    /// Scalar operand: its validity flag, broadcast to every position.
    Scalar(bool),
}

impl ValiditySource<'_> {
    /// Validity of position `idx` of this operand.
    #[inline]
    pub fn is_valid_at(&self, idx: usize) -> bool {
        match self {
            ValiditySource::Array(None) => true,
            ValiditySource::Array(Some((mask, offset, _))) => mask.get(offset + idx),
            ValiditySource::Scalar(valid) => *valid,
        }
    }

    /// True for a null scalar, which nulls out every output position.
    #[inline]
    pub fn is_null_broadcast(&self) -> bool {
        matches!(self, ValiditySource::Scalar(false))
    }
}

/// Combines two operands' validity into the result validity over `len` positions.
///
/// Returns `None` when the result is entirely valid without needing a bitmap,
/// i.e. no operand carries a bitmap and no scalar is null. Otherwise returns a
/// zero-offset bitmap of `len` bits with `out[i] = lhs[i] AND rhs[i]`.
pub fn combine_validity(
    lhs: ValiditySource<'_>,
    rhs: ValiditySource<'_>,
    len: usize,
) -> Option<Bitmask> {
    if lhs.is_null_broadcast() || rhs.is_null_broadcast() {
        return Some(Bitmask::new_set_all(len, false));
    }
    fn window<'a>(src: ValiditySource<'a>) -> Option<BitmaskVT<'a>> {
        match src {
            ValiditySource::Array(w) => w,
            ValiditySource::Scalar(_) => None,
        }
    }
    match (window(lhs), window(rhs)) {
        (None, None) => None,
        (Some((m, off, wlen)), None) | (None, Some((m, off, wlen))) => {
            debug_assert_eq!(wlen, len, "combine_validity: window length mismatch");
            Some(m.slice_clone(off, len))
        }
        (Some(a), Some(b)) => {
            debug_assert_eq!(a.2, len, "combine_validity: lhs window length mismatch");
            debug_assert_eq!(b.2, len, "combine_validity: rhs window length mismatch");
            Some(and_masks(a, b))
        }
    }
}
