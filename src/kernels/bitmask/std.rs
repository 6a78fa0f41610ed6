// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Bitmask Scalar Kernels** - *Word-Level Bitmask Operations*
//!
//! Scalar implementations of bitmask operations processing 64 bits per step.
//!
//! ## Architecture Principles
//!
//! - **Word-level operations**: Process 64 bits simultaneously using native CPU instructions
//! - **Unaligned windows**: Source windows may start at any bit offset
//! - **Trailing bit handling**: Outputs always have their slack bits cleared
//!
//! Windows must have equal lengths; this is checked with debug assertions only,
//! since callers validate shapes before reaching these kernels.

use minarrow::{Bitmask, BitmaskVT};

use crate::kernels::bitmask::{WORD_BITS, bitmask_from_words, low_bits, word_at, words_for};

/// Element-wise bitwise `AND` on bitmask windows.
///
/// # Returns
/// A new zero-offset `Bitmask` of the window length.
#[inline]
pub fn and_masks(lhs: BitmaskVT<'_>, rhs: BitmaskVT<'_>) -> Bitmask {
    let (lhs_mask, lhs_off, len) = lhs;
    let (rhs_mask, rhs_off, rhs_len) = rhs;
    debug_assert_eq!(len, rhs_len, "and_masks: window length mismatch");
    let words: Vec<_> = (0..words_for(len))
        .map(|k| word_at(lhs_mask, lhs_off + k * WORD_BITS) & word_at(rhs_mask, rhs_off + k * WORD_BITS))
        .collect();
    bitmask_from_words(&words, len)
}

/// Number of set bits in the window.
#[inline]
pub fn popcount_mask(m: BitmaskVT<'_>) -> usize {
    let (mask, offset, len) = m;
    (0..words_for(len))
        .map(|k| {
            let w = word_at(mask, offset + k * WORD_BITS) & low_bits(len - k * WORD_BITS);
            w.count_ones() as usize
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bm(bits: &[bool]) -> Bitmask {
        Bitmask::from_bools(bits)
    }

    fn bits(m: &Bitmask) -> Vec<bool> {
        (0..m.len).map(|i| m.get(i)).collect()
    }

    fn pattern(len: usize, every: usize, phase: usize) -> Vec<bool> {
        (0..len).map(|i| (i + phase) % every == 0).collect()
    }

    #[test]
    fn and_aligned() {
        let a = bm(&[true, false, true, false]);
        let b = bm(&[true, true, false, false]);
        let and = and_masks((&a, 0, 4), (&b, 0, 4));
        assert_eq!(bits(&and), vec![true, false, false, false]);
    }

    #[test]
    fn and_unaligned_windows() {
        let la = pattern(300, 3, 0);
        let lb = pattern(300, 2, 1);
        let a = bm(&la);
        let b = bm(&lb);
        for (ao, bo, len) in [(1, 0, 200), (5, 70, 130), (63, 65, 200), (0, 0, 0)] {
            let out = and_masks((&a, ao, len), (&b, bo, len));
            assert_eq!(out.len, len);
            for i in 0..len {
                assert_eq!(out.get(i), la[ao + i] && lb[bo + i], "window ({ao},{bo}) bit {i}");
            }
            assert_eq!(
                popcount_mask((&out, 0, len)),
                (0..len).filter(|&i| la[ao + i] && lb[bo + i]).count()
            );
        }
    }

    #[test]
    fn popcount_window() {
        let m = bm(&pattern(130, 5, 0));
        assert_eq!(popcount_mask((&m, 0, 130)), 26);
        assert_eq!(popcount_mask((&m, 1, 129)), 25);
        assert_eq!(popcount_mask((&m, 0, 0)), 0);
    }
}
