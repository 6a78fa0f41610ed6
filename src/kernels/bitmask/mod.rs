// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Bitmask Kernels Module** - *Null-Aware Bitmask Operations*
//!
//! Word-level access to `minarrow` bitmasks, used to combine validity maps
//! and to pack comparison results.
//!
//! ## Core Operations
//! - **`word_at`**: 64 bits read from any bit offset
//! - **`bitmask_from_words`**: packs finished words into a fresh `Bitmask`
//! - **`and_masks`**: bitwise AND of two windows
//! - **`popcount_mask`**: population count of a window
//!
//! ## Windows
//!
//! Every operation reads `(mask, offset, len)` windows. Offsets need no
//! alignment: words are assembled across byte boundaries by [`word_at`],
//! so sliced arrays are processed 64 positions at a time without copying.

pub mod std;

use core::mem;

use minarrow::Bitmask;

/// Fundamental word type for bitmask storage and operations.
pub type Word = u64;

/// Number of bits in a `Word`.
pub const WORD_BITS: usize = mem::size_of::<Word>() * 8;

/// Number of words required for a bitmask of `len` bits.
#[inline(always)]
pub fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// Low `n` bits set, for `n` in `0..=64`.
#[inline(always)]
pub fn low_bits(n: usize) -> Word {
    if n >= WORD_BITS {
        !0
    } else {
        (1 << n) - 1
    }
}

/// Reads the 64 bits starting at `bit_offset`, LSB first.
///
/// Bits past the end of the backing bytes read as zero. Bits between
/// `mask.len` and the end of the buffer are returned as stored, so callers
/// clear them with [`low_bits`] on the final word.
#[inline]
pub fn word_at(mask: &Bitmask, bit_offset: usize) -> Word {
    let n_bytes = mask.bits.len();
    let first = bit_offset / 8;
    let shift = bit_offset % 8;
    let mut w: Word = 0;
    for b in 0..8 {
        let idx = first + b;
        if idx >= n_bytes {
            break;
        }
        w |= (mask.bits[idx] as Word) << (8 * b);
    }
    if shift != 0 {
        w >>= shift;
        let idx = first + 8;
        if idx < n_bytes {
            w |= (mask.bits[idx] as Word) << (WORD_BITS - shift);
        }
    }
    w
}

/// Packs `words` into a new `len`-bit `Bitmask`, clearing slack bits of the
/// final word.
pub fn bitmask_from_words(words: &[Word], len: usize) -> Bitmask {
    debug_assert!(words.len() >= words_for(len), "bitmask_from_words: too few words");
    let mut out = Bitmask::new_set_all(len, false);
    let n_bytes = out.bits.len().min(len.div_ceil(8));
    for (k, &word) in words.iter().take(words_for(len)).enumerate() {
        let word = word & low_bits(len - k * WORD_BITS);
        for (b, byte) in word.to_le_bytes().into_iter().enumerate() {
            let idx = k * 8 + b;
            if idx >= n_bytes {
                break;
            }
            out.bits[idx] = byte;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_for() {
        assert_eq!(words_for(0), 0);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(63), 1);
        assert_eq!(words_for(64), 1);
        assert_eq!(words_for(65), 2);
        assert_eq!(words_for(128), 2);
        assert_eq!(words_for(129), 3);
    }

    #[test]
    fn test_low_bits() {
        assert_eq!(low_bits(0), 0);
        assert_eq!(low_bits(3), 0b111);
        assert_eq!(low_bits(64), !0);
    }

    #[test]
    fn word_at_crosses_byte_boundaries() {
        let bools: Vec<bool> = (0..150).map(|i| i % 3 == 0 || i % 7 == 0).collect();
        let mask = Bitmask::from_bools(&bools);
        for offset in [0, 1, 7, 8, 13, 64, 86] {
            let w = word_at(&mask, offset);
            let take = (bools.len() - offset).min(WORD_BITS);
            for i in 0..take {
                assert_eq!((w >> i) & 1 == 1, bools[offset + i], "offset {offset} bit {i}");
            }
        }
    }

    #[test]
    fn from_words_clears_slack() {
        let mask = bitmask_from_words(&[!0, !0], 70);
        assert_eq!(mask.len, 70);
        assert!((0..70).all(|i| mask.get(i)));
        assert_eq!(word_at(&mask, 64) & !low_bits(6), 0);
    }
}
