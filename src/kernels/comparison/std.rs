// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparison Scalar Kernels** - *Word-packing comparison loops*
//!
//! Portable loops that evaluate a [`Comparator`] per position and pack 64
//! results into each output word before storing it. Boolean operands skip
//! the per-position step and compare 64 packed values per word operation.
//!
//! All loops produce value bits only. Validity is computed separately by the
//! validity combinator and applied afterwards.
//!
//! With the `parallel` feature and a context that asks for it, the output words
//! are split into contiguous chunks and each rayon worker fills its own chunk.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use minarrow::{Bitmask, BitmaskVT};

use crate::context::KernelContext;
use crate::kernels::bitmask::std::and_masks;
use crate::kernels::bitmask::{Word, WORD_BITS, bitmask_from_words, word_at, words_for};
use crate::kernels::comparison::comparator::Comparator;

/// Which side of the operator a scalar operand sits on.
///
/// The operator is always applied as `lhs op rhs` in the caller's order, so
/// `5 > array` and `array > 5` are different comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarSide {
    Left,
    Right,
}

/// Builds a `len`-bit bitmask whose word `k` is `word(k)`.
///
/// `word` may set bits past `len` in the final word; they are cleared here.
#[inline]
pub fn fill_words<G>(ctx: &KernelContext, len: usize, word: G) -> Bitmask
where
    G: Fn(usize) -> Word + Sync,
{
    let mut words: Vec<Word> = vec![0; words_for(len)];

    #[cfg(feature = "parallel")]
    {
        if ctx.should_partition(len) {
            let chunk_words = ctx.chunk_len() / WORD_BITS;
            words
                .par_chunks_mut(chunk_words)
                .enumerate()
                .for_each(|(c, words)| {
                    let first = c * chunk_words;
                    for (k, dst) in words.iter_mut().enumerate() {
                        *dst = word(first + k);
                    }
                });
            return bitmask_from_words(&words, len);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = ctx;

    for (k, dst) in words.iter_mut().enumerate() {
        *dst = word(k);
    }
    bitmask_from_words(&words, len)
}

/// Packs `bit(i)` for the positions of word `k`, clipped to `len`.
#[inline(always)]
fn pack_word<F: Fn(usize) -> bool>(k: usize, len: usize, bit: &F) -> Word {
    let base = k * WORD_BITS;
    let n = (len - base).min(WORD_BITS);
    let mut w: Word = 0;
    for j in 0..n {
        w |= (bit(base + j) as Word) << j;
    }
    w
}

/// Builds a `len`-bit bitmask with bit `i` set to `bit(i)`.
#[inline]
pub fn fill_bits<F>(ctx: &KernelContext, len: usize, bit: F) -> Bitmask
where
    F: Fn(usize) -> bool + Sync,
{
    fill_words(ctx, len, |k| pack_word(k, len, &bit))
}

/// Compares every value against one scalar: `values[i] C scalar`, or
/// `scalar C values[i]` when the scalar is on the left.
#[inline]
pub fn cmp_slice_scalar<T, C>(ctx: &KernelContext, values: &[T], scalar: T, side: ScalarSide) -> Bitmask
where
    T: PartialOrd + Copy + Sync,
    C: Comparator,
{
    // `fill_bits` only asks for positions below `values.len()`.
    match side {
        ScalarSide::Right => fill_bits(ctx, values.len(), |i| {
            C::compare(unsafe { *values.get_unchecked(i) }, scalar)
        }),
        ScalarSide::Left => fill_bits(ctx, values.len(), |i| {
            C::compare(scalar, unsafe { *values.get_unchecked(i) })
        }),
    }
}

/// Compares two equal-length slices position by position: `lhs[i] C rhs[i]`.
#[inline]
pub fn cmp_slices<T, C>(ctx: &KernelContext, lhs: &[T], rhs: &[T]) -> Bitmask
where
    T: PartialOrd + Copy + Sync,
    C: Comparator,
{
    assert_eq!(lhs.len(), rhs.len(), "cmp_slices: length mismatch");
    fill_bits(ctx, lhs.len(), |i| unsafe {
        C::compare(*lhs.get_unchecked(i), *rhs.get_unchecked(i))
    })
}

/// Compares a packed boolean window against one boolean scalar, 64 positions per step.
#[inline]
pub fn cmp_bitmask_scalar<C: Comparator>(
    ctx: &KernelContext,
    values: BitmaskVT<'_>,
    scalar: bool,
    side: ScalarSide,
) -> Bitmask {
    let (mask, offset, len) = values;
    let splat: Word = if scalar { !0 } else { 0 };
    match side {
        ScalarSide::Right => fill_words(ctx, len, |k| {
            C::compare_words(word_at(mask, offset + k * WORD_BITS), splat)
        }),
        ScalarSide::Left => fill_words(ctx, len, |k| {
            C::compare_words(splat, word_at(mask, offset + k * WORD_BITS))
        }),
    }
}

/// Compares two packed boolean windows of equal length, 64 positions per step.
/// Offsets need no alignment.
#[inline]
pub fn cmp_bitmask_std<C: Comparator>(
    ctx: &KernelContext,
    lhs: BitmaskVT<'_>,
    rhs: BitmaskVT<'_>,
) -> Bitmask {
    let (lhs_mask, lhs_offset, len) = lhs;
    let (rhs_mask, rhs_offset, rhs_len) = rhs;
    assert_eq!(len, rhs_len, "cmp_bitmask_std: window length mismatch");
    fill_words(ctx, len, |k| {
        C::compare_words(
            word_at(lhs_mask, lhs_offset + k * WORD_BITS),
            word_at(rhs_mask, rhs_offset + k * WORD_BITS),
        )
    })
}

/// Returns `values` with the bits at null positions forced to `false`.
#[inline]
pub fn clear_null_values(values: &Bitmask, validity: &Bitmask) -> Bitmask {
    debug_assert_eq!(values.len, validity.len);
    and_masks((values, 0, values.len), (validity, 0, validity.len))
}
