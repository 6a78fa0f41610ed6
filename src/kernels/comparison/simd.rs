// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparison SIMD Kernels** - *Lane-parallel comparison loops*
//!
//! Vectorised versions of the slice loops in [`super::std`]. Each output word
//! is produced from `64 / LANES` vector comparisons whose lane masks are
//! shifted into place, so the word-partitioned `parallel` path and the SIMD
//! path compose. The final partial word is evaluated lane by lane.
//!
//! Lane counts come from `simd_lanes.rs`, generated by `build.rs` for the
//! target. Every lane count is a power of two no larger than 64, so vectors
//! never straddle an output word.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use core::any::TypeId;
use core::mem;
use core::simd::Simd;
use core::slice;

use minarrow::Bitmask;

use crate::context::KernelContext;
use crate::kernels::bitmask::{Word, WORD_BITS};
use crate::kernels::comparison::comparator::Comparator;
use crate::kernels::comparison::std::{fill_words, ScalarSide};
use crate::structs::types::NativeType;

macro_rules! impl_cmp_simd {
    ($slice_scalar:ident, $slices:ident, $ty:ty, $lanes:expr) => {
        const _: () = assert!($lanes > 0 && WORD_BITS % $lanes == 0);

        /// Vectorised `values[i] C scalar` (or `scalar C values[i]`).
        #[inline]
        pub fn $slice_scalar<C: Comparator>(
            ctx: &KernelContext,
            values: &[$ty],
            scalar: $ty,
            side: ScalarSide,
        ) -> Bitmask {
            const N: usize = $lanes;
            type V = Simd<$ty, N>;
            let len = values.len();
            let s = V::splat(scalar);
            fill_words(ctx, len, |k| {
                let base = k * WORD_BITS;
                let mut w: Word = 0;
                if base + WORD_BITS <= len {
                    let mut c = 0;
                    while c < WORD_BITS {
                        let x = V::from_slice(&values[base + c..base + c + N]);
                        let m = match side {
                            ScalarSide::Right => C::compare_simd(x, s),
                            ScalarSide::Left => C::compare_simd(s, x),
                        };
                        w |= m.to_bitmask() << c;
                        c += N;
                    }
                } else {
                    for (j, &v) in values[base..].iter().enumerate() {
                        let bit = match side {
                            ScalarSide::Right => C::compare(v, scalar),
                            ScalarSide::Left => C::compare(scalar, v),
                        };
                        w |= (bit as Word) << j;
                    }
                }
                w
            })
        }

        /// Vectorised `lhs[i] C rhs[i]` over equal-length slices.
        #[inline]
        pub fn $slices<C: Comparator>(ctx: &KernelContext, lhs: &[$ty], rhs: &[$ty]) -> Bitmask {
            const N: usize = $lanes;
            type V = Simd<$ty, N>;
            assert_eq!(lhs.len(), rhs.len(), concat!(stringify!($slices), ": length mismatch"));
            let len = lhs.len();
            fill_words(ctx, len, |k| {
                let base = k * WORD_BITS;
                let mut w: Word = 0;
                if base + WORD_BITS <= len {
                    let mut c = 0;
                    while c < WORD_BITS {
                        let a = V::from_slice(&lhs[base + c..base + c + N]);
                        let b = V::from_slice(&rhs[base + c..base + c + N]);
                        w |= C::compare_simd(a, b).to_bitmask() << c;
                        c += N;
                    }
                } else {
                    for j in 0..len - base {
                        w |= (C::compare(lhs[base + j], rhs[base + j]) as Word) << j;
                    }
                }
                w
            })
        }
    };
}

impl_cmp_simd!(cmp_scalar_i8_simd, cmp_slices_i8_simd, i8, W8);
impl_cmp_simd!(cmp_scalar_u8_simd, cmp_slices_u8_simd, u8, W8);
impl_cmp_simd!(cmp_scalar_i16_simd, cmp_slices_i16_simd, i16, W16);
impl_cmp_simd!(cmp_scalar_u16_simd, cmp_slices_u16_simd, u16, W16);
impl_cmp_simd!(cmp_scalar_i32_simd, cmp_slices_i32_simd, i32, W32);
impl_cmp_simd!(cmp_scalar_u32_simd, cmp_slices_u32_simd, u32, W32);
impl_cmp_simd!(cmp_scalar_f32_simd, cmp_slices_f32_simd, f32, W32);
impl_cmp_simd!(cmp_scalar_i64_simd, cmp_slices_i64_simd, i64, W64);
impl_cmp_simd!(cmp_scalar_u64_simd, cmp_slices_u64_simd, u64, W64);
impl_cmp_simd!(cmp_scalar_f64_simd, cmp_slices_f64_simd, f64, W64);

/// Reinterprets `&[T]` as `&[U]` when `T` and `U` are the same type.
#[inline(always)]
fn cast_slice<T: 'static, U: 'static>(s: &[T]) -> Option<&[U]> {
    if TypeId::of::<T>() == TypeId::of::<U>() {
        // SAFETY: identical types, so layout and length carry over.
        Some(unsafe { slice::from_raw_parts(s.as_ptr() as *const U, s.len()) })
    } else {
        None
    }
}

/// Reinterprets a `T` value as `U` when `T` and `U` are the same type.
#[inline(always)]
fn cast_value<T: Copy + 'static, U: Copy + 'static>(v: T) -> Option<U> {
    if TypeId::of::<T>() == TypeId::of::<U>() {
        // SAFETY: identical types.
        Some(unsafe { mem::transmute_copy::<T, U>(&v) })
    } else {
        None
    }
}

/// Routes a generic slice-vs-scalar comparison to the vectorised loop for `T`.
///
/// Returns `None` when `T` has no vectorised loop.
#[inline]
pub fn try_cmp_slice_scalar<T: NativeType, C: Comparator>(
    ctx: &KernelContext,
    values: &[T],
    scalar: T,
    side: ScalarSide,
) -> Option<Bitmask> {
    macro_rules! route {
        ($($ty:ty => $f:ident),* $(,)?) => {
            $(
                if let (Some(v), Some(s)) = (cast_slice::<T, $ty>(values), cast_value::<T, $ty>(scalar)) {
                    return Some($f::<C>(ctx, v, s, side));
                }
            )*
        };
    }
    route!(
        i8 => cmp_scalar_i8_simd,
        u8 => cmp_scalar_u8_simd,
        i16 => cmp_scalar_i16_simd,
        u16 => cmp_scalar_u16_simd,
        i32 => cmp_scalar_i32_simd,
        u32 => cmp_scalar_u32_simd,
        f32 => cmp_scalar_f32_simd,
        i64 => cmp_scalar_i64_simd,
        u64 => cmp_scalar_u64_simd,
        f64 => cmp_scalar_f64_simd,
    );
    None
}

/// Routes a generic slice-vs-slice comparison to the vectorised loop for `T`.
///
/// Returns `None` when `T` has no vectorised loop.
#[inline]
pub fn try_cmp_slices<T: NativeType, C: Comparator>(
    ctx: &KernelContext,
    lhs: &[T],
    rhs: &[T],
) -> Option<Bitmask> {
    macro_rules! route {
        ($($ty:ty => $f:ident),* $(,)?) => {
            $(
                if let (Some(a), Some(b)) = (cast_slice::<T, $ty>(lhs), cast_slice::<T, $ty>(rhs)) {
                    return Some($f::<C>(ctx, a, b));
                }
            )*
        };
    }
    route!(
        i8 => cmp_slices_i8_simd,
        u8 => cmp_slices_u8_simd,
        i16 => cmp_slices_i16_simd,
        u16 => cmp_slices_u16_simd,
        i32 => cmp_slices_i32_simd,
        u32 => cmp_slices_u32_simd,
        f32 => cmp_slices_f32_simd,
        i64 => cmp_slices_i64_simd,
        u64 => cmp_slices_u64_simd,
        f64 => cmp_slices_f64_simd,
    );
    None
}
