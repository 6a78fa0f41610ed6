// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparison Operations Kernels Module** - *Null-aware elementwise comparisons*
//!
//! Compares an array against a scalar, or two equal-length arrays, under one
//! [`ComparisonOperator`](crate::operators::ComparisonOperator), producing a
//! `minarrow` [`BooleanArray`](minarrow::BooleanArray).
//!
//! ## Pipeline
//! 1. Shape checks: operands share an element type, array pairs share a length.
//!    Failures return before anything is allocated.
//! 2. Degenerate cases: empty input gives an empty result with no validity.
//!    A null scalar makes every position null without comparing anything.
//! 3. Output validity from the operands' validity alone, via
//!    [`combine_validity`](crate::kernels::validity::combine_validity).
//! 4. Value bits from the comparator resolved once for the call, packed 64 per
//!    word by the portable, SIMD or partitioned loop.
//! 5. Value bits at null positions are cleared to `false`.
//!
//! The operator is always applied in the caller's operand order: `5 > arr` is
//! evaluated as written, never by swapping the operands. Kernel selection
//! lives in [`dispatch`]; the portable loops in [`std`](self::std), the
//! vector loops in `simd`.
//!
//! ## Entry points
//! - [`compare`]: the `Datum` level entry point, plus the [`eq`], [`neq`],
//!   [`gt`], [`gt_eq`], [`lt`], [`lt_eq`] shorthands on the default context
//! - [`cmp_array_scalar`], [`cmp_scalar_array`], [`cmp_array_array`]: typed
//!   numeric entry points below the `Datum` layer, taking
//!   [`PrimitiveView`](crate::structs::view::PrimitiveView) windows
//! - [`cmp_bool_array_scalar`], [`cmp_bool_scalar_array`],
//!   [`cmp_bool_array_array`]: the boolean equivalents over `BooleanAVT`
//!   windows, comparing packed words

pub mod comparator;
pub mod dispatch;
#[cfg(feature = "simd")]
pub mod simd;
pub mod std;

pub use self::dispatch::{
    cmp_array_array, cmp_array_scalar, cmp_bool_array_array, cmp_bool_array_scalar,
    cmp_bool_scalar_array, cmp_scalar_array, compare, eq, gt, gt_eq, lt, lt_eq, neq,
};
pub use self::std::ScalarSide;
