// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparators** - *One zero-sized type per comparison operator*
//!
//! Kernels resolve the runtime [`ComparisonOperator`] into one of these types
//! once per call (see [`dispatch_comparator`]) and are then monomorphised over
//! it, so the inner loop carries no operator branch.
//!
//! Each comparator provides the relation at three granularities:
//! - a single pair of values (`compare`)
//! - 64 packed booleans at once (`compare_words`)
//! - a SIMD vector, with the `simd` feature (`compare_simd`)

#[cfg(feature = "simd")]
use core::simd::cmp::SimdPartialOrd;

use crate::kernels::bitmask::Word;
use crate::operators::ComparisonOperator;

/// A relational operator fixed at compile time.
pub trait Comparator: Send + Sync + 'static {
    /// Runtime operator this type stands for.
    const OP: ComparisonOperator;

    /// The relation on two values of the same type, using the type's native ordering.
    fn compare<T: PartialOrd + Copy>(lhs: T, rhs: T) -> bool;

    /// The relation on 64 boolean pairs packed into words (`false < true`).
    fn compare_words(lhs: Word, rhs: Word) -> Word;

    /// The relation lane-wise over two SIMD vectors.
    #[cfg(feature = "simd")]
    fn compare_simd<V: SimdPartialOrd>(lhs: V, rhs: V) -> V::Mask;
}

/// `lhs == rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct Equal;

/// `lhs != rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEqual;

/// `lhs < rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct Less;

/// `lhs <= rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LessEqual;

/// `lhs > rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct Greater;

/// `lhs >= rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct GreaterEqual;

macro_rules! impl_comparator {
    ($name:ident, $variant:ident, |$a:ident, $b:ident| $value:expr, |$wa:ident, $wb:ident| $word:expr, $simd:ident) => {
        impl Comparator for $name {
            const OP: ComparisonOperator = ComparisonOperator::$variant;

            #[inline(always)]
            fn compare<T: PartialOrd + Copy>($a: T, $b: T) -> bool {
                $value
            }

            #[inline(always)]
            fn compare_words($wa: Word, $wb: Word) -> Word {
                $word
            }

            #[cfg(feature = "simd")]
            #[inline(always)]
            fn compare_simd<V: SimdPartialOrd>(lhs: V, rhs: V) -> V::Mask {
                lhs.$simd(rhs)
            }
        }
    };
}

impl_comparator!(Equal, Equals, |a, b| a == b, |a, b| !(a ^ b), simd_eq);
impl_comparator!(NotEqual, NotEquals, |a, b| a != b, |a, b| a ^ b, simd_ne);
impl_comparator!(Less, LessThan, |a, b| a < b, |a, b| !a & b, simd_lt);
impl_comparator!(LessEqual, LessThanOrEqualTo, |a, b| a <= b, |a, b| !a | b, simd_le);
impl_comparator!(Greater, GreaterThan, |a, b| a > b, |a, b| a & !b, simd_gt);
impl_comparator!(GreaterEqual, GreaterThanOrEqualTo, |a, b| a >= b, |a, b| a | !b, simd_ge);

/// Resolves a runtime [`ComparisonOperator`] into its [`Comparator`] type and
/// evaluates `$body` with `$c` bound to that type.
///
/// ```rust,ignore
/// let bits = dispatch_comparator!(op, C => cmp_slice_scalar::<T, C>(ctx, values, scalar, side));
/// ```
macro_rules! dispatch_comparator {
    ($op:expr, $c:ident => $body:expr) => {
        match $op {
            $crate::operators::ComparisonOperator::Equals => {
                type $c = $crate::kernels::comparison::comparator::Equal;
                $body
            }
            $crate::operators::ComparisonOperator::NotEquals => {
                type $c = $crate::kernels::comparison::comparator::NotEqual;
                $body
            }
            $crate::operators::ComparisonOperator::LessThan => {
                type $c = $crate::kernels::comparison::comparator::Less;
                $body
            }
            $crate::operators::ComparisonOperator::LessThanOrEqualTo => {
                type $c = $crate::kernels::comparison::comparator::LessEqual;
                $body
            }
            $crate::operators::ComparisonOperator::GreaterThan => {
                type $c = $crate::kernels::comparison::comparator::Greater;
                $body
            }
            $crate::operators::ComparisonOperator::GreaterThanOrEqualTo => {
                type $c = $crate::kernels::comparison::comparator::GreaterEqual;
                $body
            }
        }
    };
}

pub(crate) use dispatch_comparator;

/// Evaluates `op` on one pair of values through its [`Comparator`].
#[inline]
pub fn compare_values<T: PartialOrd + Copy>(op: ComparisonOperator, lhs: T, rhs: T) -> bool {
    dispatch_comparator!(op, C => C::compare(lhs, rhs))
}
