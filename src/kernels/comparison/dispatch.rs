// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparison Dispatch** - *Shape checks, degenerate cases and kernel selection*
//!
//! Resolves a call to its typed kernel: the `Datum` shape and element type
//! pick the kernel, the operator picks the [`Comparator`], and the context and
//! cargo features pick the portable, SIMD or partitioned loop.

use core::marker::PhantomData;

use minarrow::{Bitmask, BooleanAVT, BooleanArray};
use tracing::{debug, trace};

use crate::context::KernelContext;
use crate::errors::KernelError;
use crate::kernels::comparison::comparator::{dispatch_comparator, Comparator};
#[cfg(feature = "simd")]
use crate::kernels::comparison::simd;
use crate::kernels::comparison::std::{
    clear_null_values, cmp_bitmask_scalar, cmp_bitmask_std, cmp_slice_scalar, cmp_slices, ScalarSide,
};
use crate::kernels::validity::{combine_validity, ValiditySource};
use crate::operators::{CompareOptions, ComparisonOperator};
use crate::structs::datum::Datum;
use crate::structs::scalar::{PrimitiveScalar, Scalar};
use crate::structs::types::NativeType;
use crate::structs::view::PrimitiveView;
use crate::utils::{confirm_equal_len, confirm_same_type};

// Value loops

#[inline]
fn slice_scalar_bits<T: NativeType, C: Comparator>(
    ctx: &KernelContext,
    values: &[T],
    scalar: T,
    side: ScalarSide,
) -> Bitmask {
    #[cfg(feature = "simd")]
    {
        if let Some(bits) = simd::try_cmp_slice_scalar::<T, C>(ctx, values, scalar, side) {
            return bits;
        }
    }
    cmp_slice_scalar::<T, C>(ctx, values, scalar, side)
}

#[inline]
fn slices_bits<T: NativeType, C: Comparator>(ctx: &KernelContext, lhs: &[T], rhs: &[T]) -> Bitmask {
    #[cfg(feature = "simd")]
    {
        if let Some(bits) = simd::try_cmp_slices::<T, C>(ctx, lhs, rhs) {
            return bits;
        }
    }
    cmp_slices::<T, C>(ctx, lhs, rhs)
}

/// Boolean column from finished value and validity bitmaps.
#[inline]
fn boolean_array(data: Bitmask, null_mask: Option<Bitmask>) -> BooleanArray<()> {
    let len = data.len;
    BooleanArray {
        data,
        null_mask,
        len,
        _phantom: PhantomData,
    }
}

/// Results that need no comparison: empty input, or a null scalar operand.
#[inline]
fn degenerate(len: usize, scalar_valid: bool) -> Option<BooleanArray<()>> {
    if len == 0 {
        return Some(boolean_array(Bitmask::new_set_all(0, false), None));
    }
    if !scalar_valid {
        debug!(len, "null scalar operand, result is all null");
        return Some(boolean_array(
            Bitmask::new_set_all(len, false),
            Some(Bitmask::new_set_all(len, false)),
        ));
    }
    None
}

/// Assembles the result, clearing value bits wherever the result is null.
#[inline]
fn finish(values: Bitmask, validity: Option<Bitmask>) -> BooleanArray<()> {
    match validity {
        Some(mask) => boolean_array(clear_null_values(&values, &mask), Some(mask)),
        None => boolean_array(values, None),
    }
}

/// Value window of a boolean column.
#[inline]
fn bool_values(window: BooleanAVT<'_, ()>) -> minarrow::BitmaskVT<'_> {
    let (arr, offset, len) = window;
    (&arr.data, offset, len)
}

/// Validity window of a boolean column, `None` when it has no null mask.
#[inline]
fn bool_validity(window: BooleanAVT<'_, ()>) -> Option<minarrow::BitmaskVT<'_>> {
    let (arr, offset, len) = window;
    arr.null_mask.as_ref().map(|m| (m, offset, len))
}

// Typed kernels

fn primitive_vs_scalar<T: NativeType>(
    ctx: &KernelContext,
    array: PrimitiveView<'_, T>,
    scalar: &PrimitiveScalar<T>,
    side: ScalarSide,
    op: ComparisonOperator,
) -> BooleanArray<()> {
    let len = array.len();
    if let Some(out) = degenerate(len, scalar.is_valid) {
        return out;
    }
    let validity = combine_validity(ValiditySource::Array(array.validity()), ValiditySource::Scalar(true), len);
    let values = dispatch_comparator!(op, C => slice_scalar_bits::<T, C>(ctx, array.values(), scalar.value, side));
    finish(values, validity)
}

fn primitive_vs_primitive<T: NativeType>(
    ctx: &KernelContext,
    lhs: PrimitiveView<'_, T>,
    rhs: PrimitiveView<'_, T>,
    op: ComparisonOperator,
) -> BooleanArray<()> {
    let len = lhs.len();
    if let Some(out) = degenerate(len, true) {
        return out;
    }
    let validity = combine_validity(
        ValiditySource::Array(lhs.validity()),
        ValiditySource::Array(rhs.validity()),
        len,
    );
    let values = dispatch_comparator!(op, C => slices_bits::<T, C>(ctx, lhs.values(), rhs.values()));
    finish(values, validity)
}

fn boolean_vs_scalar(
    ctx: &KernelContext,
    array: BooleanAVT<'_, ()>,
    scalar: &PrimitiveScalar<bool>,
    side: ScalarSide,
    op: ComparisonOperator,
) -> BooleanArray<()> {
    let len = array.2;
    if let Some(out) = degenerate(len, scalar.is_valid) {
        return out;
    }
    let validity = combine_validity(ValiditySource::Array(bool_validity(array)), ValiditySource::Scalar(true), len);
    let values =
        dispatch_comparator!(op, C => cmp_bitmask_scalar::<C>(ctx, bool_values(array), scalar.value, side));
    finish(values, validity)
}

fn boolean_vs_boolean(
    ctx: &KernelContext,
    lhs: BooleanAVT<'_, ()>,
    rhs: BooleanAVT<'_, ()>,
    op: ComparisonOperator,
) -> BooleanArray<()> {
    let len = lhs.2;
    if let Some(out) = degenerate(len, true) {
        return out;
    }
    let validity = combine_validity(
        ValiditySource::Array(bool_validity(lhs)),
        ValiditySource::Array(bool_validity(rhs)),
        len,
    );
    let values = dispatch_comparator!(op, C => cmp_bitmask_std::<C>(ctx, bool_values(lhs), bool_values(rhs)));
    finish(values, validity)
}

/// Compares every element of `lhs` against the scalar `rhs`: `lhs[i] op rhs`.
///
/// ```
/// use compare_kernels::{cmp_array_scalar, CompareOptions, ComparisonOperator, KernelContext, PrimitiveScalar};
/// use minarrow::IntegerArray;
///
/// let arr = IntegerArray::<i64>::from_slice(&[1, 5, 9]);
/// let out = cmp_array_scalar(
///     &KernelContext::default(),
///     (&arr, 0, 3).into(),
///     &PrimitiveScalar::new(5),
///     CompareOptions::new(ComparisonOperator::GreaterThanOrEqualTo),
/// );
/// assert!(!out.data.get(0) && out.data.get(1) && out.data.get(2));
/// ```
#[inline]
pub fn cmp_array_scalar<T: NativeType>(
    ctx: &KernelContext,
    lhs: PrimitiveView<'_, T>,
    rhs: &PrimitiveScalar<T>,
    options: CompareOptions,
) -> BooleanArray<()> {
    primitive_vs_scalar(ctx, lhs, rhs, ScalarSide::Right, options.op())
}

/// Compares the scalar `lhs` against every element of `rhs`: `lhs op rhs[i]`.
#[inline]
pub fn cmp_scalar_array<T: NativeType>(
    ctx: &KernelContext,
    lhs: &PrimitiveScalar<T>,
    rhs: PrimitiveView<'_, T>,
    options: CompareOptions,
) -> BooleanArray<()> {
    primitive_vs_scalar(ctx, rhs, lhs, ScalarSide::Left, options.op())
}

/// Compares two arrays position by position: `lhs[i] op rhs[i]`.
///
/// Fails with `LengthMismatch` before allocating if the lengths differ.
#[inline]
pub fn cmp_array_array<T: NativeType>(
    ctx: &KernelContext,
    lhs: PrimitiveView<'_, T>,
    rhs: PrimitiveView<'_, T>,
    options: CompareOptions,
) -> Result<BooleanArray<()>, KernelError> {
    confirm_equal_len("cmp_array_array", lhs.len(), rhs.len())?;
    Ok(primitive_vs_primitive(ctx, lhs, rhs, options.op()))
}

/// Boolean form of [`cmp_array_scalar`], ordering `false < true`.
#[inline]
pub fn cmp_bool_array_scalar(
    ctx: &KernelContext,
    lhs: BooleanAVT<'_, ()>,
    rhs: &PrimitiveScalar<bool>,
    options: CompareOptions,
) -> BooleanArray<()> {
    boolean_vs_scalar(ctx, lhs, rhs, ScalarSide::Right, options.op())
}

/// Boolean form of [`cmp_scalar_array`], ordering `false < true`.
#[inline]
pub fn cmp_bool_scalar_array(
    ctx: &KernelContext,
    lhs: &PrimitiveScalar<bool>,
    rhs: BooleanAVT<'_, ()>,
    options: CompareOptions,
) -> BooleanArray<()> {
    boolean_vs_scalar(ctx, rhs, lhs, ScalarSide::Left, options.op())
}

/// Boolean form of [`cmp_array_array`], ordering `false < true`.
#[inline]
pub fn cmp_bool_array_array(
    ctx: &KernelContext,
    lhs: BooleanAVT<'_, ()>,
    rhs: BooleanAVT<'_, ()>,
    options: CompareOptions,
) -> Result<BooleanArray<()>, KernelError> {
    confirm_equal_len("cmp_bool_array_array", lhs.2, rhs.2)?;
    Ok(boolean_vs_boolean(ctx, lhs, rhs, options.op()))
}

// Datum dispatch

fn describe(datum: &Datum) -> String {
    match datum.element_type() {
        Some(t) => format!("{} {}", t, datum.kind()),
        None => format!("unsupported {}", datum.kind()),
    }
}

fn type_mismatch(label: &str, lhs: &Datum, rhs: &Datum) -> KernelError {
    KernelError::TypeMismatch(format!(
        "{} => Type mismatch: LHS {} RHS {}",
        label,
        describe(lhs),
        describe(rhs)
    ))
}

/// Tries each numeric type in turn, returning from the enclosing function on
/// the first one both operands downcast to.
macro_rules! route_numeric {
    (|$t:ident| $body:block) => {
        route_numeric!(@each $t $body; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64)
    };
    (@each $t:ident $body:block; $($ty:ty),*) => {
        $(
            {
                type $t = $ty;
                if let Some(out) = $body {
                    return Some(out);
                }
            }
        )*
    };
}

/// Runs the kernel for an array datum against a scalar of the same type.
fn route_array_scalar(
    ctx: &KernelContext,
    array: &Datum,
    scalar: &Scalar,
    side: ScalarSide,
    op: ComparisonOperator,
) -> Option<BooleanArray<()>> {
    if let (Some(a), Some(s)) = (array.as_boolean(), scalar.as_boolean()) {
        return Some(boolean_vs_scalar(ctx, a, s, side, op));
    }
    route_numeric!(|T| {
        match (array.as_primitive::<T>(), scalar.as_primitive::<T>()) {
            (Some(a), Some(s)) => Some(primitive_vs_scalar(ctx, a, s, side, op)),
            _ => None,
        }
    });
    None
}

/// Runs the kernel for two array datums of the same type.
fn route_array_pair(
    ctx: &KernelContext,
    lhs: &Datum,
    rhs: &Datum,
    op: ComparisonOperator,
) -> Option<BooleanArray<()>> {
    if let (Some(a), Some(b)) = (lhs.as_boolean(), rhs.as_boolean()) {
        return Some(boolean_vs_boolean(ctx, a, b, op));
    }
    route_numeric!(|T| {
        match (lhs.as_primitive::<T>(), rhs.as_primitive::<T>()) {
            (Some(a), Some(b)) => Some(primitive_vs_primitive(ctx, a, b, op)),
            _ => None,
        }
    });
    None
}

/// Compares two datums under `options`, returning a boolean array datum.
///
/// Supported shapes are array vs scalar, scalar vs array and array vs array.
/// A scalar on either side is broadcast to every position, and a null scalar
/// makes the whole result null.
///
/// # Errors
/// - `TypeMismatch` if the operands have different element types, or a
///   column kind the kernels do not compare
/// - `LengthMismatch` if two arrays differ in length
/// - `InvalidArguments` for two scalars
///
/// No result buffer is allocated when an error is returned.
#[tracing::instrument(name = "compare", level = "debug", skip_all, fields(op = %options.op()))]
pub fn compare(
    ctx: &KernelContext,
    lhs: &Datum,
    rhs: &Datum,
    options: CompareOptions,
) -> Result<Datum, KernelError> {
    let (Some(lhs_type), Some(rhs_type)) = (lhs.element_type(), rhs.element_type()) else {
        return Err(type_mismatch("compare", lhs, rhs));
    };
    confirm_same_type("compare", lhs_type, rhs_type)?;
    let op = options.op();

    let out = match (lhs, rhs) {
        (Datum::Array { len, .. }, Datum::Scalar(scalar)) => {
            trace!(shape = "array-scalar", len = *len);
            route_array_scalar(ctx, lhs, scalar, ScalarSide::Right, op)
        }
        (Datum::Scalar(scalar), Datum::Array { len, .. }) => {
            trace!(shape = "scalar-array", len = *len);
            route_array_scalar(ctx, rhs, scalar, ScalarSide::Left, op)
        }
        (Datum::Array { len: l, .. }, Datum::Array { len: r, .. }) => {
            confirm_equal_len("compare", *l, *r)?;
            trace!(shape = "array-array", len = *l);
            route_array_pair(ctx, lhs, rhs, op)
        }
        (Datum::Scalar(_), Datum::Scalar(_)) => {
            return Err(KernelError::InvalidArguments(
                "compare => scalar vs scalar comparison is not supported".to_owned(),
            ));
        }
    };

    match out {
        Some(result) => Ok(Datum::from(result)),
        None => Err(type_mismatch("compare", lhs, rhs)),
    }
}

macro_rules! impl_compare_shorthand {
    ($name:ident, $variant:ident, $symbol:literal) => {
        #[doc = concat!("`lhs ", $symbol, " rhs` on the default [`KernelContext`].")]
        #[inline]
        pub fn $name(lhs: &Datum, rhs: &Datum) -> Result<Datum, KernelError> {
            compare(
                &KernelContext::default(),
                lhs,
                rhs,
                CompareOptions::new(ComparisonOperator::$variant),
            )
        }
    };
}

impl_compare_shorthand!(eq, Equals, "==");
impl_compare_shorthand!(neq, NotEquals, "!=");
impl_compare_shorthand!(gt, GreaterThan, ">");
impl_compare_shorthand!(gt_eq, GreaterThanOrEqualTo, ">=");
impl_compare_shorthand!(lt, LessThan, "<");
impl_compare_shorthand!(lt_eq, LessThanOrEqualTo, "<=");
