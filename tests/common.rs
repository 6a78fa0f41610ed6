//! Test helpers with base structures
#![allow(unused)]

use std::fmt::Debug;
use std::str::FromStr;

use compare_kernels::{ComparisonOperator, Datum, NativeType, PrimitiveScalar};
use minarrow::{Array, Bitmask, BooleanArray};
use num_traits::NumCast;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed shared by every randomised suite, so failures reproduce.
pub const SEED: u64 = 0x5416447;

/// Null probabilities swept by the randomised suites.
pub const NULL_PROBABILITIES: [f64; 6] = [0.0, 0.01, 0.1, 0.25, 0.5, 1.0];

/// Dense and nullable arrays for a few element types.
pub struct TestColumns {
    pub i32_dense: Array,
    pub i32_nulls: Array,
    pub i64_dense: Array,
    pub i64_nulls: Array,
    pub u32_dense: Array,
    pub u32_nulls: Array,
    pub u64_dense: Array,
    pub u64_nulls: Array,
    pub f32_dense: Array,
    pub f32_nulls: Array,
    pub f64_dense: Array,
    pub f64_nulls: Array,
    pub bool_dense: Array,
    pub bool_nulls: Array,
}

impl TestColumns {
    /// build once – reuse in every `#[test]`
    pub fn new() -> Self {
        Self {
            i32_dense: array_from_options(&[Some(1), Some(2), Some(3), Some(4), Some(5)]),
            i32_nulls: array_from_options(&[Some(1), None, Some(3), Some(4), None]),
            i64_dense: array_from_options(&[Some(10_i64), Some(20), Some(30), Some(40), Some(50)]),
            i64_nulls: array_from_options(&[Some(10_i64), None, Some(30), None, Some(50)]),
            u32_dense: array_from_options(&[Some(1_u32), Some(2), Some(3), Some(4), Some(5)]),
            u32_nulls: array_from_options(&[None, Some(2_u32), Some(3), None, Some(5)]),
            u64_dense: array_from_options(&[Some(100_u64), Some(200), Some(300), Some(400), Some(500)]),
            u64_nulls: array_from_options(&[Some(100_u64), None, None, Some(400), Some(500)]),
            f32_dense: array_from_options(&[Some(1.0_f32), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]),
            f32_nulls: array_from_options(&[Some(1.0_f32), None, Some(3.0), None, Some(5.0)]),
            f64_dense: array_from_options(&[Some(1.0_f64), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]),
            f64_nulls: array_from_options(&[None, Some(2.0_f64), Some(3.0), Some(4.0), None]),
            bool_dense: Array::BooleanArray(BooleanArray::from_slice(&[true, false, true, true, false]).into()),
            bool_nulls: Array::BooleanArray(
                bool_array_from_options(&[Some(true), Some(false), Some(true), None, Some(true)]).into(),
            ),
        }
    }
}

/// Null mask for `values`, `None` when nothing is null.
fn mask_of<T>(values: &[Option<T>]) -> Option<Bitmask> {
    values
        .iter()
        .any(Option::is_none)
        .then(|| Bitmask::from_bools(&values.iter().map(Option::is_some).collect::<Vec<_>>()))
}

/// Column of `T` with a null mask only when some position is `None`.
pub fn array_from_options<T: NativeType>(values: &[Option<T>]) -> Array {
    let data: Vec<T> = values.iter().map(|v| v.unwrap_or_default()).collect();
    T::into_array(&data, mask_of(values))
}

/// Boolean column with a null mask only when some position is `None`.
pub fn bool_array_from_options(values: &[Option<bool>]) -> BooleanArray<()> {
    let data: Vec<bool> = values.iter().map(|v| v.unwrap_or(false)).collect();
    let mut arr = BooleanArray::from_slice(&data);
    arr.null_mask = mask_of(values);
    arr
}

/// Splits a literal such as `"[null, 0, 1]"` into its items, `None` for `null`.
fn literal_items(literal: &str) -> Vec<Option<&str>> {
    let body = literal
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or_else(|| panic!("array literal must be bracketed: {literal:?}"));
    if body.trim().is_empty() {
        return Vec::new();
    }
    body.split(',')
        .map(str::trim)
        .map(|item| (item != "null").then_some(item))
        .collect()
}

/// Builds a primitive column from a literal such as `"[null, 0, 1, 1]"`.
pub fn array_from_json<T>(literal: &str) -> Array
where
    T: NativeType + FromStr,
    T::Err: Debug,
{
    let values: Vec<Option<T>> = literal_items(literal)
        .into_iter()
        .map(|item| item.map(|s| s.parse::<T>().unwrap_or_else(|e| panic!("bad item {s:?}: {e:?}"))))
        .collect();
    array_from_options(&values)
}

/// Parses a boolean literal such as `"[null, 0, 1, 1]"`.
/// Accepts `0`/`1` as well as `false`/`true`.
pub fn bool_options_from_json(literal: &str) -> Vec<Option<bool>> {
    literal_items(literal)
        .into_iter()
        .map(|item| {
            item.map(|s| match s {
                "1" | "true" => true,
                "0" | "false" => false,
                other => panic!("bad boolean item {other:?}"),
            })
        })
        .collect()
}

/// Builds a boolean column from a literal such as `"[null, 0, 1, 1]"`.
pub fn bool_array_from_json(literal: &str) -> BooleanArray<()> {
    bool_array_from_options(&bool_options_from_json(literal))
}

/// Seeded generator used by every randomised suite.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// `len` values drawn uniformly from `min..=max`, each position null with
/// probability `null_probability`.
pub fn random_options<T>(rng: &mut StdRng, len: usize, min: i64, max: i64, null_probability: f64) -> Vec<Option<T>>
where
    T: NativeType + NumCast,
{
    (0..len)
        .map(|_| {
            let valid = !rng.random_bool(null_probability);
            let raw = rng.random_range(min..=max);
            valid.then(|| <T as NumCast>::from(raw).unwrap_or_else(|| panic!("{raw} does not fit the element type")))
        })
        .collect()
}

/// Random booleans, each position null with probability `null_probability`.
pub fn random_bool_options(rng: &mut StdRng, len: usize, null_probability: f64) -> Vec<Option<bool>> {
    (0..len)
        .map(|_| {
            let valid = !rng.random_bool(null_probability);
            let value = rng.random_bool(0.5);
            valid.then_some(value)
        })
        .collect()
}

/// Lengths `2^i + adj` for `i` in `3..13` and `adj` in `-2..=2`.
pub fn power_of_two_lengths() -> Vec<usize> {
    let mut out = Vec::new();
    for i in 3..13 {
        for adj in -2i64..=2 {
            out.push(((1i64 << i) + adj) as usize);
        }
    }
    out
}

/// Deliberately naive reference: one element at a time, null if either side is null.
pub fn slow_compare<T: PartialOrd + Copy>(
    op: ComparisonOperator,
    lhs: &[Option<T>],
    rhs: &[Option<T>],
) -> Vec<Option<bool>> {
    assert_eq!(lhs.len(), rhs.len(), "slow_compare: length mismatch");
    let mut out = Vec::with_capacity(lhs.len());
    for i in 0..lhs.len() {
        let cell = match (lhs[i], rhs[i]) {
            (Some(a), Some(b)) => Some(match op {
                ComparisonOperator::Equals => a == b,
                ComparisonOperator::NotEquals => a != b,
                ComparisonOperator::LessThan => a < b,
                ComparisonOperator::LessThanOrEqualTo => a <= b,
                ComparisonOperator::GreaterThan => a > b,
                ComparisonOperator::GreaterThanOrEqualTo => a >= b,
            }),
            _ => None,
        };
        out.push(cell);
    }
    out
}

/// Reference for array vs scalar, with the scalar on either side.
pub fn slow_compare_scalar<T: PartialOrd + Copy>(
    op: ComparisonOperator,
    array: &[Option<T>],
    scalar: Option<T>,
    scalar_on_left: bool,
) -> Vec<Option<bool>> {
    let broadcast = vec![scalar; array.len()];
    if scalar_on_left {
        slow_compare(op, &broadcast, array)
    } else {
        slow_compare(op, array, &broadcast)
    }
}

/// Unwraps the boolean column inside a kernel result.
pub fn as_bool(out: &Datum) -> &BooleanArray<()> {
    out.as_boolean()
        .map(|(arr, _, _)| arr)
        .unwrap_or_else(|| panic!("expected a boolean result, got {:?}", out.element_type()))
}

/// Reads a boolean column back as `Option<bool>`.
pub fn bool_options(arr: &BooleanArray<()>) -> Vec<Option<bool>> {
    (0..arr.len)
        .map(|i| arr.null_mask.as_ref().map_or(true, |m| m.get(i)).then(|| arr.data.get(i)))
        .collect()
}

/// Raw value bits of a boolean column, null slots included.
pub fn value_bits(arr: &BooleanArray<()>) -> Vec<bool> {
    (0..arr.len).map(|i| arr.data.get(i)).collect()
}

/// Number of null positions in a boolean column.
pub fn null_count(arr: &BooleanArray<()>) -> usize {
    bool_options(arr).iter().filter(|v| v.is_none()).count()
}

/// Asserts `got` equals `expected` in length, validity and valid values, and
/// that every null position holds a `false` value bit.
pub fn assert_bool_array_eq(got: &BooleanArray<()>, expected: &[Option<bool>]) {
    assert_eq!(got.len, expected.len(), "length mismatch");
    assert_eq!(bool_options(got), expected);
    let bits = value_bits(got);
    for (i, cell) in bool_options(got).iter().enumerate() {
        if cell.is_none() {
            assert!(!bits[i], "position {i}: null slot holds a true value bit");
        }
    }
    if expected.iter().all(Option::is_some) {
        assert_eq!(null_count(got), 0);
    }
}

/// Wraps a scalar value as a datum, `None` giving a null scalar.
pub fn scalar_datum<T: NativeType>(value: Option<T>) -> Datum {
    match value {
        Some(v) => PrimitiveScalar::new(v).into(),
        None => PrimitiveScalar::<T>::null().into(),
    }
}
