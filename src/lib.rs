// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

// At the time of writing this unlocks `std::simd`, which the developers
// intend on stabilising but haven't yet.
#![cfg_attr(feature = "simd", feature(portable_simd))]

//! # **Compare Kernels** - *Null-aware comparison kernels for columnar arrays*
//!
//! Elementwise `==`, `!=`, `<`, `<=`, `>`, `>=` between a typed array and a
//! scalar, or between two equal-length arrays, producing a bit-packed boolean
//! array with validity propagated from the operands.
//!
//! ```rust
//! use compare_kernels::{compare, CompareOptions, ComparisonOperator, Datum, KernelContext};
//! use compare_kernels::PrimitiveScalar;
//! use minarrow::{Bitmask, IntegerArray};
//!
//! let mut arr = IntegerArray::<i32>::from_slice(&[0, 0, 1, 1]);
//! arr.null_mask = Some(Bitmask::from_bools(&[false, true, true, true]));
//! let lhs = Datum::from(arr);
//! let rhs = Datum::from(PrimitiveScalar::new(1i32));
//! let out = compare(
//!     &KernelContext::default(),
//!     &lhs,
//!     &rhs,
//!     CompareOptions::new(ComparisonOperator::Equals),
//! )
//! .unwrap();
//! let (result, _, len) = out.as_boolean().unwrap();
//! let nulls = result.null_mask.as_ref().unwrap();
//! let got: Vec<Option<bool>> = (0..len).map(|i| nulls.get(i).then(|| result.data.get(i))).collect();
//! assert_eq!(got, vec![None, Some(false), Some(true), Some(true)]);
//! ```
//!
//! ## Features
//! - `parallel`: partition large calls across the rayon pool
//! - `simd`: nightly `std::simd` lane comparisons
//!
//! compile with RUSTFLAGS="-C target-cpu=native" cargo +nightly build --features simd

pub mod operators;

pub mod structs;

pub mod kernels {
    pub mod bitmask;
    pub mod comparison;
    pub mod validity;
}

pub mod traits {
    pub mod dense_iter;
}

pub mod config;
pub mod context;
pub mod errors;
pub mod utils;

pub use crate::context::KernelContext;
pub use crate::errors::KernelError;
pub use crate::kernels::comparison::{
    cmp_array_array, cmp_array_scalar, cmp_bool_array_array, cmp_bool_array_scalar,
    cmp_bool_scalar_array, cmp_scalar_array, compare, eq, gt, gt_eq, lt, lt_eq, neq,
};
pub use crate::operators::{CompareOptions, ComparisonOperator};
pub use crate::structs::datum::Datum;
pub use crate::structs::scalar::{PrimitiveScalar, Scalar};
pub use crate::structs::types::{ElementType, NativeType};
pub use crate::structs::view::PrimitiveView;
