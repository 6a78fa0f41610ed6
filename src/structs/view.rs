// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Primitive Views** - *Typed windows over numeric columns*
//!
//! `minarrow` keeps integer and floating-point columns in separate array
//! types. [`PrimitiveView`] borrows a window of either as one
//! `(values, validity)` pair, so the numeric comparison kernels are written
//! once over [`NativeType`].
//!
//! Views never copy: slicing narrows the borrowed value slice and shifts the
//! validity window.

use minarrow::aliases::{FloatAVT, IntegerAVT};
use minarrow::{Bitmask, BitmaskVT};

use crate::errors::KernelError;
use crate::kernels::bitmask::std::popcount_mask;
use crate::structs::types::NativeType;
use crate::traits::dense_iter::{NullableIter, collect_valid};
use crate::utils::confirm_window;

/// Borrowed window of a nullable numeric column.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveView<'a, T> {
    values: &'a [T],
    validity: Option<BitmaskVT<'a>>,
}

impl<'a, T: NativeType> PrimitiveView<'a, T> {
    /// Views every position of `values`. `null_mask`, when present, must
    /// cover at least `values.len()` bits.
    #[inline]
    pub fn new(values: &'a [T], null_mask: Option<&'a Bitmask>) -> Self {
        debug_assert!(null_mask.map_or(true, |m| m.len >= values.len()));
        Self {
            values,
            validity: null_mask.map(|m| (m, 0, values.len())),
        }
    }

    /// Views `len` positions starting at `offset`, failing with `OutOfBounds`
    /// if the window leaves the values or the mask.
    pub fn try_new(
        values: &'a [T],
        null_mask: Option<&'a Bitmask>,
        offset: usize,
        len: usize,
    ) -> Result<Self, KernelError> {
        confirm_window("PrimitiveView::try_new", offset, len, values.len())?;
        if let Some(m) = null_mask {
            confirm_window("PrimitiveView::try_new (null mask)", offset, len, m.len)?;
        }
        Ok(Self {
            values: &values[offset..offset + len],
            validity: null_mask.map(|m| (m, offset, len)),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values of the window, null slots included.
    #[inline]
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// Validity window, `None` when every position is valid.
    #[inline]
    pub fn validity(&self) -> Option<BitmaskVT<'a>> {
        self.validity
    }

    #[inline]
    pub fn value(&self, idx: usize) -> T {
        self.values[idx]
    }

    #[inline]
    pub fn is_valid(&self, idx: usize) -> bool {
        self.validity.map_or(true, |(mask, offset, _)| mask.get(offset + idx))
    }

    #[inline]
    pub fn is_null(&self, idx: usize) -> bool {
        !self.is_valid(idx)
    }

    /// `Some(value)` at valid positions, `None` at nulls.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<T> {
        self.is_valid(idx).then(|| self.values[idx])
    }

    pub fn null_count(&self) -> usize {
        self.validity.map_or(0, |v| self.len() - popcount_mask(v))
    }

    /// Narrows the view to `len` positions starting at `offset`.
    ///
    /// # Panics
    /// If the window reaches past the end of this view.
    pub fn slice(&self, offset: usize, len: usize) -> Self {
        assert!(
            offset + len <= self.len(),
            "PrimitiveView::slice: window {}..{} out of bounds (len {})",
            offset,
            offset + len,
            self.len()
        );
        Self {
            values: &self.values[offset..offset + len],
            validity: self.validity.map(|(mask, base, _)| (mask, base + offset, len)),
        }
    }

    /// Non-panicking [`slice`](Self::slice).
    pub fn try_slice(&self, offset: usize, len: usize) -> Result<Self, KernelError> {
        confirm_window("PrimitiveView::try_slice", offset, len, self.len())?;
        Ok(self.slice(offset, len))
    }

    #[inline]
    pub fn iter(&self) -> NullableIter<'a, T> {
        NullableIter::new(self.values, self.validity)
    }

    pub fn to_options(&self) -> Vec<Option<T>> {
        self.iter().collect()
    }

    /// Copies the valid values out, skipping nulls.
    pub fn valid_values(&self) -> Vec<T> {
        collect_valid(self.values, self.validity)
    }
}

macro_rules! impl_view_from_avt {
    ($alias:ident => $($ty:ty),*) => {
        $(
            impl<'a> From<$alias<'a, $ty>> for PrimitiveView<'a, $ty> {
                /// # Panics
                /// If the window reaches past the end of the array.
                #[inline]
                fn from(window: $alias<'a, $ty>) -> Self {
                    let (arr, offset, len) = window;
                    PrimitiveView::new(&arr.data, arr.null_mask.as_ref()).slice(offset, len)
                }
            }
        )*
    };
}

impl_view_from_avt!(IntegerAVT => i8, i16, i32, i64, u8, u16, u32, u64);
impl_view_from_avt!(FloatAVT => f32, f64);
