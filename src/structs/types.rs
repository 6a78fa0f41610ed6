// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Element Types** - *Logical type tags and their native Rust types*

use core::fmt;

use minarrow::{Array, Bitmask, FloatArray, IntegerArray, NumericArray};

use crate::structs::scalar::{PrimitiveScalar, Scalar};
use crate::structs::view::PrimitiveView;

/// Logical element type of an array or scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl ElementType {
    /// True for the integer and floating-point tags.
    pub fn is_numeric(self) -> bool {
        !matches!(self, ElementType::Boolean)
    }

    pub fn is_floating(self) -> bool {
        matches!(self, ElementType::Float32 | ElementType::Float64)
    }

    /// Tag of a `minarrow` column, `None` for columns the kernels do not
    /// compare (text, categorical, temporal).
    pub fn of(array: &Array) -> Option<ElementType> {
        let tag = match array {
            Array::BooleanArray(_) => ElementType::Boolean,
            Array::NumericArray(NumericArray::Int8(_)) => ElementType::Int8,
            Array::NumericArray(NumericArray::Int16(_)) => ElementType::Int16,
            Array::NumericArray(NumericArray::Int32(_)) => ElementType::Int32,
            Array::NumericArray(NumericArray::Int64(_)) => ElementType::Int64,
            Array::NumericArray(NumericArray::UInt8(_)) => ElementType::UInt8,
            Array::NumericArray(NumericArray::UInt16(_)) => ElementType::UInt16,
            Array::NumericArray(NumericArray::UInt32(_)) => ElementType::UInt32,
            Array::NumericArray(NumericArray::UInt64(_)) => ElementType::UInt64,
            Array::NumericArray(NumericArray::Float32(_)) => ElementType::Float32,
            Array::NumericArray(NumericArray::Float64(_)) => ElementType::Float64,
            _ => return None,
        };
        Some(tag)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Boolean => "Boolean",
            ElementType::Int8 => "Int8",
            ElementType::Int16 => "Int16",
            ElementType::Int32 => "Int32",
            ElementType::Int64 => "Int64",
            ElementType::UInt8 => "UInt8",
            ElementType::UInt16 => "UInt16",
            ElementType::UInt32 => "UInt32",
            ElementType::UInt64 => "UInt64",
            ElementType::Float32 => "Float32",
            ElementType::Float64 => "Float64",
        };
        f.write_str(name)
    }
}

/// Native Rust type backing a primitive [`ElementType`].
///
/// Ties a value type to its tag, to its `minarrow` column variant and to its
/// [`Scalar`] variant, so typed code can move in and out of the tagged
/// representation without a per-type match at every call site.
pub trait NativeType:
    Copy + PartialOrd + Default + Send + Sync + fmt::Debug + 'static
{
    /// Tag of this type.
    const ELEMENT_TYPE: ElementType;

    /// Builds this type's column variant from values and an optional null mask.
    fn into_array(values: &[Self], null_mask: Option<Bitmask>) -> Array;

    /// Wraps a typed scalar into its [`Scalar`] variant.
    fn into_scalar(scalar: PrimitiveScalar<Self>) -> Scalar;

    /// Views the whole column if `array` is this type's variant.
    fn view(array: &Array) -> Option<PrimitiveView<'_, Self>>;

    /// Borrows the typed scalar if `scalar` is this type's variant.
    fn downcast_scalar(scalar: &Scalar) -> Option<&PrimitiveScalar<Self>>;
}

macro_rules! impl_native_type {
    ($ty:ty, $variant:ident, $arr:ident) => {
        impl NativeType for $ty {
            const ELEMENT_TYPE: ElementType = ElementType::$variant;

            #[inline]
            fn into_array(values: &[Self], null_mask: Option<Bitmask>) -> Array {
                let mut arr = $arr::<$ty>::from_slice(values);
                arr.null_mask = null_mask;
                Array::NumericArray(NumericArray::$variant(arr.into()))
            }

            #[inline]
            fn into_scalar(scalar: PrimitiveScalar<Self>) -> Scalar {
                Scalar::$variant(scalar)
            }

            #[inline]
            fn view(array: &Array) -> Option<PrimitiveView<'_, Self>> {
                match array {
                    Array::NumericArray(NumericArray::$variant(a)) => {
                        Some(PrimitiveView::new(&a.data, a.null_mask.as_ref()))
                    }
                    _ => None,
                }
            }

            #[inline]
            fn downcast_scalar(scalar: &Scalar) -> Option<&PrimitiveScalar<Self>> {
                match scalar {
                    Scalar::$variant(s) => Some(s),
                    _ => None,
                }
            }
        }
    };
}

impl_native_type!(i8, Int8, IntegerArray);
impl_native_type!(i16, Int16, IntegerArray);
impl_native_type!(i32, Int32, IntegerArray);
impl_native_type!(i64, Int64, IntegerArray);
impl_native_type!(u8, UInt8, IntegerArray);
impl_native_type!(u16, UInt16, IntegerArray);
impl_native_type!(u32, UInt32, IntegerArray);
impl_native_type!(u64, UInt64, IntegerArray);
impl_native_type!(f32, Float32, FloatArray);
impl_native_type!(f64, Float64, FloatArray);
