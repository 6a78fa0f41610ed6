// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Datum** - *Uniform operand and result type of the kernels*
//!
//! A datum is either a window over a `minarrow` [`Array`] or a single
//! [`Scalar`]. Building one from a column moves the column handle in and
//! slicing only moves the window; buffers are shared, never copied.

use minarrow::{Array, BooleanAVT, BooleanArray, FloatArray, IntegerArray, NumericArray};

use crate::errors::KernelError;
use crate::structs::scalar::{PrimitiveScalar, Scalar};
use crate::structs::types::{ElementType, NativeType};
use crate::structs::view::PrimitiveView;
use crate::utils::confirm_window;

#[derive(Debug, Clone)]
pub enum Datum {
    /// `len` positions of `array` starting at `offset`.
    Array { array: Array, offset: usize, len: usize },
    Scalar(Scalar),
}

/// Length of a comparable column, 0 for column kinds the kernels reject.
fn column_len(array: &Array) -> usize {
    if let Array::BooleanArray(a) = array {
        let arr: &BooleanArray<()> = a;
        return arr.len;
    }
    macro_rules! numeric_len {
        ($($ty:ty),*) => {
            $(
                if let Some(view) = <$ty as NativeType>::view(array) {
                    return view.len();
                }
            )*
        };
    }
    numeric_len!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
    0
}

impl Datum {
    /// Whole-column datum.
    pub fn from_array(array: Array) -> Self {
        let len = column_len(&array);
        Datum::Array { array, offset: 0, len }
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Datum::Array { .. })
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Datum::Scalar(_))
    }

    /// The column inside, without its window.
    ///
    /// # Panics
    /// If this datum is a scalar.
    pub fn array(&self) -> &Array {
        match self {
            Datum::Array { array, .. } => array,
            Datum::Scalar(s) => panic!("Datum::array called on a {} scalar", s.element_type()),
        }
    }

    /// The scalar inside.
    ///
    /// # Panics
    /// If this datum is an array.
    pub fn scalar(&self) -> &Scalar {
        match self {
            Datum::Scalar(s) => s,
            Datum::Array { .. } => panic!("Datum::scalar called on an array"),
        }
    }

    /// Consumes the datum, returning the whole column inside. Kernel results
    /// always span their whole column.
    ///
    /// # Panics
    /// If this datum is a scalar.
    pub fn make_array(self) -> Array {
        match self {
            Datum::Array { array, .. } => array,
            Datum::Scalar(s) => panic!("Datum::make_array called on a {} scalar", s.element_type()),
        }
    }

    /// Element type, `None` for column kinds the kernels do not compare.
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            Datum::Array { array, .. } => ElementType::of(array),
            Datum::Scalar(s) => Some(s.element_type()),
        }
    }

    /// Window length, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Datum::Array { len, .. } => Some(*len),
            Datum::Scalar(_) => None,
        }
    }

    /// Short shape name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Datum::Array { .. } => "array",
            Datum::Scalar(_) => "scalar",
        }
    }

    /// Narrows an array datum to `len` positions starting at `offset` of its
    /// current window. Fails with `OutOfBounds` past the window and with
    /// `InvalidArguments` on a scalar.
    pub fn try_slice(&self, offset: usize, len: usize) -> Result<Datum, KernelError> {
        match self {
            Datum::Array { array, offset: base, len: total } => {
                confirm_window("Datum::try_slice", offset, len, *total)?;
                Ok(Datum::Array {
                    array: array.clone(),
                    offset: base + offset,
                    len,
                })
            }
            Datum::Scalar(_) => Err(KernelError::InvalidArguments(
                "Datum::try_slice => scalars have no positions to slice".to_string(),
            )),
        }
    }

    /// Panicking [`try_slice`](Self::try_slice).
    ///
    /// # Panics
    /// If the window leaves the datum, or the datum is a scalar.
    pub fn slice(&self, offset: usize, len: usize) -> Datum {
        match self.try_slice(offset, len) {
            Ok(d) => d,
            Err(e) => panic!("Datum::slice: {}", e),
        }
    }

    /// Boolean window, if this is a boolean array datum.
    pub fn as_boolean(&self) -> Option<BooleanAVT<'_, ()>> {
        match self {
            Datum::Array { array: Array::BooleanArray(a), offset, len } => {
                let arr: &BooleanArray<()> = a;
                Some((arr, *offset, *len))
            }
            _ => None,
        }
    }

    /// Typed window, if this is a `T` array datum.
    pub fn as_primitive<T: NativeType>(&self) -> Option<PrimitiveView<'_, T>> {
        match self {
            Datum::Array { array, offset, len } => T::view(array).map(|v| v.slice(*offset, *len)),
            Datum::Scalar(_) => None,
        }
    }
}

impl From<Array> for Datum {
    fn from(array: Array) -> Self {
        Datum::from_array(array)
    }
}

impl From<Scalar> for Datum {
    fn from(scalar: Scalar) -> Self {
        Datum::Scalar(scalar)
    }
}

impl From<BooleanArray<()>> for Datum {
    fn from(array: BooleanArray<()>) -> Self {
        Datum::from_array(Array::BooleanArray(array.into()))
    }
}

macro_rules! impl_datum_from_column {
    ($arr:ident => $($ty:ty: $variant:ident),*) => {
        $(
            impl From<$arr<$ty>> for Datum {
                fn from(array: $arr<$ty>) -> Self {
                    Datum::from_array(Array::NumericArray(NumericArray::$variant(array.into())))
                }
            }
        )*
    };
}

impl_datum_from_column!(IntegerArray =>
    i8: Int8, i16: Int16, i32: Int32, i64: Int64,
    u8: UInt8, u16: UInt16, u32: UInt32, u64: UInt64
);
impl_datum_from_column!(FloatArray => f32: Float32, f64: Float64);

impl From<PrimitiveScalar<bool>> for Datum {
    fn from(scalar: PrimitiveScalar<bool>) -> Self {
        Datum::Scalar(Scalar::Boolean(scalar))
    }
}

impl<T: NativeType> From<PrimitiveScalar<T>> for Datum {
    fn from(scalar: PrimitiveScalar<T>) -> Self {
        Datum::Scalar(T::into_scalar(scalar))
    }
}
