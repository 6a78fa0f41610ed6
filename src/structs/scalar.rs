// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalars** - *Single typed values with a validity flag*

use crate::structs::types::{ElementType, NativeType};

/// A single value plus validity. An invalid scalar still carries a value,
/// which kernels never read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveScalar<T> {
    pub value: T,
    pub is_valid: bool,
}

impl<T: Copy> PrimitiveScalar<T> {
    /// Valid scalar holding `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            is_valid: true,
        }
    }

    /// Scalar with an explicit validity flag.
    #[inline]
    pub fn with_validity(value: T, is_valid: bool) -> Self {
        Self { value, is_valid }
    }

    /// `Some(value)` when valid.
    #[inline]
    pub fn get(&self) -> Option<T> {
        self.is_valid.then_some(self.value)
    }
}

impl<T: Copy + Default> PrimitiveScalar<T> {
    /// Invalid scalar holding `T::default()`.
    #[inline]
    pub fn null() -> Self {
        Self {
            value: T::default(),
            is_valid: false,
        }
    }
}

/// Closed union of every scalar type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Boolean(PrimitiveScalar<bool>),
    Int8(PrimitiveScalar<i8>),
    Int16(PrimitiveScalar<i16>),
    Int32(PrimitiveScalar<i32>),
    Int64(PrimitiveScalar<i64>),
    UInt8(PrimitiveScalar<u8>),
    UInt16(PrimitiveScalar<u16>),
    UInt32(PrimitiveScalar<u32>),
    UInt64(PrimitiveScalar<u64>),
    Float32(PrimitiveScalar<f32>),
    Float64(PrimitiveScalar<f64>),
}

impl Scalar {
    pub fn element_type(&self) -> ElementType {
        match self {
            Scalar::Boolean(_) => ElementType::Boolean,
            Scalar::Int8(_) => ElementType::Int8,
            Scalar::Int16(_) => ElementType::Int16,
            Scalar::Int32(_) => ElementType::Int32,
            Scalar::Int64(_) => ElementType::Int64,
            Scalar::UInt8(_) => ElementType::UInt8,
            Scalar::UInt16(_) => ElementType::UInt16,
            Scalar::UInt32(_) => ElementType::UInt32,
            Scalar::UInt64(_) => ElementType::UInt64,
            Scalar::Float32(_) => ElementType::Float32,
            Scalar::Float64(_) => ElementType::Float64,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Scalar::Boolean(s) => s.is_valid,
            Scalar::Int8(s) => s.is_valid,
            Scalar::Int16(s) => s.is_valid,
            Scalar::Int32(s) => s.is_valid,
            Scalar::Int64(s) => s.is_valid,
            Scalar::UInt8(s) => s.is_valid,
            Scalar::UInt16(s) => s.is_valid,
            Scalar::UInt32(s) => s.is_valid,
            Scalar::UInt64(s) => s.is_valid,
            Scalar::Float32(s) => s.is_valid,
            Scalar::Float64(s) => s.is_valid,
        }
    }

    pub fn as_boolean(&self) -> Option<&PrimitiveScalar<bool>> {
        match self {
            Scalar::Boolean(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_primitive<T: NativeType>(&self) -> Option<&PrimitiveScalar<T>> {
        T::downcast_scalar(self)
    }
}

impl From<PrimitiveScalar<bool>> for Scalar {
    fn from(scalar: PrimitiveScalar<bool>) -> Self {
        Scalar::Boolean(scalar)
    }
}

impl<T: NativeType> From<PrimitiveScalar<T>> for Scalar {
    fn from(scalar: PrimitiveScalar<T>) -> Self {
        T::into_scalar(scalar)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(PrimitiveScalar::new(value))
    }
}

macro_rules! impl_scalar_from_native {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    <$ty as NativeType>::into_scalar(PrimitiveScalar::new(value))
                }
            }
        )*
    };
}

impl_scalar_from_native!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
