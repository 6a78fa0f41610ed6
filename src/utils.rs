// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Argument validation shared by the kernels*
//!
//! Shape checks run before a kernel allocates its output, so a failed call
//! does no partial work.

use crate::errors::{log_length_mismatch, KernelError};
use crate::structs::types::ElementType;

/// Checks two operand lengths agree.
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        return Err(KernelError::LengthMismatch(log_length_mismatch(label, a, b)));
    }
    Ok(())
}

/// Checks two operands share one element type. No implicit coercion is performed.
#[inline(always)]
pub fn confirm_same_type(label: &str, lhs: ElementType, rhs: ElementType) -> Result<(), KernelError> {
    if lhs != rhs {
        return Err(KernelError::TypeMismatch(format!(
            "{} => Type mismatch: LHS {} RHS {}",
            label, lhs, rhs
        )));
    }
    Ok(())
}

/// Checks the window `offset..offset + len` lies inside `total` positions.
#[inline(always)]
pub fn confirm_window(label: &str, offset: usize, len: usize, total: usize) -> Result<(), KernelError> {
    match offset.checked_add(len) {
        Some(end) if end <= total => Ok(()),
        _ => Err(KernelError::OutOfBounds(format!(
            "{} => window {}+{} exceeds length {}",
            label, offset, len, total
        ))),
    }
}
