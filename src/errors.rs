// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for comparison kernels with structured error reporting.
//!
//! ## Error Categories
//! - **Type Errors**: Operands of different element types
//! - **Dimension Errors**: Array-vs-array length mismatches
//! - **Argument Errors**: Unsupported operand shapes, such as scalar-vs-scalar
//! - **Boundary Errors**: Windows reaching past the end of a buffer
//!
//! Null propagation is never an error. It is regular, fully-specified output.

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant carries a contextual message string. Errors are raised before
/// any result buffer is allocated, so a failed call performs no partial work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Element type mismatch between operands.
    TypeMismatch(String),

    /// Array length mismatch between operands.
    LengthMismatch(String),

    /// Invalid arguments or operand shapes provided to a kernel function.
    InvalidArguments(String),

    /// Array window or bitmask access out of bounds.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) arrays.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}
