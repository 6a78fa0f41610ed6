// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Contains the kernel operators for matching and routing purposes

use core::fmt;

/// Comparison operators for binary predicates.
///
/// Closed set: every value is valid, so kernels never need to check for an
/// out-of-range operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Equality comparison (`lhs == rhs`)
    Equals,
    /// Inequality comparison (`lhs != rhs`)
    NotEquals,
    /// Less-than comparison (`lhs < rhs`)
    LessThan,
    /// Less-than-or-equal comparison (`lhs <= rhs`)
    LessThanOrEqualTo,
    /// Greater-than comparison (`lhs > rhs`)
    GreaterThan,
    /// Greater-than-or-equal comparison (`lhs >= rhs`)
    GreaterThanOrEqualTo,
}

impl ComparisonOperator {
    /// Every operator, in declaration order.
    pub const ALL: [ComparisonOperator; 6] = [
        ComparisonOperator::Equals,
        ComparisonOperator::NotEquals,
        ComparisonOperator::LessThan,
        ComparisonOperator::LessThanOrEqualTo,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEqualTo,
    ];

    /// Evaluates the operator on a single pair of values.
    ///
    /// Kernels do not call this per element; they resolve the operator once
    /// into a `Comparator` type and monomorphise the loop over it.
    #[inline]
    pub fn apply<T: PartialOrd>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            ComparisonOperator::Equals => lhs == rhs,
            ComparisonOperator::NotEquals => lhs != rhs,
            ComparisonOperator::LessThan => lhs < rhs,
            ComparisonOperator::LessThanOrEqualTo => lhs <= rhs,
            ComparisonOperator::GreaterThan => lhs > rhs,
            ComparisonOperator::GreaterThanOrEqualTo => lhs >= rhs,
        }
    }

    /// Operator that gives the same answer with the operands swapped,
    /// i.e. `a op b == b op.flip() a`.
    pub fn flip(self) -> Self {
        match self {
            ComparisonOperator::Equals => ComparisonOperator::Equals,
            ComparisonOperator::NotEquals => ComparisonOperator::NotEquals,
            ComparisonOperator::LessThan => ComparisonOperator::GreaterThan,
            ComparisonOperator::LessThanOrEqualTo => ComparisonOperator::GreaterThanOrEqualTo,
            ComparisonOperator::GreaterThan => ComparisonOperator::LessThan,
            ComparisonOperator::GreaterThanOrEqualTo => ComparisonOperator::LessThanOrEqualTo,
        }
    }

    /// Logical complement over totally ordered values, i.e. `!(a op b) == a op.negate() b`.
    ///
    /// Does not hold for NaN operands.
    pub fn negate(self) -> Self {
        match self {
            ComparisonOperator::Equals => ComparisonOperator::NotEquals,
            ComparisonOperator::NotEquals => ComparisonOperator::Equals,
            ComparisonOperator::LessThan => ComparisonOperator::GreaterThanOrEqualTo,
            ComparisonOperator::LessThanOrEqualTo => ComparisonOperator::GreaterThan,
            ComparisonOperator::GreaterThan => ComparisonOperator::LessThanOrEqualTo,
            ComparisonOperator::GreaterThanOrEqualTo => ComparisonOperator::LessThan,
        }
    }

    /// Infix symbol, e.g. `>=`.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Equals => "==",
            ComparisonOperator::NotEquals => "!=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEqualTo => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEqualTo => ">=",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Options for the comparison kernel: the operator to apply.
///
/// Immutable once constructed; kernels thread it through by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompareOptions {
    op: ComparisonOperator,
}

impl CompareOptions {
    #[inline]
    pub const fn new(op: ComparisonOperator) -> Self {
        Self { op }
    }

    #[inline]
    pub const fn op(&self) -> ComparisonOperator {
        self.op
    }
}

impl From<ComparisonOperator> for CompareOptions {
    fn from(op: ComparisonOperator) -> Self {
        Self::new(op)
    }
}
