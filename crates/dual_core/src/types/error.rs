//! Error types for structured error handling.
//!
//! This module provides:
//! - `DualError`: Errors from dual-number arithmetic, construction, variable
//!   seeding and Jacobian assembly
//! - `DerivativeShape`: Compact description of a derivative's shape used in
//!   error messages

use std::fmt;
use thiserror::Error;

/// Shape of a derivative, as reported in error messages.
///
/// # Examples
/// ```
/// use dual_core::types::DerivativeShape;
///
/// assert_eq!(DerivativeShape::Scalar.to_string(), "scalar");
/// assert_eq!(DerivativeShape::Vector(3).to_string(), "vector[3]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivativeShape {
    /// Single-variable derivative
    Scalar,
    /// Multivariate derivative with the given number of partials
    Vector(usize),
}

impl fmt::Display for DerivativeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivativeShape::Scalar => write!(f, "scalar"),
            DerivativeShape::Vector(len) => write!(f, "vector[{}]", len),
        }
    }
}

/// Dual-number errors.
///
/// Every variant is a usage error: the caller combined or constructed values
/// whose derivative shapes cannot work together. Nothing here is transient.
///
/// # Variants
/// - `NotConformable`: Binary operation on derivatives of different shape
/// - `Construction`: Rejected derivative passed to a validating constructor
/// - `SeedLength`: Seed vector length differs from the number of values
/// - `EmptyJacobian`: Jacobian requested from an empty function list
/// - `JacobianRow`: A Jacobian row does not match the shape of the first row
///
/// # Examples
/// ```
/// use dual_core::types::{DerivativeShape, DualError};
///
/// let err = DualError::NotConformable {
///     left: DerivativeShape::Scalar,
///     right: DerivativeShape::Vector(2),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Derivatives are not conformable: scalar vs vector[2]"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DualError {
    /// Operands carry derivatives of incompatible shape.
    #[error("Derivatives are not conformable: {left} vs {right}")]
    NotConformable {
        /// Shape of the left operand's derivative
        left: DerivativeShape,
        /// Shape of the right operand's derivative
        right: DerivativeShape,
    },

    /// Derivative rejected at construction.
    #[error("Invalid derivative: {0}")]
    Construction(String),

    /// Seed vector length differs from the number of values.
    #[error("Values must be the same length as seeds: got {values} values and {seeds} seeds")]
    SeedLength {
        /// Number of values supplied
        values: usize,
        /// Number of seeds supplied
        seeds: usize,
    },

    /// No component functions to stack.
    #[error("Jacobian requires at least one function")]
    EmptyJacobian,

    /// Derivative of a component function differs in shape from row 0.
    #[error("Jacobian row {row} has shape {found}, expected {expected}")]
    JacobianRow {
        /// Index of the offending function
        row: usize,
        /// Shape of the first row
        expected: DerivativeShape,
        /// Shape of the offending row
        found: DerivativeShape,
    },
}

/// Result alias for dual-number operations.
pub type Result<T> = std::result::Result<T, DualError>;
