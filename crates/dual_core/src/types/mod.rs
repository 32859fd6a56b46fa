//! Core dual-number types.
//!
//! This module provides:
//! - `derivative`: Scalar/vector derivative storage and the conformability rule
//! - `dual`: The `Dual` value+derivative type and its arithmetic
//! - `operand`: Constant-or-Dual operands and their promotion to `Dual`
//! - `error`: Structured error types for arithmetic, construction, seeding and Jacobian assembly
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Derivative`], [`conformable`] from `derivative`
//! - [`Dual`] from `dual`
//! - [`Operand`] from `operand`
//! - [`DualError`], [`DerivativeShape`], [`Result`] from `error`

pub mod derivative;
pub mod dual;
pub mod error;
pub mod operand;

// Re-export commonly used types at module level
pub use derivative::{conformable, Derivative};
pub use dual::Dual;
pub use error::{DerivativeShape, DualError, Result};
pub use operand::Operand;
