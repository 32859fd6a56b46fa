//! Mathematical functions over dual numbers.
//!
//! This module provides:
//! - `elementary`: Chain-rule aware sin, cos, tan, sqrt, log and exp that
//!   also accept plain numbers

pub mod elementary;

pub use elementary::{cos, exp, log, sin, sqrt, tan, Elementary};
