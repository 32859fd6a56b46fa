//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod gradient;
pub mod jacobian;
pub mod poly;
