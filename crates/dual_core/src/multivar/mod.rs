//! Multivariate forward-mode differentiation.
//!
//! This module provides:
//! - `vars`: Seeding of N independent variables along the standard basis
//! - `jacobian`: Stacking of several outputs' gradients into a Jacobian
//!
//! ## Usage
//!
//! ```rust
//! use dual_core::multivar::{make_vars, MultiVar};
//!
//! let vars = make_vars(&[1.0, 2.0], None).unwrap();
//! let (x, y) = (&vars[0], &vars[1]);
//!
//! let f = MultiVar::new(vec![x * y, x - y]);
//! assert_eq!(f.jacobian().unwrap().dim(), (2, 2));
//! ```

pub mod jacobian;
pub mod vars;

pub use jacobian::MultiVar;
pub use vars::make_vars;
