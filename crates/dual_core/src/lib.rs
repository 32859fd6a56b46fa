//! # dual_core: Forward-Mode Automatic Differentiation over Dual Numbers
//!
//! ## Layer Role
//!
//! dual_core is the kernel of the workspace, providing:
//! - The `Dual` value+derivative type and its arithmetic (`types::dual`)
//! - Scalar/vector derivative storage and conformability (`types::derivative`)
//! - Constant-or-Dual operands and their promotion (`types::operand`)
//! - Error types: `DualError`, `DerivativeShape` (`types::error`)
//! - Variable seeding and Jacobian assembly (`multivar`)
//! - Chain-rule aware sin, cos, tan, sqrt, log, exp (`math::elementary`)
//!
//! ## Minimal Dependencies
//!
//! - ndarray: Vector derivatives and Jacobian matrices
//! - num-traits: `Pow` operator trait
//! - approx: Tolerance-based equality for `Dual` and `Derivative`
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use dual_core::{exp, make_vars, sin, Dual, MultiVar};
//! use ndarray::array;
//!
//! // Single variable: d/dx [x sin(x)] at x = 0 is 0
//! let x = Dual::variable(0.0);
//! let y = &x * sin(&x);
//! assert_eq!(y.derivative().as_scalar(), Some(0.0));
//!
//! // Several variables: gradient of x*y at (2, 3)
//! let vars = make_vars(&[2.0, 3.0], None).unwrap();
//! let (x, y) = (&vars[0], &vars[1]);
//! assert_eq!(x * y, Dual::new(6.0, array![3.0, 2.0]));
//!
//! // Jacobian of (x*y, exp(x))
//! let f = MultiVar::new(vec![x * y, exp(x)]);
//! assert_eq!(f.jacobian().unwrap().dim(), (2, 2));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Dual`, `Derivative` and `DualError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod multivar;
pub mod types;

pub use math::elementary::{cos, exp, log, sin, sqrt, tan, Elementary};
pub use multivar::{make_vars, MultiVar};
pub use num_traits::Pow;
pub use types::{conformable, Derivative, DerivativeShape, Dual, DualError, Operand, Result};
