//! Poly command implementation
//!
//! Differentiates the single-variable polynomial used throughout the
//! `dual_core` documentation.

use dual_core::{Dual, Pow};
use tracing::info;

use crate::{CliConfig, Result};

/// f(x) = 3x^5 + 2x^2 - 2x^7 / x^6, so f'(x) = 15x^4 + 4x - 2.
pub fn polynomial(x: &Dual) -> Dual {
    3.0 * x.clone().pow(5.0) + 2.0 * x.clone().pow(2.0)
        - 2.0 * x.clone().pow(7.0) / x.clone().pow(6.0)
}

/// Run the poly command
pub fn run(at: f64, config: &CliConfig) -> Result<()> {
    info!("Evaluating polynomial at x = {}", at);

    let f = polynomial(&Dual::variable(at));
    println!("f(x)  = 3x^5 + 2x^2 - 2x^7/x^6");
    println!("x     = {}", at);
    println!("f, f' = {:.*}", config.precision, f);

    Ok(())
}
