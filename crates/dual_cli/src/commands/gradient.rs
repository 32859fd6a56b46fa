//! Gradient command implementation
//!
//! Seeds one independent variable per coordinate with `make_vars` and
//! differentiates the Euclidean norm.

use dual_core::{make_vars, sqrt, Dual};
use tracing::{debug, info};

use crate::{CliConfig, CliError, Result};

/// sqrt(x1^2 + ... + xn^2), whose gradient is x / |x| at x != 0.
///
/// Returns `None` when `vars` is empty.
pub fn euclidean_norm(vars: &[Dual]) -> Option<Dual> {
    let (first, rest) = vars.split_first()?;
    let sum_of_squares = rest.iter().fold(first * first, |acc, v| acc + v * v);
    Some(sqrt(sum_of_squares))
}

/// Run the gradient command
pub fn run(at: &[f64], seed: Option<&[f64]>, config: &CliConfig) -> Result<()> {
    info!("Differentiating Euclidean norm at {:?}", at);
    if let Some(seed) = seed {
        debug!("Seed: {:?}", seed);
    }

    let vars = make_vars(at, seed)?;
    let f = euclidean_norm(&vars)
        .ok_or_else(|| CliError::InvalidArgument("--at needs at least one value".to_string()))?;

    println!("f(x)   = sqrt(sum(x_i^2))");
    println!("value  = {:.*}", config.precision, f.value());
    println!("grad f = {:.*}", config.precision, f.derivative());

    Ok(())
}
