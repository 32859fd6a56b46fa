//! Jacobian command implementation
//!
//! Assembles the Jacobian of a fixed map R^2 -> R^3 with `MultiVar`.

use dual_core::{exp, make_vars, sin, sqrt, MultiVar};
use ndarray::Array2;
use tracing::info;

use crate::{CliConfig, CliError, Result};

/// (x, y) -> (x*y, sin x + exp y, sqrt(x)/y)
pub fn demo_map(x: f64, y: f64) -> Result<MultiVar> {
    let vars = make_vars(&[x, y], None)?;
    let (x, y) = (&vars[0], &vars[1]);
    Ok(MultiVar::new(vec![x * y, sin(x) + exp(y), sqrt(x) / y]))
}

fn format_matrix(matrix: &Array2<f64>, precision: usize) -> String {
    let width = precision + 6;
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|v| format!("{v:>width$.precision$}"))
                .collect();
            format!("[{} ]", cells.join(""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the jacobian command
pub fn run(at: &[f64], config: &CliConfig) -> Result<()> {
    let &[x, y] = at else {
        return Err(CliError::InvalidArgument(format!(
            "--at takes exactly two values (x,y), got {}",
            at.len()
        )));
    };
    info!("Assembling Jacobian at (x, y) = ({}, {})", x, y);

    let f = demo_map(x, y)?;
    let jacobian = f.jacobian()?;

    println!("F(x, y) = (x*y, sin x + exp y, sqrt(x)/y)");
    println!("F       = {:.*}", config.precision, f.values());
    println!("J       =");
    println!("{}", format_matrix(&jacobian, config.precision));

    Ok(())
}
