//! Check command implementation
//!
//! Runs fixed arithmetic scenarios against known results and reports
//! PASS/FAIL for each.

use std::f64::consts::PI;

use approx::relative_eq;
use dual_core::{cos, make_vars, sin, sqrt, Dual};
use ndarray::array;
use tracing::{debug, info, warn};

use crate::{CliConfig, CliError, Result};

const TOLERANCE: f64 = 1e-10;

/// A named self-check.
pub struct Scenario {
    /// Label printed next to the result
    pub name: &'static str,
    /// Returns whether the computed Dual matched the expected one
    pub run: fn() -> dual_core::Result<bool>,
}

fn close(actual: &Dual, expected: &Dual) -> bool {
    relative_eq!(*actual, *expected, epsilon = TOLERANCE)
}

/// Built-in scenarios, in reporting order.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Dual(2,3) + Dual(-1.5,4) == Dual(0.5,7)",
            run: || {
                let sum = Dual::new(2.0, 3.0).try_add(Dual::new(-1.5, 4.0))?;
                Ok(sum == Dual::new(0.5, 7.0))
            },
        },
        Scenario {
            name: "Dual(2,4) / Dual(2,1) == Dual(1,1.5)",
            run: || {
                let quotient = Dual::new(2.0, 4.0).try_div(Dual::new(2.0, 1.0))?;
                Ok(quotient == Dual::new(1.0, 1.5))
            },
        },
        Scenario {
            name: "Dual(0,2) ^ Dual(5,2) == Dual(0,0)",
            run: || {
                let power = Dual::new(0.0, 2.0).try_pow(Dual::new(5.0, 2.0))?;
                Ok(power == Dual::new(0.0, 0.0))
            },
        },
        Scenario {
            name: "sqrt(Dual(100)) == Dual(10,0.05)",
            run: || Ok(close(&sqrt(Dual::variable(100.0)), &Dual::new(10.0, 0.05))),
        },
        Scenario {
            name: "x, y = make_vars([2,3]); x*y == Dual(6,[3,2])",
            run: || {
                let vars = make_vars(&[2.0, 3.0], None)?;
                let product = vars[0].try_mul(&vars[1])?;
                Ok(product == Dual::new(6.0, array![3.0, 2.0]))
            },
        },
        Scenario {
            name: "sin(Dual(pi)) - cos(Dual(pi/2)) == Dual(0,0)",
            run: || {
                let difference = sin(Dual::variable(PI)).try_sub(cos(Dual::variable(PI / 2.0)))?;
                Ok(difference.value().abs() < TOLERANCE
                    && difference.derivative().norm() < TOLERANCE)
            },
        },
    ]
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Running self-check scenarios");

    println!("Configuration:");
    println!("  precision = {}", config.precision);
    println!("  log_level = {}", config.log_level);
    println!();

    let scenarios = scenarios();
    let total = scenarios.len();
    let mut failed = 0;

    for scenario in &scenarios {
        let passed = match (scenario.run)() {
            Ok(passed) => passed,
            Err(e) => {
                warn!(scenario = scenario.name, error = %e, "Scenario raised an error");
                false
            }
        };
        debug!(scenario = scenario.name, passed, "Scenario finished");
        if !passed {
            failed += 1;
        }
        let status = if passed { "PASS" } else { "FAIL" };
        println!("[{}] {}", status, scenario.name);
    }

    println!();
    println!("{}/{} scenarios passed", total - failed, total);

    if failed > 0 {
        return Err(CliError::CheckFailed { failed, total });
    }
    Ok(())
}
