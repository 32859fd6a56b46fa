//! dualad - Command Line Front End for Forward-Mode AD
//!
//! Evaluates built-in functions with `dual_core` dual numbers and prints their
//! values, derivatives, gradients and Jacobians.
//!
//! # Commands
//!
//! - `dualad poly --at <x>` - Value and derivative of 3x^5 + 2x^2 - 2x^7/x^6
//! - `dualad gradient --at <x1,x2,...> [--seed <s1,s2,...>]` - Gradient of the Euclidean norm
//! - `dualad jacobian --at <x,y>` - Jacobian of (x*y, sin x + exp y, sqrt(x)/y)
//! - `dualad check` - Run the built-in self-check scenarios
//!
//! # Architecture
//!
//! Service layer over `dual_core`: all differentiation happens in the
//! library, this crate handles arguments, configuration, logging and output.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use config::{CliConfig, LogLevel};
pub use error::{CliError, Result};

/// Forward-mode automatic differentiation CLI
#[derive(Parser)]
#[command(name = "dualad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "dualad.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Differentiate 3x^5 + 2x^2 - 2x^7/x^6 at a point
    Poly {
        /// Point of evaluation
        #[arg(short, long, allow_negative_numbers = true)]
        at: f64,
    },

    /// Gradient of the Euclidean norm sqrt(x1^2 + ... + xn^2)
    Gradient {
        /// Point of evaluation, comma separated
        #[arg(
            short,
            long,
            value_delimiter = ',',
            allow_negative_numbers = true,
            required = true
        )]
        at: Vec<f64>,

        /// Initial sensitivities, one per coordinate
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        seed: Option<Vec<f64>>,
    },

    /// Jacobian of (x*y, sin x + exp y, sqrt(x)/y)
    Jacobian {
        /// Point of evaluation as x,y
        #[arg(
            short,
            long,
            value_delimiter = ',',
            allow_negative_numbers = true,
            required = true
        )]
        at: Vec<f64>,
    },

    /// Run the built-in self-check scenarios
    Check,
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = CliConfig::load(Path::new(&cli.config))?;
    let config = loaded.clone().unwrap_or_default();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(level);

    if loaded.is_none() {
        warn!(path = %cli.config, "Configuration file not found, using defaults");
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Poly { at } => commands::poly::run(at, &config),
        Commands::Gradient { at, seed } => commands::gradient::run(&at, seed.as_deref(), &config),
        Commands::Jacobian { at } => commands::jacobian::run(&at, &config),
        Commands::Check => commands::check::run(&config),
    }
}
