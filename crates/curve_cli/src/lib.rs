//! # curve_cli: Command-line front end for curve_core
//!
//! Loads a curve snapshot (JSON points file) or a bell record (JSON
//! `BellParameters`), applies one operation, and prints the result as JSON
//! or a text table.
//!
//! ## Modules
//!
//! - `config`: layered configuration (defaults, TOML file, environment, flags)
//! - `input`: snapshot and bell loading
//! - `output`: JSON and table rendering
//! - `commands`: one module per subcommand

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
