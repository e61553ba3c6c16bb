//! Eval command implementation
//!
//! Evaluates a snapshot at a single x.

use std::io::Write;
use std::path::Path;

use curve_core::curve::{Evaluator, Sample};
use tracing::info;

use crate::config::OutputFormat;
use crate::input::load_points;
use crate::output::write_sample;
use crate::Result;

/// Run the eval command
pub fn run(
    x: f64,
    points: Option<&Path>,
    bell: Option<&Path>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let points = load_points(points, bell)?;
    let evaluator = Evaluator::new(&points);
    let y = evaluator.evaluate(x);

    info!(x, y, mode = ?evaluator.mode(), "Evaluated");
    write_sample(out, Sample { x, y }, format)
}
