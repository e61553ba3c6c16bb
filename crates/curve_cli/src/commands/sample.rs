//! Sample command implementation
//!
//! Evaluates a snapshot on a fixed, evenly spaced grid.

use std::io::Write;
use std::path::Path;

use curve_core::curve::Evaluator;
use tracing::info;

use crate::config::OutputFormat;
use crate::input::load_points;
use crate::output::write_samples;
use crate::Result;

/// Run the sample command
pub fn run(
    count: usize,
    points: Option<&Path>,
    bell: Option<&Path>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let points = load_points(points, bell)?;
    let evaluator = Evaluator::new(&points);
    let samples = evaluator.generate_samples(count)?;

    info!(
        count = samples.len(),
        domain = ?evaluator.domain(),
        "Generated fixed-grid samples"
    );
    write_samples(out, &samples, format)
}
