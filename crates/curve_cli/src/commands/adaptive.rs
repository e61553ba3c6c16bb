//! Adaptive command implementation
//!
//! Samples a snapshot densely where it bends and sparsely where it is flat.

use std::io::Write;
use std::path::Path;

use curve_core::sampling::AdaptiveSampler;
use tracing::info;

use crate::config::OutputFormat;
use crate::input::load_points;
use crate::output::write_samples;
use crate::Result;

/// Run the adaptive command
pub fn run(
    sensitivity: f64,
    points: Option<&Path>,
    bell: Option<&Path>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let points = load_points(points, bell)?;
    let samples = AdaptiveSampler::new(sensitivity).sample_points(&points);

    info!(
        sensitivity,
        knots = points.len(),
        samples = samples.len(),
        "Adaptive sampling complete"
    );
    write_samples(out, &samples, format)
}
