//! Rendering command results as JSON or a text table

use std::io::Write;

use curve_core::bell::{BellParameter, BellParameters};
use curve_core::curve::Sample;
use curve_core::types::Point;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// A single evaluated sample.
pub fn write_sample(out: &mut impl Write, sample: Sample, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &sample),
        OutputFormat::Table => write_samples(out, &[sample], format),
    }
}

/// A list of `(x, y)` samples.
pub fn write_samples(out: &mut impl Write, samples: &[Sample], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, samples),
        OutputFormat::Table => {
            writeln!(out, "┌────────────┬────────────┐")?;
            writeln!(out, "│ x          │ y          │")?;
            writeln!(out, "├────────────┼────────────┤")?;
            for s in samples {
                writeln!(out, "│ {:<10.6} │ {:<10.6} │", s.x, s.y)?;
            }
            writeln!(out, "└────────────┴────────────┘")?;
            Ok(())
        }
    }
}

/// A bell parameter record.
pub fn write_bell(out: &mut impl Write, params: &BellParameters, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, params),
        OutputFormat::Table => {
            writeln!(out, "┌──────────────┬────────────┐")?;
            for param in BellParameter::ALL {
                writeln!(out, "│ {:<12} │ {:<10.6} │", param.name(), params.get(param))?;
            }
            writeln!(out, "└──────────────┴────────────┘")?;
            Ok(())
        }
    }
}

/// A point list.
pub fn write_points(out: &mut impl Write, points: &[Point], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, points),
        OutputFormat::Table => {
            writeln!(out, "┌──────────────────┬────────────┬────────────┬──────────────┐")?;
            writeln!(out, "│ id               │ x          │ y          │ interpolation│")?;
            writeln!(out, "├──────────────────┼────────────┼────────────┼──────────────┤")?;
            for p in points {
                writeln!(
                    out,
                    "│ {:<16} │ {:<10.6} │ {:<10.6} │ {:<12} │",
                    p.id, p.x, p.y, p.interpolation
                )?;
            }
            writeln!(out, "└──────────────────┴────────────┴────────────┴──────────────┘")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::curve::CurveSnapshot;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_samples_json() {
        let samples = [Sample { x: 0.0, y: 1.0 }, Sample { x: 1.0, y: 0.5 }];
        let text = render(|out| write_samples(out, &samples, OutputFormat::Json));
        let back: Vec<Sample> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, samples);
    }

    #[test]
    fn test_samples_table() {
        let samples = [Sample { x: 0.25, y: 0.5 }];
        let text = render(|out| write_samples(out, &samples, OutputFormat::Table));
        assert!(text.contains("0.250000"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_bell_table_lists_every_parameter() {
        let text =
            render(|out| write_bell(out, &BellParameters::default(), OutputFormat::Table));
        for param in BellParameter::ALL {
            assert!(text.contains(param.name()));
        }
    }

    #[test]
    fn test_points_table() {
        let snapshot = CurveSnapshot::default();
        let text = render(|out| write_points(out, snapshot.points(), OutputFormat::Table));
        assert!(text.contains("point_1"));
        assert!(text.contains("cubic_spline"));
    }
}
