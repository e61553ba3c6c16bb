//! Snapshot command implementation
//!
//! Applies one edit to a curve snapshot and prints the resulting point list.
//! The input file is never modified.

use std::io::Write;
use std::path::Path;

use curve_core::curve::CurveSnapshot;
use curve_core::types::InterpolationKind;
use tracing::info;

use crate::config::OutputFormat;
use crate::input::load_snapshot;
use crate::output::write_points;
use crate::Result;

/// One snapshot edit
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Add a control point
    Add { x: f64, y: f64 },
    /// Move a point
    Move { id: String, x: f64, y: f64 },
    /// Remove a point
    Remove { id: String },
    /// Change a point's interpolation tag
    Retag { id: String, interpolation: String },
    /// Restore the default curve
    Reset,
}

/// Apply `edit` to `snapshot`.
pub fn apply(snapshot: &CurveSnapshot, edit: &Edit) -> Result<CurveSnapshot> {
    let next = match edit {
        Edit::Add { x, y } => snapshot.add_point(*x, *y),
        Edit::Move { id, x, y } => snapshot.update_point(id, *x, *y)?,
        Edit::Remove { id } => snapshot.remove_point(id)?,
        Edit::Retag { id, interpolation } => {
            let kind: InterpolationKind = interpolation.parse()?;
            snapshot.update_interpolation(id, kind)?
        }
        Edit::Reset => snapshot.reset(),
    };
    Ok(next)
}

/// Run the snapshot command
pub fn run(
    points: Option<&Path>,
    edit: &Edit,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let snapshot = load_snapshot(points)?;
    let next = apply(&snapshot, edit)?;

    info!(
        edit = ?edit,
        before = snapshot.len(),
        after = next.len(),
        "Snapshot edited"
    );
    write_points(out, next.points(), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use curve_core::types::{CurveError, Point};

    #[test]
    fn test_add() {
        let next = apply(&CurveSnapshot::default(), &Edit::Add { x: 1.5, y: 0.5 }).unwrap();
        assert_eq!(next.len(), 4);
        assert_eq!(next.get("point_3").unwrap().x, 1.0);
    }

    #[test]
    fn test_move_and_remove() {
        let snapshot = CurveSnapshot::default();
        let moved = apply(
            &snapshot,
            &Edit::Move {
                id: "point_1".to_string(),
                x: 0.6,
                y: 0.9,
            },
        )
        .unwrap();
        assert_eq!(moved.get("point_1").unwrap().y, 0.9);

        let removed = apply(&moved, &Edit::Remove { id: "point_1".to_string() }).unwrap();
        assert_eq!(removed.len(), 2);
    }

    #[test]
    fn test_retag() {
        let next = apply(
            &CurveSnapshot::default(),
            &Edit::Retag {
                id: "point_0".to_string(),
                interpolation: "bezier".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            next.get("point_0").unwrap().interpolation,
            InterpolationKind::Bezier
        );
    }

    #[test]
    fn test_retag_unknown_kind() {
        let result = apply(
            &CurveSnapshot::default(),
            &Edit::Retag {
                id: "point_0".to_string(),
                interpolation: "wobbly".to_string(),
            },
        );
        assert!(matches!(
            result,
            Err(CliError::Curve(CurveError::UnknownInterpolation(_)))
        ));
    }

    #[test]
    fn test_unknown_id() {
        let result = apply(&CurveSnapshot::default(), &Edit::Remove { id: "nope".to_string() });
        assert!(matches!(
            result,
            Err(CliError::Curve(CurveError::UnknownPoint(_)))
        ));
    }

    #[test]
    fn test_run_prints_points() {
        let mut buf = Vec::new();
        run(None, &Edit::Reset, OutputFormat::Json, &mut buf).unwrap();
        let points: Vec<Point> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(points.len(), 3);
    }
}
