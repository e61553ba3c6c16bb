//! Loading snapshots from disk
//!
//! Points files are JSON arrays of points; bell files are a JSON
//! `BellParameters` object. Without either, the default three-point curve is
//! used.

use std::path::Path;

use curve_core::bell::BellParameters;
use curve_core::curve::CurveSnapshot;
use curve_core::types::Point;
use tracing::{debug, warn};

use crate::{CliError, Result};

fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Load a curve snapshot, falling back to the default curve.
pub fn load_snapshot(path: Option<&Path>) -> Result<CurveSnapshot> {
    let Some(path) = path else {
        debug!("No points file given, using default curve");
        return Ok(CurveSnapshot::default());
    };

    let points: Vec<Point> = serde_json::from_str(&read(path)?)?;
    debug!(path = %path.display(), points = points.len(), "Loaded points");
    Ok(CurveSnapshot::new(points))
}

/// Load bell parameters, falling back to the defaults.
///
/// Records that break the parameter invariants are normalized with a warning.
pub fn load_bell(path: Option<&Path>) -> Result<BellParameters> {
    let Some(path) = path else {
        debug!("No bell file given, using default parameters");
        return Ok(BellParameters::default());
    };

    let params: BellParameters = serde_json::from_str(&read(path)?)?;
    let normalized = params.normalized();
    if normalized != params {
        warn!(path = %path.display(), "Bell parameters out of range, normalized");
    }
    Ok(normalized)
}

/// Resolve the point list a read-only command operates on.
pub fn load_points(points: Option<&Path>, bell: Option<&Path>) -> Result<Vec<Point>> {
    match (points, bell) {
        (Some(_), Some(_)) => Err(CliError::InvalidArgument(
            "--points and --bell are mutually exclusive".to_string(),
        )),
        (_, Some(bell)) => Ok(load_bell(Some(bell))?.to_points().to_vec()),
        (points, None) => Ok(load_snapshot(points)?.points().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("curvectl-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_snapshot() {
        assert_eq!(load_snapshot(None).unwrap(), CurveSnapshot::default());
        assert_eq!(load_bell(None).unwrap(), BellParameters::default());
    }

    #[test]
    fn test_missing_file() {
        let result = load_snapshot(Some(Path::new("/nonexistent/points.json")));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_load_points_file_sorted() {
        let path = temp_file(
            "points.json",
            r#"[{"id":"b","x":0.9,"y":0.1,"type":"control"},
                {"id":"a","x":0.1,"y":0.5,"type":"control","interpolation":"cubic_spline"}]"#,
        );
        let snapshot = load_snapshot(Some(&path)).unwrap();
        assert_eq!(snapshot.points()[0].id, "a");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_bell_normalizes() {
        let path = temp_file(
            "bell.json",
            r#"{"centerX":0.9,"centerY":0.5,"leftRangeX":0.2,"rightRangeX":0.6,"curvature":2.0}"#,
        );
        let params = load_bell(Some(&path)).unwrap();
        assert!(params.is_valid());
        assert_eq!(params.curvature, 1.0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_points_from_bell() {
        let path = temp_file("bell-points.json", r#"{"centerY":0.8}"#);
        let points = load_points(None, Some(&path)).unwrap();
        assert_eq!(points.len(), 4);
        assert!(points.iter().any(|p| p.id == "bell_center" && p.y == 0.8));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_points_conflict() {
        let p = Path::new("a.json");
        assert!(matches!(
            load_points(Some(p), Some(p)),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bad_json() {
        let path = temp_file("bad.json", "{ not json");
        assert!(matches!(
            load_snapshot(Some(&path)),
            Err(CliError::Json(_))
        ));
        std::fs::remove_file(&path).unwrap();
    }
}
