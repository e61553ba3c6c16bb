//! Error types for structured error handling.
//!
//! Numeric paths in this crate never fail: empty snapshots, out-of-range
//! queries and out-of-range parameter writes all have a defined fallback.
//! `CurveError` covers the remaining caller errors at API boundaries, such as
//! an unknown point id or a sample count that cannot describe a grid.

use thiserror::Error;

/// Curve-related errors.
///
/// # Variants
/// - `UnknownPoint`: No point with the given id exists in the snapshot
/// - `UnknownHandle`: Handle id is not one of the four bell handles
/// - `UnknownParameter`: Name does not identify a bell parameter
/// - `UnknownEasing`: Name does not identify an easing function
/// - `UnknownInterpolation`: Name does not identify an interpolation tag
/// - `InvalidSampleCount`: Fixed-grid sampling needs at least two samples
///
/// # Examples
/// ```
/// use curve_core::types::CurveError;
///
/// let err = CurveError::UnknownPoint("point_9".to_string());
/// assert_eq!(format!("{}", err), "Unknown point id: point_9");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No point with this id exists in the snapshot.
    #[error("Unknown point id: {0}")]
    UnknownPoint(String),

    /// Handle id is not one of the bell handles.
    #[error("Unknown bell handle: {0}")]
    UnknownHandle(String),

    /// Parameter name is not a bell parameter.
    #[error("Unknown bell parameter: {0}")]
    UnknownParameter(String),

    /// Name is not a known easing function.
    #[error("Unknown easing function: {0}")]
    UnknownEasing(String),

    /// Name is not a known interpolation tag.
    #[error("Unknown interpolation kind: {0}")]
    UnknownInterpolation(String),

    /// Sample count cannot describe an inclusive grid.
    #[error("Invalid sample count: got {got}, need at least {need}")]
    InvalidSampleCount {
        /// Number of samples requested
        got: usize,
        /// Minimum number of samples required
        need: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_point_display() {
        let err = CurveError::UnknownPoint("p".to_string());
        assert_eq!(err.to_string(), "Unknown point id: p");
    }

    #[test]
    fn test_unknown_handle_display() {
        let err = CurveError::UnknownHandle("bell_top".to_string());
        assert!(err.to_string().contains("bell_top"));
    }

    #[test]
    fn test_invalid_sample_count_display() {
        let err = CurveError::InvalidSampleCount { got: 1, need: 2 };
        assert_eq!(
            err.to_string(),
            "Invalid sample count: got 1, need at least 2"
        );
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let err = CurveError::UnknownParameter("width".to_string());
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> =
            Box::new(CurveError::UnknownEasing("wobble".to_string()));
        assert!(err.to_string().contains("wobble"));
    }
}
