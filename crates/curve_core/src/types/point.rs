//! Point model shared by the evaluator, the bell model and the samplers.
//!
//! A [`Point`] is a typed knot in normalised `[0, 1] × [0, 1]` space. Its
//! [`PointRole`] says what the point controls (a curve knot or one of the bell
//! handles) and its [`InterpolationKind`] is the blend tag the evaluator reads
//! when choosing how to join it to its neighbour.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// What a point controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointRole {
    /// User-placed knot in curve mode
    Control,
    /// Left edge of the bell range
    RangeLeft,
    /// Right edge of the bell range
    RangeRight,
    /// Bell peak position and height
    BellCenter,
    /// Bell curvature handle
    BellCurvature,
}

impl PointRole {
    /// Returns true for the roles whose presence switches evaluation to bell mode.
    ///
    /// The curvature handle alone does not, since it cannot define a range.
    #[inline]
    pub fn is_bell_anchor(&self) -> bool {
        matches!(
            self,
            PointRole::RangeLeft | PointRole::RangeRight | PointRole::BellCenter
        )
    }
}

/// Blend tag declared on a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationKind {
    /// Straight line to the neighbour
    #[default]
    Linear,
    /// Hermite cubic with zero end tangents
    CubicSpline,
    /// Tagged as Bézier; blends linearly
    Bezier,
    /// Smooth bell shoulder
    BellSmooth,
    /// Step handle (bell range edges)
    Step,
}

impl InterpolationKind {
    /// Returns true for the kinds that request a smooth segment.
    #[inline]
    pub fn is_smooth(&self) -> bool {
        matches!(
            self,
            InterpolationKind::CubicSpline | InterpolationKind::BellSmooth
        )
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterpolationKind::Linear => "linear",
            InterpolationKind::CubicSpline => "cubic_spline",
            InterpolationKind::Bezier => "bezier",
            InterpolationKind::BellSmooth => "bell_smooth",
            InterpolationKind::Step => "step",
        };
        f.pad(name)
    }
}

impl std::str::FromStr for InterpolationKind {
    type Err = crate::types::CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(InterpolationKind::Linear),
            "cubic_spline" | "cubic" | "spline" => Ok(InterpolationKind::CubicSpline),
            "bezier" => Ok(InterpolationKind::Bezier),
            "bell_smooth" => Ok(InterpolationKind::BellSmooth),
            "step" => Ok(InterpolationKind::Step),
            _ => Err(crate::types::CurveError::UnknownInterpolation(s.to_string())),
        }
    }
}

/// Drag limits attached to a point.
///
/// Ranges are inclusive `(min, max)` pairs. `extra` carries named numeric
/// fields, e.g. the bell handles publish their current curvature there.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraints {
    /// Allowed x interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_range: Option<(f64, f64)>,
    /// Allowed y interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_range: Option<(f64, f64)>,
    /// Named numeric side data
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, f64>,
}

impl Constraints {
    /// Clamp a proposed position into the declared ranges.
    ///
    /// Axes without a range pass through unchanged. The lower bound wins when a
    /// range is inverted, matching `max(min, min(max, v))`.
    ///
    /// # Examples
    /// ```
    /// use curve_core::types::Constraints;
    ///
    /// let c = Constraints {
    ///     x_range: Some((0.0, 0.5)),
    ///     y_range: Some((0.0, 0.0)),
    ///     ..Default::default()
    /// };
    /// assert_eq!(c.clamp(0.8, 0.3), (0.5, 0.0));
    /// ```
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (clamp_axis(x, self.x_range), clamp_axis(y, self.y_range))
    }

    /// Look up a named extra field.
    #[inline]
    pub fn extra(&self, name: &str) -> Option<f64> {
        self.extra.get(name).copied()
    }
}

fn clamp_axis(v: f64, range: Option<(f64, f64)>) -> f64 {
    match range {
        Some((lo, hi)) => lo.max(hi.min(v)),
        None => v,
    }
}

/// A typed knot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Identifier, unique within a snapshot
    pub id: String,
    /// Normalised x position
    pub x: f64,
    /// Normalised y value
    pub y: f64,
    /// What this point controls
    #[serde(rename = "type")]
    pub role: PointRole,
    /// Blend tag used by the evaluator
    #[serde(default)]
    pub interpolation: InterpolationKind,
    /// Optional drag limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
}

impl Point {
    /// Create a control point without constraints.
    ///
    /// # Examples
    /// ```
    /// use curve_core::types::{InterpolationKind, Point, PointRole};
    ///
    /// let p = Point::control("a", 0.2, 0.3, InterpolationKind::CubicSpline);
    /// assert_eq!(p.role, PointRole::Control);
    /// ```
    pub fn control(id: impl Into<String>, x: f64, y: f64, interpolation: InterpolationKind) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            role: PointRole::Control,
            interpolation,
            constraints: None,
        }
    }

    /// Builder-style setter for constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Clamp a proposed position with this point's constraints, if any.
    pub fn clamp_position(&self, x: f64, y: f64) -> (f64, f64) {
        match &self.constraints {
            Some(c) => c.clamp(x, y),
            None => (x, y),
        }
    }
}

/// Copy and stably sort points by x. Ties keep their input order.
pub(crate) fn sorted_by_x(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_anchor_roles() {
        assert!(!PointRole::Control.is_bell_anchor());
        assert!(PointRole::RangeLeft.is_bell_anchor());
        assert!(PointRole::RangeRight.is_bell_anchor());
        assert!(PointRole::BellCenter.is_bell_anchor());
        assert!(!PointRole::BellCurvature.is_bell_anchor());
    }

    #[test]
    fn test_smooth_kinds() {
        assert!(InterpolationKind::CubicSpline.is_smooth());
        assert!(InterpolationKind::BellSmooth.is_smooth());
        assert!(!InterpolationKind::Linear.is_smooth());
        assert!(!InterpolationKind::Bezier.is_smooth());
        assert!(!InterpolationKind::Step.is_smooth());
    }

    #[test]
    fn test_interpolation_kind_round_trip_names() {
        for kind in [
            InterpolationKind::Linear,
            InterpolationKind::CubicSpline,
            InterpolationKind::Bezier,
            InterpolationKind::BellSmooth,
            InterpolationKind::Step,
        ] {
            assert_eq!(kind.to_string().parse::<InterpolationKind>().unwrap(), kind);
        }
        assert!("quartic".parse::<InterpolationKind>().is_err());
    }

    #[test]
    fn test_constraints_clamp() {
        let c = Constraints {
            x_range: Some((0.25, 0.75)),
            y_range: None,
            ..Default::default()
        };
        assert_eq!(c.clamp(0.1, 2.0), (0.25, 2.0));
        assert_eq!(c.clamp(0.9, -1.0), (0.75, -1.0));
        assert_eq!(c.clamp(0.5, 0.5), (0.5, 0.5));
    }

    #[test]
    fn test_point_without_constraints_passes_through() {
        let p = Point::control("a", 0.5, 0.5, InterpolationKind::Linear);
        assert_eq!(p.clamp_position(1.5, -0.5), (1.5, -0.5));
    }

    #[test]
    fn test_sorted_by_x_is_stable() {
        let points = vec![
            Point::control("c", 0.8, 0.0, InterpolationKind::Linear),
            Point::control("a", 0.2, 1.0, InterpolationKind::Linear),
            Point::control("b", 0.2, 2.0, InterpolationKind::Linear),
        ];
        let sorted = sorted_by_x(&points);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        // caller's order untouched
        assert_eq!(points[0].id, "c");
    }

    #[test]
    fn test_point_json_shape() {
        let json = r#"{"id":"p","x":0.1,"y":0.2,"type":"range_left","interpolation":"step"}"#;
        let p: Point = serde_json::from_str(json).unwrap();
        assert_eq!(p.role, PointRole::RangeLeft);
        assert_eq!(p.interpolation, InterpolationKind::Step);
        assert!(p.constraints.is_none());
    }
}
