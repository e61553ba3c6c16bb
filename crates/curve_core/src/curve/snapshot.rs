//! Immutable editing operations on a curve-mode point list.

use super::evaluator::{Evaluator, Sample};
use crate::types::{sorted_by_x, CurveError, InterpolationKind, Point};
use serde::{Deserialize, Serialize};

/// Prefix of generated control point ids.
const POINT_ID_PREFIX: &str = "point_";

/// Ordered list of control points.
///
/// Each edit returns a new snapshot and leaves `self` untouched, so the
/// owning layer decides which snapshot is current. Points are kept sorted by
/// x after every edit.
///
/// # Example
///
/// ```
/// use curve_core::curve::CurveSnapshot;
///
/// let snapshot = CurveSnapshot::default();
/// assert_eq!(snapshot.len(), 3);
///
/// let edited = snapshot.add_point(0.9, 1.4);
/// assert_eq!(edited.len(), 4);
/// assert_eq!(edited.points().last().unwrap().y, 1.0);
/// assert_eq!(snapshot.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct CurveSnapshot {
    points: Vec<Point>,
}

impl Default for CurveSnapshot {
    fn default() -> Self {
        Self {
            points: vec![
                Point::control("point_0", 0.2, 0.3, InterpolationKind::CubicSpline),
                Point::control("point_1", 0.5, 0.7, InterpolationKind::CubicSpline),
                Point::control("point_2", 0.8, 0.4, InterpolationKind::CubicSpline),
            ],
        }
    }
}

impl CurveSnapshot {
    /// Wrap a point list, sorting it by x.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points: sorted_by_x(&points),
        }
    }

    /// An empty snapshot.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Points in ascending x order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the snapshot holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Look up a point by id.
    pub fn get(&self, id: &str) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Move a point.
    ///
    /// The new position is clamped by the point's own constraints when it
    /// carries any.
    ///
    /// # Errors
    ///
    /// `CurveError::UnknownPoint` if no point has this id.
    pub fn update_point(&self, id: &str, x: f64, y: f64) -> Result<Self, CurveError> {
        self.edit(id, |p| {
            let (x, y) = p.clamp_position(x, y);
            p.x = x;
            p.y = y;
        })
    }

    /// Add a cubic-spline control point, clamped to the unit square.
    ///
    /// The id is `point_<n>` with the smallest `n` not already in use.
    #[must_use]
    pub fn add_point(&self, x: f64, y: f64) -> Self {
        let point = Point::control(
            self.next_id(),
            x.clamp(0.0, 1.0),
            y.clamp(0.0, 1.0),
            InterpolationKind::CubicSpline,
        );
        let mut points = self.points.clone();
        points.push(point);
        Self::new(points)
    }

    /// Remove a point.
    ///
    /// # Errors
    ///
    /// `CurveError::UnknownPoint` if no point has this id.
    pub fn remove_point(&self, id: &str) -> Result<Self, CurveError> {
        if self.get(id).is_none() {
            return Err(CurveError::UnknownPoint(id.to_string()));
        }
        Ok(Self {
            points: self.points.iter().filter(|p| p.id != id).cloned().collect(),
        })
    }

    /// Change a point's interpolation tag.
    ///
    /// # Errors
    ///
    /// `CurveError::UnknownPoint` if no point has this id.
    pub fn update_interpolation(
        &self,
        id: &str,
        interpolation: InterpolationKind,
    ) -> Result<Self, CurveError> {
        self.edit(id, |p| p.interpolation = interpolation)
    }

    /// The default three-point snapshot.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// Evaluator over this snapshot.
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(&self.points)
    }

    /// Evaluate at `x`. See [`Evaluator::evaluate`].
    pub fn evaluate(&self, x: f64) -> f64 {
        self.evaluator().evaluate(x)
    }

    /// Fixed-grid samples. See [`Evaluator::generate_samples`].
    pub fn generate_samples(&self, sample_count: usize) -> Result<Vec<Sample>, CurveError> {
        self.evaluator().generate_samples(sample_count)
    }

    fn edit(&self, id: &str, f: impl FnOnce(&mut Point)) -> Result<Self, CurveError> {
        let mut points = self.points.clone();
        let point = points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CurveError::UnknownPoint(id.to_string()))?;
        f(point);
        Ok(Self::new(points))
    }

    fn next_id(&self) -> String {
        (0..)
            .map(|n: usize| format!("{}{}", POINT_ID_PREFIX, n))
            .find(|id| self.get(id).is_none())
            .unwrap_or_else(|| format!("{}{}", POINT_ID_PREFIX, self.points.len()))
    }
}

impl From<Vec<Point>> for CurveSnapshot {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<CurveSnapshot> for Vec<Point> {
    fn from(snapshot: CurveSnapshot) -> Self {
        snapshot.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Constraints;

    #[test]
    fn test_default_points() {
        let snapshot = CurveSnapshot::default();
        let coords: Vec<(f64, f64)> = snapshot.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(coords, vec![(0.2, 0.3), (0.5, 0.7), (0.8, 0.4)]);
        assert!(snapshot
            .points()
            .iter()
            .all(|p| p.interpolation == InterpolationKind::CubicSpline));
    }

    #[test]
    fn test_new_sorts() {
        let snapshot = CurveSnapshot::new(vec![
            Point::control("b", 0.9, 0.0, InterpolationKind::Linear),
            Point::control("a", 0.1, 0.0, InterpolationKind::Linear),
        ]);
        assert_eq!(snapshot.points()[0].id, "a");
    }

    #[test]
    fn test_update_point_moves_and_resorts() {
        let snapshot = CurveSnapshot::default();
        let edited = snapshot.update_point("point_0", 0.9, 0.1).unwrap();
        let ids: Vec<&str> = edited.points().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["point_1", "point_2", "point_0"]);
        assert_eq!(edited.get("point_0").unwrap().x, 0.9);
        // input snapshot untouched
        assert_eq!(snapshot.get("point_0").unwrap().x, 0.2);
    }

    #[test]
    fn test_update_point_respects_constraints() {
        let constrained = Point::control("c", 0.5, 0.5, InterpolationKind::Linear).with_constraints(
            Constraints {
                x_range: Some((0.4, 0.6)),
                y_range: Some((0.0, 0.5)),
                ..Default::default()
            },
        );
        let snapshot = CurveSnapshot::new(vec![constrained]);
        let edited = snapshot.update_point("c", 0.9, 0.9).unwrap();
        let p = edited.get("c").unwrap();
        assert_eq!((p.x, p.y), (0.6, 0.5));
    }

    #[test]
    fn test_update_unknown_point() {
        let result = CurveSnapshot::default().update_point("nope", 0.0, 0.0);
        assert_eq!(result, Err(CurveError::UnknownPoint("nope".to_string())));
    }

    #[test]
    fn test_add_point_clamps_and_generates_id() {
        let edited = CurveSnapshot::default().add_point(-0.5, 0.6);
        let p = edited.get("point_3").unwrap();
        assert_eq!((p.x, p.y), (0.0, 0.6));
        assert_eq!(p.interpolation, InterpolationKind::CubicSpline);
        assert_eq!(edited.points()[0].id, "point_3");
    }

    #[test]
    fn test_add_point_reuses_free_id() {
        let edited = CurveSnapshot::default()
            .remove_point("point_1")
            .unwrap()
            .add_point(0.5, 0.5);
        assert!(edited.get("point_1").is_some());
        assert_eq!(edited.len(), 3);
    }

    #[test]
    fn test_remove_point() {
        let edited = CurveSnapshot::default().remove_point("point_2").unwrap();
        assert_eq!(edited.len(), 2);
        assert!(edited.get("point_2").is_none());
        assert!(CurveSnapshot::default().remove_point("x").is_err());
    }

    #[test]
    fn test_update_interpolation() {
        let edited = CurveSnapshot::default()
            .update_interpolation("point_1", InterpolationKind::Linear)
            .unwrap();
        assert_eq!(
            edited.get("point_1").unwrap().interpolation,
            InterpolationKind::Linear
        );
    }

    #[test]
    fn test_reset() {
        let edited = CurveSnapshot::empty().add_point(0.1, 0.1).reset();
        assert_eq!(edited, CurveSnapshot::default());
    }

    #[test]
    fn test_evaluate_delegates() {
        let snapshot = CurveSnapshot::default();
        assert!((snapshot.evaluate(0.35) - 0.5).abs() < 1e-12);
        assert_eq!(snapshot.generate_samples(5).unwrap().len(), 5);
    }

    #[test]
    fn test_json_is_plain_array() {
        let json = serde_json::to_string(&CurveSnapshot::default()).unwrap();
        assert!(json.starts_with('['));
        let back: CurveSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CurveSnapshot::default());
    }

    #[test]
    fn test_json_unsorted_input_is_sorted() {
        let json = r#"[
            {"id": "b", "x": 0.9, "y": 0.1, "type": "control"},
            {"id": "a", "x": 0.1, "y": 0.5, "type": "control"}
        ]"#;
        let snapshot: CurveSnapshot = serde_json::from_str(json).unwrap();
        let xs: Vec<f64> = snapshot.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.1, 0.9]);
        assert_eq!(snapshot.evaluate(0.1), 0.5);
    }
}
