//! Bell handles, their point projection and the closed-form bell function.

use super::params::{BellParameter, BellParameters, CENTER_MARGIN, MIN_RANGE_WIDTH};
use crate::types::{Constraints, CurveError, InterpolationKind, Point, PointRole};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Curvature assumed when a handle list carries none.
pub const DEFAULT_CURVATURE: f64 = 0.5;

/// Height of the curvature handle above the peak.
const CURVATURE_HANDLE_OFFSET: f64 = 0.1;

/// The four draggable bell handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BellHandle {
    /// `bell_left_range`
    LeftRange,
    /// `bell_right_range`
    RightRange,
    /// `bell_center`
    Center,
    /// `bell_curvature`
    Curvature,
}

impl BellHandle {
    /// All handles in projection order.
    pub const ALL: [BellHandle; 4] = [
        BellHandle::LeftRange,
        BellHandle::RightRange,
        BellHandle::Center,
        BellHandle::Curvature,
    ];

    /// Fixed point id of this handle.
    pub fn id(&self) -> &'static str {
        match self {
            BellHandle::LeftRange => "bell_left_range",
            BellHandle::RightRange => "bell_right_range",
            BellHandle::Center => "bell_center",
            BellHandle::Curvature => "bell_curvature",
        }
    }

    /// Point role carried by this handle.
    pub fn role(&self) -> PointRole {
        match self {
            BellHandle::LeftRange => PointRole::RangeLeft,
            BellHandle::RightRange => PointRole::RangeRight,
            BellHandle::Center => PointRole::BellCenter,
            BellHandle::Curvature => PointRole::BellCurvature,
        }
    }
}

impl fmt::Display for BellHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for BellHandle {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BellHandle::ALL
            .iter()
            .copied()
            .find(|h| h.id() == s)
            .ok_or_else(|| CurveError::UnknownHandle(s.to_string()))
    }
}

impl BellParameters {
    /// Map a handle drag onto parameter writes.
    ///
    /// - range handles move their edge
    /// - the centre handle moves the peak in both axes
    /// - the curvature handle sets `curvature = 1 − y` and also moves the
    ///   peak horizontally when `x` differs from the current centre
    ///
    /// # Examples
    /// ```
    /// use curve_core::bell::{BellHandle, BellParameters};
    ///
    /// let p = BellParameters::default().update_from_handle(BellHandle::Curvature, 0.5, 0.8);
    /// assert!((p.curvature - 0.2).abs() < 1e-12);
    /// assert_eq!(p.center_x, 0.5);
    /// ```
    #[must_use]
    pub fn update_from_handle(&self, handle: BellHandle, new_x: f64, new_y: f64) -> BellParameters {
        match handle {
            BellHandle::LeftRange => self.set_parameter(BellParameter::LeftRangeX, new_x),
            BellHandle::RightRange => self.set_parameter(BellParameter::RightRangeX, new_x),
            BellHandle::Center => self
                .set_parameter(BellParameter::CenterX, new_x)
                .set_parameter(BellParameter::CenterY, new_y),
            BellHandle::Curvature => {
                let next = self.set_parameter(BellParameter::Curvature, 1.0 - new_y);
                if new_x != self.center_x {
                    next.set_parameter(BellParameter::CenterX, new_x)
                } else {
                    next
                }
            }
        }
    }

    /// Regenerate the four handle points.
    ///
    /// Each point's constraints mirror the clamp bounds of the parameter it
    /// drives, so a drag handler can pre-clamp before calling back into
    /// [`BellParameters::update_from_handle`].
    pub fn to_points(&self) -> [Point; 4] {
        let BellParameters {
            center_x,
            center_y,
            left_range_x,
            right_range_x,
            curvature,
        } = *self;

        let left = Point {
            id: BellHandle::LeftRange.id().to_string(),
            x: left_range_x,
            y: 0.0,
            role: PointRole::RangeLeft,
            interpolation: InterpolationKind::Step,
            constraints: Some(Constraints {
                x_range: Some((
                    0.0,
                    (center_x - CENTER_MARGIN).min(right_range_x - MIN_RANGE_WIDTH),
                )),
                y_range: Some((0.0, 0.0)),
                extra: BTreeMap::new(),
            }),
        };

        let right = Point {
            id: BellHandle::RightRange.id().to_string(),
            x: right_range_x,
            y: 0.0,
            role: PointRole::RangeRight,
            interpolation: InterpolationKind::Step,
            constraints: Some(Constraints {
                x_range: Some((
                    (center_x + CENTER_MARGIN).max(left_range_x + MIN_RANGE_WIDTH),
                    1.0,
                )),
                y_range: Some((0.0, 0.0)),
                extra: BTreeMap::new(),
            }),
        };

        let center = Point {
            id: BellHandle::Center.id().to_string(),
            x: center_x,
            y: center_y,
            role: PointRole::BellCenter,
            interpolation: if curvature == 0.0 {
                InterpolationKind::Step
            } else {
                InterpolationKind::BellSmooth
            },
            constraints: Some(Constraints {
                x_range: Some((left_range_x + CENTER_MARGIN, right_range_x - CENTER_MARGIN)),
                y_range: Some((0.0, 1.0)),
                extra: BTreeMap::from([
                    ("curvature".to_string(), curvature),
                    ("range_left".to_string(), left_range_x),
                    ("range_right".to_string(), right_range_x),
                ]),
            }),
        };

        let curvature_handle = Point {
            id: BellHandle::Curvature.id().to_string(),
            x: center_x,
            y: (center_y + CURVATURE_HANDLE_OFFSET).min(1.0),
            role: PointRole::BellCurvature,
            interpolation: InterpolationKind::Linear,
            constraints: Some(Constraints {
                x_range: Some((left_range_x, right_range_x)),
                y_range: Some((0.0, 1.0)),
                extra: BTreeMap::from([
                    ("curvature".to_string(), curvature),
                    ("center_x".to_string(), center_x),
                ]),
            }),
        };

        [left, right, center, curvature_handle]
    }

    /// Recover parameters from a handle list.
    ///
    /// Returns `None` unless the left edge, right edge and centre are all
    /// present. Curvature is read from the curvature handle's `curvature`
    /// extra field and defaults to [`DEFAULT_CURVATURE`]. Values are taken as
    /// found, not clamped.
    pub fn from_points(points: &[Point]) -> Option<BellParameters> {
        let find = |role: PointRole| points.iter().find(|p| p.role == role);

        let left = find(PointRole::RangeLeft)?;
        let right = find(PointRole::RangeRight)?;
        let center = find(PointRole::BellCenter)?;
        let curvature = find(PointRole::BellCurvature)
            .and_then(|p| p.constraints.as_ref())
            .and_then(|c| c.extra("curvature"))
            .unwrap_or(DEFAULT_CURVATURE);

        Some(BellParameters {
            center_x: center.x,
            center_y: center.y,
            left_range_x: left.x,
            right_range_x: right.x,
            curvature,
        })
    }

    /// Evaluate the bell at `x`.
    ///
    /// # Mathematical Definition
    /// ```text
    /// x ∉ [left, right]   → 0  (NaN included)
    /// curvature = 0       → center_y
    /// otherwise           → center_y · exp(−(((x − center_x) / half_width) / curvature)²)
    /// ```
    ///
    /// # Examples
    /// ```
    /// use curve_core::bell::BellParameters;
    ///
    /// let p = BellParameters::default();
    /// assert_eq!(p.evaluate(0.5), 0.5);
    /// assert_eq!(p.evaluate(0.1), 0.0);
    /// assert!((p.evaluate(0.6) - 0.5 * (-0.64_f64).exp()).abs() < 1e-12);
    /// ```
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.left_range_x || x > self.right_range_x {
            return 0.0;
        }
        if self.curvature == 0.0 {
            return self.center_y;
        }

        let half_width = self.half_width();
        if half_width <= 0.0 {
            tracing::warn!(
                left = self.left_range_x,
                right = self.right_range_x,
                "bell range has no width"
            );
            return 0.0;
        }

        let normalized_x = (x - self.center_x) / half_width;
        let z = normalized_x / self.curvature;
        self.center_y * (-(z * z)).exp()
    }
}
