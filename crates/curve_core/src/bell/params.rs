//! Bell parameter record and its clamping rules.

use crate::types::CurveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum gap between the centre and either range edge.
pub const CENTER_MARGIN: f64 = 0.01;

/// Minimum width of the bell range.
pub const MIN_RANGE_WIDTH: f64 = 0.02;

/// Canonical bell-mode state.
///
/// Every mutation goes through [`BellParameters::set_parameter`], which keeps
/// the record inside the invariant set:
///
/// ```text
/// left_range_x  ∈ [0, right_range_x − 0.02]
/// right_range_x ∈ [left_range_x + 0.02, 1]
/// center_x      ∈ [left_range_x + 0.01, right_range_x − 0.01]
/// curvature     ∈ [0, 1]
/// ```
///
/// `center_y` is not bounded by the model.
///
/// # Examples
/// ```
/// use curve_core::bell::{BellParameter, BellParameters};
///
/// let params = BellParameters::default().set_parameter(BellParameter::Curvature, 1.5);
/// assert_eq!(params.curvature, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BellParameters {
    /// Peak position
    pub center_x: f64,
    /// Peak height (plateau height when curvature is zero)
    pub center_y: f64,
    /// Left edge of the support
    pub left_range_x: f64,
    /// Right edge of the support
    pub right_range_x: f64,
    /// Inverse width; 0 selects the rectangular plateau
    pub curvature: f64,
}

impl Default for BellParameters {
    fn default() -> Self {
        Self {
            center_x: 0.5,
            center_y: 0.5,
            left_range_x: 0.25,
            right_range_x: 0.75,
            curvature: 0.5,
        }
    }
}

/// Names a single field of [`BellParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BellParameter {
    /// `center_x`
    CenterX,
    /// `center_y`
    CenterY,
    /// `left_range_x`
    LeftRangeX,
    /// `right_range_x`
    RightRangeX,
    /// `curvature`
    Curvature,
}

impl BellParameter {
    /// All parameters in record order.
    pub const ALL: [BellParameter; 5] = [
        BellParameter::CenterX,
        BellParameter::CenterY,
        BellParameter::LeftRangeX,
        BellParameter::RightRangeX,
        BellParameter::Curvature,
    ];

    /// Editor-facing parameter name.
    pub fn name(&self) -> &'static str {
        match self {
            BellParameter::CenterX => "centerX",
            BellParameter::CenterY => "centerY",
            BellParameter::LeftRangeX => "leftRangeX",
            BellParameter::RightRangeX => "rightRangeX",
            BellParameter::Curvature => "curvature",
        }
    }
}

impl fmt::Display for BellParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BellParameter {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "centerX" | "center_x" => Ok(BellParameter::CenterX),
            "centerY" | "center_y" => Ok(BellParameter::CenterY),
            "leftRangeX" | "left_range_x" => Ok(BellParameter::LeftRangeX),
            "rightRangeX" | "right_range_x" => Ok(BellParameter::RightRangeX),
            "curvature" => Ok(BellParameter::Curvature),
            _ => Err(CurveError::UnknownParameter(s.to_string())),
        }
    }
}

impl BellParameters {
    /// Read one field.
    pub fn get(&self, param: BellParameter) -> f64 {
        match param {
            BellParameter::CenterX => self.center_x,
            BellParameter::CenterY => self.center_y,
            BellParameter::LeftRangeX => self.left_range_x,
            BellParameter::RightRangeX => self.right_range_x,
            BellParameter::Curvature => self.curvature,
        }
    }

    /// Write one field and return the re-clamped record.
    ///
    /// The written field is clamped against the others, then the centre is
    /// pushed back inside a range that moved. Writes never fail; a non-finite
    /// value leaves the record unchanged.
    ///
    /// # Examples
    /// ```
    /// use curve_core::bell::{BellParameter, BellParameters};
    ///
    /// let params = BellParameters::default().set_parameter(BellParameter::LeftRangeX, 0.74);
    /// assert!((params.left_range_x - 0.73).abs() < 1e-12);
    /// assert!((params.center_x - 0.74).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn set_parameter(&self, param: BellParameter, value: f64) -> BellParameters {
        if !value.is_finite() {
            tracing::warn!(parameter = %param, value, "ignoring non-finite bell parameter write");
            return *self;
        }

        let mut next = *self;
        match param {
            BellParameter::LeftRangeX => {
                next.left_range_x = 0.0_f64.max(value.min(next.right_range_x - MIN_RANGE_WIDTH));
                next.center_x = next.clamp_center(next.center_x);
            }
            BellParameter::RightRangeX => {
                next.right_range_x = 1.0_f64.min(value.max(next.left_range_x + MIN_RANGE_WIDTH));
                next.center_x = next.clamp_center(next.center_x);
            }
            BellParameter::CenterX => {
                next.center_x = next.clamp_center(value);
            }
            BellParameter::CenterY => {
                next.center_y = value;
            }
            BellParameter::Curvature => {
                next.curvature = value.clamp(0.0, 1.0);
            }
        }
        next
    }

    /// Clamp an arbitrary record into the invariant set.
    ///
    /// Used for records that did not arrive through `set_parameter`, e.g.
    /// deserialised ones. The right edge is settled first, then the left edge
    /// against it, then the centre. Non-finite fields fall back to defaults.
    #[must_use]
    pub fn normalized(&self) -> BellParameters {
        let defaults = BellParameters::default();
        let finite_or = |v: f64, d: f64| if v.is_finite() { v } else { d };

        let right = finite_or(self.right_range_x, defaults.right_range_x).clamp(MIN_RANGE_WIDTH, 1.0);
        let left = finite_or(self.left_range_x, defaults.left_range_x).clamp(0.0, right - MIN_RANGE_WIDTH);

        let mut next = BellParameters {
            center_x: finite_or(self.center_x, defaults.center_x),
            center_y: finite_or(self.center_y, defaults.center_y),
            left_range_x: left,
            right_range_x: right,
            curvature: finite_or(self.curvature, defaults.curvature).clamp(0.0, 1.0),
        };
        next.center_x = next.clamp_center(next.center_x);
        next
    }

    /// Returns true when the record satisfies every invariant.
    pub fn is_valid(&self) -> bool {
        const TOL: f64 = 1e-12;
        self.left_range_x >= -TOL
            && self.left_range_x <= self.right_range_x - MIN_RANGE_WIDTH + TOL
            && self.right_range_x <= 1.0 + TOL
            && self.center_x >= self.left_range_x + CENTER_MARGIN - TOL
            && self.center_x <= self.right_range_x - CENTER_MARGIN + TOL
            && (0.0..=1.0).contains(&self.curvature)
    }

    /// Half of the support width.
    #[inline]
    pub fn half_width(&self) -> f64 {
        (self.right_range_x - self.left_range_x) / 2.0
    }

    #[inline]
    fn clamp_center(&self, x: f64) -> f64 {
        (self.left_range_x + CENTER_MARGIN).max(x.min(self.right_range_x - CENTER_MARGIN))
    }
}
