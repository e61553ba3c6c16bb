//! Piecewise evaluation of a point snapshot.

use crate::bell::BellParameters;
use crate::math::interpolators::{cubic_spline_segment, Easing};
use crate::types::{sorted_by_x, CurveError, InterpolationKind, Point, PointRole};
use serde::{Deserialize, Serialize};

/// Smallest fixed-grid sample count.
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Default fixed-grid sample count for painting.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// One evaluated `(x, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Position
    pub x: f64,
    /// Function value at `x`
    pub y: f64,
}

/// How a segment picks its blend from the tags of its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchRule {
    /// Smoothstep when either endpoint is tagged smooth, linear otherwise.
    #[default]
    SegmentRule,
    /// Only the left endpoint's tag counts: `CubicSpline` uses the Hermite
    /// basis, everything else (including `Bezier`) blends linearly.
    LeadingTag,
}

impl DispatchRule {
    /// Blend across the segment `[left, right]` at `t ∈ [0, 1]`.
    #[inline]
    pub fn blend(&self, left: &Point, right: &Point, t: f64) -> f64 {
        match self {
            DispatchRule::SegmentRule => {
                segment_easing(left.interpolation, right.interpolation).apply(t, left.y, right.y)
            }
            DispatchRule::LeadingTag => match left.interpolation {
                InterpolationKind::CubicSpline => cubic_spline_segment(t, left.y, right.y),
                InterpolationKind::Linear
                | InterpolationKind::Bezier
                | InterpolationKind::BellSmooth
                | InterpolationKind::Step => Easing::Linear.apply(t, left.y, right.y),
            },
        }
    }
}

/// Easing chosen by [`DispatchRule::SegmentRule`] for a pair of tags.
///
/// # Examples
/// ```
/// use curve_core::curve::segment_easing;
/// use curve_core::math::interpolators::Easing;
/// use curve_core::types::InterpolationKind;
///
/// assert_eq!(
///     segment_easing(InterpolationKind::Linear, InterpolationKind::CubicSpline),
///     Easing::Smoothstep
/// );
/// assert_eq!(
///     segment_easing(InterpolationKind::Linear, InterpolationKind::Step),
///     Easing::Linear
/// );
/// ```
#[inline]
pub fn segment_easing(left: InterpolationKind, right: InterpolationKind) -> Easing {
    if left.is_smooth() || right.is_smooth() {
        Easing::Smoothstep
    } else {
        Easing::Linear
    }
}

/// Interpolate between two x-adjacent points.
///
/// A segment of zero (or negative) width is a caller error: it is reported as
/// a warning and the left endpoint's value is returned.
pub fn interpolate_segment(left: &Point, right: &Point, x: f64, rule: DispatchRule) -> f64 {
    let width = right.x - left.x;
    if !(width > 0.0) {
        tracing::warn!(
            left = %left.id,
            right = %right.id,
            width,
            "degenerate segment, falling back to left value"
        );
        return left.y;
    }

    let t = (x - left.x) / width;
    rule.blend(left, right, t)
}

/// Which evaluation path a snapshot takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Piecewise blend over control points
    Curve,
    /// Closed-form bell from range and centre handles
    Bell,
}

#[derive(Debug, Clone)]
enum Model {
    Curve(Vec<Point>),
    Bell(Option<BellParameters>),
}

/// Evaluator over one sorted snapshot.
///
/// Construction copies and sorts the points once, so repeated queries on an
/// unchanged snapshot avoid re-sorting. The caller's slice is never touched.
///
/// A snapshot containing any range or centre handle is evaluated in bell
/// mode; otherwise only its control points take part.
///
/// # Example
///
/// ```
/// use curve_core::curve::Evaluator;
/// use curve_core::types::{InterpolationKind, Point};
///
/// let points = vec![
///     Point::control("a", 0.0, 0.0, InterpolationKind::Linear),
///     Point::control("b", 1.0, 1.0, InterpolationKind::Linear),
/// ];
/// let evaluator = Evaluator::new(&points);
/// assert_eq!(evaluator.evaluate(0.25), 0.25);
/// assert_eq!(evaluator.evaluate(-3.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    model: Model,
    rule: DispatchRule,
    domain: Option<(f64, f64)>,
}

impl Evaluator {
    /// Build an evaluator with the default [`DispatchRule`].
    pub fn new(points: &[Point]) -> Self {
        Self::with_rule(points, DispatchRule::default())
    }

    /// Build an evaluator with an explicit segment dispatch rule.
    pub fn with_rule(points: &[Point], rule: DispatchRule) -> Self {
        let sorted = sorted_by_x(points);
        let domain = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => Some((first.x, last.x)),
            _ => None,
        };

        let model = if sorted.iter().any(|p| p.role.is_bell_anchor()) {
            Model::Bell(BellParameters::from_points(&sorted))
        } else {
            Model::Curve(
                sorted
                    .into_iter()
                    .filter(|p| p.role == PointRole::Control)
                    .collect(),
            )
        };

        Self {
            model,
            rule,
            domain,
        }
    }

    /// Evaluation path chosen for this snapshot.
    pub fn mode(&self) -> EvaluationMode {
        match self.model {
            Model::Curve(_) => EvaluationMode::Curve,
            Model::Bell(_) => EvaluationMode::Bell,
        }
    }

    /// Smallest and largest x over every point of the snapshot.
    ///
    /// `None` for an empty snapshot.
    #[inline]
    pub fn domain(&self) -> Option<(f64, f64)> {
        self.domain
    }

    /// Evaluate the function at `x`.
    ///
    /// Never fails: an empty snapshot gives 0, queries outside the knot span
    /// take the nearest boundary value, and a knot's own x returns its y
    /// exactly. In bell mode a missing left, right or centre handle gives 0.
    pub fn evaluate(&self, x: f64) -> f64 {
        match &self.model {
            Model::Curve(knots) => self.evaluate_curve(knots, x),
            Model::Bell(params) => params.map_or(0.0, |p| p.evaluate(x)),
        }
    }

    fn evaluate_curve(&self, knots: &[Point], x: f64) -> f64 {
        match knots {
            [] => 0.0,
            [only] => only.y,
            [first, .., last] => {
                // first knot with knot.x >= x
                let idx = knots.partition_point(|p| p.x < x);
                if idx < knots.len() && knots[idx].x == x {
                    return knots[idx].y;
                }
                if idx == 0 {
                    return first.y;
                }
                if idx == knots.len() {
                    return last.y;
                }
                interpolate_segment(&knots[idx - 1], &knots[idx], x, self.rule)
            }
        }
    }

    /// Evaluate on `sample_count` evenly spaced x across the domain.
    ///
    /// Both domain ends are included. An empty snapshot yields no samples.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidSampleCount` when `sample_count < 2`.
    pub fn generate_samples(&self, sample_count: usize) -> Result<Vec<Sample>, CurveError> {
        if sample_count < MIN_SAMPLE_COUNT {
            return Err(CurveError::InvalidSampleCount {
                got: sample_count,
                need: MIN_SAMPLE_COUNT,
            });
        }

        let Some((min_x, max_x)) = self.domain else {
            return Ok(Vec::new());
        };

        let last = sample_count - 1;
        let samples = (0..sample_count)
            .map(|i| {
                let x = if i == last {
                    max_x
                } else {
                    min_x + (max_x - min_x) * (i as f64 / last as f64)
                };
                Sample {
                    x,
                    y: self.evaluate(x),
                }
            })
            .collect();

        Ok(samples)
    }
}

/// Evaluate `points` at `x` with the default dispatch rule.
///
/// Convenience wrapper for one-off queries; build an [`Evaluator`] when
/// querying the same snapshot many times.
///
/// # Examples
/// ```
/// use curve_core::curve::evaluate;
/// use curve_core::types::{InterpolationKind, Point};
///
/// let points = vec![
///     Point::control("a", 0.2, 0.3, InterpolationKind::CubicSpline),
///     Point::control("b", 0.5, 0.7, InterpolationKind::CubicSpline),
/// ];
/// assert!((evaluate(0.35, &points) - 0.5).abs() < 1e-12);
/// assert_eq!(evaluate(0.35, &[]), 0.0);
/// ```
pub fn evaluate(x: f64, points: &[Point]) -> f64 {
    Evaluator::new(points).evaluate(x)
}

/// Fixed-grid sampling of `points`. See [`Evaluator::generate_samples`].
pub fn generate_samples(points: &[Point], sample_count: usize) -> Result<Vec<Sample>, CurveError> {
    Evaluator::new(points).generate_samples(sample_count)
}
