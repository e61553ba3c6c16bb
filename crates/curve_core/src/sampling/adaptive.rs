//! Error-bounded adaptive sampling.

use crate::curve::{Evaluator, Sample};
use crate::types::Point;

/// Default sensitivity.
pub const DEFAULT_SENSITIVITY: f64 = 1.0;

/// Segments narrower than this are never split.
pub const MIN_SEGMENT_WIDTH: f64 = 0.005;

/// Deviation tolerance at sensitivity 1; the threshold is this over sensitivity.
pub const BASE_TOLERANCE: f64 = 2.0;

/// Interior fractions probed on every segment.
pub const PROBE_FRACTIONS: [f64; 7] = [0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];

/// Adaptive sampler settings.
///
/// Starting from the sorted point x's, each segment is probed at
/// [`PROBE_FRACTIONS`]; the worst deviation of the true function from the
/// chord between the segment's end values decides whether the worst probe
/// is added and both halves are examined in turn.
///
/// Refinement only ever adds x's, and a lower threshold never removes a
/// split, so raising `sensitivity` never shrinks the result.
///
/// # Example
///
/// ```
/// use curve_core::sampling::AdaptiveSampler;
/// use curve_core::types::{InterpolationKind, Point};
///
/// let points = vec![
///     Point::control("a", 0.0, 0.0, InterpolationKind::Linear),
///     Point::control("b", 1.0, 1.0, InterpolationKind::Linear),
/// ];
/// assert_eq!(AdaptiveSampler::default().sample(&points), vec![0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSampler {
    /// Inverse tolerance; higher means more samples
    pub sensitivity: f64,
    /// Width below which a segment is not split
    pub min_segment: f64,
}

impl Default for AdaptiveSampler {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            min_segment: MIN_SEGMENT_WIDTH,
        }
    }
}

impl AdaptiveSampler {
    /// Sampler with the given sensitivity and the default width floor.
    pub fn new(sensitivity: f64) -> Self {
        Self {
            sensitivity,
            ..Self::default()
        }
    }

    /// Deviation above which a segment is split.
    ///
    /// `None` when sensitivity is not a positive finite number, which
    /// disables refinement.
    pub fn threshold(&self) -> Option<f64> {
        if self.sensitivity.is_finite() && self.sensitivity > 0.0 {
            Some(BASE_TOLERANCE / self.sensitivity)
        } else {
            None
        }
    }

    /// Sorted, de-duplicated sample x's for `points`.
    pub fn sample(&self, points: &[Point]) -> Vec<f64> {
        let evaluator = Evaluator::new(points);
        let knots: Vec<f64> = points.iter().map(|p| p.x).collect();
        self.sample_with(&evaluator, &knots)
    }

    /// Samples paired with their function values, ready for painting.
    pub fn sample_points(&self, points: &[Point]) -> Vec<Sample> {
        let evaluator = Evaluator::new(points);
        let knots: Vec<f64> = points.iter().map(|p| p.x).collect();
        self.sample_with(&evaluator, &knots)
            .into_iter()
            .map(|x| Sample {
                x,
                y: evaluator.evaluate(x),
            })
            .collect()
    }

    /// Refine between `knots` using `evaluator` as the true function.
    ///
    /// Non-finite knots are dropped.
    pub fn sample_with(&self, evaluator: &Evaluator, knots: &[f64]) -> Vec<f64> {
        let mut xs: Vec<f64> = knots.iter().copied().filter(|x| x.is_finite()).collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();

        let Some(threshold) = self.threshold() else {
            tracing::warn!(
                sensitivity = self.sensitivity,
                "sensitivity must be positive and finite, skipping refinement"
            );
            return xs;
        };

        let floor = if self.min_segment > 0.0 {
            self.min_segment
        } else {
            tracing::warn!(
                min_segment = self.min_segment,
                "non-positive segment floor, using default"
            );
            MIN_SEGMENT_WIDTH
        };

        let mut samples = xs.clone();
        let mut pending: Vec<(f64, f64)> = xs.windows(2).map(|w| (w[0], w[1])).collect();

        while let Some((start, end)) = pending.pop() {
            let width = end - start;
            // width check first: bounds the work regardless of deviation
            if !(width >= floor) {
                continue;
            }

            let (max_deviation, worst_x) = worst_probe(evaluator, start, end);
            if max_deviation > threshold {
                samples.push(worst_x);
                pending.push((start, worst_x));
                pending.push((worst_x, end));
            }
        }

        samples.sort_by(f64::total_cmp);
        samples.dedup();

        tracing::debug!(
            knots = xs.len(),
            samples = samples.len(),
            sensitivity = self.sensitivity,
            "adaptive sampling finished"
        );
        samples
    }
}

/// Largest chord deviation over the probe fractions and where it occurs.
fn worst_probe(evaluator: &Evaluator, start: f64, end: f64) -> (f64, f64) {
    let width = end - start;
    let start_y = evaluator.evaluate(start);
    let end_y = evaluator.evaluate(end);

    let mut max_deviation = 0.0;
    let mut worst_x = (start + end) / 2.0;

    for t in PROBE_FRACTIONS {
        let probe_x = start + t * width;
        let actual = evaluator.evaluate(probe_x);
        let chord = start_y + t * (end_y - start_y);
        let deviation = (actual - chord).abs();

        if deviation > max_deviation {
            max_deviation = deviation;
            worst_x = probe_x;
        }
    }

    (max_deviation, worst_x)
}

/// Adaptive sampling with the default width floor.
///
/// # Examples
/// ```
/// use curve_core::bell::BellParameters;
/// use curve_core::sampling::adaptive_sample;
///
/// let points = BellParameters::default().to_points();
/// let coarse = adaptive_sample(&points, 1.0);
/// let fine = adaptive_sample(&points, 100.0);
/// assert!(coarse.len() <= fine.len());
/// ```
pub fn adaptive_sample(points: &[Point], sensitivity: f64) -> Vec<f64> {
    AdaptiveSampler::new(sensitivity).sample(points)
}
