//! Piecewise curve evaluation and snapshot editing.
//!
//! ## Evaluation Rules
//!
//! For a query `x` over a snapshot sorted by x:
//!
//! 1. no points → `0`
//! 2. one point → that point's `y` everywhere
//! 3. `x` outside the knot span → the nearest boundary `y` (no extrapolation)
//! 4. `x` equal to a knot → that knot's `y`, exactly
//! 5. otherwise blend across the bracketing segment, chosen by [`DispatchRule`]
//!
//! A snapshot with range or centre handles is evaluated as a bell instead;
//! see [`crate::bell`].
//!
//! ## Example
//!
//! ```
//! use curve_core::curve::{evaluate, CurveSnapshot};
//!
//! let snapshot = CurveSnapshot::default();
//! let y = evaluate(0.35, snapshot.points());
//! assert!((y - 0.5).abs() < 1e-12);
//! ```

mod evaluator;
mod snapshot;

pub use evaluator::{
    evaluate, generate_samples, interpolate_segment, segment_easing, DispatchRule,
    EvaluationMode, Evaluator, Sample, DEFAULT_SAMPLE_COUNT, MIN_SAMPLE_COUNT,
};
pub use snapshot::CurveSnapshot;
