//! Turning a continuous snapshot into a finite, ordered sample set.
//!
//! Two modes:
//!
//! - **Fixed grid** ([`generate_samples`]): a constant number of evenly spaced
//!   evaluations, for painting under a fixed frame budget.
//! - **Adaptive** ([`adaptive_sample`], [`AdaptiveSampler`]): starts from the
//!   knots and splits only where the function leaves its chord by more than
//!   `2 / sensitivity`. Flat stretches stay coarse; bends get dense.
//!
//! Neither mode keeps state between calls; results depend only on the
//! snapshot passed in.

mod adaptive;

pub use crate::curve::{generate_samples, Sample, DEFAULT_SAMPLE_COUNT};
pub use adaptive::{
    adaptive_sample, AdaptiveSampler, BASE_TOLERANCE, DEFAULT_SENSITIVITY, MIN_SEGMENT_WIDTH,
    PROBE_FRACTIONS,
};
