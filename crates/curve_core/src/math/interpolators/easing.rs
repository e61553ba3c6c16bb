//! Named easing selection over the blend functions.

use super::blend;
use crate::types::CurveError;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// One of the eight named blend functions.
///
/// The names accepted by [`FromStr`] and produced by [`Display`](fmt::Display)
/// are the editor-facing ones (`expEaseIn`, not `exp_ease_in`).
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::Easing;
///
/// let easing: Easing = "smoothstep".parse().unwrap();
/// assert_eq!(easing.apply(0.5_f64, 0.0, 1.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// linear blend
    #[default]
    Linear,
    /// smoothstep blend
    Smoothstep,
    /// smootherstep blend
    Smootherstep,
    /// cosine blend
    Cosine,
    /// exp_ease_in blend
    ExpEaseIn,
    /// exp_ease_out blend
    ExpEaseOut,
    /// elastic blend
    Elastic,
    /// bounce blend
    Bounce,
}

impl Easing {
    /// Every easing, in table order.
    pub const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::Smoothstep,
        Easing::Smootherstep,
        Easing::Cosine,
        Easing::ExpEaseIn,
        Easing::ExpEaseOut,
        Easing::Elastic,
        Easing::Bounce,
    ];

    /// Blend between `y1` and `y2` at `t ∈ [0, 1]`.
    #[inline]
    pub fn apply<T: Float>(&self, t: T, y1: T, y2: T) -> T {
        match self {
            Easing::Linear => blend::linear(t, y1, y2),
            Easing::Smoothstep => blend::smoothstep(t, y1, y2),
            Easing::Smootherstep => blend::smootherstep(t, y1, y2),
            Easing::Cosine => blend::cosine(t, y1, y2),
            Easing::ExpEaseIn => blend::exp_ease_in(t, y1, y2),
            Easing::ExpEaseOut => blend::exp_ease_out(t, y1, y2),
            Easing::Elastic => blend::elastic(t, y1, y2),
            Easing::Bounce => blend::bounce(t, y1, y2),
        }
    }

    /// Editor-facing name.
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Smoothstep => "smoothstep",
            Easing::Smootherstep => "smootherstep",
            Easing::Cosine => "cosine",
            Easing::ExpEaseIn => "expEaseIn",
            Easing::ExpEaseOut => "expEaseOut",
            Easing::Elastic => "elastic",
            Easing::Bounce => "bounce",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Easing {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CurveError::UnknownEasing(s.to_string()))
    }
}
