//! Interpolation methods for curve evaluation.
//!
//! This module provides the stateless blend functions that join two values
//! across a unit interval. The piecewise evaluator picks one per segment.
//!
//! ## Available Blends
//!
//! - [`linear`], [`smoothstep`], [`smootherstep`], [`cosine`]
//! - [`exp_ease_in`], [`exp_ease_out`]: exponential eases with exact endpoints
//! - [`elastic`], [`bounce`]: overshooting and bouncing eases
//! - [`cubic_spline_segment`]: Hermite basis form of smoothstep
//!
//! [`Easing`] names the first eight for lookup by string.
//!
//! ## Generic Numerics
//!
//! All functions are generic over `T: num_traits::Float`, so they run on
//! `f32` as well as `f64`.
//!
//! ## Example
//!
//! ```
//! use curve_core::math::interpolators::{smoothstep, Easing};
//!
//! let a = smoothstep(0.25_f64, 0.0, 1.0);
//! let b = Easing::Smoothstep.apply(0.25_f64, 0.0, 1.0);
//! assert_eq!(a, b);
//! ```

mod blend;
mod easing;

// Re-export public items at module level
pub use blend::{
    bounce, cosine, cubic_spline_segment, elastic, exp_ease_in, exp_ease_out, linear,
    smootherstep, smoothstep,
};
pub use easing::Easing;
