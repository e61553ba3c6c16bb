//! Core value and error types.
//!
//! This module provides:
//! - `point`: The [`Point`] model with its role, blend tag and drag constraints
//! - `error`: Structured [`CurveError`] for caller errors at API boundaries
//!
//! # Re-exports
//!
//! - [`Point`], [`PointRole`], [`InterpolationKind`], [`Constraints`] from `point`
//! - [`CurveError`] from `error`

pub mod error;
pub mod point;

// Re-export commonly used types at module level
pub use error::CurveError;
pub use point::{Constraints, InterpolationKind, Point, PointRole};
pub(crate) use point::sorted_by_x;
