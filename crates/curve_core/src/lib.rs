//! # curve_core: Function model for the curve and bell-filter editor
//!
//! ## Role
//!
//! curve_core is the computational kernel behind a handle-driven function
//! editor over the unit interval. It provides:
//! - Unit-interval blend functions (`math::interpolators`)
//! - Piecewise evaluation and snapshot editing (`curve`)
//! - The constrained bell-filter model (`bell`)
//! - Fixed-grid and adaptive sampling (`sampling`)
//! - Point model and error types (`types`)
//!
//! ## Pure Data Flow
//!
//! Every operation takes an immutable snapshot (a point slice or a
//! [`bell::BellParameters`] record) and returns a value or a new snapshot.
//! Nothing is cached between calls, so results depend only on the input.
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_core::bell::{BellHandle, BellParameters};
//! use curve_core::curve::{evaluate, CurveSnapshot};
//! use curve_core::sampling::adaptive_sample;
//!
//! // Curve mode
//! let snapshot = CurveSnapshot::default();
//! let y = evaluate(0.35, snapshot.points());
//! # assert!((y - 0.5).abs() < 1e-12);
//!
//! // Bell mode
//! let params = BellParameters::default().update_from_handle(BellHandle::Center, 0.4, 0.8);
//! assert_eq!(params.evaluate(0.4), 0.8);
//!
//! // Sampling
//! let xs = adaptive_sample(snapshot.points(), 1.0);
//! assert_eq!(xs, vec![0.2, 0.5, 0.8]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bell;
pub mod curve;
pub mod math;
pub mod sampling;
pub mod types;
