//! Bell-filter parametric model.
//!
//! A bell is defined by five numbers held in [`BellParameters`]: a peak
//! `(center_x, center_y)`, a support `[left_range_x, right_range_x]` and a
//! `curvature` acting as inverse width. The record is canonical. The four
//! draggable handles are a derived view produced by
//! [`BellParameters::to_points`] and regenerated in full on every call.
//!
//! ## Data Flow
//!
//! ```text
//! BellParameters ──to_points──▶ [Point; 4] ──(UI drag)──▶ (handle, x, y)
//!       ▲                                                      │
//!       └──────────────── update_from_handle ◀─────────────────┘
//! ```
//!
//! Every operation takes the current record by reference and returns a new
//! one; nothing is mutated in place.
//!
//! ## Example
//!
//! ```
//! use curve_core::bell::{BellHandle, BellParameters};
//!
//! let params = BellParameters::default();
//! let dragged = params.update_from_handle(BellHandle::LeftRange, 0.74, 0.0);
//! assert!((dragged.left_range_x - 0.73).abs() < 1e-12);
//! assert!(dragged.is_valid());
//! ```

mod model;
mod params;

pub use model::{BellHandle, DEFAULT_CURVATURE};
pub use params::{BellParameter, BellParameters, CENTER_MARGIN, MIN_RANGE_WIDTH};
