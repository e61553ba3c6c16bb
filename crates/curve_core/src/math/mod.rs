//! Mathematical building blocks.
//!
//! - `interpolators`: Unit-interval blend functions and the [`interpolators::Easing`] table

pub mod interpolators;
