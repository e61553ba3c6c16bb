//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! result to the given writer and log progress through `tracing`.

pub mod adaptive;
pub mod bell;
pub mod evaluate;
pub mod sample;
pub mod snapshot;
