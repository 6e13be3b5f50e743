//! Utils Module - Constants & Logging Setup
//!
//! Shared helpers used across the application.

pub mod constants;
pub mod telemetry;

pub use constants::*;
pub use telemetry::*;
