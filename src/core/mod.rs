//! Core Module - Audit Pipeline
//!
//! Candidate fallback, the risk analyzer, and the request pipeline.

pub mod analyzer;
pub mod fallback;
pub mod service;

pub use analyzer::*;
pub use fallback::*;
pub use service::*;
