//! Configuration for the pancreatitis encephalopathy calculator.
//!
//! The regression coefficients, tier thresholds, advisory texts and the
//! "unknown" label are clinical constants. They live here rather than in the
//! scoring engine so they can be updated without touching engine logic.

pub mod config;
pub mod day;
pub mod defaults;

pub use config::*;
pub use day::*;
