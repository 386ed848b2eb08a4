//! Reactive scoring engine for the pancreatitis encephalopathy calculator.
//!
//! A [`Calculator`] owns the patient's [`InputState`] and a [`RiskEngine`].
//! Every effective change of an input recomputes the day-1 and day-3 risk
//! models and hands the resulting [`Assessment`] to a registered
//! [`ResultSink`].
//!
//! Known limitation: a clinical value of exactly zero is treated the same as
//! a value that has not been entered, so a day whose required input is zero
//! always resolves to [`Tier::Unknown`].

pub mod engine;
pub mod input;
pub mod result;
pub mod session;

pub use encephal_config::{CalculatorConfig, Day, Tier};
pub use engine::*;
pub use input::*;
pub use result::*;
pub use session::*;
