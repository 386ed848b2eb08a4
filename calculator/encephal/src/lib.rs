//! Presentation layer for the encephalopathy calculator: value parsing,
//! text/JSON rendering and the interactive session.

pub mod parse;
pub mod render;
pub mod repl;

pub use parse::{parse_assignment, parse_finite, parse_update, InputError};
pub use render::{render_assessment, render_inputs, render_json, TextSink};
pub use repl::ReplSession;
