//! Export, replay and evaluation tooling around the scorekeeper core.

pub mod error;
pub mod evaluation;
pub mod output;
pub mod script;
pub mod simulator;
pub mod types;

pub use error::ToolError;
