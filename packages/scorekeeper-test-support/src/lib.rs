//! Scorekeeper test support utilities
//!
//! Shared helpers for unit and integration tests across the workspace.

pub mod logging;
