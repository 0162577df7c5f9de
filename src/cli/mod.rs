//! Command-line interface module
//!
//! Provides argument parsing and the prompt → resolve → launch flow.

pub mod args;
pub mod commands;

pub use args::{Args, parse_args};
pub use commands::{Outcome, execute, report};
