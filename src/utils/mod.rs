//! Utility modules for common functionality
//!
//! Provides process execution for the resolved scaffolding command and the
//! Ctrl-C handling around the prompts.

pub mod process;
pub mod signal;

pub use process::{CommandRunner, ExecutionResult, ProcessRunner};
pub use signal::install_interrupt_handler;
