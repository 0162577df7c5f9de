//! Configuration management for the scaffold picker
//!
//! Built from command-line flags only; nothing is read from disk or the
//! environment.

use crate::{cli::Args, utils::process::ProcessRunner};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Launch the scaffolding command through the platform shell
    pub shell: bool,
}

impl Config {
    /// Create configuration from command line arguments
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            shell: args.shell,
        }
    }

    /// Process runner matching this configuration
    #[must_use]
    pub const fn process_runner(&self) -> ProcessRunner {
        ProcessRunner::new(self.debug, self.shell)
    }
}
