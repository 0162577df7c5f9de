//! Error types for the scaffold picker
//!
//! Every variant is terminal for a run: nothing is retried and no fallback
//! package manager or framework is tried.

use crate::core::selection::{Framework, PackageManager};
use thiserror::Error;

/// Main error type for the scaffold picker
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The user cancelled one of the interactive questions
    #[error("Prompt aborted by user")]
    PromptAborted,

    /// The terminal could not be driven for prompting
    #[error("Prompt error: {source}")]
    Prompt {
        #[source]
        source: dialoguer::Error,
    },

    /// No scaffolding command exists for this pair
    #[error("Method is not supported for {} with {package_manager}", .framework.title())]
    UnsupportedCombination {
        framework: Framework,
        package_manager: PackageManager,
    },

    /// The child process could not be started at all
    #[error("Failed to execute command: {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The Ctrl-C handler could not be installed
    #[error("Failed to install interrupt handler: {source}")]
    Interrupt {
        #[source]
        source: ctrlc::Error,
    },
}

impl ScaffoldError {
    /// Create a new unsupported-combination error
    #[must_use]
    pub const fn unsupported(framework: Framework, package_manager: PackageManager) -> Self {
        Self::UnsupportedCombination {
            framework,
            package_manager,
        }
    }

    /// Create a new spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Whether this error means the user walked away from the prompts
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::PromptAborted)
    }
}

impl From<dialoguer::Error> for ScaffoldError {
    fn from(source: dialoguer::Error) -> Self {
        match source {
            dialoguer::Error::IO(ref e) if e.kind() == std::io::ErrorKind::Interrupted => {
                Self::PromptAborted
            }
            source => Self::Prompt { source },
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScaffoldError>;
