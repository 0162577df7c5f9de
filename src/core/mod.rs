//! Core functionality for picking a scaffolding command
//!
//! Contains the user's selection, the interactive prompts that collect it,
//! and the table that turns it into an external command.

pub mod prompt;
pub mod resolver;
pub mod selection;

pub use prompt::{DialoguerPrompter, Prompter, ScriptedPrompter};
pub use resolver::{CommandSpec, resolve};
pub use selection::{DEFAULT_PROJECT_NAME, Framework, PackageManager, Selection};
