//! # Scaffold Picker
//!
//! Interactive launcher for the official JavaScript framework scaffolding
//! tools. Asks for a package manager, a framework and a project name, then
//! hands the terminal over to the matching generator (`create-react-app`,
//! `create-next-app`, `nuxi`, ...).
//!
//! ## Features
//!
//! - npm, pnpm and yarn
//! - Angular, Express, Gatsby, Next.js, Nuxt, React and Vue
//! - Exhaustive (package manager, framework) command table
//! - Prompting and process launch behind traits for testing
//!
//! ## Example
//!
//! ```no_run
//! use scaffold_picker::core::{Framework, PackageManager, Selection, resolve};
//!
//! let selection = Selection::new(PackageManager::Yarn, Framework::React, "");
//! let spec = resolve(&selection)?;
//! assert_eq!(spec.to_string(), "yarn create react-app my-app");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr and stay quiet below `warn` unless debugging, so the
/// interactive prompts are not interleaved with log lines.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
