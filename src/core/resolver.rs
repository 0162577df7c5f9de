//! Selection-to-command resolution
//!
//! Maps a (package manager, framework) pair to the scaffolding command that
//! the framework's own tooling provides. The table is a single exhaustive
//! `match`, so adding a framework or package manager without a rule fails to
//! compile.

use crate::{
    core::selection::{Framework, PackageManager, Selection},
    error::{Result, ScaffoldError},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// An external program and its ordered arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Executable name
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command spec from a program and its arguments
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Resolve a selection to the command that scaffolds it
///
/// # Errors
///
/// Returns [`ScaffoldError::UnsupportedCombination`] for Nuxt and Angular with
/// anything other than npm.
#[instrument(skip(selection), fields(pm = %selection.package_manager, framework = selection.framework.id()))]
pub fn resolve(selection: &Selection) -> Result<CommandSpec> {
    use Framework as F;
    use PackageManager as P;

    let name = selection.project_name.as_str();
    let pm = selection.package_manager;

    let spec = match (selection.framework, pm) {
        (F::React, P::Npm) => CommandSpec::new("npx", ["create-react-app", name]),
        (F::React, P::Pnpm | P::Yarn) => CommandSpec::new(pm.program(), ["create", "react-app", name]),

        // Always npm, whatever package manager was picked.
        (F::Vue, P::Npm | P::Pnpm | P::Yarn) => {
            CommandSpec::new("npm", ["create", "vue@latest", name])
        }

        (F::Nuxt, P::Npm) => CommandSpec::new("npx", ["nuxi@latest", "init", name]),
        (F::Nuxt, P::Pnpm | P::Yarn) => return Err(ScaffoldError::unsupported(F::Nuxt, pm)),

        // Installs the CLI globally; the project name is not used.
        (F::Angular, P::Npm) => CommandSpec::new("npm", ["install", "-g", "@angular/cli"]),
        (F::Angular, P::Pnpm | P::Yarn) => {
            return Err(ScaffoldError::unsupported(F::Angular, pm));
        }

        // Express and Gatsby install into the current directory.
        (F::Express, P::Npm | P::Pnpm) => CommandSpec::new(pm.program(), ["install", "express"]),
        (F::Express, P::Yarn) => CommandSpec::new("yarn", ["add", "express"]),

        (F::Gatsby, P::Npm | P::Yarn) => CommandSpec::new(pm.program(), ["init", "gatsby"]),
        (F::Gatsby, P::Pnpm) => CommandSpec::new("pnpm", ["create", "gatsby"]),

        (F::Next, P::Npm | P::Pnpm | P::Yarn) => {
            CommandSpec::new(pm.program(), ["create", "next-app", name])
        }
    };

    debug!("Resolved command: {}", spec);
    Ok(spec)
}
