//! The answers collected from the user
//!
//! A `Selection` is built once per run and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Project name used when the user leaves the name prompt blank
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Package managers offered by the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Every package manager, in prompt order
    pub const ALL: [Self; 3] = [Self::Npm, Self::Pnpm, Self::Yarn];

    /// Executable name of the package manager
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Frameworks offered by the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Angular,
    Express,
    Gatsby,
    Next,
    Nuxt,
    React,
    Vue,
}

impl Framework {
    /// Every framework, in prompt order
    pub const ALL: [Self; 7] = [
        Self::Angular,
        Self::Express,
        Self::Gatsby,
        Self::Next,
        Self::Nuxt,
        Self::React,
        Self::Vue,
    ];

    /// Human-readable title shown in the framework menu
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Angular => "Angular (CLI)",
            Self::Express => "Express",
            Self::Gatsby => "Gatsby.js",
            Self::Next => "Next.js",
            Self::Nuxt => "Nuxt",
            Self::React => "React.js",
            Self::Vue => "Vue.js",
        }
    }

    /// Stable identifier of the framework choice
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Angular => "angular",
            Self::Express => "express",
            Self::Gatsby => "gatsby",
            Self::Next => "create-next-app",
            Self::Nuxt => "nuxt",
            Self::React => "create-react-app",
            Self::Vue => "vue",
        }
    }

    /// Map an identifier back to a framework.
    ///
    /// Unknown identifiers fall through to Next.js, which is also the
    /// default branch of the command table.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id.trim() {
            "angular" => Self::Angular,
            "express" => Self::Express,
            "gatsby" => Self::Gatsby,
            "nuxt" => Self::Nuxt,
            "create-react-app" | "react" => Self::React,
            "vue" => Self::Vue,
            _ => Self::Next,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The user's answers for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Chosen package manager
    pub package_manager: PackageManager,
    /// Chosen framework
    pub framework: Framework,
    /// Project name, never empty
    pub project_name: String,
}

impl Selection {
    /// Build a selection, normalizing the raw project name
    pub fn new(
        package_manager: PackageManager,
        framework: Framework,
        project_name: impl AsRef<str>,
    ) -> Self {
        Self {
            package_manager,
            framework,
            project_name: normalize_project_name(project_name.as_ref()),
        }
    }
}

/// Trim the name and fall back to [`DEFAULT_PROJECT_NAME`] when nothing is left
#[must_use]
pub fn normalize_project_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
