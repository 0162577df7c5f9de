//! Interactive prompting
//!
//! The rest of the crate only sees the [`Prompter`] trait: it either produces
//! a [`Selection`] or reports that the user aborted.

use crate::{
    core::selection::{DEFAULT_PROJECT_NAME, Framework, PackageManager, Selection},
    error::{Result, ScaffoldError},
    utils::signal::restore_cursor,
};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use tracing::{debug, instrument};

/// Source of the user's answers
pub trait Prompter {
    /// Ask every question in order and collect the answers
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::PromptAborted`] when the user cancels a question.
    fn ask_selection(&mut self) -> Result<Selection>;
}

/// Prompter backed by the real terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    /// Create a new terminal prompter
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn ask_package_manager(&self) -> Result<PackageManager> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Which package manager do you want to use?")
            .items(&PackageManager::ALL.map(PackageManager::program))
            .default(0)
            .interact_opt()?
            .ok_or(ScaffoldError::PromptAborted)?;

        Ok(PackageManager::ALL[index])
    }

    fn ask_framework(&self) -> Result<Framework> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Select a framework:")
            .items(&Framework::ALL.map(Framework::title))
            .default(0)
            .interact_opt()?
            .ok_or(ScaffoldError::PromptAborted)?;

        Ok(Framework::ALL[index])
    }

    fn ask_project_name(&self) -> Result<String> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Enter the name of your project (press Enter to use default name):")
            .default(DEFAULT_PROJECT_NAME.to_string())
            .allow_empty(true)
            .interact_text()?;

        Ok(name)
    }

    /// Package manager, then framework, then project name
    fn ask_in_order(&self) -> Result<Selection> {
        let package_manager = self.ask_package_manager()?;
        debug!("Package manager: {}", package_manager);

        let framework = self.ask_framework()?;
        debug!("Framework: {}", framework.id());

        let name = self.ask_project_name()?;
        let selection = Selection::new(package_manager, framework, name);
        debug!("Project name: {}", selection.project_name);

        Ok(selection)
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    #[instrument(skip(self))]
    fn ask_selection(&mut self) -> Result<Selection> {
        self.ask_in_order().inspect_err(|_| restore_cursor())
    }
}

/// Prompter that replays a fixed answer, for tests and embedding
#[derive(Debug, Clone)]
pub struct ScriptedPrompter {
    answer: Option<Selection>,
    asked: usize,
}

impl ScriptedPrompter {
    /// Answer every question with the given selection
    #[must_use]
    pub const fn answering(selection: Selection) -> Self {
        Self {
            answer: Some(selection),
            asked: 0,
        }
    }

    /// Behave like a user who cancels the first question
    #[must_use]
    pub const fn aborting() -> Self {
        Self {
            answer: None,
            asked: 0,
        }
    }

    /// How many times the selection was requested
    #[must_use]
    pub const fn times_asked(&self) -> usize {
        self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_selection(&mut self) -> Result<Selection> {
        self.asked += 1;
        self.answer.clone().ok_or(ScaffoldError::PromptAborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompter_answers() {
        let selection = Selection::new(PackageManager::Pnpm, Framework::React, "web");
        let mut prompter = ScriptedPrompter::answering(selection.clone());

        assert_eq!(prompter.ask_selection().unwrap(), selection);
        assert_eq!(prompter.times_asked(), 1);
    }

    #[test]
    fn test_scripted_prompter_aborts() {
        let mut prompter = ScriptedPrompter::aborting();
        let err = prompter.ask_selection().unwrap_err();
        assert!(err.is_aborted());
    }
}
