//! Command implementations for the CLI

use crate::{
    core::{prompt::Prompter, resolver::resolve},
    error::ScaffoldError,
    utils::process::CommandRunner,
};
use anyhow::Context;
use colored::Colorize;
use std::process::ExitCode;
use tracing::{info, instrument};

/// Terminal result of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The scaffolding tool exited with status zero
    Succeeded,
    /// The scaffolding tool ran and exited unsuccessfully
    Failed { exit_code: Option<i32> },
    /// The selected pair has no scaffolding command; holds the explanation
    Unsupported(String),
    /// The user cancelled a prompt
    Aborted,
}

impl Outcome {
    /// Human-readable status line for this outcome
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Succeeded => "Framework installed successfully!".to_string(),
            Self::Failed {
                exit_code: Some(code),
            } => format!("Error: Framework installation failed with code {code}"),
            Self::Failed { exit_code: None } => {
                "Error: Framework installation failed without an exit code".to_string()
            }
            Self::Unsupported(message) => message.clone(),
            Self::Aborted => "Aborted.".to_string(),
        }
    }

    /// Process exit code for this outcome
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Succeeded => 0,
            Self::Failed {
                exit_code: Some(code),
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            Self::Failed { exit_code: None } | Self::Unsupported(_) => 1,
            Self::Aborted => 130,
        }
    }
}

/// Ask, resolve and launch: one complete run
///
/// Aborted prompts and unsupported combinations are outcomes, not errors;
/// only failures to drive the terminal or start the process are returned as
/// `Err`.
#[instrument(skip_all)]
pub fn execute<P, R>(prompter: &mut P, runner: &R) -> anyhow::Result<Outcome>
where
    P: Prompter + ?Sized,
    R: CommandRunner + ?Sized,
{
    let selection = match prompter.ask_selection() {
        Ok(selection) => selection,
        Err(ScaffoldError::PromptAborted) => return Ok(Outcome::Aborted),
        Err(e) => return Err(e).context("An error occurred while prompting"),
    };

    info!(
        "Selected {} with {} for '{}'",
        selection.framework.id(),
        selection.package_manager,
        selection.project_name
    );

    let spec = match resolve(&selection) {
        Ok(spec) => spec,
        Err(e @ ScaffoldError::UnsupportedCombination { .. }) => {
            return Ok(Outcome::Unsupported(e.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} {}", "+".dimmed(), spec.to_string().bold());

    let result = runner
        .run(&spec)
        .context("Error executing the command")?;

    if result.success() {
        Ok(Outcome::Succeeded)
    } else {
        Ok(Outcome::Failed {
            exit_code: result.exit_code,
        })
    }
}

/// Print the status line for an outcome and turn it into an exit code
pub fn report(outcome: &Outcome) -> ExitCode {
    let message = outcome.message();
    match outcome {
        Outcome::Succeeded => println!("{}", message.green()),
        Outcome::Unsupported(_) => println!("{}", message.yellow()),
        Outcome::Aborted => eprintln!("{}", message.dimmed()),
        Outcome::Failed { .. } => eprintln!("{}", message.red()),
    }
    ExitCode::from(outcome.exit_code())
}
