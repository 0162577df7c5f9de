//! Process execution utilities
//!
//! Launches the resolved scaffolding command with the terminal handed over to
//! it, so the external tool's own prompts and progress output reach the user
//! live.

use crate::{
    core::resolver::CommandSpec,
    error::{Result, ScaffoldError},
};
use std::process::{Command, Stdio};
use tracing::{debug, instrument, warn};

/// Capability to run a resolved command to completion
pub trait CommandRunner {
    /// Run the command, blocking until it exits
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Spawn`] when the process cannot be started.
    fn run(&self, spec: &CommandSpec) -> Result<ExecutionResult>;
}

/// Result of a process execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit status code, absent when the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl ExecutionResult {
    /// Whether the process exited with status zero
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
    shell: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    ///
    /// With `shell` set, the command line is handed to the platform shell
    /// instead of being executed directly.
    #[must_use]
    pub const fn new(debug: bool, shell: bool) -> Self {
        Self { debug, shell }
    }

    /// Build the `std::process::Command` for a spec, without running it
    fn build_command(&self, spec: &CommandSpec) -> Command {
        let mut cmd = if self.shell {
            shell_command(&spec.to_string())
        } else {
            direct_command(spec)
        };

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Check if a command exists in PATH
    #[instrument(skip(self))]
    pub fn command_exists(&self, command: &str) -> bool {
        debug!("Checking if command exists: {}", command);

        let locator = if cfg!(windows) { "where" } else { "which" };
        let result = Command::new(locator)
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                let exists = status.success();
                debug!("Command '{}' exists: {}", command, exists);
                exists
            }
            Err(e) => {
                debug!("Failed to check if command '{}' exists: {}", command, e);
                false
            }
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip_all, fields(command = %spec))]
    fn run(&self, spec: &CommandSpec) -> Result<ExecutionResult> {
        let cmd_str = spec.to_string();

        if self.debug {
            debug!("Running command: {} (shell: {})", cmd_str, self.shell);
            if !self.command_exists(&spec.program) {
                warn!("'{}' was not found in PATH", spec.program);
            }
        }

        let status = self
            .build_command(spec)
            .status()
            .map_err(|e| ScaffoldError::spawn(cmd_str, e))?;

        let result = ExecutionResult {
            exit_code: status.code(),
        };
        debug!("Command finished: exit_code={:?}", result.exit_code);
        Ok(result)
    }
}

#[cfg(not(windows))]
fn direct_command(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    cmd
}

// npm, pnpm and yarn are `.cmd` shims on Windows and only start through cmd,
// so every token is caret-escaped to keep cmd from interpreting it.
#[cfg(windows)]
fn direct_command(spec: &CommandSpec) -> Command {
    use std::os::windows::process::CommandExt;

    let line = std::iter::once(&spec.program)
        .chain(&spec.args)
        .map(|token| escape_cmd_token(token))
        .collect::<Vec<_>>()
        .join(" ");

    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(line);
    cmd
}

/// Prefix every cmd.exe metacharacter with `^`
#[cfg(any(windows, test))]
fn escape_cmd_token(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    for c in token.chars() {
        if matches!(c, '^' | '&' | '|' | '<' | '>' | '(' | ')' | '%' | '!' | '"') {
            escaped.push('^');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true, true);
        assert!(runner.debug);
        assert!(runner.shell);

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
        assert!(!runner.shell);
    }

    #[test]
    fn test_execution_result_success() {
        assert!(ExecutionResult { exit_code: Some(0) }.success());
        assert!(!ExecutionResult { exit_code: Some(1) }.success());
        assert!(!ExecutionResult { exit_code: None }.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_successful_command() {
        let runner = ProcessRunner::new(false, false);
        let result = runner.run(&CommandSpec::new("true", Vec::<String>::new())).unwrap();
        assert_eq!(result.exit_code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::new(false, false);
        let result = runner.run(&CommandSpec::new("false", Vec::<String>::new())).unwrap();
        assert_eq!(result.exit_code, Some(1));
        assert!(!result.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = ProcessRunner::new(true, false);
        let err = runner
            .run(&CommandSpec::new("nonexistent_command_12345", ["create"]))
            .unwrap_err();

        match err {
            ScaffoldError::Spawn { command, source } => {
                assert_eq!(command, "nonexistent_command_12345 create");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_direct_launch_keeps_metacharacters_literal() {
        let spec = CommandSpec::new("test", ["-z", "$SCAFFOLD_PICKER_UNSET_12345"]);

        // Passed as-is, the operand is a non-empty literal.
        let direct = ProcessRunner::new(false, false).run(&spec).unwrap();
        assert_eq!(direct.exit_code, Some(1));

        // Through the shell it expands to nothing.
        let shelled = ProcessRunner::new(false, true).run(&spec).unwrap();
        assert_eq!(shelled.exit_code, Some(0));
    }

    #[test]
    fn test_cmd_escaping_neutralizes_metacharacters() {
        assert_eq!(escape_cmd_token("my-app"), "my-app");
        assert_eq!(escape_cmd_token("a&b|c"), "a^&b^|c");
        assert_eq!(escape_cmd_token("%PATH%"), "^%PATH^%");
        assert_eq!(escape_cmd_token("x^y>z"), "x^^y^>z");
        assert_eq!(escape_cmd_token("@angular/cli"), "@angular/cli");
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_launch_interprets_line() {
        let runner = ProcessRunner::new(false, true);
        let spec = CommandSpec::new("exit", ["3"]);
        assert_eq!(runner.run(&spec).unwrap().exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_exists() {
        let runner = ProcessRunner::default();
        assert!(runner.command_exists("sh"));
        assert!(!runner.command_exists("nonexistent_command_12345"));
    }
}
