use std::env;
use std::process::Command;

use super::{signal, ExecError};
use crate::path::PathExpander;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    ChangeDirectory(String),
    Shell,
}

/// A command is a directory change iff its trimmed text starts with the
/// literal token `cd` followed by whitespace. Bare `cd` runs as a shell
/// command like anything else.
pub fn classify(command: &str) -> CommandKind {
    let trimmed = command.trim();
    if let Some(rest) = trimmed.strip_prefix("cd") {
        if rest.chars().next().is_some_and(char::is_whitespace) {
            return CommandKind::ChangeDirectory(rest.trim().to_string());
        }
    }
    CommandKind::Shell
}

/// A child process cannot change its parent shell's directory, so `cd` has
/// two modes: change this process's directory (visible to this process only,
/// for scripting use), or emit a `cd <path>` line for the invoking shell to
/// eval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    InProcessChangeDirectory,
    EmitForShellEvaluation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    fn ok(stdout: String) -> Self {
        ExecutionResult {
            exit_code: 0,
            stdout,
            stderr: String::new(),
        }
    }

    fn failed(stderr: String) -> Self {
        ExecutionResult {
            exit_code: 1,
            stdout: String::new(),
            stderr,
        }
    }
}

pub struct CommandRunner {
    mode: ExecutionMode,
    expander: PathExpander,
}

impl CommandRunner {
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            mode,
            expander: PathExpander::new(),
        }
    }

    /// A wrapped command's own failure is a normal non-zero result; only a
    /// failure to launch it at all is an error.
    pub fn execute(&self, command: &str) -> Result<ExecutionResult, ExecError> {
        match classify(command) {
            CommandKind::ChangeDirectory(target) => Ok(self.change_directory(&target)),
            CommandKind::Shell => self.run_shell(command),
        }
    }

    fn change_directory(&self, target: &str) -> ExecutionResult {
        let expanded = match self.expander.expand_full(target) {
            Ok(path) => path,
            Err(e) => return ExecutionResult::failed(format!("cd: {}", e)),
        };

        match self.mode {
            ExecutionMode::EmitForShellEvaluation => {
                ExecutionResult::ok(format!("cd {}\n", expanded.display()))
            }
            ExecutionMode::InProcessChangeDirectory => {
                if let Err(e) = env::set_current_dir(&expanded) {
                    return ExecutionResult::failed(format!(
                        "cd: {}: {}",
                        expanded.display(),
                        e
                    ));
                }

                let current = env::current_dir()
                    .map(|dir| dir.to_string_lossy().into_owned())
                    .unwrap_or_else(|_| expanded.to_string_lossy().into_owned());
                ExecutionResult::ok(format!("{}\n", current))
            }
        }
    }

    fn run_shell(&self, command: &str) -> Result<ExecutionResult, ExecError> {
        signal::install_sigint_passthrough();

        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(ExecError::LaunchFailure)?;

        Ok(ExecutionResult {
            // None means the child was killed by a signal
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
