mod resolver;
mod runner;
mod signal;

pub use resolver::resolve;
pub use runner::{classify, CommandKind, CommandRunner, ExecutionMode, ExecutionResult};

use crate::store::{CommandStore, StoreError};

#[derive(Debug)]
pub enum ExecError {
    NotFound(String),
    LaunchFailure(std::io::Error),
    Store(StoreError),
}

impl From<StoreError> for ExecError {
    fn from(err: StoreError) -> Self {
        ExecError::Store(err)
    }
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecError::NotFound(key) => write!(f, "no command found for '{}'", key),
            ExecError::LaunchFailure(e) => write!(f, "failed to launch shell: {}", e),
            ExecError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExecError {}

/// Resolves a key, runs the command, and counts the attempt against the exact
/// command text whether or not it succeeded.
pub fn resolve_and_execute(
    key: &str,
    store: &mut CommandStore,
    mode: ExecutionMode,
) -> Result<(String, ExecutionResult), ExecError> {
    let (_, command) = resolve(key, store)?;

    let runner = CommandRunner::new(mode);
    let outcome = runner.execute(&command);
    let recorded = store.record_execution(&command);

    let result = outcome?;
    recorded?;
    Ok((command, result))
}
