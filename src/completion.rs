use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::error::ZError;

const MARKER: &str = "# z completion";

const BASH_SNIPPET: &str = r#"# z completion
_z_complete() {
    local cur="${COMP_WORDS[COMP_CWORD]}"
    COMPREPLY=($(compgen -W "add attach list ls delete clear search alias stats help" -- "$cur"))
}
complete -F _z_complete z
"#;

const ZSH_SNIPPET: &str = r#"# z completion
_z() {
    compadd add attach list ls delete clear search alias stats help
}
compdef _z z
"#;

#[derive(Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    Installed(PathBuf),
    AlreadyInstalled(PathBuf),
    UnsupportedShell(String),
}

/// Appends a completion block to the rc file of the shell named by `$SHELL`,
/// once. The caller renders the outcome.
pub fn install_completion() -> Result<CompletionOutcome, ZError> {
    let shell = env::var("SHELL").unwrap_or_default();
    let shell_name = shell.rsplit('/').next().unwrap_or("").to_string();

    let (rc_name, snippet) = match shell_name.as_str() {
        "bash" => (".bashrc", BASH_SNIPPET),
        "zsh" => (".zshrc", ZSH_SNIPPET),
        _ => return Ok(CompletionOutcome::UnsupportedShell(shell_name)),
    };

    let rc_path = dirs::home_dir()
        .ok_or(ZError::HomeDirNotFound)?
        .join(rc_name);

    install_into(rc_path, snippet)
}

fn install_into(rc_path: PathBuf, snippet: &str) -> Result<CompletionOutcome, ZError> {
    // A missing rc file is created fresh
    if let Ok(content) = fs::read_to_string(&rc_path) {
        if content.contains(MARKER) {
            return Ok(CompletionOutcome::AlreadyInstalled(rc_path));
        }
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&rc_path)?;

    writeln!(file)?;
    file.write_all(snippet.as_bytes())?;

    Ok(CompletionOutcome::Installed(rc_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_install_into_missing_file() {
        let dir = TempDir::new().unwrap();
        let rc_path = dir.path().join(".bashrc");

        let outcome = install_into(rc_path.clone(), BASH_SNIPPET).unwrap();

        assert_eq!(outcome, CompletionOutcome::Installed(rc_path.clone()));
        assert!(fs::read_to_string(&rc_path).unwrap().contains(MARKER));
    }

    #[test]
    fn test_install_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let rc_path = dir.path().join(".zshrc");
        fs::write(&rc_path, "export EDITOR=vi\n").unwrap();

        install_into(rc_path.clone(), ZSH_SNIPPET).unwrap();
        let outcome = install_into(rc_path.clone(), ZSH_SNIPPET).unwrap();

        assert_eq!(outcome, CompletionOutcome::AlreadyInstalled(rc_path.clone()));

        let content = fs::read_to_string(&rc_path).unwrap();
        assert_eq!(content.matches(MARKER).count(), 1);
        assert!(content.starts_with("export EDITOR=vi\n"));
    }
}
