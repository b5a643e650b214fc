//! Persisted command store: an ordered list of shell commands addressed by
//! dense 1-based positions, an optional alias map, and execution counters.
//!
//! Every operation runs a full load-mutate-save cycle within one short-lived
//! process invocation. The cycle takes no lock, so two simultaneous
//! invocations can race and one writer's update may be lost.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

mod aliases;
mod file_ops;
mod stats;

pub use stats::{StatsSummary, UsageStats};

use aliases::AliasManager;
use file_ops::FileOps;

#[derive(Debug)]
pub enum StoreError {
    InvalidInput(String),
    NotFound(usize),
    Persistence(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            StoreError::NotFound(position) => {
                write!(f, "No command found at line {}", position)
            }
            StoreError::Persistence(e) => write!(f, "failed to write store: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Clone)]
pub struct StorePaths {
    pub commands_path: PathBuf,
    pub aliases_path: PathBuf,
    pub stats_path: PathBuf,
}

impl StorePaths {
    pub fn under(base: &Path) -> Self {
        StorePaths {
            commands_path: base.join(".z_commands"),
            aliases_path: base.join(".z_aliases"),
            stats_path: base.join(".z_stats"),
        }
    }
}

pub struct CommandStore {
    commands: Vec<String>,
    aliases: AliasManager,
    stats: UsageStats,
    command_ops: FileOps,
    alias_ops: FileOps,
    stats_path: PathBuf,
}

impl CommandStore {
    /// Missing or unreadable backing files open as an empty store.
    pub fn open(paths: StorePaths) -> Self {
        let command_ops = FileOps::new(paths.commands_path);
        let alias_ops = FileOps::new(paths.aliases_path);

        let commands = command_ops.load_lines();
        let aliases = AliasManager::from_lines(&alias_ops.load_lines());
        let stats = UsageStats::load(&paths.stats_path);

        CommandStore {
            commands,
            aliases,
            stats,
            command_ops,
            alias_ops,
            stats_path: paths.stats_path,
        }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Appends a command and returns its 1-based position.
    pub fn add(&mut self, command: &str) -> Result<usize, StoreError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(StoreError::InvalidInput(
                "Command cannot be empty".to_string(),
            ));
        }

        self.commands.push(command.to_string());
        self.command_ops.save_lines(&self.commands)?;
        Ok(self.commands.len())
    }

    pub fn get(&self, position: usize) -> Result<&str, StoreError> {
        if position < 1 || position > self.commands.len() {
            return Err(StoreError::NotFound(position));
        }
        Ok(&self.commands[position - 1])
    }

    /// Removes the entry at `position` and shifts all later entries down by
    /// one. Aliases follow their entries.
    pub fn delete(&mut self, position: usize) -> Result<String, StoreError> {
        if position < 1 || position > self.commands.len() {
            return Err(StoreError::NotFound(position));
        }

        let removed = self.commands.remove(position - 1);
        self.aliases.remove_position(position);

        self.command_ops.save_lines(&self.commands)?;
        self.alias_ops.save_lines(&self.aliases.to_lines())?;
        Ok(removed)
    }

    pub fn preview_clear(&self) -> usize {
        self.commands.len()
    }

    /// Empties commands and aliases. Stats survive a clear. The caller owns
    /// the confirmation prompt.
    pub fn clear_confirmed(&mut self) -> Result<(), StoreError> {
        self.commands.clear();
        self.aliases.clear();

        self.command_ops.save_lines(&self.commands)?;
        self.alias_ops.save_lines(&self.aliases.to_lines())?;
        Ok(())
    }

    /// Case-insensitive substring match over all entries, in store order.
    pub fn search(&self, pattern: &str) -> Result<Vec<(usize, String)>, StoreError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(StoreError::InvalidInput(
                "Search pattern cannot be empty".to_string(),
            ));
        }

        let needle = pattern.to_lowercase();
        Ok(self
            .commands
            .iter()
            .enumerate()
            .filter(|(_, command)| command.to_lowercase().contains(&needle))
            .map(|(index, command)| (index + 1, command.clone()))
            .collect())
    }

    /// Alias names may not be empty or purely numeric, so numeric keys always
    /// mean positions. Re-adding an existing name overwrites it.
    pub fn set_alias(&mut self, name: &str, position: usize) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput(
                "Alias name cannot be empty".to_string(),
            ));
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            return Err(StoreError::InvalidInput(
                "Alias name cannot be a number".to_string(),
            ));
        }
        if position < 1 || position > self.commands.len() {
            return Err(StoreError::NotFound(position));
        }

        self.aliases.set(name, position);
        self.alias_ops.save_lines(&self.aliases.to_lines())
    }

    pub fn alias(&self, name: &str) -> Option<usize> {
        self.aliases.get(name)
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, usize)> {
        self.aliases.iter()
    }

    /// Counts an execution attempt for the exact command text, whether or not
    /// the command itself succeeded.
    pub fn record_execution(&mut self, command: &str) -> Result<(), StoreError> {
        self.stats.record(command);
        self.stats.save(&self.stats_path)
    }

    pub fn stats(&self) -> StatsSummary {
        let unique_commands = self
            .commands
            .iter()
            .collect::<HashSet<_>>()
            .len();

        StatsSummary {
            total_commands: self.commands.len(),
            unique_commands,
            total_executions: self.stats.total_executions,
            most_used: self
                .stats
                .most_used()
                .map(|(command, count)| (command.to_string(), count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (CommandStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = CommandStore::open(StorePaths::under(dir.path()));
        (store, dir)
    }

    #[test]
    fn test_add_then_get_returns_same_string() {
        let (mut store, _dir) = open_store();

        let position = store.add("echo hello").unwrap();
        assert_eq!(position, 1);
        assert_eq!(store.get(position).unwrap(), "echo hello");
    }

    #[test]
    fn test_add_rejects_empty_command() {
        let (mut store, _dir) = open_store();

        assert!(matches!(store.add(""), Err(StoreError::InvalidInput(_))));
        assert!(matches!(store.add("   "), Err(StoreError::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_renumbers_later_entries() {
        let (mut store, _dir) = open_store();
        store.add("first").unwrap();
        store.add("second").unwrap();
        store.add("third").unwrap();

        let removed = store.delete(2).unwrap();

        assert_eq!(removed, "second");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap(), "first");
        assert_eq!(store.get(2).unwrap(), "third");
    }

    #[test]
    fn test_delete_out_of_range_leaves_store_unmodified() {
        let (mut store, _dir) = open_store();
        store.add("only").unwrap();

        assert!(matches!(store.delete(0), Err(StoreError::NotFound(0))));
        assert!(matches!(store.delete(2), Err(StoreError::NotFound(2))));
        assert_eq!(store.commands(), ["only"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let (mut store, _dir) = open_store();
        store.add("git Status").unwrap();
        store.add("ls -la").unwrap();
        store.add("git push").unwrap();

        let matches = store.search("GIT").unwrap();
        assert_eq!(
            matches,
            vec![(1, "git Status".to_string()), (3, "git push".to_string())]
        );

        assert!(store.search("absent").unwrap().is_empty());
    }

    #[test]
    fn test_search_rejects_empty_pattern() {
        let (mut store, _dir) = open_store();
        store.add("echo hi").unwrap();

        assert!(matches!(
            store.search(""),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            store.search("  "),
            Err(StoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_two_phase_clear() {
        let (mut store, dir) = open_store();
        store.add("echo one").unwrap();
        store.add("echo two").unwrap();

        // Preview alone modifies nothing
        assert_eq!(store.preview_clear(), 2);
        assert_eq!(store.len(), 2);

        store.clear_confirmed().unwrap();
        assert!(store.is_empty());

        let reopened = CommandStore::open(StorePaths::under(dir.path()));
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_persistence_round_trip() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::under(dir.path());

        let mut store = CommandStore::open(paths.clone());
        store.add("echo one").unwrap();
        store.add("echo two").unwrap();
        store.set_alias("one", 1).unwrap();
        store.record_execution("echo one").unwrap();
        store.record_execution("echo one").unwrap();

        let reopened = CommandStore::open(paths);
        assert_eq!(reopened.commands(), ["echo one", "echo two"]);
        assert_eq!(reopened.alias("one"), Some(1));

        let summary = reopened.stats();
        assert_eq!(summary.total_executions, 2);
        assert_eq!(summary.most_used, Some(("echo one".to_string(), 2)));
    }

    #[test]
    fn test_add_delete_scenario() {
        let (mut store, _dir) = open_store();

        assert_eq!(store.add("echo hi").unwrap(), 1);
        assert_eq!(store.add("echo bye").unwrap(), 2);
        assert_eq!(store.delete(1).unwrap(), "echo hi");

        assert_eq!(store.commands(), ["echo bye"]);
        assert_eq!(store.get(1).unwrap(), "echo bye");
    }

    #[test]
    fn test_record_execution_twice_counts_two() {
        let (mut store, _dir) = open_store();
        store.add("echo hi").unwrap();

        store.record_execution("echo hi").unwrap();
        store.record_execution("echo hi").unwrap();

        let summary = store.stats();
        assert_eq!(summary.total_executions, 2);
        assert_eq!(summary.most_used, Some(("echo hi".to_string(), 2)));
    }

    #[test]
    fn test_stats_counts_duplicates_once() {
        let (mut store, _dir) = open_store();
        store.add("echo hi").unwrap();
        store.add("echo hi").unwrap();
        store.add("ls").unwrap();

        let summary = store.stats();
        assert_eq!(summary.total_commands, 3);
        assert_eq!(summary.unique_commands, 2);
        assert_eq!(summary.total_executions, 0);
        assert_eq!(summary.most_used, None);
    }

    #[test]
    fn test_alias_validation() {
        let (mut store, _dir) = open_store();
        store.add("echo hi").unwrap();

        assert!(matches!(
            store.set_alias("", 1),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            store.set_alias("42", 1),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            store.set_alias("hi", 9),
            Err(StoreError::NotFound(9))
        ));

        store.set_alias("hi", 1).unwrap();
        assert_eq!(store.alias("hi"), Some(1));
    }

    #[test]
    fn test_alias_follows_entry_across_delete() {
        let (mut store, _dir) = open_store();
        store.add("echo one").unwrap();
        store.add("echo two").unwrap();
        store.set_alias("one", 1).unwrap();
        store.set_alias("two", 2).unwrap();

        store.delete(1).unwrap();

        assert_eq!(store.alias("one"), None);
        assert_eq!(store.alias("two"), Some(1));
        assert_eq!(store.get(1).unwrap(), "echo two");
    }

    #[test]
    fn test_clear_drops_aliases_but_keeps_stats() {
        let (mut store, _dir) = open_store();
        store.add("echo hi").unwrap();
        store.set_alias("hi", 1).unwrap();
        store.record_execution("echo hi").unwrap();

        store.clear_confirmed().unwrap();

        assert!(store.is_empty());
        assert_eq!(store.alias("hi"), None);
        assert_eq!(store.stats().total_executions, 1);
    }

    #[test]
    fn test_open_with_corrupt_stats_file() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::under(dir.path());
        std::fs::write(&paths.stats_path, "not json at all").unwrap();
        std::fs::write(&paths.commands_path, "echo hi\n").unwrap();

        let store = CommandStore::open(paths);
        assert_eq!(store.commands(), ["echo hi"]);
        assert_eq!(store.stats().total_executions, 0);
    }
}
