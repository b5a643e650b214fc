use std::{fs, path::PathBuf};

use super::StoreError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// A missing or unreadable file is an empty collection, never an error.
    pub fn load_lines(&self) -> Vec<String> {
        fs::read_to_string(&self.file_path)
            .map(|content| {
                content
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| line.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn save_lines(&self, lines: &[String]) -> Result<(), StoreError> {
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        fs::write(&self.file_path, content).map_err(StoreError::Persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let ops = FileOps::new(dir.path().join("absent"));

        assert!(ops.load_lines().is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let ops = FileOps::new(dir.path().join("commands"));

        let lines = vec!["echo one".to_string(), "echo two".to_string()];
        ops.save_lines(&lines).unwrap();

        assert_eq!(ops.load_lines(), lines);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commands");
        std::fs::write(&path, "echo one\n\n   \necho two\n").unwrap();

        let ops = FileOps::new(path);
        assert_eq!(ops.load_lines(), vec!["echo one", "echo two"]);
    }

    #[test]
    fn test_save_empty_truncates() {
        let dir = TempDir::new().unwrap();
        let ops = FileOps::new(dir.path().join("commands"));

        ops.save_lines(&["echo one".to_string()]).unwrap();
        ops.save_lines(&[]).unwrap();

        assert!(ops.load_lines().is_empty());
    }
}
