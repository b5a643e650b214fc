use crate::error::ZError;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ZError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    /// Replaces every `$NAME` token with its environment value, or with the
    /// empty string when the variable is unset.
    pub fn expand_vars(&self, input: &str) -> String {
        let mut result = input.to_string();

        while let Some(dollar_pos) = result.find('$') {
            if dollar_pos + 1 >= result.len() {
                break;
            }

            let var_end = result[dollar_pos + 1..]
                .find(|c: char| !c.is_alphanumeric() && c != '_')
                .map_or(result.len(), |pos| pos + dollar_pos + 1);

            let var_name = &result[dollar_pos + 1..var_end];

            if let Ok(value) = env::var(var_name) {
                result.replace_range(dollar_pos..var_end, &value);
            } else {
                result.replace_range(dollar_pos..var_end, "");
            }
        }

        result
    }

    pub fn expand_full(&self, path: &str) -> Result<PathBuf, ZError> {
        let with_vars = self.expand_vars(path);
        self.expand(&with_vars)
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, ZError> {
        if path.len() == 1 {
            // Just "~"
            dirs::home_dir().ok_or(ZError::HomeDirNotFound)
        } else {
            let without_tilde = &path[1..];
            if let Some(stripped) = without_tilde.strip_prefix('/') {
                // "~/path"
                let mut home_path = dirs::home_dir().ok_or(ZError::HomeDirNotFound)?;
                for part in stripped.split('/') {
                    if !part.is_empty() {
                        home_path.push(part);
                    }
                }
                Ok(home_path)
            } else {
                // "~username/path" - not handling this case for now
                Ok(Path::new(path).to_path_buf())
            }
        }
    }
}
