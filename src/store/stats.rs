use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::StoreError;

/// Execution counters keyed by the exact command text, so identical commands
/// stored at different positions share one entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageStats {
    pub executions: BTreeMap<String, u64>,
    pub total_executions: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl UsageStats {
    /// A missing or unparsable stats file starts over from zero counters.
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            StoreError::Persistence(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        fs::write(path, json).map_err(StoreError::Persistence)
    }

    pub fn record(&mut self, command: &str) {
        *self.executions.entry(command.to_string()).or_insert(0) += 1;
        self.total_executions += 1;
        self.last_updated = Some(chrono::Utc::now().to_rfc3339());
    }

    /// Ties break toward the lexicographically smallest command text, the
    /// iteration order of the underlying map.
    pub fn most_used(&self) -> Option<(&str, u64)> {
        let mut best: Option<(&str, u64)> = None;
        for (command, count) in &self.executions {
            match best {
                Some((_, best_count)) if best_count >= *count => {}
                _ => best = Some((command.as_str(), *count)),
            }
        }
        best
    }
}

/// Aggregate view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_commands: usize,
    pub unique_commands: usize,
    pub total_executions: u64,
    pub most_used: Option<(String, u64)>,
}
