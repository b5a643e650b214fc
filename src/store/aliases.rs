use std::collections::BTreeMap;

/// Alias names map to 1-based positions in the command list. Re-adding an
/// existing name overwrites it.
pub struct AliasManager {
    aliases: BTreeMap<String, usize>,
}

impl Default for AliasManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasManager {
    pub fn new() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    pub fn from_lines(lines: &[String]) -> Self {
        let mut manager = Self::new();
        for line in lines {
            // Malformed lines are dropped rather than reported
            if let Some((name, position)) = line.split_once('=') {
                if let Ok(position) = position.trim().parse::<usize>() {
                    let name = name.trim();
                    if !name.is_empty() {
                        manager.set(name, position);
                    }
                }
            }
        }
        manager
    }

    pub fn set(&mut self, name: &str, position: usize) {
        self.aliases.insert(name.to_string(), position);
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.aliases.get(name).copied()
    }

    /// Keeps every alias pointing at the same command after the entry at
    /// `position` is removed: aliases bound to it are dropped, aliases bound
    /// past it shift down by one.
    pub fn remove_position(&mut self, position: usize) {
        self.aliases.retain(|_, bound| *bound != position);
        for bound in self.aliases.values_mut() {
            if *bound > position {
                *bound -= 1;
            }
        }
    }

    pub fn clear(&mut self) {
        self.aliases.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.aliases.iter().map(|(name, pos)| (name.as_str(), *pos))
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.aliases
            .iter()
            .map(|(name, position)| format!("{}={}", name, position))
            .collect()
    }
}
