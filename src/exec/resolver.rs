use super::ExecError;
use crate::store::CommandStore;

/// Maps a user-supplied key to a stored command. Numeric keys are tried as a
/// 1-based position first; anything else goes through the alias map.
pub fn resolve(key: &str, store: &CommandStore) -> Result<(usize, String), ExecError> {
    let key = key.trim();

    if let Ok(position) = key.parse::<usize>() {
        return store
            .get(position)
            .map(|command| (position, command.to_string()))
            .map_err(|_| ExecError::NotFound(key.to_string()));
    }

    let position = store
        .alias(key)
        .ok_or_else(|| ExecError::NotFound(key.to_string()))?;

    store
        .get(position)
        .map(|command| (position, command.to_string()))
        .map_err(|_| ExecError::NotFound(key.to_string()))
}
