//! Path utilities: expand ~ against the user's home directory.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

/// Expand a leading `~/` (or a bare `~`) to the home directory.
/// Fails only when the path needs the home directory and it cannot be found.
pub fn expand_tilde(path: &str) -> AppResult<PathBuf> {
    if path == "~" {
        return dirs::home_dir().ok_or(AppError::HomeDirNotFound);
    }
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(path))
}
