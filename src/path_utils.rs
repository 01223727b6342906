//! Path validation and utility functions

use std::path::{Path, PathBuf};

/// Validates that a path string is not empty or just whitespace
pub fn validate_path_str(path_str: &str) -> Result<(), String> {
    if path_str.trim().is_empty() {
        return Err("Path cannot be empty or contain only whitespace".to_string());
    }
    Ok(())
}

/// Creates a PathBuf from operator or config input.
///
/// Surrounding whitespace and one pair of matching quotes are stripped, since
/// paths pasted from Explorer or a shell often carry them.
pub fn create_validated_pathbuf(path_str: &str) -> Result<PathBuf, String> {
    validate_path_str(path_str)?;
    let trimmed = path_str.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    validate_path_str(unquoted)?;
    Ok(PathBuf::from(unquoted))
}

/// Safely gets the parent directory for creating directories.
/// Returns None for paths that don't need directory creation (like "autoexec.cfg" in current dir)
pub fn safe_parent_for_creation(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Makes a path absolute against the current directory without touching the filesystem.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}
