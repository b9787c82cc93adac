use crate::shared::error::ProfilerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum descriptor size (100 MB). Real POMs are a few kilobytes.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects paths that are symbolic links.
///
/// Missing paths are accepted; callers that need the file to exist check
/// that separately.
pub fn ensure_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(ProfilerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} through a symbolic link is not allowed", operation),
            hint: "Point the tool at the real file or directory instead".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that `path` is an existing regular file no larger than `max_size`.
///
/// Uses `symlink_metadata()` so a symlink is reported as such rather than
/// silently followed.
pub fn ensure_regular_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", description, e)
    })?;

    if metadata.is_symlink() {
        return Err(ProfilerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Pass the path of the real file instead".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        return Err(ProfilerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Check that the path points at a build descriptor".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Validates that `name` can be used as a single file name component.
///
/// Report files are named after the root artifact id, which comes from
/// untrusted input and must not escape the result directory.
pub fn ensure_file_name_component(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if invalid {
        anyhow::bail!(
            "'{}' cannot be used as a file name: it must be a single path component",
            name
        );
    }
    Ok(())
}
