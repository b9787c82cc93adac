use crate::ports::outbound::DescriptorReader;
use crate::shared::error::ProfilerError;
use crate::shared::security::{ensure_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// FileSystemReader adapter for reading the build descriptor from disk
///
/// Refuses symlinks, non-regular files and oversized files before reading.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorReader for FileSystemReader {
    fn read_descriptor(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ProfilerError::DescriptorNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the path of a pom.xml file as the first argument.".to_string(),
            }
            .into());
        }

        let size = ensure_regular_file(path, "build descriptor", MAX_FILE_SIZE)?;
        debug!(path = %path.display(), size, "reading build descriptor");

        fs::read_to_string(path).map_err(|e| {
            ProfilerError::DescriptorReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
