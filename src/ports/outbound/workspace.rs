use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Handle to a disposable build directory
///
/// Dropping the handle removes the directory tree. `release` does the same
/// but reports removal failures.
pub trait Workspace {
    /// Directory the build tool runs in
    fn dir(&self) -> &Path;

    /// File capturing the build tool's combined output
    fn log_path(&self) -> PathBuf;

    /// Reads the captured build output
    fn read_log(&self) -> Result<String>;

    /// Removes the workspace, surfacing cleanup errors
    fn release(self) -> Result<()>
    where
        Self: Sized;
}

/// WorkspaceProvider port for creating one workspace per measurement
pub trait WorkspaceProvider {
    type Handle: Workspace;

    /// Creates a fresh, uniquely named workspace holding `descriptor_xml`
    /// as the build tool's input file
    ///
    /// # Errors
    /// Returns an error if the directory or descriptor cannot be created
    fn acquire(&self, descriptor_xml: &str) -> Result<Self::Handle>;
}
