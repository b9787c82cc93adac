use crate::shared::Result;
use std::path::Path;

/// DescriptorReader port for loading the build descriptor to profile
///
/// This port abstracts the file system operations needed to read
/// the original `pom.xml`.
pub trait DescriptorReader {
    /// Reads the raw descriptor text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The descriptor does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_descriptor(&self, path: &Path) -> Result<String>;
}
