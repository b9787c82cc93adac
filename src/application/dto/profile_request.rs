use std::path::PathBuf;

/// ProfileRequest - Request DTO for the profiling use case
#[derive(Debug, Clone)]
pub struct ProfileRequest {
    /// Path to the build descriptor whose dependencies are measured
    pub descriptor_path: PathBuf,
}

impl ProfileRequest {
    pub fn new(descriptor_path: impl Into<PathBuf>) -> Self {
        Self {
            descriptor_path: descriptor_path.into(),
        }
    }
}
