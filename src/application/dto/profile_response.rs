use crate::profiling::domain::Dependency;
use std::path::PathBuf;

/// ProfileResponse - Response DTO from the profiling use case
#[derive(Debug, Clone)]
pub struct ProfileResponse {
    /// Root artifact id of the profiled descriptor
    pub root_artifact_id: String,
    /// One record per declaration, in report order
    pub measurements: Vec<Dependency>,
    /// Records whose isolated build did not exit successfully
    pub failed_builds: usize,
    /// Where the report was written
    pub report_path: PathBuf,
}

impl ProfileResponse {
    pub fn new(
        root_artifact_id: String,
        measurements: Vec<Dependency>,
        failed_builds: usize,
        report_path: PathBuf,
    ) -> Self {
        Self {
            root_artifact_id,
            measurements,
            failed_builds,
            report_path,
        }
    }
}
