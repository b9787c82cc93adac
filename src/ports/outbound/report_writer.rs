use crate::shared::Result;
use std::path::PathBuf;

/// ReportWriter port for persisting the ordered report
pub trait ReportWriter {
    /// Writes one line per record to a report named after `root_artifact_id`
    ///
    /// Any existing report with the same name is overwritten.
    ///
    /// # Returns
    /// Location of the written report
    fn write_report(&self, root_artifact_id: &str, lines: &[String]) -> Result<PathBuf>;
}
