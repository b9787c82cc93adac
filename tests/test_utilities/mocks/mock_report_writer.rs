use mvn_dep_cost::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock ReportWriter keeping the last report in memory
#[derive(Default, Clone)]
pub struct MockReportWriter {
    pub written: Arc<Mutex<Option<(String, Vec<String>)>>>,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Option<Vec<String>> {
        self.written
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, lines)| lines.clone())
    }

    pub fn root_artifact_id(&self) -> Option<String> {
        self.written
            .lock()
            .unwrap()
            .as_ref()
            .map(|(root, _)| root.clone())
    }
}

impl ReportWriter for MockReportWriter {
    fn write_report(&self, root_artifact_id: &str, lines: &[String]) -> Result<PathBuf> {
        *self.written.lock().unwrap() = Some((root_artifact_id.to_string(), lines.to_vec()));
        Ok(PathBuf::from("result").join(format!("{}.txt", root_artifact_id)))
    }
}
