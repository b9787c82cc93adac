use crate::ports::outbound::ReportWriter;
use crate::shared::error::ProfilerError;
use crate::shared::security::{ensure_file_name_component, ensure_not_symlink};
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Extension of report files
const REPORT_EXTENSION: &str = "txt";

/// FileSystemReportWriter adapter writing `<result_dir>/<rootArtifactId>.txt`
pub struct FileSystemReportWriter {
    result_dir: PathBuf,
}

impl FileSystemReportWriter {
    pub fn new(result_dir: PathBuf) -> Self {
        Self { result_dir }
    }

    pub fn report_path(&self, root_artifact_id: &str) -> PathBuf {
        self.result_dir
            .join(format!("{}.{}", root_artifact_id, REPORT_EXTENSION))
    }
}

impl ReportWriter for FileSystemReportWriter {
    fn write_report(&self, root_artifact_id: &str, lines: &[String]) -> Result<PathBuf> {
        let path = self.report_path(root_artifact_id);
        let write_error = |details: String| ProfilerError::ReportWriteError {
            path: path.clone(),
            details,
        };

        ensure_file_name_component(root_artifact_id).map_err(|e| write_error(e.to_string()))?;
        ensure_not_symlink(&self.result_dir, "Writing a report")?;
        fs::create_dir_all(&self.result_dir).map_err(|e| {
            write_error(format!(
                "Failed to create result directory {}: {}",
                self.result_dir.display(),
                e
            ))
        })?;
        ensure_not_symlink(&path, "Writing a report")?;

        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        fs::write(&path, content).map_err(|e| write_error(e.to_string()))?;
        debug!(path = %path.display(), lines = lines.len(), "report written");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemReportWriter::new(temp_dir.path().join("result"));

        let lines = vec![
            "g\ta\t1.0\t2.0\tempty".to_string(),
            "g\tb\t3.0\t4.0\tcom.foo:1".to_string(),
        ];
        let path = writer.write_report("demo-app", &lines).unwrap();

        assert_eq!(path, temp_dir.path().join("result").join("demo-app.txt"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "g\ta\t1.0\t2.0\tempty\ng\tb\t3.0\t4.0\tcom.foo:1\n");
    }

    #[test]
    fn test_write_report_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemReportWriter::new(temp_dir.path().to_path_buf());

        writer
            .write_report("app", &["old\tline\t0.0\t0.0\tempty".to_string()])
            .unwrap();
        let path = writer
            .write_report("app", &["new\tline\t0.0\t0.0\tempty".to_string()])
            .unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "new\tline\t0.0\t0.0\tempty\n"
        );
    }

    #[test]
    fn test_write_report_empty() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemReportWriter::new(temp_dir.path().to_path_buf());
        let path = writer.write_report("nothing", &[]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_write_report_rejects_path_like_artifact_id() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemReportWriter::new(temp_dir.path().to_path_buf());

        let result = writer.write_report("../escape", &[]);
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to write report"));
        assert!(!temp_dir.path().join("../escape.txt").exists());
    }

    #[test]
    fn test_write_report_result_dir_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("result");
        fs::write(&blocker, "not a directory").unwrap();

        let writer = FileSystemReportWriter::new(blocker);
        let result = writer.write_report("app", &[]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to create result directory"));
    }
}
