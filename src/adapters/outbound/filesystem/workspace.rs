use crate::ports::outbound::{Workspace, WorkspaceProvider};
use crate::shared::error::ProfilerError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;
use uuid::Uuid;

/// File name Maven expects as its input descriptor
pub const DESCRIPTOR_FILE_NAME: &str = "pom.xml";

/// File capturing the build tool's output
pub const LOG_FILE_NAME: &str = "test.result";

/// TempWorkspaceProvider adapter creating `<work_dir>/<uuid>/` workspaces
pub struct TempWorkspaceProvider {
    work_dir: PathBuf,
}

impl TempWorkspaceProvider {
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}

impl WorkspaceProvider for TempWorkspaceProvider {
    type Handle = TempWorkspace;

    fn acquire(&self, descriptor_xml: &str) -> Result<TempWorkspace> {
        let workspace_error = |path: &Path, e: std::io::Error| ProfilerError::Workspace {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        fs::create_dir_all(&self.work_dir).map_err(|e| workspace_error(&self.work_dir, e))?;

        // The directory is named by the UUID alone; no extra random suffix.
        let dir = tempfile::Builder::new()
            .prefix(&Uuid::new_v4().to_string())
            .rand_bytes(0)
            .tempdir_in(&self.work_dir)
            .map_err(|e| workspace_error(&self.work_dir, e))?;

        let descriptor_path = dir.path().join(DESCRIPTOR_FILE_NAME);
        fs::write(&descriptor_path, descriptor_xml)
            .map_err(|e| workspace_error(&descriptor_path, e))?;

        debug!(workspace = %dir.path().display(), "workspace created");
        Ok(TempWorkspace { dir })
    }
}

/// Workspace handle backed by `tempfile::TempDir`
///
/// The directory is removed when the handle is dropped, whatever path the
/// measurement took.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    pub fn descriptor_path(&self) -> PathBuf {
        self.dir.path().join(DESCRIPTOR_FILE_NAME)
    }
}

impl Workspace for TempWorkspace {
    fn dir(&self) -> &Path {
        self.dir.path()
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join(LOG_FILE_NAME)
    }

    fn read_log(&self) -> Result<String> {
        let path = self.log_path();
        let bytes = fs::read(&path).map_err(|e| ProfilerError::Workspace {
            path: path.clone(),
            details: format!("Failed to read build log: {}", e),
        })?;
        // Build tools may emit non-UTF-8 bytes (e.g. platform-encoded paths)
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn release(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| ProfilerError::Workspace {
            path: path.clone(),
            details: format!("Failed to remove workspace: {}", e),
        })?;
        debug!(workspace = %path.display(), "workspace removed");
        Ok(())
    }
}
