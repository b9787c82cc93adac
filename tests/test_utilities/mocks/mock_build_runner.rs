use async_trait::async_trait;
use mvn_dep_cost::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned result of one isolated build
#[derive(Clone)]
pub struct ScriptedBuild {
    pub status: BuildStatus,
    pub log: String,
    pub elapsed: Duration,
}

impl ScriptedBuild {
    /// A successful build reporting `seconds` and the given metadata download URLs
    pub fn success(seconds: f64, metadata_urls: &[&str]) -> Self {
        let mut log = String::new();
        for url in metadata_urls {
            log.push_str(&format!("[INFO] Downloaded from central: {}\n", url));
        }
        log.push_str("[INFO] BUILD SUCCESS\n");
        log.push_str(&format!("[INFO] Total time:  {:?} s\n", seconds));
        Self {
            status: BuildStatus::Succeeded,
            log,
            elapsed: Duration::from_millis((seconds * 1000.0) as u64 + 500),
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            status: BuildStatus::Failed {
                exit_code: Some(exit_code),
            },
            log: "[ERROR] BUILD FAILURE\n".to_string(),
            elapsed: Duration::from_secs(1),
        }
    }
}

/// Mock BuildRunner keyed by the artifactId found in the workspace descriptor
///
/// Writes the scripted log into the workspace like a real build would.
/// Declarations with no script fail with exit code 1.
#[derive(Default, Clone)]
pub struct MockBuildRunner {
    scripts: HashMap<String, ScriptedBuild>,
    pub runs: Arc<Mutex<Vec<String>>>,
}

impl MockBuildRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build(mut self, artifact_id: &str, build: ScriptedBuild) -> Self {
        self.scripts.insert(artifact_id.to_string(), build);
        self
    }

    pub fn run_count(&self) -> usize {
        self.runs.lock().unwrap().len()
    }

    fn artifact_in(descriptor: &Descriptor) -> Option<String> {
        descriptor
            .declarations()
            .first()
            .map(|declaration| declaration.artifact_id().to_string())
    }
}

#[async_trait]
impl BuildRunner for MockBuildRunner {
    async fn run(&self, work_dir: &Path, log_path: &Path) -> Result<BuildOutcome> {
        let xml = fs::read_to_string(work_dir.join("pom.xml"))?;
        let descriptor = Descriptor::parse(&xml)?;
        let artifact = Self::artifact_in(&descriptor).unwrap_or_default();
        self.runs.lock().unwrap().push(artifact.clone());

        let build = self
            .scripts
            .get(&artifact)
            .cloned()
            .unwrap_or_else(|| ScriptedBuild::failure(1));
        fs::write(log_path, &build.log)?;

        Ok(BuildOutcome::new(build.status, build.elapsed))
    }

    fn command_line(&self) -> String {
        "mock-build".to_string()
    }
}
