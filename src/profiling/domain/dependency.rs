use super::{DependencyDeclaration, LogSummary};
use crate::shared::Result;
use std::fmt;

/// Rendered in place of a missing `<version>`
pub const UNKNOWN_VERSION: &str = "unknown";

/// Rendered in place of an empty metadata list
pub const EMPTY_METADATA: &str = "empty";

/// Number of metadata downloads attributed to one artifact group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataCount {
    group: String,
    count: usize,
}

impl MetadataCount {
    pub fn new(group: impl Into<String>, count: usize) -> Self {
        Self {
            group: group.into(),
            count,
        }
    }

    /// Parses the `group:count` form produced by `Display`.
    ///
    /// Splits on the last colon so group tokens containing `:` survive.
    pub fn parse(text: &str) -> Result<Self> {
        let (group, count) = text
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("metadata entry '{}' is not in group:count form", text))?;
        let count = count
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("metadata entry '{}' has an invalid count: {}", text, e))?;
        Ok(Self::new(group, count))
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for MetadataCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.count)
    }
}

/// Renders seconds with at least one fractional digit (`0.0`, `5.0`, `4.321`).
pub fn format_seconds(seconds: f64) -> String {
    format!("{:?}", seconds)
}

/// Measurement record for one dependency declaration.
///
/// Starts zeroed; only a successful isolated build fills in the timings and
/// metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    group_id: String,
    artifact_id: String,
    version: Option<String>,
    time: f64,
    total_time: f64,
    metadata_counts: Vec<MetadataCount>,
}

impl Dependency {
    pub fn new(group_id: String, artifact_id: String, version: Option<String>) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
            time: 0.0,
            total_time: 0.0,
            metadata_counts: Vec::new(),
        }
    }

    pub fn from_declaration(declaration: &DependencyDeclaration) -> Self {
        Self::new(
            declaration.group_id().to_string(),
            declaration.artifact_id().to_string(),
            declaration.version().map(String::from),
        )
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn metadata_counts(&self) -> &[MetadataCount] {
        &self.metadata_counts
    }

    /// Identity of the declaration. Not unique: duplicates share a key.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// `group:artifact:version`, with the version sentinel filled in
    pub fn coordinates(&self) -> String {
        format!(
            "{}:{}",
            self.key(),
            self.version.as_deref().unwrap_or(UNKNOWN_VERSION)
        )
    }

    /// Records the results of a build that exited successfully.
    pub fn record_success(&mut self, elapsed_seconds: f64, summary: LogSummary) {
        self.total_time = elapsed_seconds;
        self.time = summary.time.unwrap_or(0.0);
        self.metadata_counts = summary.metadata_counts;
    }

    /// `;`-joined metadata counts, or `empty`
    pub fn metadata_field(&self) -> String {
        if self.metadata_counts.is_empty() {
            return EMPTY_METADATA.to_string();
        }
        self.metadata_counts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// `group \t artifact \t time \t totalTime \t metadata`
    pub fn to_report_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.group_id,
            self.artifact_id,
            format_seconds(self.time),
            format_seconds(self.total_time),
            self.metadata_field()
        )
    }
}
