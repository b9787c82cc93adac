use super::MetadataCount;

/// Signals extracted from one captured build log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogSummary {
    /// Self-reported build duration in seconds, if the log contained one
    pub time: Option<f64>,
    /// Metadata download groups, most frequent first
    pub metadata_counts: Vec<MetadataCount>,
    /// Duration or download lines that matched a marker but could not be parsed
    pub skipped_lines: usize,
}

impl LogSummary {
    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.metadata_counts.is_empty()
    }
}
