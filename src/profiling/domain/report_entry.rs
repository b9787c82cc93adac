use super::dependency::EMPTY_METADATA;
use super::MetadataCount;
use crate::shared::Result;

/// One line of a written report, parsed back into its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub group_id: String,
    pub artifact_id: String,
    pub time: f64,
    pub total_time: f64,
    pub metadata: Vec<MetadataCount>,
}

impl ReportEntry {
    /// Parses a `group \t artifact \t time \t totalTime \t metadata` line.
    ///
    /// # Errors
    /// Returns an error if the line does not have exactly five tab-separated
    /// fields, or if a numeric or metadata field is malformed.
    pub fn parse_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        let [group_id, artifact_id, time, total_time, metadata] = fields.as_slice() else {
            anyhow::bail!(
                "report line has {} field(s), expected 5: '{}'",
                fields.len(),
                line
            );
        };

        let metadata = if *metadata == EMPTY_METADATA {
            Vec::new()
        } else {
            metadata
                .split(';')
                .map(MetadataCount::parse)
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            time: parse_seconds(time, "time")?,
            total_time: parse_seconds(total_time, "totalTime")?,
            metadata,
        })
    }
}

fn parse_seconds(field: &str, name: &str) -> Result<f64> {
    field
        .parse::<f64>()
        .map_err(|e| anyhow::anyhow!("invalid {} field '{}': {}", name, field, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_metadata() {
        let entry = ReportEntry::parse_line("com.acme\tcore\t4.321\t9.87\tcom.foo:2;org.bar:1").unwrap();
        assert_eq!(entry.group_id, "com.acme");
        assert_eq!(entry.artifact_id, "core");
        assert_eq!(entry.time, 4.321);
        assert_eq!(entry.total_time, 9.87);
        assert_eq!(
            entry.metadata,
            vec![MetadataCount::new("com.foo", 2), MetadataCount::new("org.bar", 1)]
        );
    }

    #[test]
    fn test_parse_line_empty_metadata() {
        let entry = ReportEntry::parse_line("g\ta\t0.0\t0.0\tempty\n").unwrap();
        assert!(entry.metadata.is_empty());
        assert_eq!(entry.time, 0.0);
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        let err = ReportEntry::parse_line("g\ta\t0.0").unwrap_err();
        assert!(err.to_string().contains("expected 5"));
    }

    #[test]
    fn test_parse_line_bad_number() {
        let err = ReportEntry::parse_line("g\ta\tfast\t0.0\tempty").unwrap_err();
        assert!(err.to_string().contains("invalid time field"));
    }
}
