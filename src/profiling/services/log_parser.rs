use crate::profiling::domain::{LogSummary, MetadataCount};
use std::collections::HashMap;

/// Marker Maven prints when the whole build succeeded
pub const SUCCESS_MARKER: &str = "BUILD SUCCESS";

/// Marker of the line carrying the self-reported build duration
pub const DURATION_MARKER: &str = "Total time";

/// Marker of artifact transfer lines
pub const DOWNLOAD_MARKER: &str = "Downloaded";

/// File name identifying a dependency-resolution metadata transfer
pub const METADATA_FILE: &str = "maven-metadata.xml";

/// Characters that delimit fields and metadata entries in a report line
const REPORT_SEPARATORS: [char; 2] = ['\t', ';'];

/// LogParser extracts timing and download signals from a Maven console log
///
/// This is a pure function over the log text: each call folds the lines into
/// a fresh summary, so nothing is shared between measurements.
pub struct LogParser;

impl LogParser {
    /// Parses a captured build log
    ///
    /// Returns an empty summary unless the log contains `BUILD SUCCESS`.
    /// Marker lines that cannot be parsed are skipped and counted in
    /// `skipped_lines`; they never abort the parse.
    pub fn parse(log: &str) -> LogSummary {
        if !log.contains(SUCCESS_MARKER) {
            return LogSummary::default();
        }

        let mut time = None;
        let mut skipped_lines = 0;
        let mut counts = GroupCounts::default();

        for line in log.lines() {
            if line.contains(DURATION_MARKER) {
                match Self::parse_duration(line) {
                    // Last occurrence wins
                    Some(seconds) => time = Some(seconds),
                    None => skipped_lines += 1,
                }
            }

            if line.contains(DOWNLOAD_MARKER) && line.contains(METADATA_FILE) {
                match Self::metadata_group(line) {
                    Some(group) => counts.increment(group),
                    None => skipped_lines += 1,
                }
            }
        }

        LogSummary {
            time,
            metadata_counts: counts.into_sorted(),
            skipped_lines,
        }
    }

    /// Parses the value of a `Total time` line into seconds
    ///
    /// Understands Maven's three duration layouts:
    /// `4.321 s`, `01:05 min` (minutes:seconds) and `1:02 h` (hours:minutes,
    /// optionally followed by `:seconds`). A bare number is read as seconds.
    pub fn parse_duration(line: &str) -> Option<f64> {
        let (_, value) = line.split_once(':')?;
        let value = value.trim();
        let unit_start = value
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(value.len());
        let (number, unit) = value.split_at(unit_start);
        let number = number.trim();

        let seconds = match unit.trim() {
            "" | "s" => number.parse::<f64>().ok(),
            "min" => parse_clock(number, &[60.0, 1.0], 2),
            "h" => parse_clock(number, &[3600.0, 60.0, 1.0], 2),
            _ => None,
        }?;

        (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
    }

    /// Extracts the group token of a metadata download line
    ///
    /// The token is the fourth path segment from the end of the line. This
    /// assumes a conventional repository layout; irregular URLs are
    /// attributed to whatever segment lands there. Tokens containing a
    /// report field or entry separator are rejected.
    pub fn metadata_group(line: &str) -> Option<&str> {
        let segments: Vec<&str> = line.split('/').collect();
        if segments.len() < 4 {
            return None;
        }
        let group = segments[segments.len() - 4].trim();
        let usable = !group.is_empty() && !group.contains(REPORT_SEPARATORS);
        usable.then_some(group)
    }
}

/// `a:b[:c]` clock notation, each field scaled by the matching entry of `scales`
fn parse_clock(text: &str, scales: &[f64], min_fields: usize) -> Option<f64> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() < min_fields || fields.len() > scales.len() {
        return None;
    }
    fields
        .iter()
        .zip(scales)
        .try_fold(0.0, |total, (field, scale)| {
            field.trim().parse::<f64>().ok().map(|v| total + v * scale)
        })
}

/// Occurrence counts in first-seen order
#[derive(Default)]
struct GroupCounts {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl GroupCounts {
    fn increment(&mut self, group: &str) {
        match self.index.get(group) {
            Some(&position) => self.order[position].1 += 1,
            None => {
                self.index.insert(group.to_string(), self.order.len());
                self.order.push((group.to_string(), 1));
            }
        }
    }

    /// Descending by count; the stable sort keeps first-seen order on ties
    fn into_sorted(mut self) -> Vec<MetadataCount> {
        self.order.sort_by(|a, b| b.1.cmp(&a.1));
        self.order
            .into_iter()
            .map(|(group, count)| MetadataCount::new(group, count))
            .collect()
    }
}
