use crate::profiling::domain::Dependency;

/// ResultAggregator collects measurement records and orders them for the report
///
/// Records are kept in completion order until `into_sorted` is called.
/// Duplicates are never merged: one record per declaration.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    records: Vec<Dependency>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Dependency) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose build produced no reported time
    pub fn unmeasured_count(&self) -> usize {
        self.records.iter().filter(|r| r.time() == 0.0).count()
    }

    /// Records sorted by ascending self-reported time.
    ///
    /// The sort is stable, so records with equal times stay in completion
    /// order.
    pub fn into_sorted(self) -> Vec<Dependency> {
        let mut records = self.records;
        records.sort_by(|a, b| a.time().total_cmp(&b.time()));
        records
    }

    /// One report line per record, in the given order
    pub fn render_lines(records: &[Dependency]) -> Vec<String> {
        records.iter().map(Dependency::to_report_line).collect()
    }
}
