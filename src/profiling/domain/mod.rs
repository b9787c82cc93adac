pub mod build_outcome;
pub mod dependency;
pub mod descriptor;
pub mod log_summary;
pub mod report_entry;

pub use build_outcome::{BuildOutcome, BuildStatus};
pub use dependency::{format_seconds, Dependency, MetadataCount};
pub use descriptor::{Descriptor, DependencyDeclaration};
pub use log_summary::LogSummary;
pub use report_entry::ReportEntry;
