/// Mock implementations for testing
mod mock_build_runner;
mod mock_descriptor_reader;
mod mock_progress_reporter;
mod mock_report_writer;

pub use mock_build_runner::{MockBuildRunner, ScriptedBuild};
pub use mock_descriptor_reader::MockDescriptorReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_writer::MockReportWriter;
