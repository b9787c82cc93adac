/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, build tool, console).
pub mod build_runner;
pub mod descriptor_reader;
pub mod progress_reporter;
pub mod report_writer;
pub mod workspace;

pub use build_runner::BuildRunner;
pub use descriptor_reader::DescriptorReader;
pub use progress_reporter::ProgressReporter;
pub use report_writer::ReportWriter;
pub use workspace::{Workspace, WorkspaceProvider};
