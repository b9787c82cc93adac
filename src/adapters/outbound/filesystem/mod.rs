/// Filesystem adapters: descriptor input, workspaces and report output
mod file_reader;
mod report_writer;
mod workspace;

pub use file_reader::FileSystemReader;
pub use report_writer::FileSystemReportWriter;
pub use workspace::{TempWorkspace, TempWorkspaceProvider, DESCRIPTOR_FILE_NAME, LOG_FILE_NAME};
