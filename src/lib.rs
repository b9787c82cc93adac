//! mvn-dep-cost - per-dependency build cost profiler for Maven projects
//!
//! For every `<dependency>` declared in a `pom.xml`, this library generates a
//! copy of the descriptor that keeps only that one declaration, builds it in a
//! fresh workspace, and records how long the build took and which
//! `maven-metadata.xml` files it had to download. The records are written as a
//! tab-separated report sorted by build time.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`profiling`): Descriptor model, log parsing and result ordering
//! - **Application Layer** (`application`): The profiling use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, process and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn_dep_cost::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let use_case = ProfileDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     TempWorkspaceProvider::new(PathBuf::from("tmp")),
//!     MavenBuildRunner::default(),
//!     FileSystemReportWriter::new(PathBuf::from("result")),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ProfileRequest::new("pom.xml")).await?;
//! println!("{}", response.report_path.display());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod profiling;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemReportWriter, TempWorkspace, TempWorkspaceProvider,
    };
    pub use crate::adapters::outbound::process::{MavenBuildRunner, DEFAULT_BUILD_COMMAND};
    pub use crate::application::dto::{ProfileRequest, ProfileResponse};
    pub use crate::application::use_cases::ProfileDependenciesUseCase;
    pub use crate::ports::outbound::{
        BuildRunner, DescriptorReader, ProgressReporter, ReportWriter, Workspace,
        WorkspaceProvider,
    };
    pub use crate::profiling::domain::{
        BuildOutcome, BuildStatus, Dependency, DependencyDeclaration, Descriptor, LogSummary,
        MetadataCount, ReportEntry,
    };
    pub use crate::profiling::services::{LogParser, ResultAggregator, TestDescriptorGenerator};
    pub use crate::shared::error::{ExitCode, ProfilerError};
    pub use crate::shared::Result;
}
