use crate::application::dto::{ProfileRequest, ProfileResponse};
use crate::ports::outbound::{
    BuildRunner, DescriptorReader, ProgressReporter, ReportWriter, Workspace, WorkspaceProvider,
};
use crate::profiling::domain::{Dependency, DependencyDeclaration, Descriptor};
use crate::profiling::services::{LogParser, ResultAggregator, TestDescriptorGenerator};
use crate::shared::Result;
use tracing::{debug, info};

/// ProfileDependenciesUseCase - Core use case measuring every declared dependency
///
/// Dependencies are measured strictly one after another: concurrent builds
/// would share the local artifact cache and skew each other's wall-clock
/// times.
///
/// # Type Parameters
/// * `DR` - DescriptorReader implementation
/// * `WP` - WorkspaceProvider implementation
/// * `BR` - BuildRunner implementation
/// * `RW` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ProfileDependenciesUseCase<DR, WP, BR, RW, PR> {
    descriptor_reader: DR,
    workspace_provider: WP,
    build_runner: BR,
    report_writer: RW,
    progress_reporter: PR,
}

impl<DR, WP, BR, RW, PR> ProfileDependenciesUseCase<DR, WP, BR, RW, PR>
where
    DR: DescriptorReader,
    WP: WorkspaceProvider,
    BR: BuildRunner,
    RW: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new ProfileDependenciesUseCase with injected dependencies
    pub fn new(
        descriptor_reader: DR,
        workspace_provider: WP,
        build_runner: BR,
        report_writer: RW,
        progress_reporter: PR,
    ) -> Self {
        Self {
            descriptor_reader,
            workspace_provider,
            build_runner,
            report_writer,
            progress_reporter,
        }
    }

    /// Executes the profiling run
    ///
    /// Any error aborts the whole run and no report is written. Failed
    /// builds are not errors: they yield zeroed records.
    pub async fn execute(&self, request: ProfileRequest) -> Result<ProfileResponse> {
        // Step 1: Read and parse the descriptor
        let descriptor = self.load_descriptor(&request)?;
        let total = descriptor.declarations().len();

        // Step 2: Measure each declaration in isolation
        self.progress_reporter.report(&format!(
            "🔨 Building each dependency with: {}",
            self.build_runner.command_line()
        ));

        let mut aggregator = ResultAggregator::new();
        let mut failed_builds = 0;
        for (idx, declaration) in descriptor.declarations().iter().enumerate() {
            let (dependency, succeeded) = self.measure(&descriptor, declaration).await?;
            if !succeeded {
                failed_builds += 1;
            }

            self.progress_reporter.report(&dependency.to_report_line());
            self.progress_reporter
                .report_progress(idx + 1, total, Some(dependency.coordinates().as_str()));
            aggregator.push(dependency);
        }

        // Step 3: Order and render
        let unmeasured = aggregator.unmeasured_count();
        let measurements = aggregator.into_sorted();
        let lines = ResultAggregator::render_lines(&measurements);

        // Step 4: Persist the report
        let report_path = self
            .report_writer
            .write_report(descriptor.root_artifact_id(), &lines)?;
        info!(report = %report_path.display(), records = lines.len(), "profiling complete");

        self.progress_reporter.report_completion(&format!(
            "✅ Profiled {} dependency declaration(s): {} failed build(s), {} without a reported time\n   Report: {}",
            total,
            failed_builds,
            unmeasured,
            report_path.display()
        ));

        Ok(ProfileResponse::new(
            descriptor.root_artifact_id().to_string(),
            measurements,
            failed_builds,
            report_path,
        ))
    }

    /// Reads and parses the descriptor, reporting what was found
    fn load_descriptor(&self, request: &ProfileRequest) -> Result<Descriptor> {
        self.progress_reporter.report(&format!(
            "📖 Loading build descriptor from: {}",
            request.descriptor_path.display()
        ));

        let content = self
            .descriptor_reader
            .read_descriptor(&request.descriptor_path)?;
        let descriptor = Descriptor::parse(&content)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} dependency declaration(s) in {}",
            descriptor.declarations().len(),
            descriptor.root_artifact_id()
        ));

        Ok(descriptor)
    }

    /// Measures one declaration in its own workspace
    ///
    /// The workspace is released on every path: explicitly on success so
    /// cleanup failures surface, and by its `Drop` impl when an error
    /// propagates out of this function.
    ///
    /// # Returns
    /// The measurement record and whether the build exited successfully
    async fn measure(
        &self,
        descriptor: &Descriptor,
        declaration: &DependencyDeclaration,
    ) -> Result<(Dependency, bool)> {
        let mut dependency = Dependency::from_declaration(declaration);

        let test_descriptor = TestDescriptorGenerator::generate(descriptor, declaration);
        let xml = TestDescriptorGenerator::render(&test_descriptor)?;

        let workspace = self.workspace_provider.acquire(&xml)?;
        debug!(
            dependency = %dependency.coordinates(),
            workspace = %workspace.dir().display(),
            "measuring dependency"
        );

        let outcome = self
            .build_runner
            .run(workspace.dir(), &workspace.log_path())
            .await?;

        if outcome.is_success() {
            let log = workspace.read_log()?;
            let summary = LogParser::parse(&log);

            if summary.skipped_lines > 0 {
                debug!(
                    dependency = %dependency.coordinates(),
                    skipped = summary.skipped_lines,
                    "skipped unparseable log lines"
                );
            }
            if summary.time.is_none() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} built without a reported total time (no BUILD SUCCESS or Total time line)",
                    dependency.coordinates()
                ));
            }

            dependency.record_success(outcome.total_seconds(), summary);
        } else {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: build for {} {}",
                dependency.coordinates(),
                outcome.status()
            ));
        }

        workspace.release()?;
        Ok((dependency, outcome.is_success()))
    }
}
