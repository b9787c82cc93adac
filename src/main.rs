mod cli;
mod config;

use cli::Args;
use config::{config_dir_for, discover_config, load_config_from_path, Settings, CONFIG_FILENAME};
use mvn_dep_cost::prelude::*;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse command-line arguments; clap exits with code 2 on invalid input
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => process::exit(ExitCode::Success.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr; stdout carries only the report path.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("mvn_dep_cost=warn"),
        1 => EnvFilter::new("mvn_dep_cost=debug"),
        _ => EnvFilter::new("mvn_dep_cost=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    // Load configuration: explicit file, or one next to the descriptor
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => {
            let dir = config_dir_for(&args.descriptor);
            let discovered = discover_config(dir)?;
            if discovered.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    dir.join(CONFIG_FILENAME).display()
                );
            }
            discovered
        }
    };
    let settings = Settings::resolve(&args, config);
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let descriptor_reader = FileSystemReader::new();
    let workspace_provider = TempWorkspaceProvider::new(settings.work_dir);
    let build_runner = MavenBuildRunner::new(settings.build_command, settings.timeout)?;
    let report_writer = FileSystemReportWriter::new(settings.result_dir);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ProfileDependenciesUseCase::new(
        descriptor_reader,
        workspace_provider,
        build_runner,
        report_writer,
        progress_reporter,
    );

    // Execute use case
    let response = use_case.execute(ProfileRequest::new(args.descriptor)).await?;

    println!("{}", response.report_path.display());

    Ok(())
}
