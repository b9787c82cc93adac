use clap::Parser;
use std::path::PathBuf;

/// Program and arguments of the build, split on whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand(pub Vec<String>);

/// Measure the build cost of every dependency declared in a Maven pom.xml
#[derive(Parser, Debug)]
#[command(name = "mvn-dep-cost")]
#[command(version)]
#[command(
    about = "Measure the build cost of every dependency declared in a Maven pom.xml",
    long_about = "Builds a copy of the descriptor once per declared dependency, each copy \
                  keeping only that dependency, and writes a report of build times and \
                  metadata downloads sorted from cheapest to most expensive."
)]
pub struct Args {
    /// Path to the pom.xml to profile
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptor: PathBuf,

    /// Root directory for per-dependency workspaces [default: tmp]
    #[arg(short, long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Directory the report is written to [default: result]
    #[arg(short, long, value_name = "DIR")]
    pub result_dir: Option<PathBuf>,

    /// Per-dependency build timeout in seconds (no limit by default)
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Explicit config file (otherwise mvn-dep-cost.config.yml next to the descriptor)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build command to run in each workspace, whitespace separated
    /// [default: "mvn compile -Dmaven.test.skip=true"]
    #[arg(long, value_name = "CMD", allow_hyphen_values = true, value_parser = parse_build_command)]
    pub build_command: Option<BuildCommand>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_build_command(s: &str) -> Result<BuildCommand, String> {
    let parts: Vec<String> = s.split_whitespace().map(String::from).collect();
    if parts.is_empty() {
        return Err("build command must not be empty".to_string());
    }
    Ok(BuildCommand(parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("mvn-dep-cost").chain(args.iter().copied()))
    }

    #[test]
    fn test_descriptor_only() {
        let args = parse(&["pom.xml"]).unwrap();
        assert_eq!(args.descriptor, PathBuf::from("pom.xml"));
        assert!(args.work_dir.is_none());
        assert!(args.result_dir.is_none());
        assert!(args.timeout.is_none());
        assert!(args.config.is_none());
        assert!(args.build_command.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "-w",
            "/tmp/ws",
            "--result-dir",
            "out",
            "-t",
            "120",
            "-c",
            "cfg.yml",
            "--build-command",
            "./mvnw -q compile",
            "-vv",
            "app/pom.xml",
        ])
        .unwrap();

        assert_eq!(args.descriptor, PathBuf::from("app/pom.xml"));
        assert_eq!(args.work_dir, Some(PathBuf::from("/tmp/ws")));
        assert_eq!(args.result_dir, Some(PathBuf::from("out")));
        assert_eq!(args.timeout, Some(120));
        assert_eq!(args.config, Some(PathBuf::from("cfg.yml")));
        assert_eq!(
            args.build_command,
            Some(BuildCommand(vec![
                "./mvnw".to_string(),
                "-q".to_string(),
                "compile".to_string()
            ]))
        );
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_missing_descriptor_is_an_error() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse(&["-t", "0", "pom.xml"]).is_err());
    }

    #[test]
    fn test_non_numeric_timeout_rejected() {
        assert!(parse(&["-t", "soon", "pom.xml"]).is_err());
    }

    #[test]
    fn test_blank_build_command_rejected() {
        assert!(parse(&["--build-command", "   ", "pom.xml"]).is_err());
    }

    #[test]
    fn test_parse_build_command_collapses_whitespace() {
        assert_eq!(
            parse_build_command("  mvn   compile ").unwrap(),
            BuildCommand(vec!["mvn".to_string(), "compile".to_string()])
        );
    }
}
