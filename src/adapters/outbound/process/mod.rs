/// Process adapters invoking the external build tool
mod maven_runner;

pub use maven_runner::{MavenBuildRunner, DEFAULT_BUILD_COMMAND};
