/// Use cases module containing application business logic orchestration
mod profile_dependencies;

pub use profile_dependencies::ProfileDependenciesUseCase;
