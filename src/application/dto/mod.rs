/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod profile_request;
mod profile_response;

pub use profile_request::ProfileRequest;
pub use profile_response::ProfileResponse;
