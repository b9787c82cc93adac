/// Profiling core: domain model and pure services.
///
/// Nothing in this module performs I/O. Filesystem and process access live
/// behind the ports in `crate::ports`.
pub mod domain;
pub mod services;
