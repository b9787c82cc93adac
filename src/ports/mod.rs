/// Ports module defining interfaces for hexagonal architecture
///
/// The profiling core only talks to the filesystem, the external build tool
/// and the console through these outbound (driven) ports.
pub mod outbound;
