/// ProgressReporter port for reporting progress during a profiling run
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so that long sequences of builds give the user feedback.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many dependencies have been measured so far
    ///
    /// # Arguments
    /// * `current` - Number of finished measurements
    /// * `total` - Number of declarations in the descriptor
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning, such as a failed isolated build
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
