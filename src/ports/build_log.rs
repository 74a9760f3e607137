//! Build log port definition.

/// Port for the build log of the job running the step.
///
/// Lines written here are the user-visible diagnostics of a step run.
pub trait BuildLog {
    /// Write an informational line.
    fn println(&mut self, line: &str);

    /// Write an error line.
    fn error(&mut self, line: &str);
}
