use crate::ports::BuildLog;

/// Build log that keeps every line for assertions.
#[derive(Debug, Default)]
pub struct RecordingBuildLog {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingBuildLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().chain(self.errors.iter()).any(|line| line.contains(needle))
    }
}

impl BuildLog for RecordingBuildLog {
    fn println(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn error(&mut self, line: &str) {
        self.errors.push(line.to_string());
    }
}
