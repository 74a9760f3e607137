use crate::ports::BuildLog;

/// Build log writing to the process stdout and stderr.
#[derive(Debug, Default)]
pub struct ConsoleBuildLog;

impl ConsoleBuildLog {
    pub fn new() -> Self {
        Self
    }
}

impl BuildLog for ConsoleBuildLog {
    fn println(&mut self, line: &str) {
        println!("{}", line);
    }

    fn error(&mut self, line: &str) {
        eprintln!("ERROR: {}", line);
    }
}
