mod fake_test_runner;
mod recording_build_log;

pub use fake_test_runner::{FakeTestRunner, RunnerScript};
pub use recording_build_log::RecordingBuildLog;
