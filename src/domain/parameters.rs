//! Step parameter bundle.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

pub const DEFAULT_SOURCE_FOLDER: &str = "COBOL";
pub const DEFAULT_REPORT_FOLDER: &str = "TTTReport";

/// Code coverage gate as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CoverageThreshold(u8);

impl CoverageThreshold {
    pub const MAX: u8 = 100;

    pub fn new(percent: i64) -> Result<Self, AppError> {
        u8::try_from(percent)
            .ok()
            .filter(|value| *value <= Self::MAX)
            .map(Self)
            .ok_or_else(|| AppError::InvalidThreshold(percent.to_string()))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl FromStr for CoverageThreshold {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| AppError::InvalidThreshold(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for CoverageThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters for one continuous-testing step invocation.
///
/// Identity fields are fixed by [`StepParameters::builder`]; the optional settings
/// fall back to their defaults unless set on the builder. Nothing is mutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepParameters {
    environment_id: String,
    folder_path: String,
    server_url: String,
    credentials_id: String,
    recursive: bool,
    stop_if_test_fails_or_threshold_reached: bool,
    upload_to_server: bool,
    halt_at_failure: bool,
    cc_threshold: CoverageThreshold,
    sonar_version: Option<String>,
    source_folder: String,
    report_folder: String,
    account_info: String,
}

impl StepParameters {
    pub fn builder(
        environment_id: impl Into<String>,
        folder_path: impl Into<String>,
        server_url: impl Into<String>,
        credentials_id: impl Into<String>,
    ) -> StepParametersBuilder {
        StepParametersBuilder {
            params: StepParameters {
                environment_id: environment_id.into(),
                folder_path: folder_path.into(),
                server_url: server_url.into(),
                credentials_id: credentials_id.into(),
                recursive: true,
                stop_if_test_fails_or_threshold_reached: true,
                upload_to_server: false,
                halt_at_failure: false,
                cc_threshold: CoverageThreshold::default(),
                sonar_version: None,
                source_folder: DEFAULT_SOURCE_FOLDER.to_string(),
                report_folder: DEFAULT_REPORT_FOLDER.to_string(),
                account_info: String::new(),
            },
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn folder_path(&self) -> &str {
        &self.folder_path
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn credentials_id(&self) -> &str {
        &self.credentials_id
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn stop_if_test_fails_or_threshold_reached(&self) -> bool {
        self.stop_if_test_fails_or_threshold_reached
    }

    pub fn upload_to_server(&self) -> bool {
        self.upload_to_server
    }

    pub fn halt_at_failure(&self) -> bool {
        self.halt_at_failure
    }

    pub fn cc_threshold(&self) -> CoverageThreshold {
        self.cc_threshold
    }

    pub fn sonar_version(&self) -> Option<&str> {
        self.sonar_version.as_deref()
    }

    pub fn source_folder(&self) -> &str {
        &self.source_folder
    }

    pub fn report_folder(&self) -> &str {
        &self.report_folder
    }

    pub fn account_info(&self) -> &str {
        &self.account_info
    }
}

/// Builder for [`StepParameters`].
#[derive(Debug, Clone)]
pub struct StepParametersBuilder {
    params: StepParameters,
}

impl StepParametersBuilder {
    pub fn recursive(mut self, value: bool) -> Self {
        self.params.recursive = value;
        self
    }

    pub fn stop_if_test_fails_or_threshold_reached(mut self, value: bool) -> Self {
        self.params.stop_if_test_fails_or_threshold_reached = value;
        self
    }

    pub fn upload_to_server(mut self, value: bool) -> Self {
        self.params.upload_to_server = value;
        self
    }

    pub fn halt_at_failure(mut self, value: bool) -> Self {
        self.params.halt_at_failure = value;
        self
    }

    pub fn cc_threshold(mut self, value: CoverageThreshold) -> Self {
        self.params.cc_threshold = value;
        self
    }

    pub fn sonar_version(mut self, value: Option<String>) -> Self {
        self.params.sonar_version = value.filter(|v| !v.trim().is_empty());
        self
    }

    pub fn source_folder(mut self, value: impl Into<String>) -> Self {
        self.params.source_folder = value.into();
        self
    }

    pub fn report_folder(mut self, value: impl Into<String>) -> Self {
        self.params.report_folder = value.into();
        self
    }

    pub fn account_info(mut self, value: impl Into<String>) -> Self {
        self.params.account_info = value.into();
        self
    }

    pub fn build(self) -> StepParameters {
        self.params
    }
}
