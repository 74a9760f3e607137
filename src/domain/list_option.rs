use std::fmt;

use serde::Serialize;

/// One entry of a selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOption {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

impl ListOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, selected: bool) -> Self {
        Self { label: label.into(), value: value.into(), selected }
    }

    /// The leading blank choice every list starts with.
    pub fn empty() -> Self {
        Self::new("", "", false)
    }
}

impl fmt::Display for ListOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { "[*]" } else { "[ ]" };
        write!(f, "{} {} = {}", marker, self.label, self.value)
    }
}
