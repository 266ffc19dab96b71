use std::collections::BTreeSet;

use serde::Serialize;

/// A single scanned port on a host.
///
/// Every attribute except `protocol` is `None` when the scanner did not report it.
/// A missing protocol is recorded as an empty string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Port {
    pub number: String,
    pub protocol: String,
    pub state: Option<String>,
    pub service: Option<String>,
    pub product: Option<String>,
    pub version: Option<String>,
    pub cves: BTreeSet<String>,
}

impl Port {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.as_deref() == Some("open")
    }
}
