use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A serial number of the form `GSIM-AAAA-BBBB-CCCC`.
///
/// The payload is 8 uppercase hex characters, the checksum 4. A `Serial` is
/// only ever constructed with a checksum derived from its payload, so its
/// display form always validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Serial {
    payload: String,
    checksum: String,
}

impl Serial {
    pub(crate) fn new(payload: String, checksum: String) -> Self {
        Self { payload, checksum }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GSIM-{}-{}-{}",
            &self.payload[..4],
            &self.payload[4..],
            self.checksum
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialReport {
    pub serial: String,
    pub valid: bool,
}

impl SerialReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub reports: Vec<SerialReport>,
    pub all_valid: bool,
}

impl BatchReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
