use serde::{Deserialize, Serialize};

use super::UserRecord;
use crate::Result;

/// The response envelope: `{ "results": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub results: Vec<UserRecord>,
}

impl Batch {
    pub fn new(results: Vec<UserRecord>) -> Self {
        Self { results }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_records(self) -> Vec<UserRecord> {
        self.results
    }
}
