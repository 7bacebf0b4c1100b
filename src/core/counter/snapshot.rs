use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::CounterError;

/// Readable surface of a counter, serialized as `{"currentCount": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSnapshot {
    pub current_count: u64,
}

impl CounterSnapshot {
    pub fn to_json(&self) -> Result<String, CounterError> {
        let json = serde_json::to_string(self)?;
        debug!("Serialized snapshot: {:?}", self);
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self, CounterError> {
        let snapshot = serde_json::from_str(json)?;
        debug!("Deserialized snapshot: {:?}", snapshot);
        Ok(snapshot)
    }
}
