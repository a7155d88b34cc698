use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled timer of a process instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerModel {
    pub id: Uuid,
    pub process_id: Uuid,
    pub root_process_id: Uuid,
    pub name: String,
    #[serde(with = "super::timestamp")]
    pub next_execution_date_time: DateTime<Utc>,
    /// Set when the engine should skip this timer on its next tick
    #[serde(default)]
    pub ignore: bool,
}

impl TimerModel {
    pub fn new(process_id: Uuid, name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            process_id,
            root_process_id: process_id,
            name: name.into(),
            next_execution_date_time: at,
            ignore: false,
        }
    }
}
