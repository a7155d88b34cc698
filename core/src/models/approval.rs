use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An approval-history record attached to a process instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalModel {
    pub id: Uuid,
    pub process_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(default)]
    pub allowed_to: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::timestamp::option"
    )]
    pub transition_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    pub initial_state: String,
    pub destination_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

impl ApprovalModel {
    /// A pending approval (no identity, no transition time yet).
    pub fn new(
        process_id: Uuid,
        initial_state: impl Into<String>,
        destination_state: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            process_id,
            identity_id: None,
            allowed_to: Vec::new(),
            transition_time: None,
            sort: None,
            initial_state: initial_state.into(),
            destination_state: destination_state.into(),
            trigger_name: None,
            commentary: None,
        }
    }
}
