//! Process instances, their states and transition history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status the engine reports for a process instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessStatus {
    Initialized,
    Running,
    Idled,
    Finalized,
    Terminated,
    Error,
    /// A status this client version does not know about
    #[serde(other)]
    Unknown,
}

impl ProcessStatus {
    /// Whether the instance can no longer move.
    pub fn is_final(&self) -> bool {
        matches!(self, ProcessStatus::Finalized | ProcessStatus::Terminated)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstanceModel {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    pub activity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_process_id: Option<Uuid>,
    pub root_process_id: Uuid,
    #[serde(default)]
    pub is_determining_parameters_changed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subprocess_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::timestamp::option"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::timestamp::option"
    )]
    pub last_transition_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_name: Option<String>,
    #[serde(default = "unknown_status")]
    pub status: ProcessStatus,
}

fn unknown_status() -> ProcessStatus {
    ProcessStatus::Unknown
}

/// A state (or activity) the engine can report or move an instance to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateModel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_code: Option<String>,
}

/// One executed transition of a process instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionHistoryModel {
    pub id: Uuid,
    pub process_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor_identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_identity_id: Option<String>,
    pub from_activity_name: String,
    pub to_activity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_state_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_state_name: Option<String>,
    pub transition_classifier: String,
    #[serde(with = "super::timestamp")]
    pub transition_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_name: Option<String>,
    #[serde(default)]
    pub is_finalised: bool,
}

/// An inbox/outbox entry: a process waiting on, or already handled by, an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxItemModel {
    pub process_id: Uuid,
    pub identity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_commands: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::timestamp::option"
    )]
    pub added_date: Option<DateTime<Utc>>,
}
