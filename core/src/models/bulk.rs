//! Per-key results of batched RPC operations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of one item of a bulk RPC call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulkTaskState {
    Pending,
    Running,
    Completed,
    Faulted,
    Canceled,
}

impl BulkTaskState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BulkTaskState::Completed | BulkTaskState::Faulted | BulkTaskState::Canceled
        )
    }
}

/// Task state per key (usually a process id) plus the error text of faulted items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResponse {
    #[serde(default)]
    pub tasks: HashMap<String, BulkTaskState>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub errors: HashMap<String, String>,
}

impl BulkResponse {
    pub fn state_of(&self, key: &str) -> Option<BulkTaskState> {
        self.tasks.get(key).copied()
    }

    /// Keys that completed, sorted.
    pub fn completed(&self) -> Vec<&str> {
        self.keys_in(BulkTaskState::Completed)
    }

    /// Keys that faulted, sorted.
    pub fn faulted(&self) -> Vec<&str> {
        self.keys_in(BulkTaskState::Faulted)
    }

    pub fn all_completed(&self) -> bool {
        self.tasks.values().all(|s| *s == BulkTaskState::Completed)
    }

    fn keys_in(&self, state: BulkTaskState) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tasks
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}
