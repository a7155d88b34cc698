use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A command an identity may execute on a process instance right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    /// `Direct`, `Reverse` or `NotSpecified`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub valid_for_activity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_for_state_name: Option<String>,
    /// Identities allowed to execute the command
    #[serde(default)]
    pub identities: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<CommandParameter>,
}

impl CommandDefinition {
    pub fn parameter(&self, name: &str) -> Option<&CommandParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandParameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}
