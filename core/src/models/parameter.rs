//! Process-scoped and global parameters.
//!
//! The engine stores parameter values as serialized JSON text. The helpers
//! here convert between that text and typed values.

use crate::error::CoreResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted parameter of a process instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterModel {
    pub id: Uuid,
    pub process_id: Uuid,
    pub parameter_name: String,
    /// JSON-encoded value
    #[serde(default)]
    pub value: String,
}

impl ParameterModel {
    pub fn new<T: Serialize>(
        process_id: Uuid,
        parameter_name: impl Into<String>,
        value: &T,
    ) -> CoreResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            process_id,
            parameter_name: parameter_name.into(),
            value: serde_json::to_string(value)?,
        })
    }

    /// Decode the stored value.
    pub fn value_as<T: DeserializeOwned>(&self) -> CoreResult<T> {
        Ok(serde_json::from_str(&self.value)?)
    }
}

/// A tenant-wide parameter, grouped by `type` and unique by (`type`, `name`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalParameterModel {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub parameter_type: String,
    pub name: String,
    /// JSON-encoded value
    #[serde(default)]
    pub value: String,
}

impl GlobalParameterModel {
    pub fn new<T: Serialize>(
        parameter_type: impl Into<String>,
        name: impl Into<String>,
        value: &T,
    ) -> CoreResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            parameter_type: parameter_type.into(),
            name: name.into(),
            value: serde_json::to_string(value)?,
        })
    }

    pub fn value_as<T: DeserializeOwned>(&self) -> CoreResult<T> {
        Ok(serde_json::from_str(&self.value)?)
    }
}
