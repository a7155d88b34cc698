//! Predicate trees sent to the engine's collection endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Node kind of a [`FieldFilter`].
///
/// `And`, `Or` and `Not` combine child filters; every other kind compares a
/// single field against a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    And,
    Or,
    Not,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Contains,
    StartsWith,
    EndsWith,
    In,
}

impl FilterType {
    /// Whether this kind combines child filters instead of comparing a field.
    pub fn is_composite(&self) -> bool {
        matches!(self, FilterType::And | FilterType::Or | FilterType::Not)
    }
}

/// One node of a boolean-composed predicate tree.
///
/// The engine evaluates the tree; the client only builds and ships it.
///
/// # Example
///
/// ```
/// use workflow_api_core::query::FieldFilter;
/// use serde_json::json;
///
/// let filter = FieldFilter::and(vec![
///     FieldFilter::equal("ProcessId", json!("8f1d...")),
///     FieldFilter::not(FieldFilter::is_in("IdentityId", vec![json!("bob"), json!("eve")])),
/// ]);
/// assert_eq!(filter.filters.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFilter {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FieldFilter>,
}

impl FieldFilter {
    fn composite(filter_type: FilterType, filters: Vec<FieldFilter>) -> Self {
        Self {
            filter_type,
            field: None,
            value: None,
            filters,
        }
    }

    fn compare(filter_type: FilterType, field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            filter_type,
            field: Some(field.into()),
            value: Some(value.into()),
            filters: Vec::new(),
        }
    }

    pub fn and(filters: Vec<FieldFilter>) -> Self {
        Self::composite(FilterType::And, filters)
    }

    pub fn or(filters: Vec<FieldFilter>) -> Self {
        Self::composite(FilterType::Or, filters)
    }

    pub fn not(filter: FieldFilter) -> Self {
        Self::composite(FilterType::Not, vec![filter])
    }

    pub fn equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::Equal, field, value)
    }

    pub fn not_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::NotEqual, field, value)
    }

    pub fn greater(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::Greater, field, value)
    }

    pub fn greater_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::GreaterEqual, field, value)
    }

    pub fn less(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::Less, field, value)
    }

    pub fn less_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::LessEqual, field, value)
    }

    pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::Contains, field, value)
    }

    pub fn starts_with(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::StartsWith, field, value)
    }

    pub fn ends_with(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(FilterType::EndsWith, field, value)
    }

    /// Membership test; the values are sent as a JSON array.
    pub fn is_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::compare(FilterType::In, field, Value::Array(values))
    }
}
