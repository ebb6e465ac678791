use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub type Settings = serde_json::Map<String, Value>;
pub type FormFields = Vec<(String, FieldSpec)>;

pub const SEPARATOR_FIELD_TYPE: &str = "title";
pub const ENABLED_SETTING: &str = "enabled";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
}

impl FieldSpec {
    pub fn new(title: &str, field_type: &str) -> Self {
        Self {
            title: title.to_string(),
            field_type: field_type.to_string(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn options<'a>(mut self, options: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.options = Some(
            options
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// A field without a title or type cannot be rendered to clients.
    pub fn is_malformed(&self) -> bool {
        self.title.is_empty() || self.field_type.is_empty()
    }

    pub fn is_separator(&self) -> bool {
        self.field_type == SEPARATOR_FIELD_TYPE
    }
}

/// A gateway as materialized for one request. `id` is assigned from the
/// registry key, not taken from the gateway implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayHandle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub enabled: bool,
    pub method_title: String,
    pub method_description: String,
    pub form_fields: FormFields,
    pub settings: Settings,
}

/// Mirrors a loose "empty" check: null, false, 0, "", "0" and empty
/// containers all count as unset.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

pub fn bool_to_flag(enabled: bool) -> &'static str {
    if enabled {
        "yes"
    } else {
        "no"
    }
}

pub fn flag_to_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => s == "yes",
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_and_separator_detection() {
        assert!(FieldSpec::new("", "text").is_malformed());
        assert!(FieldSpec::new("Title", "").is_malformed());
        assert!(!FieldSpec::new("Title", "text").is_malformed());
        assert!(FieldSpec::new("Advanced", "title").is_separator());
    }

    #[test]
    fn empty_values_follow_loose_semantics() {
        assert!(is_empty_value(&json!(null)));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!("0")));
        assert!(is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!("no")));
        assert!(!is_empty_value(&json!({"a": "b"})));
    }

    #[test]
    fn flags_round_trip_through_strings() {
        assert_eq!(bool_to_flag(true), "yes");
        assert_eq!(bool_to_flag(false), "no");
        assert!(flag_to_bool(Some(&json!("yes"))));
        assert!(!flag_to_bool(Some(&json!("no"))));
        assert!(!flag_to_bool(None));
    }
}
