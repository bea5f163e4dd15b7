//! Explicit binding of build-form submissions.

use crate::error::{AgentParamError, Result};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Single(String),
    Multiple(Vec<String>),
    Missing,
}

impl FormValue {
    /// Flatten to one string. Multiple values are comma-joined as-is.
    pub fn joined(&self) -> String {
        match self {
            FormValue::Single(value) => value.clone(),
            FormValue::Multiple(values) => values.join(","),
            FormValue::Missing => String::new(),
        }
    }
}

/// Body of a build-form submission: `{"name": ..., "value": "..." | [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub value: FormValue,
}

impl FormSubmission {
    pub fn new(name: impl Into<String>, value: FormValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn from_json(json: &Value) -> Result<Self> {
        let object = json
            .as_object()
            .ok_or_else(|| AgentParamError::InvalidForm("expected a JSON object".to_string()))?;

        let name = match object.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(AgentParamError::InvalidForm(format!(
                    "'name' must be a string, got {}",
                    other
                )))
            }
            None => {
                return Err(AgentParamError::InvalidForm(
                    "missing 'name' field".to_string(),
                ))
            }
        };

        let value = match object.get("value") {
            Some(Value::String(value)) => FormValue::Single(value.clone()),
            Some(Value::Array(items)) => FormValue::Multiple(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            // Only strings and arrays carry a selection
            Some(_) | None => FormValue::Missing,
        };

        Ok(Self { name, value })
    }

    pub fn parse(text: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_value() {
        let form = FormSubmission::from_json(&json!({"name": "agent", "value": "nodeA"})).unwrap();
        assert_eq!(form.name, "agent");
        assert_eq!(form.value, FormValue::Single("nodeA".to_string()));
    }

    #[test]
    fn test_array_value_joins_without_escaping() {
        let form = FormSubmission::from_json(&json!({
            "name": "agent",
            "value": ["nodeA", "node,B"]
        }))
        .unwrap();
        assert_eq!(form.value.joined(), "nodeA,node,B");
    }

    #[test]
    fn test_missing_or_null_value() {
        let form = FormSubmission::from_json(&json!({"name": "agent"})).unwrap();
        assert_eq!(form.value, FormValue::Missing);

        let form = FormSubmission::from_json(&json!({"name": "agent", "value": null})).unwrap();
        assert_eq!(form.value.joined(), "");
    }

    #[test]
    fn test_non_string_elements() {
        let form = FormSubmission::from_json(&json!({"name": "agent", "value": [1, true]})).unwrap();
        assert_eq!(form.value.joined(), "1,true");
    }

    #[test]
    fn test_scalar_value_falls_back_to_default() {
        let param = crate::parameter::AgentParameter::new("agent", Some("nodeA"));

        for value in [json!(5), json!(true), json!({"node": "nodeB"})] {
            let form =
                FormSubmission::from_json(&json!({"name": "agent", "value": value})).unwrap();
            assert_eq!(form.value, FormValue::Missing);
            assert_eq!(param.value_from_form(&form).value(), "nodeA");
        }
    }

    #[test]
    fn test_missing_name_rejected() {
        let err = FormSubmission::from_json(&json!({"value": "nodeA"})).unwrap_err();
        assert!(err.to_string().contains("missing 'name'"));
    }

    #[test]
    fn test_not_an_object() {
        assert!(FormSubmission::from_json(&json!(["agent"])).is_err());
        assert!(FormSubmission::parse("not json").is_err());
    }

    #[test]
    fn test_parse_text() {
        let form = FormSubmission::parse(r#"{"name":"agent","value":["a","b"]}"#).unwrap();
        assert_eq!(form.value.joined(), "a,b");
    }
}
