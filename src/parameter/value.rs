//! Resolved selections and the build environment they feed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The agent chosen for one build. Never changes once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSelection {
    name: String,
    value: String,
}

impl AgentSelection {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Export the selection as an environment variable of the build.
    pub fn build_environment(&self, env: &mut BuildEnvironment) {
        env.put(&self.name, &self.value);
    }

    /// The label expression the scheduler uses to place the build.
    pub fn assigned_label(&self) -> Label {
        Label::new(&self.value)
    }

    /// Variable substitution hook: answers only for this parameter's name.
    pub fn resolve_variable(&self, name: &str) -> Option<&str> {
        (self.name == name).then_some(self.value.as_str())
    }
}

/// Label or node-name expression handed to the scheduler verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn expression(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Variables and placement a build starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildEnvironment {
    variables: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<Label>,
}

impl BuildEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment for a build triggered with a single selection.
    pub fn for_selection(selection: &AgentSelection) -> Self {
        let mut env = Self::new();
        selection.build_environment(&mut env);
        env.assign_label(selection.assigned_label());
        env
    }

    pub fn put(&mut self, key: &str, value: &str) {
        self.variables.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    pub fn assign_label(&mut self, label: Label) {
        self.label = Some(label);
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Substitute `${VAR}` and `$VAR` references. Unknown variables are left
    /// untouched.
    pub fn expand(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
                match braced.find('}') {
                    Some(end) => (&braced[..end], end + 2),
                    None => ("", 0),
                }
            } else {
                let end = after
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(after.len());
                (&after[..end], end)
            };

            match self.variables.get(name).filter(|_| !name.is_empty()) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[consumed..];
                }
                None => {
                    out.push('$');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// `KEY=value` lines in key order.
    pub fn to_env_lines(&self) -> Vec<String> {
        self.variables
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect()
    }
}
