//! Agent selection parameter.
//!
//! An [`AgentParameter`] is one build-input slot on a job. It remembers the
//! agent picked for the previous build and offers it first the next time the
//! job is triggered.
//!
//! # Resolution sources
//!
//! A build request produces an [`AgentSelection`] from one of:
//! - a form submission (single value or multi-select, comma-joined)
//! - raw request parameters (first value wins)
//! - a command-line value
//!
//! Each source falls back to the stored default when it carries nothing.
//! Agent names are never checked against the inventory here; the scheduler
//! decides whether a name maps to a real executor.

pub mod form;
pub mod value;

pub use form::{FormSubmission, FormValue};
pub use value::{AgentSelection, BuildEnvironment, Label};

use crate::inventory::Inventory;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Where the selection of a build request comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSource {
    Form(FormSubmission),
    Request(Vec<String>),
    CommandLine(String),
}

/// Agent used whenever no explicit default has been set.
pub const MASTER: &str = "master";

/// Description shown for every agent parameter.
pub const DESCRIPTION: &str = "Agent Server Parameter.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentParameter {
    name: String,

    #[serde(default = "master", deserialize_with = "deserialize_normalized")]
    default_value: String,

    /// Distinguishes several agent parameters rendered on one form.
    /// Regenerated on every load.
    #[serde(skip, default = "Uuid::new_v4")]
    instance_id: Uuid,
}

impl AgentParameter {
    pub fn new(name: impl Into<String>, default_value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            default_value: normalize(default_value),
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &'static str {
        DESCRIPTION
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Replace the remembered agent. Blank input resets it to [`MASTER`].
    pub fn set_default_value(&mut self, value: Option<&str>) {
        self.default_value = normalize(value);
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// True when both values are the same parameter instance, not merely
    /// equal in name and default.
    pub fn same_instance(&self, other: &AgentParameter) -> bool {
        self.instance_id == other.instance_id
    }

    /// Unique element id for this parameter on a rendered form.
    pub fn element_id(&self) -> String {
        let sanitized: String = self
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}-{}", sanitized, self.instance_id)
    }

    /// Selectable agent names, current default first.
    pub fn agent_names(&self, inventory: &dyn Inventory) -> Vec<String> {
        order_agents(inventory.computer_names(), &self.default_value)
    }

    pub fn default_selection(&self) -> AgentSelection {
        AgentSelection::new(self.name.clone(), self.default_value.clone())
    }

    /// Resolve a submitted build form.
    ///
    /// Multi-select values are joined with `,` and no escaping, so a name
    /// that itself contains a comma cannot be told apart from two names.
    pub fn value_from_form(&self, form: &FormSubmission) -> AgentSelection {
        let joined = form.value.joined();
        let value = if joined.is_empty() {
            self.default_value.clone()
        } else {
            joined
        };
        AgentSelection::new(form.name.clone(), value)
    }

    /// Resolve raw request parameters. Only the first value is used, verbatim.
    pub fn value_from_request(&self, raw_values: &[String]) -> AgentSelection {
        match raw_values.first() {
            Some(value) if !is_blank(value) => {
                AgentSelection::new(self.name.clone(), value.clone())
            }
            _ => self.default_selection(),
        }
    }

    pub fn value_from_command_line(&self, value: &str) -> AgentSelection {
        if value.is_empty() {
            self.default_selection()
        } else {
            AgentSelection::new(self.name.clone(), value.to_string())
        }
    }

    pub fn resolve(&self, source: &SelectionSource) -> AgentSelection {
        match source {
            SelectionSource::Form(form) => self.value_from_form(form),
            SelectionSource::Request(raw) => self.value_from_request(raw),
            SelectionSource::CommandLine(value) => self.value_from_command_line(value),
        }
    }
}

/// Order an inventory snapshot for display.
///
/// The result always contains [`MASTER`], and `default_agent` appears exactly
/// once, at index 0, whenever it is part of the list. The remaining names keep
/// inventory order.
pub fn order_agents(mut names: Vec<String>, default_agent: &str) -> Vec<String> {
    if !names.iter().any(|name| name == MASTER) {
        names.insert(0, MASTER.to_string());
    }

    if names.iter().any(|name| name == default_agent) {
        names.retain(|name| name != default_agent);
        names.insert(0, default_agent.to_string());
    }

    names
}

fn normalize(value: Option<&str>) -> String {
    match value {
        Some(v) if !is_blank(v) => v.to_string(),
        _ => MASTER.to_string(),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn master() -> String {
    MASTER.to_string()
}

fn deserialize_normalized<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize(raw.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::StaticInventory;

    fn inventory(names: &[&str]) -> StaticInventory {
        StaticInventory::new(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_blank_defaults_become_master() {
        for input in [None, Some(""), Some("   "), Some("\t\n")] {
            let param = AgentParameter::new("agent", input);
            assert_eq!(param.default_value(), MASTER, "input: {:?}", input);
        }
    }

    #[test]
    fn test_non_blank_default_kept_verbatim() {
        let param = AgentParameter::new("agent", Some("  nodeA "));
        assert_eq!(param.default_value(), "  nodeA ");
    }

    #[test]
    fn test_set_default_value_normalizes() {
        let mut param = AgentParameter::new("agent", Some("nodeA"));
        param.set_default_value(Some(" "));
        assert_eq!(param.default_value(), MASTER);

        param.set_default_value(Some("nodeB"));
        assert_eq!(param.default_value(), "nodeB");
    }

    #[test]
    fn test_description() {
        let param = AgentParameter::new("agent", None);
        assert_eq!(param.description(), "Agent Server Parameter.");
    }

    #[test]
    fn test_element_id_replaces_non_word_chars() {
        let param = AgentParameter::new("build agent-1", None);
        let id = param.element_id();
        assert!(id.starts_with("build_agent_1-"));
        assert!(id.ends_with(&param.instance_id().to_string()));
    }

    #[test]
    fn test_instances_are_distinct() {
        let a = AgentParameter::new("agent", None);
        let b = AgentParameter::new("agent", None);
        assert!(!a.same_instance(&b));
        assert!(a.same_instance(&a.clone()));
        assert_ne!(a.element_id(), b.element_id());
    }

    #[test]
    fn test_agent_names_adds_master() {
        let param = AgentParameter::new("agent", Some(""));
        let names = param.agent_names(&inventory(&["nodeA", "nodeB"]));
        assert_eq!(names, vec!["master", "nodeA", "nodeB"]);
    }

    #[test]
    fn test_agent_names_pins_default_first() {
        let param = AgentParameter::new("agent", Some("nodeB"));
        let names = param.agent_names(&inventory(&["master", "nodeA", "nodeB"]));
        assert_eq!(names, vec!["nodeB", "master", "nodeA"]);
    }

    #[test]
    fn test_agent_names_unknown_default_not_inserted() {
        let param = AgentParameter::new("agent", Some("gone"));
        let names = param.agent_names(&inventory(&["nodeA"]));
        assert_eq!(names, vec!["master", "nodeA"]);
    }

    #[test]
    fn test_agent_names_default_appears_once() {
        let param = AgentParameter::new("agent", Some("nodeA"));
        let names = param.agent_names(&inventory(&["nodeA", "master", "nodeA"]));
        assert_eq!(names, vec!["nodeA", "master"]);
    }

    #[test]
    fn test_agent_names_empty_inventory() {
        let param = AgentParameter::new("agent", None);
        assert_eq!(param.agent_names(&inventory(&[])), vec!["master"]);
    }

    #[test]
    fn test_default_moves_to_top_after_update() {
        let mut param = AgentParameter::new("agent", Some(""));
        let inv = inventory(&["nodeA", "nodeB"]);
        assert_eq!(param.agent_names(&inv), vec!["master", "nodeA", "nodeB"]);

        param.set_default_value(Some("nodeA"));
        assert_eq!(param.agent_names(&inv), vec!["nodeA", "master", "nodeB"]);
    }

    #[test]
    fn test_value_from_form_joins_multiple() {
        let param = AgentParameter::new("agent", None);
        let form = FormSubmission::new(
            "agent",
            FormValue::Multiple(vec!["nodeA".to_string(), "nodeB".to_string()]),
        );
        assert_eq!(param.value_from_form(&form).value(), "nodeA,nodeB");
    }

    #[test]
    fn test_value_from_form_empty_uses_default() {
        let param = AgentParameter::new("agent", Some(""));
        let form = FormSubmission::new("agent", FormValue::Single(String::new()));
        let selection = param.value_from_form(&form);
        assert_eq!(selection.name(), "agent");
        assert_eq!(selection.value(), "master");

        let form = FormSubmission::new("agent", FormValue::Multiple(vec![]));
        assert_eq!(param.value_from_form(&form).value(), "master");
    }

    #[test]
    fn test_value_from_form_uses_form_name() {
        let param = AgentParameter::new("agent", None);
        let form = FormSubmission::new("other", FormValue::Single("nodeA".to_string()));
        assert_eq!(param.value_from_form(&form).name(), "other");
    }

    #[test]
    fn test_value_from_request() {
        let param = AgentParameter::new("agent", Some("nodeA"));

        assert_eq!(param.value_from_request(&[]), param.default_selection());
        assert_eq!(
            param.value_from_request(&["  ".to_string()]),
            param.default_selection()
        );

        let selection = param.value_from_request(&[" nodeB".to_string(), "nodeC".to_string()]);
        assert_eq!(selection.value(), " nodeB");
    }

    #[test]
    fn test_value_from_request_accepts_unknown_agent() {
        let param = AgentParameter::new("agent", None);
        let selection = param.value_from_request(&["no-such-node".to_string()]);
        assert_eq!(selection.value(), "no-such-node");
    }

    #[test]
    fn test_value_from_command_line() {
        let param = AgentParameter::new("agent", Some("nodeA"));
        assert_eq!(param.value_from_command_line(""), param.default_selection());
        assert_eq!(param.value_from_command_line("nodeB").value(), "nodeB");
        assert_eq!(param.value_from_command_line(" ").value(), " ");
    }

    #[test]
    fn test_resolve_dispatches_on_source() {
        let param = AgentParameter::new("agent", Some("nodeA"));

        let form = FormSubmission::new("agent", FormValue::Single("nodeB".to_string()));
        assert_eq!(param.resolve(&SelectionSource::Form(form)).value(), "nodeB");
        assert_eq!(
            param.resolve(&SelectionSource::Request(vec![])).value(),
            "nodeA"
        );
        assert_eq!(
            param
                .resolve(&SelectionSource::CommandLine("nodeC".to_string()))
                .value(),
            "nodeC"
        );
    }

    #[test]
    fn test_default_selection() {
        let param = AgentParameter::new("agent", Some("nodeA"));
        assert_eq!(param.default_selection(), AgentSelection::new("agent", "nodeA"));
    }

    #[test]
    fn test_deserialize_normalizes_default() {
        let param: AgentParameter = toml::from_str("name = \"agent\"\ndefault_value = \" \"").unwrap();
        assert_eq!(param.default_value(), MASTER);

        let param: AgentParameter = toml::from_str("name = \"agent\"").unwrap();
        assert_eq!(param.default_value(), MASTER);
    }

    #[test]
    fn test_instance_id_not_serialized() {
        let param = AgentParameter::new("agent", Some("nodeA"));
        let text = toml::to_string(&param).unwrap();
        assert!(!text.contains(&param.instance_id().to_string()));
    }
}
