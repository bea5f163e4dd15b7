//! Parameter providers: the endpoints a build platform calls on a parameter
//! kind.
//!
//! # Architecture
//!
//! Each parameter kind is served by one [`ParameterProvider`], registered in
//! the [`ProviderRegistry`] under its pipeline symbol. A provider:
//! - validates and creates parameter instances from configuration forms
//! - fills the selection list shown when a build is triggered
//! - updates the remembered default when the user picks another agent
//! - re-offers a previous selection when a build is rebuilt
//!
//! Request fields are bound explicitly from JSON; nothing is discovered by
//! reflection.

pub mod registry;

pub use registry::ProviderRegistry;

use crate::error::{AgentParamError, Result};
use crate::inventory::Inventory;
use crate::job::Job;
use crate::parameter::{AgentParameter, AgentSelection};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One entry of a selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub display_name: String,
    pub value: String,
}

/// Outcome of a default-value update. Lookup failure is reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    Updated,
    NotFound { job: String, name: String },
}

impl UpdateStatus {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateStatus::Updated)
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::Updated => write!(f, "Default agent updated."),
            UpdateStatus::NotFound { name, .. } => {
                write!(f, "No agent parameter named '{}' was found.", name)
            }
        }
    }
}

pub trait ParameterProvider: Send + Sync {
    /// Symbol used to reference this parameter kind from pipelines.
    fn symbol(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn check_name(&self, name: &str) -> Result<()>;

    /// Create a parameter from configuration form data
    /// (`{"name": ..., "defaultValue": ...}`).
    fn new_instance(&self, form: &Value) -> Result<AgentParameter>;

    /// Selection list for the named parameter. Empty when the job has no
    /// such parameter.
    fn fill_value_items(&self, job: &Job, name: &str, inventory: &dyn Inventory)
        -> Vec<ListItem>;

    /// Remember `value` as the named parameter's default. The caller persists
    /// the job when the update succeeds.
    fn set_default_value(&self, job: &mut Job, name: &str, value: &str) -> UpdateStatus;

    /// Selection to pre-fill when a build is rebuilt, if the job still has the
    /// parameter.
    fn rebuild_value(&self, job: &Job, previous: &AgentSelection) -> Option<AgentSelection>;
}

#[derive(Debug, Default)]
pub struct AgentParameterProvider;

impl ParameterProvider for AgentParameterProvider {
    fn symbol(&self) -> &'static str {
        "agentParameter"
    }

    fn display_name(&self) -> &'static str {
        "Agent Server Parameter"
    }

    fn check_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(AgentParamError::InvalidParameterName(
                "name is required".to_string(),
            ));
        }
        Ok(())
    }

    fn new_instance(&self, form: &Value) -> Result<AgentParameter> {
        let name = form
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| AgentParamError::InvalidForm("missing 'name' field".to_string()))?;
        self.check_name(name)?;

        let default_value = form.get("defaultValue").and_then(Value::as_str);
        Ok(AgentParameter::new(name, default_value))
    }

    fn fill_value_items(
        &self,
        job: &Job,
        name: &str,
        inventory: &dyn Inventory,
    ) -> Vec<ListItem> {
        let Some(param) = job.agent_parameter(name) else {
            tracing::error!(
                job = job.name(),
                parameter = name,
                "no agent parameter found while filling the selection list"
            );
            return Vec::new();
        };

        param
            .agent_names(inventory)
            .into_iter()
            .map(|agent| ListItem {
                display_name: agent.clone(),
                value: agent,
            })
            .collect()
    }

    fn set_default_value(&self, job: &mut Job, name: &str, value: &str) -> UpdateStatus {
        let job_name = job.name().to_string();
        match job.agent_parameter_mut(name) {
            Some(param) => {
                param.set_default_value(Some(value));
                tracing::info!(
                    job = %job_name,
                    parameter = name,
                    agent = param.default_value(),
                    "updated default agent"
                );
                UpdateStatus::Updated
            }
            None => {
                tracing::error!(
                    job = %job_name,
                    parameter = name,
                    "no agent parameter found while setting the default value"
                );
                UpdateStatus::NotFound {
                    job: job_name,
                    name: name.to_string(),
                }
            }
        }
    }

    fn rebuild_value(&self, job: &Job, previous: &AgentSelection) -> Option<AgentSelection> {
        job.agent_parameter(previous.name())
            .map(|_| previous.clone())
    }
}
