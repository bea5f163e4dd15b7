//! Jobs and the parameters configured on them.
//!
//! A job file looks like:
//!
//! ```toml
//! name = "deploy"
//!
//! [[parameters]]
//! type = "agent"
//! name = "agent"
//! default_value = "nodeA"
//!
//! [[parameters]]
//! type = "string"
//! name = "BRANCH"
//! default_value = "main"
//! ```

pub mod store;

pub use store::JobStore;

use crate::error::{AgentParamError, Result};
use crate::parameter::AgentParameter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParameterDefinition {
    #[serde(rename = "agent")]
    Agent(AgentParameter),

    #[serde(rename = "string")]
    Text(TextParameter),
}

impl ParameterDefinition {
    pub fn name(&self) -> &str {
        match self {
            ParameterDefinition::Agent(p) => p.name(),
            ParameterDefinition::Text(p) => &p.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParameterDefinition::Agent(_) => "agent",
            ParameterDefinition::Text(_) => "string",
        }
    }

    pub fn default_value(&self) -> &str {
        match self {
            ParameterDefinition::Agent(p) => p.default_value(),
            ParameterDefinition::Text(p) => &p.default_value,
        }
    }
}

/// Plain string parameter. Only carried through so agent lookups can skip it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextParameter {
    pub name: String,

    #[serde(default)]
    pub default_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    parameters: Vec<ParameterDefinition>,
}

impl Job {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: None,
            parameters: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    pub fn parameters(&self) -> &[ParameterDefinition] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// The agent parameter called `name`. Parameters of other kinds never match.
    pub fn agent_parameter(&self, name: &str) -> Option<&AgentParameter> {
        match self.parameter(name) {
            Some(ParameterDefinition::Agent(p)) => Some(p),
            _ => None,
        }
    }

    pub fn agent_parameter_mut(&mut self, name: &str) -> Option<&mut AgentParameter> {
        self.parameters.iter_mut().find_map(|p| match p {
            ParameterDefinition::Agent(agent) if agent.name() == name => Some(agent),
            _ => None,
        })
    }

    pub fn add_parameter(&mut self, parameter: ParameterDefinition) -> Result<()> {
        if self.parameter(parameter.name()).is_some() {
            return Err(AgentParamError::DuplicateParameter {
                job: self.name.clone(),
                name: parameter.name().to_string(),
            });
        }
        self.parameters.push(parameter);
        Ok(())
    }

    /// Insert or replace by name, keeping the original position.
    pub fn replace_parameter(&mut self, parameter: ParameterDefinition) -> Option<ParameterDefinition> {
        match self
            .parameters
            .iter_mut()
            .find(|p| p.name() == parameter.name())
        {
            Some(existing) => Some(std::mem::replace(existing, parameter)),
            None => {
                self.parameters.push(parameter);
                None
            }
        }
    }

    pub fn remove_parameter(&mut self, name: &str) -> Option<ParameterDefinition> {
        let pos = self.parameters.iter().position(|p| p.name() == name)?;
        Some(self.parameters.remove(pos))
    }
}
