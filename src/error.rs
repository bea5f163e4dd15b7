use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentParamError {
    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Invalid job name '{0}': use letters, digits, '.', '-' or '_'")]
    InvalidJobName(String),

    #[error("Job '{job}' has no agent parameter named '{name}'")]
    ParameterNotFound { job: String, name: String },

    #[error("Invalid parameter name: {0}")]
    InvalidParameterName(String),

    #[error("Job '{job}' already has a parameter named '{name}'")]
    DuplicateParameter { job: String, name: String },

    #[error("Invalid form submission: {0}")]
    InvalidForm(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize job: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AgentParamError>;
