use crate::cli::Cli;
use crate::error::{AgentParamError, Result};
use crate::inventory::{Inventory, StaticInventory};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".agent-param.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub inventory: InventoryConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InventoryConfig {
    /// Display names of the known agents, in display order
    #[serde(default)]
    pub computers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Directory holding one TOML file per job (supports ~)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Environment variables
    /// 3. Project config (.agent-param.toml in the working directory)
    /// 4. Global config (~/.agent-param.toml)
    /// 5. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        for path in Self::sources(project_root) {
            if path.exists() {
                config = config.merge(Self::from_file(&path)?);
            }
        }

        Ok(config.merge_env())
    }

    /// Load a single explicit config file, skipping global and project files.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AgentParamError::ConfigNotFound(path.to_path_buf()));
        }
        Ok(Self::default().merge(Self::from_file(path)?).merge_env())
    }

    /// Candidate config files, lowest precedence first.
    pub fn sources(project_root: &Path) -> Vec<PathBuf> {
        let mut sources = Vec::new();
        if let Some(home) = home_dir() {
            sources.push(home.join(CONFIG_FILE_NAME));
        }
        sources.push(project_root.join(CONFIG_FILE_NAME));
        sources
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        // A non-empty inventory replaces the base one
        if !other.inventory.computers.is_empty() {
            self.inventory.computers = other.inventory.computers;
        }

        if other.store.dir.is_some() {
            self.store.dir = other.store.dir;
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Ok(list) = std::env::var("AGENT_PARAM_COMPUTERS") {
            let computers = StaticInventory::from_list(&list).computer_names();
            if !computers.is_empty() {
                self.inventory.computers = computers;
            }
        }

        if let Ok(dir) = std::env::var("AGENT_PARAM_STORE_DIR") {
            if !dir.trim().is_empty() {
                self.store.dir = Some(dir);
            }
        }

        self
    }

    /// Apply CLI overrides (highest precedence)
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if !cli.computers.is_empty() {
            self.inventory.computers = cli.computers.clone();
        }

        if let Some(dir) = &cli.store_dir {
            self.store.dir = Some(dir.to_string_lossy().to_string());
        }

        self
    }

    /// Resolved job store directory.
    pub fn store_dir(&self) -> PathBuf {
        match &self.store.dir {
            Some(dir) => expand_home(dir),
            None => home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".agent-param")
                .join("jobs"),
        }
    }

    pub fn inventory(&self) -> StaticInventory {
        StaticInventory::new(self.inventory.computers.clone())
    }
}

/// Get the home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}
