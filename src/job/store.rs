//! File-backed job configuration store. One TOML file per job.

use super::Job;
use crate::error::{AgentParamError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

const JOB_EXTENSION: &str = "toml";

#[derive(Debug, Clone)]
pub struct JobStore {
    root: PathBuf,
}

impl JobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, job: &str) -> Result<PathBuf> {
        validate_job_name(job)?;
        Ok(self.root.join(format!("{}.{}", job, JOB_EXTENSION)))
    }

    pub fn load(&self, job: &str) -> Result<Job> {
        let path = self.path_for(job)?;
        if !path.exists() {
            return Err(AgentParamError::JobNotFound(job.to_string()));
        }

        let contents = fs::read_to_string(&path)?;
        let mut loaded: Job = toml::from_str(&contents)?;

        // The file name identifies the job; saves must land back in this file
        if loaded.name != job {
            tracing::warn!(job, stored = %loaded.name, "job file name differs from stored name");
            loaded.name = job.to_string();
        }

        tracing::debug!(job, path = %path.display(), "loaded job");
        Ok(loaded)
    }

    pub fn load_or_new(&self, job: &str) -> Result<Job> {
        match self.load(job) {
            Err(AgentParamError::JobNotFound(_)) => Ok(Job::new(job)),
            other => other,
        }
    }

    /// Save the job, stamping its update time. The file is replaced in one
    /// rename, so readers see either the old or the new job. Concurrent
    /// writers overwrite each other; the last save wins.
    pub fn persist(&self, job: &mut Job) -> Result<()> {
        let path = self.path_for(job.name())?;
        fs::create_dir_all(&self.root)?;

        job.touch();
        let contents = toml::to_string_pretty(&*job)?;

        let mut file = NamedTempFile::new_in(&self.root)?;
        file.write_all(contents.as_bytes())?;

        #[cfg(unix)]
        {
            let _ = fs::set_permissions(file.path(), fs::Permissions::from_mode(0o600));
        }

        file.persist(&path).map_err(|e| e.error)?;

        tracing::debug!(job = job.name(), path = %path.display(), "persisted job");
        Ok(())
    }

    /// Names of all stored jobs, sorted. A missing store directory is empty.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(JOB_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_job_name(stem).is_ok() {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Remove a job file. Returns false if it did not exist.
    pub fn delete(&self, job: &str) -> Result<bool> {
        let path = self.path_for(job)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}

/// Job names become file names, so keep them to a safe character set.
fn validate_job_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if valid {
        Ok(())
    } else {
        Err(AgentParamError::InvalidJobName(name.to_string()))
    }
}
