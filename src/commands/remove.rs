use crate::config::Config;
use crate::error::{AgentParamError, Result};

use super::helpers;

pub fn execute(config: &Config, job_name: &str, name: Option<&str>) -> Result<()> {
    let store = helpers::job_store(config);

    let Some(name) = name else {
        if !store.delete(job_name)? {
            return Err(AgentParamError::JobNotFound(job_name.to_string()));
        }
        println!("Deleted job '{}'", job_name);
        return Ok(());
    };

    let mut job = store.load(job_name)?;
    match job.remove_parameter(name) {
        Some(removed) => {
            store.persist(&mut job)?;
            println!(
                "Removed {} parameter '{}' from job '{}'",
                removed.kind(),
                name,
                job_name
            );
        }
        None => {
            tracing::warn!(job = job_name, parameter = name, "parameter not found");
            println!("Job '{}' has no parameter named '{}'", job_name, name);
        }
    }

    Ok(())
}
