use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::parameter::AgentSelection;
use crate::provider::ProviderRegistry;

use super::helpers;

pub fn execute(
    config: &Config,
    job_name: &str,
    name: &str,
    previous: &str,
    format: OutputFormat,
) -> Result<()> {
    let job = helpers::job_store(config).load(job_name)?;
    let previous = AgentSelection::new(name, previous);

    match ProviderRegistry::global()
        .agent()
        .rebuild_value(&job, &previous)
    {
        Some(selection) => helpers::print_build(&selection, format),
        None => {
            tracing::warn!(job = job_name, parameter = name, "cannot rebuild selection");
            println!("No agent parameter named '{}' was found.", name);
            Ok(())
        }
    }
}
