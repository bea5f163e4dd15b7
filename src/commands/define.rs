use crate::config::Config;
use crate::error::Result;
use crate::job::ParameterDefinition;
use crate::provider::ProviderRegistry;

use super::helpers;

pub fn execute(
    config: &Config,
    job_name: &str,
    name: &str,
    default_value: Option<&str>,
    replace: bool,
) -> Result<()> {
    let provider = ProviderRegistry::global().agent();
    let param = provider.new_instance(&serde_json::json!({
        "name": name,
        "defaultValue": default_value,
    }))?;
    let default = param.default_value().to_string();

    let store = helpers::job_store(config);
    let mut job = store.load_or_new(job_name)?;

    let definition = ParameterDefinition::Agent(param);
    if replace {
        job.replace_parameter(definition);
    } else {
        job.add_parameter(definition)?;
    }
    store.persist(&mut job)?;

    println!(
        "Defined agent parameter '{}' on job '{}' (default: {})",
        name,
        job.name(),
        default
    );
    Ok(())
}
