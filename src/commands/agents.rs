use crate::config::Config;
use crate::error::Result;
use crate::provider::ProviderRegistry;

use super::helpers;

pub fn execute(config: &Config, job_name: &str, name: &str, json: bool) -> Result<()> {
    let job = helpers::job_store(config).load(job_name)?;
    let inventory = config.inventory();
    let items = ProviderRegistry::global()
        .agent()
        .fill_value_items(&job, name, &inventory);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    // The list always holds master, so empty means the lookup failed
    if items.is_empty() {
        println!("No agent parameter named '{}' was found.", name);
        return Ok(());
    }

    for item in items {
        println!("{}", item.value);
    }

    Ok(())
}
