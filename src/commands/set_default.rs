use crate::config::Config;
use crate::error::Result;
use crate::provider::ProviderRegistry;

use super::helpers;

pub fn execute(config: &Config, job_name: &str, name: &str, value: &str) -> Result<()> {
    let store = helpers::job_store(config);
    let mut job = store.load(job_name)?;

    let status = ProviderRegistry::global()
        .agent()
        .set_default_value(&mut job, name, value);
    if status.is_updated() {
        store.persist(&mut job)?;
    }

    println!("{}", status);
    Ok(())
}
