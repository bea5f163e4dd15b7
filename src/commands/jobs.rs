use crate::config::Config;
use crate::error::Result;

use super::helpers;

pub fn execute(config: &Config) -> Result<()> {
    let store = helpers::job_store(config);
    let names = store.list()?;

    if names.is_empty() {
        println!("No jobs found in {}", store.root().display());
        return Ok(());
    }

    for name in names {
        let job = store.load(&name)?;
        match job.updated_at() {
            Some(at) => println!("{} (updated {})", name, at.format("%Y-%m-%d %H:%M:%S UTC")),
            None => println!("{}", name),
        }
        for param in job.parameters() {
            println!(
                "  {:<20} {:<8} default: {}",
                param.name(),
                param.kind(),
                param.default_value()
            );
        }
    }

    Ok(())
}
