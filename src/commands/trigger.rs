use crate::cli::ResolveCmd;
use crate::config::Config;
use crate::error::Result;
use crate::provider::ProviderRegistry;

use super::helpers;

pub fn execute(config: &Config, cmd: &ResolveCmd) -> Result<()> {
    let store = helpers::job_store(config);
    let mut job = store.load(&cmd.job)?;

    let param = helpers::require_agent_parameter(&job, &cmd.name)?;
    let selection = param.resolve(&helpers::selection_source(cmd)?);

    // Remember the choice so the next trigger offers it first
    if selection.value() != param.default_value() {
        let status = ProviderRegistry::global()
            .agent()
            .set_default_value(&mut job, &cmd.name, selection.value());
        if status.is_updated() {
            store.persist(&mut job)?;
        } else {
            eprintln!("Warning: {}", status);
        }
    }

    helpers::print_build(&selection, cmd.format)
}
