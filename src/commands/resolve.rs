use crate::cli::ResolveCmd;
use crate::config::Config;
use crate::error::Result;

use super::helpers;

pub fn execute(config: &Config, cmd: &ResolveCmd) -> Result<()> {
    let job = helpers::job_store(config).load(&cmd.job)?;
    let param = helpers::require_agent_parameter(&job, &cmd.name)?;

    let source = helpers::selection_source(cmd)?;
    let selection = param.resolve(&source);
    tracing::debug!(
        job = %cmd.job,
        parameter = %cmd.name,
        agent = selection.value(),
        "resolved selection"
    );

    helpers::print_build(&selection, cmd.format)
}
