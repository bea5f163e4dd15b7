#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use agent_param::cli::{Cli, Commands, ConfigCommands};
use agent_param::config::Config;
use agent_param::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Handle commands that don't need a loaded config
    match &cli.command {
        Commands::Version => {
            commands::version::execute()?;
            return Ok(());
        }
        Commands::Config {
            command: ConfigCommands::Validate { file },
        } => {
            commands::config::validate(file.as_deref().or(cli.config.as_deref()))?;
            return Ok(());
        }
        _ => {}
    }

    let config = match &cli.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load(&std::env::current_dir()?)?,
    }
    .with_cli_overrides(&cli);

    match &cli.command {
        Commands::Define {
            job,
            name,
            default_value,
            replace,
        } => {
            commands::define::execute(&config, job, name, default_value.as_deref(), *replace)?;
        }
        Commands::Remove { job, name } => {
            commands::remove::execute(&config, job, name.as_deref())?;
        }
        Commands::Jobs => {
            commands::jobs::execute(&config)?;
        }
        Commands::Agents { job, name, json } => {
            commands::agents::execute(&config, job, name, *json)?;
        }
        Commands::SetDefault { job, name, value } => {
            commands::set_default::execute(&config, job, name, value)?;
        }
        Commands::Resolve(cmd) => {
            commands::resolve::execute(&config, cmd)?;
        }
        Commands::Trigger(cmd) => {
            commands::trigger::execute(&config, cmd)?;
        }
        Commands::Rebuild {
            job,
            name,
            previous,
            format,
        } => {
            commands::rebuild::execute(&config, job, name, previous, *format)?;
        }
        Commands::Config {
            command: ConfigCommands::Show,
        } => {
            commands::config::show(&config)?;
        }
        Commands::Version | Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
