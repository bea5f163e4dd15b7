use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate {
        /// Optional path to a specific config file to validate
        file: Option<PathBuf>,
    },

    /// Show effective configuration after merging all sources
    Show,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// KEY=value lines, ready for `export`
    #[default]
    Env,
    /// JSON document with the selection and build environment
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "agent-param")]
#[command(about = "Pick the build agent for a job parameter and remember the last choice", long_about = None)]
#[command(version = env!("AGENT_PARAM_VERSION"))]
#[command(after_help = "\
EXAMPLES:
  agent-param define deploy agent                 Add an 'agent' parameter (default: master)
  agent-param --computer nodeA agents deploy agent
                                                  Selection list, last choice first
  agent-param trigger deploy agent nodeA          Resolve, remember and print the build env
  agent-param resolve deploy agent --form '{\"name\":\"agent\",\"value\":[\"a\",\"b\"]}'")]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Use this config file instead of the global and project files
    #[arg(long, global = true, env = "AGENT_PARAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding job files
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Known agent name (repeatable, replaces the configured inventory)
    #[arg(long = "computer", global = true)]
    pub computers: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an agent parameter to a job
    Define {
        /// Job name
        job: String,

        /// Parameter name
        name: String,

        /// Initial default agent (blank means master)
        #[arg(long = "default")]
        default_value: Option<String>,

        /// Replace an existing parameter with the same name
        #[arg(long)]
        replace: bool,
    },

    /// Remove a parameter from a job, or the whole job
    #[command(alias = "rm")]
    Remove {
        /// Job name
        job: String,

        /// Parameter name (omit to delete the job)
        name: Option<String>,
    },

    /// List jobs and their parameters
    Jobs,

    /// Show the selectable agents, current default first
    Agents {
        /// Job name
        job: String,

        /// Parameter name
        name: String,

        /// Print {display_name, value} pairs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remember an agent as the parameter's default
    SetDefault {
        /// Job name
        job: String,

        /// Parameter name
        name: String,

        /// Agent name (blank resets to master)
        value: String,
    },

    /// Resolve the agent for a build without changing the default
    Resolve(ResolveCmd),

    /// Resolve the agent for a build and remember it as the new default
    #[command(
        long_about = "Resolve the agent for a build and remember it as the new default.\n\n\
        Prints the build environment: the parameter exported as a variable and\n\
        the label the build is assigned to."
    )]
    Trigger(ResolveCmd),

    /// Re-offer a previous build's selection
    Rebuild {
        /// Job name
        job: String,

        /// Parameter name
        name: String,

        /// Agent used by the previous build
        previous: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Env)]
        format: OutputFormat,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version and registered parameter providers
    Version,
}

#[derive(Args, Debug)]
pub struct ResolveCmd {
    /// Job name
    pub job: String,

    /// Parameter name
    pub name: String,

    /// Command-line value (empty means the stored default)
    #[arg(conflicts_with_all = ["query", "form"])]
    pub value: Option<String>,

    /// Raw request parameter value (repeatable, first one wins)
    #[arg(long = "query", conflicts_with = "form")]
    pub query: Vec<String>,

    /// Form submission as JSON, or '-' to read it from stdin
    #[arg(long)]
    pub form: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Env)]
    pub format: OutputFormat,
}
