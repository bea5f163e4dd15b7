use crate::cli::{OutputFormat, ResolveCmd};
use crate::config::Config;
use crate::error::{AgentParamError, Result};
use crate::job::{Job, JobStore};
use crate::parameter::{AgentParameter, AgentSelection, BuildEnvironment, FormSubmission, SelectionSource};
use std::io::Read;

pub fn job_store(config: &Config) -> JobStore {
    JobStore::new(config.store_dir())
}

/// The agent parameter a command operates on, or a not-found error.
pub fn require_agent_parameter<'a>(job: &'a Job, name: &str) -> Result<&'a AgentParameter> {
    job.agent_parameter(name)
        .ok_or_else(|| AgentParamError::ParameterNotFound {
            job: job.name().to_string(),
            name: name.to_string(),
        })
}

/// Pick the resolution source from the flags: form, then query values, then
/// the positional command-line value.
pub fn selection_source(cmd: &ResolveCmd) -> Result<SelectionSource> {
    if let Some(form) = &cmd.form {
        let text = if form == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            form.clone()
        };
        return Ok(SelectionSource::Form(FormSubmission::parse(&text)?));
    }

    if !cmd.query.is_empty() {
        return Ok(SelectionSource::Request(cmd.query.clone()));
    }

    Ok(SelectionSource::CommandLine(
        cmd.value.clone().unwrap_or_default(),
    ))
}

/// Print the environment a build would start with.
pub fn print_build(selection: &AgentSelection, format: OutputFormat) -> Result<()> {
    let env = BuildEnvironment::for_selection(selection);

    match format {
        OutputFormat::Env => {
            for line in env.to_env_lines() {
                println!("{}", line);
            }
            if let Some(label) = env.label() {
                println!("# assigned label: {}", label);
            }
        }
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "selection": selection,
                "environment": env,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::FormValue;

    fn cmd(value: Option<&str>, query: &[&str], form: Option<&str>) -> ResolveCmd {
        ResolveCmd {
            job: "deploy".to_string(),
            name: "agent".to_string(),
            value: value.map(str::to_string),
            query: query.iter().map(|q| q.to_string()).collect(),
            form: form.map(str::to_string),
            format: OutputFormat::Env,
        }
    }

    #[test]
    fn test_selection_source_command_line() {
        assert_eq!(
            selection_source(&cmd(Some("nodeA"), &[], None)).unwrap(),
            SelectionSource::CommandLine("nodeA".to_string())
        );
        assert_eq!(
            selection_source(&cmd(None, &[], None)).unwrap(),
            SelectionSource::CommandLine(String::new())
        );
    }

    #[test]
    fn test_selection_source_query() {
        assert_eq!(
            selection_source(&cmd(None, &["a", "b"], None)).unwrap(),
            SelectionSource::Request(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_selection_source_form() {
        let source =
            selection_source(&cmd(None, &[], Some(r#"{"name":"agent","value":["a","b"]}"#)))
                .unwrap();
        assert_eq!(
            source,
            SelectionSource::Form(FormSubmission::new(
                "agent",
                FormValue::Multiple(vec!["a".to_string(), "b".to_string()])
            ))
        );
    }

    #[test]
    fn test_selection_source_bad_form() {
        assert!(selection_source(&cmd(None, &[], Some("{not json"))).is_err());
    }

    #[test]
    fn test_require_agent_parameter() {
        let job = Job::new("deploy");
        let err = require_agent_parameter(&job, "agent").unwrap_err();
        assert!(matches!(err, AgentParamError::ParameterNotFound { .. }));
    }
}
