//! The inspect command: collects the governance facets of one repository and
//! writes the rendered report to standard output.

use std::io::{self, Write};

use clap::Args;
use github_client::GovernanceClient;
use repo_inspect_core::{collect, render, CollectionReport, RepositoryReference};
use tracing::{debug, info, instrument};

use crate::{
    config::{AppConfig, InspectConfig},
    credentials::{create_client, resolve_token},
    current_repository::current_repository,
    errors::Error,
};

#[cfg(test)]
#[path = "inspect_cmd_tests.rs"]
mod tests;

/// Arguments of the inspect command.
#[derive(Args, Debug, Clone, Default)]
pub struct InspectArgs {
    /// Repository to inspect as OWNER/REPO. Defaults to the repository of the
    /// current git checkout.
    #[arg(value_name = "OWNER/REPO")]
    pub repository: Option<String>,

    /// Output format: json, yaml, yml or table [default: json]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print diagnostics, including failed sections, to stderr. REPO_INSPECT_LOG
    /// replaces the default `info` filter when set
    #[arg(short, long)]
    pub verbose: bool,

    /// Comma separated sections to include: settings, security, rulesets,
    /// collaborators, teams, labels, milestones [default: all]
    #[arg(short, long, value_delimiter = ',')]
    pub sections: Vec<String>,

    /// Path to the configuration file [default: ./repo-inspect.toml]
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Runs the inspect command against GitHub and writes to stdout.
///
/// # Errors
///
/// Fails on configuration, argument, repository resolution, client
/// construction and output errors. Failing sections are not errors.
#[instrument(skip(args))]
pub async fn execute(args: &InspectArgs) -> Result<(), Error> {
    let file = AppConfig::load_or_default(args.config.as_deref())?;
    let config = InspectConfig::from_sources(
        args.repository.clone(),
        args.format.as_deref(),
        args.sections.clone(),
        args.verbose,
        file,
    )?;

    let token = resolve_token();
    let client = create_client(token.as_deref(), config.api_base_url.as_deref())?;

    run(&client, &config, &mut io::stdout()).await?;
    Ok(())
}

/// Collects and renders the report for `config`, then writes it to `out`.
///
/// Nothing is written unless rendering succeeded.
pub async fn run<C, W>(client: &C, config: &InspectConfig, out: &mut W) -> Result<CollectionReport, Error>
where
    C: GovernanceClient + ?Sized,
    W: Write,
{
    let reference = resolve_reference(config.repository.as_deref())?;
    info!(repository = %reference, format = %config.format, "Inspecting repository");

    let report = collect(client, &reference, &config.sections).await;
    for failure in report.failures() {
        debug!(section = %failure.section, status = ?failure.status, "Section left empty");
    }

    let output = render(&report.record, config.format, &config.sections)?;

    out.write_all(output.as_bytes())
        .map_err(|_| Error::StdOutWriteFailed)?;
    out.flush().map_err(|_| Error::StdOutWriteFailed)?;

    Ok(report)
}

/// Parses the repository argument, or resolves the current repository when
/// it is absent.
pub fn resolve_reference(repository: Option<&str>) -> Result<RepositoryReference, Error> {
    match repository {
        Some(value) => RepositoryReference::parse(value)
            .map_err(|e| Error::InvalidArguments(e.to_string())),
        None => current_repository(),
    }
}
