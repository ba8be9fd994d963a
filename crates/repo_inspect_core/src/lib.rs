//! # Repo Inspect Core
//!
//! Builds a governance report for a single GitHub repository: settings,
//! rulesets, collaborators, teams, security features, labels and milestones.
//!
//! ## Overview
//!
//! An inspection has three stages:
//! 1. Parse the target into a [`RepositoryReference`]
//! 2. Run the collectors through [`collect`], which fills a
//!    [`GovernanceRecord`] and logs the outcome of every section
//! 3. Turn the record into text with [`render`]
//!
//! Collectors talk to GitHub through the [`github_client::GovernanceClient`]
//! trait, so the whole pipeline runs against any implementation of it.
//!
//! ## Examples
//!
//! ```no_run
//! use github_client::{create_anonymous_client, GitHubClient};
//! use repo_inspect_core::{collect, render, OutputFormat, RepositoryReference, SectionFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitHubClient::new(create_anonymous_client(None)?);
//! let reference = RepositoryReference::parse("octocat/hello-world")?;
//! let filter = SectionFilter::all();
//!
//! let report = collect(&client, &reference, &filter).await;
//! let output = render(&report.record, OutputFormat::Table, &filter)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub use aggregator::{collect, CollectionReport, CollectorOutcome, CollectorStatus};

pub mod collectors;

pub mod errors;
pub use errors::Error;

pub mod model;
pub use model::{
    Collaborator, GovernanceRecord, Label, Milestone, RepositoryIdentity, RepositorySettings,
    Ruleset, SecuritySettings, Team,
};

pub mod render;
pub use render::{render, OutputFormat};

pub mod repository_reference;
pub use repository_reference::RepositoryReference;

pub mod sections;
pub use sections::{included, Section, SectionFilter};

#[cfg(test)]
pub(crate) mod test_support;
