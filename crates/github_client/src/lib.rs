//! Crate for reading repository governance data from the GitHub REST API.
//!
//! This crate provides a client for making authenticated (or anonymous) read-only
//! requests to GitHub, and the wire types for every endpoint the governance
//! report draws on: repository settings, rulesets, collaborators, teams,
//! security features, labels and milestones.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod collaborator;
pub use collaborator::{Collaborator, Permissions};

pub mod label;
pub use label::Label;

pub mod milestone;
pub use milestone::Milestone;

pub mod repository;
pub use repository::{feature_enabled, FeatureStatus, RepositoryDetails, SecurityAndAnalysis};

pub mod ruleset;
pub use ruleset::{
    BypassActor, PullRequestParameters, RefNameCondition, RepositoryRuleset,
    RequiredStatusChecksParameters, Rule, RulesetConditions, RulesetEnforcement, RulesetTarget,
    StatusCheck,
};

pub mod security;
pub use security::AutomatedSecurityFixes;

pub mod team;
pub use team::Team;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Number of items requested from list endpoints. Only the first page is read.
pub const PAGE_SIZE: &str = "100";

/// Read-only access to the governance facets of a repository.
///
/// Every method performs exactly one request. Implementations must not retry
/// and must not follow pagination links.
#[async_trait]
pub trait GovernanceClient: Send + Sync {
    /// Fetches the repository itself (`GET /repos/{owner}/{repo}`).
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryDetails, Error>;

    /// Lists the rulesets that apply to the repository.
    ///
    /// The list endpoint does not include the rules of each ruleset, use
    /// [`GovernanceClient::get_ruleset`] for those.
    async fn list_rulesets(&self, owner: &str, repo: &str) -> Result<Vec<RepositoryRuleset>, Error>;

    /// Fetches a single ruleset including its rules.
    async fn get_ruleset(
        &self,
        owner: &str,
        repo: &str,
        ruleset_id: u64,
    ) -> Result<RepositoryRuleset, Error>;

    /// Lists the collaborators of the repository.
    async fn list_collaborators(&self, owner: &str, repo: &str) -> Result<Vec<Collaborator>, Error>;

    /// Lists the teams with access to the repository.
    async fn list_teams(&self, owner: &str, repo: &str) -> Result<Vec<Team>, Error>;

    /// Returns whether Dependabot vulnerability alerts are enabled.
    async fn vulnerability_alerts_enabled(&self, owner: &str, repo: &str) -> Result<bool, Error>;

    /// Fetches the state of Dependabot automated security fixes.
    async fn get_automated_security_fixes(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<AutomatedSecurityFixes, Error>;

    /// Lists the issue labels of the repository.
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error>;

    /// Lists open and closed milestones of the repository.
    async fn list_milestones(&self, owner: &str, repo: &str) -> Result<Vec<Milestone>, Error>;
}

/// A client for reading governance data from the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from a configured `Octocrab` instance.
    ///
    /// Use [`create_token_client`] or [`create_anonymous_client`] to build the
    /// `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    async fn get_json<T>(&self, path: String, query: &[(&str, &str)]) -> Result<T, Error>
    where
        T: DeserializeOwned + Send,
    {
        debug!(endpoint = %path, "Requesting GitHub endpoint");
        let result: OctocrabResult<T> = if query.is_empty() {
            self.client.get(&path, None::<&()>).await
        } else {
            self.client.get(&path, Some(&query.to_vec())).await
        };

        result.map_err(|e| map_octocrab_error(&path, e))
    }
}

#[async_trait]
impl GovernanceClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryDetails, Error> {
        self.get_json(format!("/repos/{}/{}", owner, repo), &[]).await
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_rulesets(&self, owner: &str, repo: &str) -> Result<Vec<RepositoryRuleset>, Error> {
        let rulesets: Vec<RepositoryRuleset> = self
            .get_json(
                format!("/repos/{}/{}/rulesets", owner, repo),
                &[("per_page", PAGE_SIZE)],
            )
            .await?;

        info!(count = rulesets.len(), "Retrieved repository rulesets");
        Ok(rulesets)
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_ruleset(
        &self,
        owner: &str,
        repo: &str,
        ruleset_id: u64,
    ) -> Result<RepositoryRuleset, Error> {
        self.get_json(
            format!("/repos/{}/{}/rulesets/{}", owner, repo, ruleset_id),
            &[],
        )
        .await
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_collaborators(&self, owner: &str, repo: &str) -> Result<Vec<Collaborator>, Error> {
        self.get_json(
            format!("/repos/{}/{}/collaborators", owner, repo),
            &[("per_page", PAGE_SIZE)],
        )
        .await
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_teams(&self, owner: &str, repo: &str) -> Result<Vec<Team>, Error> {
        self.get_json(
            format!("/repos/{}/{}/teams", owner, repo),
            &[("per_page", PAGE_SIZE)],
        )
        .await
    }

    /// GitHub answers `204 No Content` when alerts are enabled and
    /// `404 Not Found` when they are disabled.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn vulnerability_alerts_enabled(&self, owner: &str, repo: &str) -> Result<bool, Error> {
        let path = format!("/repos/{}/{}/vulnerability-alerts", owner, repo);
        debug!(endpoint = %path, "Requesting GitHub endpoint");

        let response = match self.client._get(path.as_str()).await {
            Ok(r) => r,
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == http::StatusCode::NOT_FOUND =>
            {
                return Ok(false);
            }
            Err(e) => return Err(map_octocrab_error(&path, e)),
        };

        match response.status() {
            http::StatusCode::NO_CONTENT | http::StatusCode::OK => Ok(true),
            http::StatusCode::NOT_FOUND => Ok(false),
            status => Err(Error::InvalidResponse(format!(
                "unexpected status {} from '{}'",
                status, path
            ))),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_automated_security_fixes(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<AutomatedSecurityFixes, Error> {
        self.get_json(
            format!("/repos/{}/{}/automated-security-fixes", owner, repo),
            &[],
        )
        .await
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error> {
        self.get_json(
            format!("/repos/{}/{}/labels", owner, repo),
            &[("per_page", PAGE_SIZE)],
        )
        .await
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_milestones(&self, owner: &str, repo: &str) -> Result<Vec<Milestone>, Error> {
        self.get_json(
            format!("/repos/{}/{}/milestones", owner, repo),
            &[("state", "all"), ("per_page", PAGE_SIZE)],
        )
        .await
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - The GitHub token (PAT, fine-grained token or `gh` CLI token).
/// * `base_uri` - Optional API root, e.g. `https://github.example.com/api/v3`
///   for GitHub Enterprise Server. Defaults to `https://api.github.com`.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URI is invalid or the client
/// cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient};
///
/// # fn example() -> Result<(), github_client::Error> {
/// let octocrab = create_token_client("ghp_example", None)?;
/// let client = GitHubClient::new(octocrab);
/// # Ok(())
/// # }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();
    if let Some(uri) = base_uri {
        builder = builder
            .base_uri(uri)
            .map_err(|e| Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", uri, e)))?;
    }

    builder
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build GitHub client: {}", e)))
}

/// Creates an unauthenticated `Octocrab` client.
///
/// Anonymous clients can only read public repositories and are subject to
/// much lower rate limits.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URI is invalid or the client
/// cannot be built.
#[instrument]
pub fn create_anonymous_client(base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();
    if let Some(uri) = base_uri {
        builder = builder
            .base_uri(uri)
            .map_err(|e| Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", uri, e)))?;
    }

    builder
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build GitHub client: {}", e)))
}

fn map_octocrab_error(endpoint: &str, e: octocrab::Error) -> Error {
    log_octocrab_error("GitHub request failed", &e);
    match e {
        octocrab::Error::GitHub { source, .. } => {
            if source.status_code == http::StatusCode::NOT_FOUND {
                Error::NotFound(endpoint.to_string())
            } else {
                Error::ApiError {
                    endpoint: endpoint.to_string(),
                    message: format!("{} ({})", source.message, source.status_code),
                }
            }
        }
        other => Error::ApiError {
            endpoint: endpoint.to_string(),
            message: other.to_string(),
        },
    }
}

fn log_octocrab_error(message: &str, e: &octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, .. } => debug!(
            error_message = source.message,
            status = %source.status_code,
            "{}. Received an error from GitHub",
            message
        ),
        octocrab::Error::UriParse { source, .. } => debug!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, .. } => debug!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, .. } => debug!(
            error_message = source.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, .. } => debug!(
            error_message = source.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => debug!(error_message = e.to_string(), message),
    };
}
