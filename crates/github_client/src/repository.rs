//! Repository domain types.
//!
//! This module contains the subset of the `GET /repos/{owner}/{repo}` response
//! needed to describe repository-level governance settings.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Repository details as returned by the GitHub repository endpoint.
///
/// GitHub omits several of these fields depending on the token's permissions
/// and the repository's plan, so every flag is optional.
///
/// # Examples
///
/// ```rust
/// use github_client::RepositoryDetails;
///
/// let details: RepositoryDetails = serde_json::from_str(
///     r#"{ "name": "hello-world", "full_name": "octocat/hello-world", "private": true }"#,
/// ).unwrap();
///
/// assert!(details.is_private());
/// assert_eq!(details.full_name, "octocat/hello-world");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RepositoryDetails {
    /// The name of the repository
    pub name: String,
    /// The full name of the repository (owner/name)
    #[serde(default)]
    pub full_name: String,
    /// Whether the repository is private
    #[serde(default)]
    pub private: Option<bool>,
    /// Whether the repository is archived
    #[serde(default)]
    pub archived: Option<bool>,
    /// Whether the repository is disabled
    #[serde(default)]
    pub disabled: Option<bool>,
    /// The default branch name
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub allow_merge_commit: Option<bool>,
    #[serde(default)]
    pub allow_squash_merge: Option<bool>,
    #[serde(default)]
    pub allow_rebase_merge: Option<bool>,
    #[serde(default)]
    pub allow_auto_merge: Option<bool>,
    #[serde(default)]
    pub delete_branch_on_merge: Option<bool>,
    #[serde(default)]
    pub has_issues: Option<bool>,
    #[serde(default)]
    pub has_projects: Option<bool>,
    #[serde(default)]
    pub has_wiki: Option<bool>,
    #[serde(default)]
    pub has_downloads: Option<bool>,
    /// Security and analysis feature states.
    ///
    /// Only returned to callers with admin access to the repository.
    #[serde(default)]
    pub security_and_analysis: Option<SecurityAndAnalysis>,
}

impl RepositoryDetails {
    /// Returns whether the repository is private.
    ///
    /// A missing `private` field is treated as public.
    pub fn is_private(&self) -> bool {
        self.private.unwrap_or(false)
    }
}

/// The `security_and_analysis` block of a repository.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SecurityAndAnalysis {
    #[serde(default)]
    pub advanced_security: Option<FeatureStatus>,
    #[serde(default)]
    pub dependabot_security_updates: Option<FeatureStatus>,
    #[serde(default)]
    pub secret_scanning: Option<FeatureStatus>,
    #[serde(default)]
    pub secret_scanning_push_protection: Option<FeatureStatus>,
}

/// Enablement state of a single security feature.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FeatureStatus {
    /// Either `enabled` or `disabled`
    pub status: String,
}

impl FeatureStatus {
    /// Returns `true` when the feature reports `enabled`.
    pub fn is_enabled(&self) -> bool {
        self.status == "enabled"
    }
}

/// Returns `true` when an optional feature status is present and enabled.
pub fn feature_enabled(status: Option<&FeatureStatus>) -> bool {
    status.is_some_and(FeatureStatus::is_enabled)
}

