//! # Governance model
//!
//! Flat data-transfer records describing the governance facets of one
//! repository. Field names are part of the output contract: they appear
//! verbatim in the JSON and YAML renderings.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

/// Owner and name of the inspected repository.
///
/// Always present on a [`GovernanceRecord`]; both parts are non-empty when
/// built through [`crate::RepositoryReference`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub name: String,
}

/// Repository-level configuration flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySettings {
    pub private: bool,
    pub archived: bool,
    pub disabled: bool,
    pub default_branch: String,
    pub allow_merge_commit: bool,
    pub allow_squash_merge: bool,
    pub allow_rebase_merge: bool,
    pub allow_auto_merge: bool,
    pub delete_branch_on_merge: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub has_downloads: bool,
}

/// Security feature toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    pub vulnerability_alerts: bool,
    pub automated_security_fixes: bool,
    pub secret_scanning: bool,
    pub secret_scanning_push_protection: bool,
    pub dependency_graph_enabled: bool,
}

/// A branch protection ruleset bound to a branch-name pattern.
///
/// The approving-review count, stale-review dismissal and code-owner fields
/// are only meaningful when `required_pull_request_reviews` is `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub name: String,
    pub pattern: String,
    pub enforce_admins: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_status_checks: Vec<String>,
    pub required_pull_request_reviews: bool,
    pub required_approving_review_count: u32,
    pub dismiss_stale_reviews: bool,
    pub require_code_owner_reviews: bool,
    pub required_linear_history: bool,
    pub allow_force_pushes: bool,
    pub allow_deletions: bool,
    pub required_conversation_resolution: bool,
}

/// A user or bot with direct access to the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub login: String,
    /// admin, maintain, write, triage, read or a custom role name
    pub permission: String,
    #[serde(rename = "type")]
    pub account_type: String,
}

/// A team with access to the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub slug: String,
    pub permission: String,
}

/// An issue label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// Hex color without the leading `#`
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A repository milestone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `open` or `closed`
    pub state: String,
    /// Due date as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
}

impl Milestone {
    pub fn is_closed(&self) -> bool {
        self.state == "closed"
    }
}

/// Every governance facet of one repository.
///
/// Built once per inspection, filled in place by the collectors, rendered
/// once. Fields whose collector was skipped or failed keep their zero value;
/// the collection log tells those cases apart.
///
/// Empty sequences are omitted from serialized output and default to empty
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceRecord {
    pub repository: RepositoryIdentity,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rulesets: Vec<Ruleset>,

    /// Union of every ruleset's required status checks, in first-seen order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_checks: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collaborators: Vec<Collaborator>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<Team>,

    #[serde(default)]
    pub security_settings: SecuritySettings,

    #[serde(default)]
    pub repository_settings: RepositorySettings,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issue_labels: Vec<Label>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
}

impl GovernanceRecord {
    /// Creates a record holding only the repository identity.
    pub fn new(repository: RepositoryIdentity) -> Self {
        Self {
            repository,
            rulesets: Vec::new(),
            required_checks: Vec::new(),
            collaborators: Vec::new(),
            teams: Vec::new(),
            security_settings: SecuritySettings::default(),
            repository_settings: RepositorySettings::default(),
            issue_labels: Vec::new(),
            milestones: Vec::new(),
        }
    }

    /// Replaces the rulesets and recomputes `required_checks` from them.
    pub fn set_rulesets(&mut self, rulesets: Vec<Ruleset>) {
        let mut checks: Vec<String> = Vec::new();
        for check in rulesets.iter().flat_map(|r| r.required_status_checks.iter()) {
            if !checks.contains(check) {
                checks.push(check.clone());
            }
        }

        self.rulesets = rulesets;
        self.required_checks = checks;
    }
}
