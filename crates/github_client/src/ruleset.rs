//! Repository ruleset domain types.
//!
//! This module contains types representing GitHub repository rulesets and their rules,
//! as returned by the read-only ruleset endpoints.
//!
//! See: https://docs.github.com/en/rest/repos/rules

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "ruleset_tests.rs"]
mod tests;

/// Represents a repository ruleset.
///
/// Rulesets define governance rules that apply to branches or tags in a repository.
///
/// # Examples
///
/// ```rust
/// use github_client::{RepositoryRuleset, RulesetEnforcement, RulesetTarget};
///
/// let ruleset: RepositoryRuleset = serde_json::from_str(
///     r#"{ "id": 7, "name": "main-protection", "target": "branch", "enforcement": "active" }"#,
/// ).unwrap();
///
/// assert_eq!(ruleset.target, RulesetTarget::Branch);
/// assert_eq!(ruleset.enforcement, RulesetEnforcement::Active);
/// assert!(ruleset.rules.is_empty());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RepositoryRuleset {
    /// Ruleset ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Ruleset name
    pub name: String,

    /// Target type (branch, tag or push)
    #[serde(default)]
    pub target: RulesetTarget,

    /// Enforcement level
    #[serde(default)]
    pub enforcement: RulesetEnforcement,

    /// Actors who can bypass this ruleset
    #[serde(default)]
    pub bypass_actors: Vec<BypassActor>,

    /// Conditions for when this ruleset applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<RulesetConditions>,

    /// Rules in this ruleset
    ///
    /// Note: GitHub's LIST rulesets endpoint does not include rules in the response.
    /// Use GET /repos/{owner}/{repo}/rulesets/{ruleset_id} to fetch full ruleset details.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RepositoryRuleset {
    /// Returns the ref name patterns this ruleset includes.
    pub fn include_patterns(&self) -> &[String] {
        self.conditions
            .as_ref()
            .map(|c| c.ref_name.include.as_slice())
            .unwrap_or_default()
    }

    /// Returns `true` if a rule of the given kind is part of this ruleset.
    pub fn has_rule(&self, predicate: impl Fn(&Rule) -> bool) -> bool {
        self.rules.iter().any(predicate)
    }
}

/// Target type for a ruleset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RulesetTarget {
    /// Ruleset applies to branches
    #[default]
    Branch,
    /// Ruleset applies to tags
    Tag,
    /// Ruleset applies to pushes
    Push,
    /// Any target this client does not know about
    #[serde(other)]
    Other,
}

/// Enforcement level for a ruleset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RulesetEnforcement {
    /// Ruleset is disabled
    Disabled,
    /// Ruleset is active and enforced
    #[default]
    Active,
    /// Ruleset is in evaluation mode (logs only, doesn't block)
    Evaluate,
}

/// Actor who can bypass a ruleset.
///
/// GitHub reports `actor_id` as `null` for organization admins, and new actor
/// types appear over time, so both are kept loosely typed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BypassActor {
    /// Actor ID
    #[serde(default)]
    pub actor_id: Option<u64>,

    /// Actor type, e.g. `OrganizationAdmin`, `RepositoryRole`, `Team`
    pub actor_type: String,

    /// Bypass mode, e.g. `always` or `pull_request`
    #[serde(default)]
    pub bypass_mode: Option<String>,
}

/// Conditions for when a ruleset applies.
///
/// Organization rulesets may only carry repository name or property
/// conditions, in which case `ref_name` is absent and defaults to empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesetConditions {
    /// Reference name patterns
    #[serde(default)]
    pub ref_name: RefNameCondition,
}

/// Reference name condition.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefNameCondition {
    /// Patterns to include
    #[serde(default)]
    pub include: Vec<String>,

    /// Patterns to exclude
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// A rule within a ruleset.
///
/// Only the rule types that contribute to the governance report carry
/// parameters; everything else deserializes to [`Rule::Other`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// Prevent creation of matching refs
    Creation,

    /// Prevent updates to matching refs
    Update,

    /// Prevent deletion of matching refs
    Deletion,

    /// Require linear history (no merge commits)
    RequiredLinearHistory,

    /// Require signed commits
    RequiredSignatures,

    /// Pull request requirements
    PullRequest {
        /// Pull request parameters
        parameters: PullRequestParameters,
    },

    /// Required status checks
    RequiredStatusChecks {
        /// Required status check parameters
        parameters: RequiredStatusChecksParameters,
    },

    /// Block force pushes
    NonFastForward,

    /// Rule types not modelled by this client
    #[serde(other)]
    Other,
}

/// Parameters for pull request rules.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestParameters {
    /// Dismiss stale reviews when new commits are pushed
    #[serde(default)]
    pub dismiss_stale_reviews_on_push: Option<bool>,

    /// Require code owner review
    #[serde(default)]
    pub require_code_owner_review: Option<bool>,

    /// Require last push approval
    #[serde(default)]
    pub require_last_push_approval: Option<bool>,

    /// Required approving review count
    #[serde(default)]
    pub required_approving_review_count: Option<u32>,

    /// Required review thread resolution
    #[serde(default)]
    pub required_review_thread_resolution: Option<bool>,
}

/// Parameters for required status checks.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequiredStatusChecksParameters {
    /// Required status checks
    #[serde(default)]
    pub required_status_checks: Vec<StatusCheck>,

    /// Require branches to be up to date before merging
    #[serde(default)]
    pub strict_required_status_checks_policy: Option<bool>,
}

/// A required status check.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCheck {
    /// Status check context
    pub context: String,

    /// Integration ID (optional)
    #[serde(default)]
    pub integration_id: Option<u64>,
}
