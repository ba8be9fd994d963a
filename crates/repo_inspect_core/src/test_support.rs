//! Shared fixtures for unit tests: an in-memory [`GovernanceClient`] and a
//! fully populated [`GovernanceRecord`].

use std::sync::Mutex;

use async_trait::async_trait;
use github_client::{
    AutomatedSecurityFixes, Collaborator, Error, GovernanceClient, Label, Milestone,
    RepositoryDetails, RepositoryRuleset, Team,
};
use serde_json::json;

use crate::model::{
    Collaborator as ModelCollaborator, GovernanceRecord, Label as ModelLabel,
    Milestone as ModelMilestone, RepositoryIdentity, RepositorySettings, Ruleset,
    SecuritySettings, Team as ModelTeam,
};

/// In-memory client returning canned wire data.
///
/// Methods named in `failing` return an API error. Every call is recorded
/// by method name.
pub struct MockGovernanceClient {
    pub repository: RepositoryDetails,
    pub rulesets: Vec<RepositoryRuleset>,
    pub collaborators: Vec<Collaborator>,
    pub teams: Vec<Team>,
    pub vulnerability_alerts: bool,
    /// `None` answers the automated fixes endpoint with `NotFound`
    pub automated_fixes: Option<AutomatedSecurityFixes>,
    pub labels: Vec<Label>,
    pub milestones: Vec<Milestone>,
    pub failing: Vec<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl MockGovernanceClient {
    /// A client with one entry in every facet.
    pub fn populated() -> Self {
        Self {
            repository: from_json(json!({
                "name": "hello-world",
                "full_name": "octocat/hello-world",
                "private": true,
                "default_branch": "main",
                "allow_squash_merge": true,
                "delete_branch_on_merge": true,
                "has_issues": true,
                "security_and_analysis": {
                    "secret_scanning": { "status": "enabled" },
                    "secret_scanning_push_protection": { "status": "disabled" }
                }
            })),
            rulesets: vec![from_json(json!({
                "id": 42,
                "name": "main-protection",
                "target": "branch",
                "enforcement": "active"
            }))],
            collaborators: vec![from_json(json!({
                "login": "octocat",
                "type": "User",
                "permissions": { "admin": true, "push": true, "pull": true }
            }))],
            teams: vec![from_json(json!({
                "name": "Core",
                "slug": "core",
                "permission": "push"
            }))],
            vulnerability_alerts: true,
            automated_fixes: Some(AutomatedSecurityFixes {
                enabled: true,
                paused: false,
            }),
            labels: vec![from_json(json!({
                "name": "bug",
                "color": "d73a4a",
                "description": "Something isn't working"
            }))],
            milestones: vec![from_json(json!({
                "title": "v1.0",
                "state": "open",
                "due_on": "2024-12-31T08:00:00Z"
            }))],
            failing: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, method: &'static str) -> Self {
        self.failing.push(method);
        self
    }

    /// Method names in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, method: &'static str) -> Result<(), Error> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(method.to_string());
        }
        if self.failing.contains(&method) {
            return Err(Error::ApiError {
                endpoint: method.to_string(),
                message: "Forbidden (403)".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl GovernanceClient for MockGovernanceClient {
    async fn get_repository(&self, _owner: &str, _repo: &str) -> Result<RepositoryDetails, Error> {
        self.record("get_repository")?;
        Ok(self.repository.clone())
    }

    async fn list_rulesets(&self, _owner: &str, _repo: &str) -> Result<Vec<RepositoryRuleset>, Error> {
        self.record("list_rulesets")?;
        Ok(self.rulesets.clone())
    }

    async fn get_ruleset(
        &self,
        _owner: &str,
        _repo: &str,
        ruleset_id: u64,
    ) -> Result<RepositoryRuleset, Error> {
        self.record("get_ruleset")?;
        self.rulesets
            .iter()
            .find(|r| r.id == Some(ruleset_id))
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("rulesets/{}", ruleset_id)))
    }

    async fn list_collaborators(&self, _owner: &str, _repo: &str) -> Result<Vec<Collaborator>, Error> {
        self.record("list_collaborators")?;
        Ok(self.collaborators.clone())
    }

    async fn list_teams(&self, _owner: &str, _repo: &str) -> Result<Vec<Team>, Error> {
        self.record("list_teams")?;
        Ok(self.teams.clone())
    }

    async fn vulnerability_alerts_enabled(&self, _owner: &str, _repo: &str) -> Result<bool, Error> {
        self.record("vulnerability_alerts_enabled")?;
        Ok(self.vulnerability_alerts)
    }

    async fn get_automated_security_fixes(
        &self,
        _owner: &str,
        _repo: &str,
    ) -> Result<AutomatedSecurityFixes, Error> {
        self.record("get_automated_security_fixes")?;
        self.automated_fixes
            .clone()
            .ok_or_else(|| Error::NotFound("automated-security-fixes".to_string()))
    }

    async fn list_labels(&self, _owner: &str, _repo: &str) -> Result<Vec<Label>, Error> {
        self.record("list_labels")?;
        Ok(self.labels.clone())
    }

    async fn list_milestones(&self, _owner: &str, _repo: &str) -> Result<Vec<Milestone>, Error> {
        self.record("list_milestones")?;
        Ok(self.milestones.clone())
    }
}

/// Deserializes a wire type from a JSON literal.
pub fn from_json<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("fixture should deserialize")
}

/// A record with every field populated, including the optional ones left
/// empty on the second entry of each sequence.
pub fn sample_record() -> GovernanceRecord {
    let mut record = GovernanceRecord::new(RepositoryIdentity {
        owner: "octocat".to_string(),
        name: "hello-world".to_string(),
    });

    record.set_rulesets(vec![
        Ruleset {
            name: "main-protection".to_string(),
            pattern: "~DEFAULT_BRANCH".to_string(),
            enforce_admins: true,
            required_status_checks: vec!["ci/build".to_string(), "ci/test".to_string()],
            required_pull_request_reviews: true,
            required_approving_review_count: 2,
            dismiss_stale_reviews: true,
            require_code_owner_reviews: true,
            required_linear_history: true,
            allow_force_pushes: false,
            allow_deletions: false,
            required_conversation_resolution: true,
        },
        Ruleset {
            name: "release-tags".to_string(),
            pattern: "v*".to_string(),
            allow_force_pushes: true,
            allow_deletions: true,
            ..Default::default()
        },
    ]);
    record.collaborators = vec![
        ModelCollaborator {
            login: "octocat".to_string(),
            permission: "admin".to_string(),
            account_type: "User".to_string(),
        },
        ModelCollaborator {
            login: "dependabot[bot]".to_string(),
            permission: "write".to_string(),
            account_type: "Bot".to_string(),
        },
    ];
    record.teams = vec![ModelTeam {
        name: "Core Maintainers".to_string(),
        slug: "core-maintainers".to_string(),
        permission: "maintain".to_string(),
    }];
    record.security_settings = SecuritySettings {
        vulnerability_alerts: true,
        automated_security_fixes: true,
        secret_scanning: true,
        secret_scanning_push_protection: false,
        dependency_graph_enabled: true,
    };
    record.repository_settings = RepositorySettings {
        private: false,
        archived: false,
        disabled: false,
        default_branch: "main".to_string(),
        allow_merge_commit: false,
        allow_squash_merge: true,
        allow_rebase_merge: true,
        allow_auto_merge: true,
        delete_branch_on_merge: true,
        has_issues: true,
        has_projects: false,
        has_wiki: false,
        has_downloads: true,
    };
    record.issue_labels = vec![
        ModelLabel {
            name: "bug".to_string(),
            color: "d73a4a".to_string(),
            description: Some("Something isn't working".to_string()),
        },
        ModelLabel {
            name: "triage".to_string(),
            color: "ededed".to_string(),
            description: None,
        },
    ];
    record.milestones = vec![
        ModelMilestone {
            title: "v1.0".to_string(),
            description: Some("First stable release".to_string()),
            state: "open".to_string(),
            due_on: Some("2024-12-31".to_string()),
        },
        ModelMilestone {
            title: "v0.9".to_string(),
            description: None,
            state: "closed".to_string(),
            due_on: None,
        },
    ];

    record
}
