//! Facet collectors.
//!
//! Each collector queries one governance facet through a
//! [`GovernanceClient`], maps the wire types into the report model and
//! overwrites the matching field of the [`GovernanceRecord`]. The facet is
//! built completely before it is assigned, so a failed collector leaves the
//! record untouched.

use github_client::{
    feature_enabled, GovernanceClient, RepositoryDetails, RepositoryRuleset, Rule,
};
use tracing::{debug, instrument};

use crate::model::{
    Collaborator, GovernanceRecord, Label, Milestone, RepositorySettings, Ruleset,
    SecuritySettings, Team,
};
use crate::repository_reference::RepositoryReference;

#[cfg(test)]
#[path = "collectors_tests.rs"]
mod tests;

const REF_PREFIXES: [&str; 2] = ["refs/heads/", "refs/tags/"];

#[instrument(skip_all, fields(repository = %reference))]
pub async fn collect_settings<C: GovernanceClient + ?Sized>(
    client: &C,
    reference: &RepositoryReference,
    record: &mut GovernanceRecord,
) -> Result<(), github_client::Error> {
    let details = client
        .get_repository(reference.owner(), reference.name())
        .await?;

    record.repository_settings = map_settings(&details);
    Ok(())
}

/// Lists the rulesets, then fetches each one to obtain its rules.
#[instrument(skip_all, fields(repository = %reference))]
pub async fn collect_rulesets<C: GovernanceClient + ?Sized>(
    client: &C,
    reference: &RepositoryReference,
    record: &mut GovernanceRecord,
) -> Result<(), github_client::Error> {
    let summaries = client
        .list_rulesets(reference.owner(), reference.name())
        .await?;

    let mut rulesets = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let full = match summary.id {
            Some(id) => {
                client
                    .get_ruleset(reference.owner(), reference.name(), id)
                    .await?
            }
            None => summary,
        };
        debug!(ruleset = %full.name, rules = full.rules.len(), "Mapped ruleset");
        rulesets.push(map_ruleset(&full));
    }

    record.set_rulesets(rulesets);
    Ok(())
}

#[instrument(skip_all, fields(repository = %reference))]
pub async fn collect_collaborators<C: GovernanceClient + ?Sized>(
    client: &C,
    reference: &RepositoryReference,
    record: &mut GovernanceRecord,
) -> Result<(), github_client::Error> {
    let collaborators = client
        .list_collaborators(reference.owner(), reference.name())
        .await?;

    record.collaborators = collaborators
        .iter()
        .map(|c| Collaborator {
            login: c.login.clone(),
            permission: c.permission_level(),
            account_type: c.account_type.clone(),
        })
        .collect();
    Ok(())
}

#[instrument(skip_all, fields(repository = %reference))]
pub async fn collect_teams<C: GovernanceClient + ?Sized>(
    client: &C,
    reference: &RepositoryReference,
    record: &mut GovernanceRecord,
) -> Result<(), github_client::Error> {
    let teams = client.list_teams(reference.owner(), reference.name()).await?;

    record.teams = teams
        .iter()
        .map(|t| Team {
            name: t.name.clone(),
            slug: t.slug.clone(),
            permission: t.permission_level(),
        })
        .collect();
    Ok(())
}

/// Combines the repository's `security_and_analysis` block with the
/// vulnerability alert and automated fix endpoints.
#[instrument(skip_all, fields(repository = %reference))]
pub async fn collect_security<C: GovernanceClient + ?Sized>(
    client: &C,
    reference: &RepositoryReference,
    record: &mut GovernanceRecord,
) -> Result<(), github_client::Error> {
    let (owner, repo) = (reference.owner(), reference.name());

    let details = client.get_repository(owner, repo).await?;
    let vulnerability_alerts = client.vulnerability_alerts_enabled(owner, repo).await?;
    let automated_security_fixes = match client.get_automated_security_fixes(owner, repo).await {
        Ok(fixes) => fixes.is_active(),
        Err(github_client::Error::NotFound(_)) => false,
        Err(e) => return Err(e),
    };

    record.security_settings =
        map_security(&details, vulnerability_alerts, automated_security_fixes);
    Ok(())
}

#[instrument(skip_all, fields(repository = %reference))]
pub async fn collect_labels<C: GovernanceClient + ?Sized>(
    client: &C,
    reference: &RepositoryReference,
    record: &mut GovernanceRecord,
) -> Result<(), github_client::Error> {
    let labels = client.list_labels(reference.owner(), reference.name()).await?;

    record.issue_labels = labels
        .into_iter()
        .map(|l| Label {
            name: l.name,
            color: l.color,
            description: non_empty(l.description),
        })
        .collect();
    Ok(())
}

#[instrument(skip_all, fields(repository = %reference))]
pub async fn collect_milestones<C: GovernanceClient + ?Sized>(
    client: &C,
    reference: &RepositoryReference,
    record: &mut GovernanceRecord,
) -> Result<(), github_client::Error> {
    let milestones = client
        .list_milestones(reference.owner(), reference.name())
        .await?;

    record.milestones = milestones
        .into_iter()
        .map(|m| Milestone {
            due_on: m.due_date(),
            title: m.title,
            description: non_empty(m.description),
            state: m.state,
        })
        .collect();
    Ok(())
}

pub(crate) fn map_settings(details: &RepositoryDetails) -> RepositorySettings {
    let flag = |value: Option<bool>| value.unwrap_or(false);

    RepositorySettings {
        private: details.is_private(),
        archived: flag(details.archived),
        disabled: flag(details.disabled),
        default_branch: details.default_branch.clone().unwrap_or_default(),
        allow_merge_commit: flag(details.allow_merge_commit),
        allow_squash_merge: flag(details.allow_squash_merge),
        allow_rebase_merge: flag(details.allow_rebase_merge),
        allow_auto_merge: flag(details.allow_auto_merge),
        delete_branch_on_merge: flag(details.delete_branch_on_merge),
        has_issues: flag(details.has_issues),
        has_projects: flag(details.has_projects),
        has_wiki: flag(details.has_wiki),
        has_downloads: flag(details.has_downloads),
    }
}

pub(crate) fn map_ruleset(source: &RepositoryRuleset) -> Ruleset {
    let pattern = source
        .include_patterns()
        .iter()
        .map(|p| strip_ref_prefix(p))
        .collect::<Vec<_>>()
        .join(", ");

    let mut ruleset = Ruleset {
        name: source.name.clone(),
        pattern,
        enforce_admins: source.bypass_actors.is_empty(),
        allow_force_pushes: !source.has_rule(|r| matches!(r, Rule::NonFastForward)),
        allow_deletions: !source.has_rule(|r| matches!(r, Rule::Deletion)),
        required_linear_history: source.has_rule(|r| matches!(r, Rule::RequiredLinearHistory)),
        ..Default::default()
    };

    for rule in &source.rules {
        match rule {
            Rule::PullRequest { parameters } => {
                ruleset.required_pull_request_reviews = true;
                ruleset.required_approving_review_count =
                    parameters.required_approving_review_count.unwrap_or(0);
                ruleset.dismiss_stale_reviews =
                    parameters.dismiss_stale_reviews_on_push.unwrap_or(false);
                ruleset.require_code_owner_reviews =
                    parameters.require_code_owner_review.unwrap_or(false);
                ruleset.required_conversation_resolution =
                    parameters.required_review_thread_resolution.unwrap_or(false);
            }
            Rule::RequiredStatusChecks { parameters } => {
                ruleset.required_status_checks.extend(
                    parameters
                        .required_status_checks
                        .iter()
                        .map(|c| c.context.clone()),
                );
            }
            _ => {}
        }
    }

    ruleset
}

pub(crate) fn map_security(
    details: &RepositoryDetails,
    vulnerability_alerts: bool,
    automated_security_fixes: bool,
) -> SecuritySettings {
    let analysis = details.security_and_analysis.as_ref();

    SecuritySettings {
        vulnerability_alerts,
        automated_security_fixes,
        secret_scanning: feature_enabled(analysis.and_then(|a| a.secret_scanning.as_ref())),
        secret_scanning_push_protection: feature_enabled(
            analysis.and_then(|a| a.secret_scanning_push_protection.as_ref()),
        ),
        // The dependency graph is always on for public repositories.
        dependency_graph_enabled: !details.is_private() || vulnerability_alerts,
    }
}

fn strip_ref_prefix(pattern: &str) -> &str {
    REF_PREFIXES
        .iter()
        .find_map(|prefix| pattern.strip_prefix(prefix))
        .unwrap_or(pattern)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
