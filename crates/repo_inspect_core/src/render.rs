//! Output rendering.
//!
//! The governance record is rendered completely into a `String` before any
//! of it is written, so a rendering failure never produces partial output.

use std::fmt;
use std::str::FromStr;

use colored::Colorize;

use crate::errors::Error;
use crate::model::{GovernanceRecord, Ruleset};
use crate::sections::{Section, SectionFilter};

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Parses `json`, `yaml`, `yml` or `table`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "table" => Ok(OutputFormat::Table),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Table => "table",
        };
        f.write_str(name)
    }
}

/// Renders `record` in the requested format.
///
/// The section filter only shapes the table output; JSON and YAML always
/// contain the whole record.
pub fn render(
    record: &GovernanceRecord,
    format: OutputFormat,
    filter: &SectionFilter,
) -> Result<String, Error> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(record)
                .map_err(|e| Error::Encoding(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(record).map_err(|e| Error::Encoding(e.to_string()))
        }
        OutputFormat::Table => Ok(render_table(record, filter)),
    }
}

pub fn bool_icon(value: bool) -> &'static str {
    if value {
        "✅"
    } else {
        "❌"
    }
}

/// Prefixes a permission level with its glyph, e.g. `👑 admin`.
pub fn permission_icon(permission: &str) -> String {
    let icon = match permission {
        "admin" => "👑",
        "maintain" => "🔧",
        "write" => "✏️",
        "triage" => "🏷️",
        "read" => "👀",
        _ => "❓",
    };
    format!("{} {}", icon, permission)
}

fn branch(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        "└─"
    } else {
        "├─"
    }
}

fn render_table(record: &GovernanceRecord, filter: &SectionFilter) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Repository Governance Report".bold()));
    out.push_str("═══════════════════════════\n\n");
    out.push_str(&format!(
        "📁 Repository: {}/{}\n\n",
        record.repository.owner, record.repository.name
    ));

    if filter.includes(Section::Settings) {
        let s = &record.repository_settings;
        out.push_str("⚙️  Repository Settings\n");
        out.push_str(&format!("├─ Private: {}\n", bool_icon(s.private)));
        out.push_str(&format!("├─ Archived: {}\n", bool_icon(s.archived)));
        out.push_str(&format!("├─ Default Branch: {}\n", s.default_branch));
        out.push_str(&format!("├─ Issues: {}\n", bool_icon(s.has_issues)));
        out.push_str(&format!("├─ Projects: {}\n", bool_icon(s.has_projects)));
        out.push_str(&format!("├─ Wiki: {}\n", bool_icon(s.has_wiki)));
        out.push_str(&format!("├─ Allow Merge Commit: {}\n", bool_icon(s.allow_merge_commit)));
        out.push_str(&format!("├─ Allow Squash Merge: {}\n", bool_icon(s.allow_squash_merge)));
        out.push_str(&format!("├─ Allow Rebase Merge: {}\n", bool_icon(s.allow_rebase_merge)));
        out.push_str(&format!(
            "└─ Delete Branch on Merge: {}\n\n",
            bool_icon(s.delete_branch_on_merge)
        ));
    }

    if filter.includes(Section::Security) {
        let s = &record.security_settings;
        out.push_str("🔒 Security Settings\n");
        out.push_str(&format!("├─ Vulnerability Alerts: {}\n", bool_icon(s.vulnerability_alerts)));
        out.push_str(&format!(
            "├─ Automated Security Fixes: {}\n",
            bool_icon(s.automated_security_fixes)
        ));
        out.push_str(&format!("├─ Secret Scanning: {}\n", bool_icon(s.secret_scanning)));
        out.push_str(&format!(
            "├─ Secret Scanning Push Protection: {}\n",
            bool_icon(s.secret_scanning_push_protection)
        ));
        out.push_str(&format!(
            "└─ Dependency Graph: {}\n\n",
            bool_icon(s.dependency_graph_enabled)
        ));
    }

    if !record.rulesets.is_empty() && filter.includes(Section::Rulesets) {
        out.push_str("📜 Repository Rulesets\n");
        let len = record.rulesets.len();
        for (i, ruleset) in record.rulesets.iter().enumerate() {
            render_ruleset(&mut out, ruleset, branch(i, len));
            if i + 1 < len {
                out.push_str("   \n");
            }
        }
        out.push('\n');
    }

    if !record.collaborators.is_empty() && filter.includes(Section::Collaborators) {
        let len = record.collaborators.len();
        out.push_str(&format!("👥 Collaborators ({})\n", len));
        for (i, c) in record.collaborators.iter().enumerate() {
            out.push_str(&format!(
                "{} {} ({}) - {}\n",
                branch(i, len),
                c.login,
                c.account_type,
                permission_icon(&c.permission)
            ));
        }
        out.push('\n');
    }

    if !record.teams.is_empty() && filter.includes(Section::Teams) {
        let len = record.teams.len();
        out.push_str(&format!("Teams ({})\n", len));
        for (i, t) in record.teams.iter().enumerate() {
            out.push_str(&format!(
                "{} {} (@{}) - {}\n",
                branch(i, len),
                t.name,
                t.slug,
                permission_icon(&t.permission)
            ));
        }
        out.push('\n');
    }

    if !record.issue_labels.is_empty() && filter.includes(Section::Labels) {
        let len = record.issue_labels.len();
        out.push_str(&format!("🏷️  Labels ({})\n", len));
        for (i, label) in record.issue_labels.iter().enumerate() {
            let description = label
                .description
                .as_deref()
                .map(|d| format!(" ({})", d))
                .unwrap_or_default();
            out.push_str(&format!(
                "{} {} #{}{}\n",
                branch(i, len),
                label.name,
                label.color,
                description
            ));
        }
        out.push('\n');
    }

    if !record.milestones.is_empty() && filter.includes(Section::Milestones) {
        let len = record.milestones.len();
        out.push_str(&format!("🎯 Milestones ({})\n", len));
        for (i, m) in record.milestones.iter().enumerate() {
            let state = if m.is_closed() { "🔴" } else { "🟢" };
            let due = m
                .due_on
                .as_deref()
                .map(|d| format!(" (Due: {})", d))
                .unwrap_or_default();
            out.push_str(&format!("{} {} {}{}\n", branch(i, len), state, m.title, due));
            if let Some(description) = &m.description {
                out.push_str(&format!("   {}\n", description));
            }
        }
        out.push('\n');
    }

    out
}

fn render_ruleset(out: &mut String, ruleset: &Ruleset, prefix: &str) {
    out.push_str(&format!(
        "{} {} (Pattern: {})\n",
        prefix, ruleset.name, ruleset.pattern
    ));
    out.push_str(&format!("   ├─ Enforce Admins: {}\n", bool_icon(ruleset.enforce_admins)));
    out.push_str(&format!(
        "   ├─ Require PR Reviews: {}\n",
        bool_icon(ruleset.required_pull_request_reviews)
    ));
    if ruleset.required_pull_request_reviews {
        out.push_str(&format!(
            "   │  ├─ Required Approving Reviews: {}\n",
            ruleset.required_approving_review_count
        ));
        out.push_str(&format!(
            "   │  ├─ Dismiss Stale Reviews: {}\n",
            bool_icon(ruleset.dismiss_stale_reviews)
        ));
        out.push_str(&format!(
            "   │  └─ Require Code Owner Reviews: {}\n",
            bool_icon(ruleset.require_code_owner_reviews)
        ));
    }
    out.push_str(&format!(
        "   ├─ Required Linear History: {}\n",
        bool_icon(ruleset.required_linear_history)
    ));
    out.push_str(&format!("   ├─ Allow Force Pushes: {}\n", bool_icon(ruleset.allow_force_pushes)));
    out.push_str(&format!("   ├─ Allow Deletions: {}\n", bool_icon(ruleset.allow_deletions)));
    out.push_str(&format!(
        "   ├─ Require Conversation Resolution: {}\n",
        bool_icon(ruleset.required_conversation_resolution)
    ));

    if ruleset.required_status_checks.is_empty() {
        out.push_str("   └─ Required Status Checks: None\n");
    } else {
        out.push_str("   └─ Required Status Checks:\n");
        let len = ruleset.required_status_checks.len();
        for (i, check) in ruleset.required_status_checks.iter().enumerate() {
            out.push_str(&format!("      {} {}\n", branch(i, len), check));
        }
    }
}
