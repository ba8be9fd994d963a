//! Milestone domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "milestone_tests.rs"]
mod tests;

/// A milestone defined on a repository.
///
/// # Examples
///
/// ```rust
/// use github_client::Milestone;
///
/// let milestone: Milestone = serde_json::from_str(
///     r#"{ "title": "v1.0", "state": "open", "due_on": "2024-12-31T08:00:00Z" }"#,
/// ).unwrap();
///
/// assert_eq!(milestone.due_date().as_deref(), Some("2024-12-31"));
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Milestone {
    /// Milestone title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// `open` or `closed`
    #[serde(default)]
    pub state: String,
    /// Due date as an ISO 8601 timestamp
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
}

impl Milestone {
    /// Returns the due date formatted as `YYYY-MM-DD`.
    pub fn due_date(&self) -> Option<String> {
        self.due_on.map(|due| due.format("%Y-%m-%d").to_string())
    }
}
