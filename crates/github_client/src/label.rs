//! Label domain types.
//!
//! This module contains types representing GitHub issue and pull request labels.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// Represents a label defined on a repository.
///
/// # Examples
///
/// ```
/// use github_client::Label;
///
/// let label = Label {
///     name: "bug".to_string(),
///     color: "d73a4a".to_string(),
///     description: Some("Something isn't working".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// The name of the label
    pub name: String,
    /// Hex color code without the leading `#`
    #[serde(default)]
    pub color: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}
