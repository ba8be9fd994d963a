//! Team domain types.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "team_tests.rs"]
mod tests;

/// A team with access to a repository.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Team {
    /// Display name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Repository permission as reported by the teams endpoint
    /// (`pull`, `triage`, `push`, `maintain`, `admin`)
    #[serde(default)]
    pub permission: String,
}

impl Team {
    /// Returns the permission using the role names shown in the GitHub UI.
    pub fn permission_level(&self) -> String {
        match self.permission.as_str() {
            "push" => "write".to_string(),
            "pull" => "read".to_string(),
            other => other.to_string(),
        }
    }
}
