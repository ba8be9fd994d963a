//! Security feature response types.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "security_tests.rs"]
mod tests;

/// Response of `GET /repos/{owner}/{repo}/automated-security-fixes`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AutomatedSecurityFixes {
    /// Whether Dependabot security updates are enabled
    pub enabled: bool,
    /// Whether Dependabot security updates are paused
    #[serde(default)]
    pub paused: bool,
}

impl AutomatedSecurityFixes {
    /// Returns `true` when fixes are enabled and not paused.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.paused
    }
}
