//! Collaborator domain types.
//!
//! This module contains the response types of the repository collaborators endpoint.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "collaborator_tests.rs"]
mod tests;

/// A user with access to a repository.
///
/// # Examples
///
/// ```rust
/// use github_client::Collaborator;
///
/// let collaborator: Collaborator = serde_json::from_str(
///     r#"{ "login": "octocat", "type": "User", "role_name": "write" }"#,
/// ).unwrap();
///
/// assert_eq!(collaborator.permission_level(), "write");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Collaborator {
    /// The login name of the collaborator
    pub login: String,
    /// The type of account (User, Bot, Organization)
    #[serde(rename = "type", default)]
    pub account_type: String,
    /// The repository role, including custom roles
    #[serde(default)]
    pub role_name: Option<String>,
    /// The effective permission flags
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

impl Collaborator {
    /// Returns the collaborator's permission level.
    ///
    /// The explicit `role_name` wins. Otherwise the highest granted flag of
    /// `permissions` is used, falling back to `read`.
    pub fn permission_level(&self) -> String {
        match (&self.role_name, &self.permissions) {
            (Some(role), _) if !role.is_empty() => role.clone(),
            (_, Some(permissions)) => permissions.highest().to_string(),
            _ => "read".to_string(),
        }
    }
}

/// Permission flags granted to a collaborator.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Permissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub maintain: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub triage: bool,
    #[serde(default)]
    pub pull: bool,
}

impl Permissions {
    /// Returns the name of the most privileged flag that is set.
    pub fn highest(&self) -> &'static str {
        if self.admin {
            "admin"
        } else if self.maintain {
            "maintain"
        } else if self.push {
            "write"
        } else if self.triage {
            "triage"
        } else {
            "read"
        }
    }
}
