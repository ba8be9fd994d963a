//! Repository reference parsing.
//!
//! A [`RepositoryReference`] is the validated `owner/name` pair every
//! collector works against. It is parsed from the command line argument or
//! from a git remote URL.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::errors::Error;
use crate::model::RepositoryIdentity;

#[cfg(test)]
#[path = "repository_reference_tests.rs"]
mod tests;

/// Matches `https://host/owner/name`, `ssh://git@host/owner/name` and
/// scp-style `git@host:owner/name`, with an optional `.git` suffix.
const REMOTE_URL_PATTERN: &str = r"^(?:[A-Za-z][A-Za-z0-9+.-]*://(?:[^@/]+@)?[^/]+/|[^@/\s]+@[^:/\s]+:)(?P<owner>[^/\s]+)/(?P<name>[^/\s]+?)(?:\.git)?/?$";

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryReference {
    owner: String,
    name: String,
}

impl RepositoryReference {
    /// Parses an `owner/name` string.
    ///
    /// The input must contain exactly one `/` with a non-empty part on each
    /// side. No other validation or normalization is applied.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRepository`] naming the rejected input.
    pub fn parse(value: &str) -> Result<Self, Error> {
        let mut parts = value.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::InvalidRepository(value.to_string())),
        }
    }

    /// Extracts the repository from a git remote URL.
    ///
    /// Accepts HTTPS, `ssh://` and scp-style remotes.
    pub fn from_remote_url(url: &str) -> Result<Self, Error> {
        let pattern =
            Regex::new(REMOTE_URL_PATTERN).map_err(|_| Error::InvalidRepository(url.to_string()))?;

        let captures = pattern
            .captures(url.trim())
            .ok_or_else(|| Error::InvalidRepository(url.to_string()))?;

        Self::parse(&format!("{}/{}", &captures["owner"], &captures["name"]))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identity block written into the governance record.
    pub fn identity(&self) -> RepositoryIdentity {
        RepositoryIdentity {
            owner: self.owner.clone(),
            name: self.name.clone(),
        }
    }
}

impl FromStr for RepositoryReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
