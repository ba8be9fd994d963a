//! GitHub credential lookup and client construction.
//!
//! A token is taken from the `GH_TOKEN` or `GITHUB_TOKEN` environment
//! variables, falling back to the system keyring. Without any token the
//! client is anonymous, which is enough for public repositories.

use github_client::{create_anonymous_client, create_token_client, GitHubClient};
use keyring::Entry;
use tracing::{debug, info};

use crate::errors::Error;

pub const KEY_RING_SERVICE_NAME: &str = "repo_inspect_cli";
pub const KEY_RING_USER_TOKEN: &str = "github_token";

/// Environment variables checked for a token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;

/// Returns the first non-empty token from `env`, then from `keyring`.
pub fn token_from_sources<E, K>(env: E, keyring: K) -> Option<String>
where
    E: Fn(&str) -> Option<String>,
    K: FnOnce() -> Option<String>,
{
    for name in TOKEN_ENV_VARS {
        if let Some(token) = env(name).filter(|t| !t.trim().is_empty()) {
            debug!(source = name, "Using GitHub token from environment");
            return Some(token);
        }
    }

    keyring().filter(|t| !t.trim().is_empty())
}

/// Looks up a token from the process environment and the system keyring.
pub fn resolve_token() -> Option<String> {
    token_from_sources(|name| std::env::var(name).ok(), keyring_token)
}

fn keyring_token() -> Option<String> {
    let entry = match Entry::new(KEY_RING_SERVICE_NAME, KEY_RING_USER_TOKEN) {
        Ok(e) => e,
        Err(e) => {
            debug!(error = %e, "Keyring unavailable");
            return None;
        }
    };

    match entry.get_password() {
        Ok(token) => {
            debug!("Using GitHub token from keyring");
            Some(token)
        }
        Err(e) => {
            debug!(error = %e, "No GitHub token in keyring");
            None
        }
    }
}

/// Builds the GitHub client, authenticated when `token` is present.
///
/// # Errors
///
/// Returns `Error::Auth` when the underlying HTTP client cannot be built,
/// for example because `api_base_url` is not a valid URI.
pub fn create_client(token: Option<&str>, api_base_url: Option<&str>) -> Result<GitHubClient, Error> {
    let octocrab = match token {
        Some(token) => create_token_client(token, api_base_url),
        None => {
            info!("No GitHub token found, using anonymous access");
            create_anonymous_client(api_base_url)
        }
    }
    .map_err(|e| Error::Auth(e.to_string()))?;

    Ok(GitHubClient::new(octocrab))
}
