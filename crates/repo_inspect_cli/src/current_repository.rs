//! Resolution of the repository to inspect when none is given on the
//! command line.

use std::path::Path;

use git2::Repository;
use repo_inspect_core::RepositoryReference;
use tracing::{debug, instrument};

use crate::errors::Error;

/// Remote whose URL identifies the GitHub repository
pub const ORIGIN_REMOTE: &str = "origin";

#[cfg(test)]
#[path = "current_repository_tests.rs"]
mod tests;

/// Resolves the GitHub repository of the git checkout containing the
/// working directory.
pub fn current_repository() -> Result<RepositoryReference, Error> {
    let cwd = std::env::current_dir()
        .map_err(|e| Error::Resolution(format!("cannot read working directory: {}", e)))?;
    repository_from_path(&cwd)
}

/// Resolves the GitHub repository of the git checkout containing `path`
/// from the URL of its `origin` remote.
#[instrument]
pub fn repository_from_path(path: &Path) -> Result<RepositoryReference, Error> {
    let repo = Repository::discover(path)
        .map_err(|e| Error::Resolution(format!("not inside a git repository: {}", e.message())))?;

    let remote = repo.find_remote(ORIGIN_REMOTE).map_err(|e| {
        Error::Resolution(format!(
            "no '{}' remote configured: {}",
            ORIGIN_REMOTE,
            e.message()
        ))
    })?;

    let url = remote.url().ok_or_else(|| {
        Error::Resolution(format!("'{}' remote URL is not valid UTF-8", ORIGIN_REMOTE))
    })?;
    debug!(url = url, "Found remote URL");

    RepositoryReference::from_remote_url(url).map_err(|_| {
        Error::Resolution(format!("'{}' is not a GitHub repository URL", url))
    })
}
