use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that end a `repo-inspect` run.
///
/// Every variant is fatal: the binary prints it as `Error: <message>` on
/// stderr and exits with status 1. Failures of individual collectors never
/// surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The repository to inspect could not be determined from the local
    /// git checkout.
    #[error("Unable to determine the current repository: {0}")]
    Resolution(String),

    /// Configuration error occurred while loading or validating the
    /// configuration file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The GitHub client could not be constructed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Repository parsing, format selection or output encoding failed.
    #[error(transparent)]
    Core(#[from] repo_inspect_core::Error),

    /// Failed to write the report to standard output.
    #[error("Failed to write to the std out buffer.")]
    StdOutWriteFailed,
}
