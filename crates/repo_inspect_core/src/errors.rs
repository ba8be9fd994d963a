use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Fatal errors raised while preparing or rendering a governance report.
///
/// Collector failures are not represented here. They are recorded in the
/// [`crate::CollectionReport`] log and never abort an inspection.
#[derive(Error, Debug)]
pub enum Error {
    /// The repository argument is not of the form `owner/repo`.
    #[error("repository must be in format 'owner/repo', got '{0}'")]
    InvalidRepository(String),

    /// The requested output format is not one of json, yaml, yml or table.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The output encoder failed.
    #[error("failed to encode output: {0}")]
    Encoding(String),
}
