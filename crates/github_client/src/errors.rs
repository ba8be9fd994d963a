//! Error types for GitHub client operations.
//!
//! This module defines the errors that can occur when reading repository
//! governance data from the GitHub REST API.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// Every variant names the endpoint or the cause. The aggregation layer logs
/// these errors and carries on with the next facet.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.list_labels("octocat", "hello-world").await {
///     Ok(labels) => println!("{} labels", labels.len()),
///     Err(Error::NotFound(endpoint)) => eprintln!("Nothing at {}", endpoint),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A GitHub API request failed.
    ///
    /// The endpoint is the request path, the message is the reason reported
    /// by GitHub or by the HTTP layer.
    #[error("API request to '{endpoint}' failed: {message}")]
    ApiError { endpoint: String, message: String },

    /// GitHub client initialization failure.
    ///
    /// This error occurs when the client cannot be built, for example because
    /// the configured base URL is not a valid URI.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The GitHub API returned a response in an unexpected format.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status code,
    /// indicating that the resource does not exist or is not visible with the
    /// current credentials.
    #[error("Resource not found: {0}")]
    NotFound(String),
}
