//! Project URL parsing error types.

use thiserror::Error;

/// Errors that can occur while parsing a project URL.
#[derive(Debug, Error)]
pub enum ProjectUrlError {
    /// The input is not an absolute URL.
    #[error("Invalid project URL '{url}': {source}")]
    NotAUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL path does not look like a project board path.
    #[error("Invalid project URL '{url}': {message}")]
    InvalidPath { url: String, message: String },

    /// The project number segment is not a positive integer.
    #[error("Invalid project URL '{url}': project number '{segment}' is not a positive integer")]
    InvalidNumber { url: String, segment: String },
}
