//! Project query error types.

use thiserror::Error;

/// Errors that can occur while querying a project board.
#[derive(Debug, Error)]
pub enum QueryError {
    /// GitHub API or transport error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The GraphQL endpoint answered with errors.
    #[error("GraphQL error: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    /// The response carried neither data nor errors.
    #[error("GraphQL response contained no data")]
    EmptyResponse,

    /// Only organization projects can be queried.
    #[error("Repository level projects are not supported ({owner})")]
    UnsupportedOwner { owner: String },
}
