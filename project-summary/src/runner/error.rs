//! Runner error types.

use crate::config::ConfigError;
use crate::project::ProjectUrlError;
use crate::query::QueryError;
use crate::report::TemplateError;
use crate::response::ResponseError;
use std::path::PathBuf;

/// Errors that can occur while generating a report.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The project URL could not be parsed.
    #[error(transparent)]
    InvalidProjectUrl(#[from] ProjectUrlError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// The project query failed.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The query result did not have the expected shape.
    #[error(transparent)]
    MalformedResponse(#[from] ResponseError),

    /// Report rendering failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The report could not be written.
    #[error("Failed to write report to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
