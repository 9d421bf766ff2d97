//! Project URL parsing.
//!
//! Turns a project board URL into a [`ProjectReference`]. Two URL shapes are
//! recognised:
//!
//! ```text
//! https://github.com/orgs/{login}/projects/{number}
//! https://github.com/{owner}/{repo}/projects/{number}
//! ```
//!
//! Anything after the project number (such as `/views/1`) is ignored.

mod error;
mod reference;

pub use error::ProjectUrlError;
pub use reference::{OwnerKind, ProjectReference};

use url::Url;

/// Path segment marking an organization-level project.
const ORGS_SEGMENT: &str = "orgs";

/// Path segment preceding the project number.
const PROJECTS_SEGMENT: &str = "projects";

/// Parses a project board URL.
///
/// # Errors
///
/// Returns [`ProjectUrlError`] if the input is not a URL, its path is not a
/// project board path, or the project number is not a positive integer.
pub fn parse_project_url(project_url: &str) -> Result<ProjectReference, ProjectUrlError> {
    let url = Url::parse(project_url.trim()).map_err(|source| ProjectUrlError::NotAUrl {
        url: project_url.to_string(),
        source,
    })?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let invalid_path = |message: &str| ProjectUrlError::InvalidPath {
        url: project_url.to_string(),
        message: message.to_string(),
    };

    let [first, second, marker, number, ..] = segments.as_slice() else {
        return Err(invalid_path(
            "expected '/orgs/{login}/projects/{number}' or '/{owner}/{repo}/projects/{number}'",
        ));
    };

    if *marker != PROJECTS_SEGMENT {
        return Err(invalid_path("missing 'projects' path segment"));
    }

    let number = parse_project_number(number).ok_or_else(|| ProjectUrlError::InvalidNumber {
        url: project_url.to_string(),
        segment: number.to_string(),
    })?;

    let reference = if *first == ORGS_SEGMENT {
        ProjectReference {
            owner_kind: OwnerKind::Organization,
            owner: second.to_string(),
            number,
        }
    } else {
        ProjectReference {
            owner_kind: OwnerKind::Repository,
            owner: format!("{first}/{second}"),
            number,
        }
    };

    Ok(reference)
}

/// Parses a project number, which must fit a GraphQL `Int` and be non-zero.
fn parse_project_number(segment: &str) -> Option<u32> {
    segment
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0 && i32::try_from(*n).is_ok())
}
