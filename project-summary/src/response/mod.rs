//! Project query results and flattening.
//!
//! The query result is decoded into the typed [`ProjectResponse`] schema and
//! then flattened into one [`IssueRecord`] per open issue card, in board order
//! (columns first, then cards within each column).

mod error;
mod schema;

pub use error::ResponseError;
pub use schema::{
    Card, CardConnection, CardContent, CardEdge, Column, ColumnConnection, IssueContent,
    IssueState, Label, LabelConnection, Organization, Project, ProjectResponse, RepositoryRef,
    User, UserConnection,
};

use serde_json::Value;

/// A single open issue pulled from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Issue number within its repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Canonical issue URL.
    pub url: String,

    /// Repository in `owner/name` format.
    pub repository: String,

    /// Issue state. Always [`IssueState::Open`] after flattening.
    pub state: IssueState,

    /// ISO-8601 creation timestamp.
    pub created_at: String,

    /// ISO-8601 last update timestamp.
    pub updated_at: String,

    /// Assignee logins in board order.
    pub assignees: Vec<String>,

    /// Label names in board order.
    pub labels: Vec<String>,
}

impl ProjectResponse {
    /// Decodes the raw `data` member of a query result.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::Decode`] if the value does not match the schema.
    pub fn from_value(raw: Value) -> Result<Self, ResponseError> {
        Ok(serde_json::from_value(raw)?)
    }
}

/// Flattens a project response into its open issues.
///
/// Note cards, pull request cards and closed issues are skipped. Null
/// assignee and label entries are dropped. Order is preserved throughout.
///
/// # Errors
///
/// Returns [`ResponseError::MissingField`] if the organization or project is null.
pub fn flatten(response: ProjectResponse) -> Result<Vec<IssueRecord>, ResponseError> {
    let project = response
        .organization
        .ok_or(ResponseError::MissingField("organization"))?
        .project
        .ok_or(ResponseError::MissingField("organization.project"))?;

    let issues = project
        .columns
        .nodes
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .flat_map(|column| column.cards.edges.unwrap_or_default())
        .flatten()
        .filter_map(|edge| edge.node?.content)
        .filter_map(|content| match content {
            CardContent::Issue(issue) if issue.state != IssueState::Closed => Some(issue),
            _ => None,
        })
        .map(IssueRecord::from)
        .collect();

    Ok(issues)
}

impl From<IssueContent> for IssueRecord {
    fn from(issue: IssueContent) -> Self {
        let repository = issue
            .repository
            .map_or_else(|| issue.url.clone(), |repo| repo.name_with_owner);

        let assignees = issue
            .assignees
            .and_then(|connection| connection.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|user| user.login)
            .collect();

        let labels = issue
            .labels
            .and_then(|connection| connection.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|label| label.name)
            .collect();

        Self {
            number: issue.number,
            title: issue.title,
            url: issue.url,
            repository,
            state: issue.state,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
            assignees,
            labels,
        }
    }
}
