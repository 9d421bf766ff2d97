//! Typed schema of the project issues query result.
//!
//! Mirrors the selection set of [`PROJECT_ISSUES_QUERY`](crate::query::PROJECT_ISSUES_QUERY).
//! GitHub marks most of these fields nullable, so lists and connections are
//! modelled as `Option`s and null entries are kept until flattening.

use serde::Deserialize;

/// The `data` member of the query result.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectResponse {
    pub organization: Option<Organization>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub name: Option<String>,
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub database_id: Option<u64>,
    pub name: String,
    pub url: String,
    pub columns: ColumnConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConnection {
    pub nodes: Option<Vec<Option<Column>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub database_id: Option<u64>,
    pub name: String,
    pub cards: CardConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardConnection {
    pub edges: Option<Vec<Option<CardEdge>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardEdge {
    pub node: Option<Card>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub database_id: Option<u64>,
    /// `None` for note cards.
    pub content: Option<CardContent>,
}

/// What a card points at.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum CardContent {
    Issue(IssueContent),
    /// Pull requests and anything else the query does not select fields for.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueContent {
    pub database_id: Option<u64>,
    pub number: u64,
    pub url: String,
    pub title: String,
    pub state: IssueState,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
    pub repository: Option<RepositoryRef>,
    pub labels: Option<LabelConnection>,
    pub assignees: Option<UserConnection>,
}

/// Issue state as reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRef {
    pub name_with_owner: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelConnection {
    pub nodes: Option<Vec<Option<Label>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserConnection {
    pub nodes: Option<Vec<Option<User>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}
