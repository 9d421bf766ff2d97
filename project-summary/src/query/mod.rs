//! Project board query.
//!
//! Issues the single GraphQL query that reads an organization project board:
//! its columns, every card in each column, and the issue behind each card.
//!
//! Results are not paginated. Only the first [`MAX_COLUMNS`] columns, the
//! first 10 labels and the first [`MAX_ASSIGNEES`] assignees of each issue
//! are returned. Anything beyond that is silently dropped by GitHub.

mod client;
mod error;

pub use client::GraphQlClient;
pub use error::QueryError;

use crate::project::{OwnerKind, ProjectReference};
use serde_json::{json, Value};
use tracing::{debug, info, info_span, Instrument};

/// Maximum number of columns requested.
pub const MAX_COLUMNS: u32 = 10;

/// Maximum number of assignees requested per issue.
pub const MAX_ASSIGNEES: u32 = 5;

/// Query reading every card on an organization project board.
///
/// See <https://docs.github.com/en/graphql/overview/explorer> to experiment with it.
pub const PROJECT_ISSUES_QUERY: &str = r#"
query ($login: String!, $project: Int!, $numColumns: Int!, $numAssignees: Int!) {
  organization(login: $login) {
    name
    project(number: $project) {
      databaseId
      name
      url
      columns(first: $numColumns) {
        nodes {
          databaseId
          name
          cards {
            edges {
              node {
                databaseId
                content {
                  __typename
                  ... on Issue {
                    databaseId
                    number
                    url
                    title
                    state
                    createdAt
                    updatedAt
                    closedAt
                    repository {
                      nameWithOwner
                    }
                    labels(first: 10) {
                      nodes {
                        name
                      }
                    }
                    assignees(first: $numAssignees) {
                      nodes {
                        login
                      }
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Builds the variables for [`PROJECT_ISSUES_QUERY`].
fn query_variables(reference: &ProjectReference) -> Value {
    json!({
        "login": reference.owner,
        "project": reference.number,
        "numColumns": MAX_COLUMNS,
        "numAssignees": MAX_ASSIGNEES,
    })
}

/// Fetches the raw board contents for an organization project.
///
/// # Arguments
///
/// * `client` - GraphQL client used to run the query
/// * `reference` - Project to query; must be organization-owned
///
/// # Returns
///
/// The `data` member of the query result, ready for
/// [`ProjectResponse::from_value`](crate::response::ProjectResponse::from_value).
///
/// # Errors
///
/// Returns [`QueryError::UnsupportedOwner`] for repository projects, and
/// propagates any client failure unchanged.
pub async fn fetch_open_issues<C: GraphQlClient>(
    client: &C,
    reference: &ProjectReference,
) -> Result<Value, QueryError> {
    if reference.owner_kind != OwnerKind::Organization {
        return Err(QueryError::UnsupportedOwner {
            owner: reference.owner.clone(),
        });
    }

    let span = info_span!(
        "fetch_open_issues",
        login = %reference.owner,
        project = reference.number
    );

    async {
        info!("Querying for issues");
        let variables = query_variables(reference);
        debug!(variables = %variables, "Executing project query");

        let data = client
            .execute_query(PROJECT_ISSUES_QUERY, variables)
            .await?;

        debug!("Project query complete");
        Ok(data)
    }
    .instrument(span)
    .await
}
