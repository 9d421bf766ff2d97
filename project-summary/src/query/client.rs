//! GraphQL client abstraction.

use super::QueryError;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::{json, Value};

/// Something that can execute a GraphQL query against GitHub.
///
/// Implementations return the `data` member of the response.
#[allow(async_fn_in_trait)]
pub trait GraphQlClient {
    /// Executes `query` with `variables`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] on transport failures or GraphQL errors.
    async fn execute_query(&self, query: &str, variables: Value) -> Result<Value, QueryError>;
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

impl GraphQlResponse {
    /// Unwraps the envelope, treating any reported error as a failure.
    pub(crate) fn into_data(self) -> Result<Value, QueryError> {
        if !self.errors.is_empty() {
            return Err(QueryError::GraphQl {
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        match self.data {
            Some(Value::Null) | None => Err(QueryError::EmptyResponse),
            Some(data) => Ok(data),
        }
    }
}

impl GraphQlClient for Octocrab {
    async fn execute_query(&self, query: &str, variables: Value) -> Result<Value, QueryError> {
        let payload = json!({
            "query": query,
            "variables": variables,
        });

        let response: GraphQlResponse = self.graphql(&payload).await?;
        response.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(value: Value) -> GraphQlResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn returns_data_member() {
        let data = envelope(json!({ "data": { "organization": null } }))
            .into_data()
            .unwrap();
        assert_eq!(data, json!({ "organization": null }));
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let result = envelope(json!({
            "data": { "organization": null },
            "errors": [
                { "message": "Could not resolve to an Organization with the login of 'nope'." },
                { "message": "Second problem" }
            ]
        }))
        .into_data();

        match result {
            Err(QueryError::GraphQl { messages }) => {
                assert_eq!(messages.len(), 2);
                assert!(messages[0].contains("nope"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_an_error() {
        let result = envelope(json!({ "data": null })).into_data();
        assert!(matches!(result, Err(QueryError::EmptyResponse)));
    }

    #[test]
    fn graphql_error_message_joins_messages() {
        let error = QueryError::GraphQl {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(error.to_string(), "GraphQL error: first; second");
    }
}
