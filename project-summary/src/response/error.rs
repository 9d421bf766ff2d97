//! Response decoding error types.

use thiserror::Error;

/// Errors raised when a project query result does not have the expected shape.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The raw result could not be decoded into the project schema.
    #[error("Malformed project response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A field required to locate the board was null.
    #[error("Malformed project response: '{0}' is missing")]
    MissingField(&'static str),
}
