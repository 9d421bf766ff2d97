//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while assembling the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required input was neither passed explicitly nor set as an action input.
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: String },
}
