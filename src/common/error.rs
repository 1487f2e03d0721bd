// Error types for the tracker core

use thiserror::Error;

use super::validation::ValidationResult;

/// Failure raised by a single validation strategy while it runs.
///
/// This is distinct from a record failing validation: a strategy error means
/// the strategy could not produce a verdict at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StrategyError {
    message: String,
}

impl StrategyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Tracker error types
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: &'static str, message: String },

    #[error("A strategy with the name '{0}' is already registered")]
    DuplicateStrategy(String),

    #[error("Validation strategy '{0}' is not registered")]
    UnknownStrategy(String),

    #[error("Validation failed: {}", .0.errors().join(", "))]
    Validation(ValidationResult),

    #[error("No identifiers left for new {0} entries")]
    IdentifiersExhausted(&'static str),

    #[error("Validation strategy '{strategy}' failed: {source}")]
    StrategyFault {
        strategy: String,
        #[source]
        source: StrategyError,
    },
}

impl TrackerError {
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        TrackerError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// The full result (errors and warnings) behind a validation failure.
    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            TrackerError::Validation(result) => Some(result),
            _ => None,
        }
    }
}
