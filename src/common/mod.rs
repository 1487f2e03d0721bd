// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{TrackerConfig, ValidationMode};
pub use error::{StrategyError, TrackerError};
pub use validation::ValidationResult;
