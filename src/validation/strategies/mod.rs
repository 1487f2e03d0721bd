// src/validation/strategies/mod.rs

pub mod basic;
pub mod business_rules;
pub mod serial_number;

pub use basic::BasicEquipmentValidationStrategy;
pub use business_rules::BusinessRulesValidationStrategy;
pub use serial_number::SerialNumberValidationStrategy;

/// Registry keys used when the built-in strategies are registered on a
/// [`ValidationContext`](crate::validation::ValidationContext).
pub const BASIC: &str = "Basic";
pub const SERIAL_NUMBER: &str = "SerialNumber";
pub const BUSINESS_RULES: &str = "BusinessRules";
