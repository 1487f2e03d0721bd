// src/validation/strategy.rs

use crate::common::{StrategyError, ValidationResult};
use crate::equipment::Equipment;

/// A self-contained rule set that inspects one equipment record.
///
/// Implementations report problems with the record through the returned
/// [`ValidationResult`]. `Err` is reserved for the strategy itself being
/// unable to run.
pub trait ValidationStrategy {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn validate(&self, equipment: &Equipment) -> Result<ValidationResult, StrategyError>;
}
