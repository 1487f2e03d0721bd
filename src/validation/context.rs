// src/validation/context.rs
//! Named registry of validation strategies.

use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

use super::strategies::{
    BasicEquipmentValidationStrategy, BusinessRulesValidationStrategy,
    SerialNumberValidationStrategy, BASIC, BUSINESS_RULES, SERIAL_NUMBER,
};
use super::ValidationStrategy;
use crate::common::helpers::is_blank;
use crate::common::{TrackerError, ValidationResult};
use crate::equipment::{Equipment, EquipmentView};

/// Strategies keyed by name, kept in registration order.
///
/// Strategy errors are returned to the caller unchanged; recovering from a
/// failing strategy is the job of
/// [`EquipmentValidationService`](crate::validation::EquipmentValidationService).
#[derive(Default)]
pub struct ValidationContext {
    strategies: Vec<(String, Box<dyn ValidationStrategy>)>,
}

impl fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("ValidationContext")
            .field("strategies", &names)
            .finish()
    }
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with the basic, serial number and business rule strategies.
    /// The serial number strategy checks uniqueness against `existing`.
    pub fn with_defaults(existing: EquipmentView) -> Result<Self, TrackerError> {
        let mut context = Self::new();
        context.register(BASIC, Box::new(BasicEquipmentValidationStrategy))?;
        context.register(
            SERIAL_NUMBER,
            Box::new(SerialNumberValidationStrategy::new(Some(existing))),
        )?;
        context.register(BUSINESS_RULES, Box::new(BusinessRulesValidationStrategy))?;
        Ok(context)
    }

    /// Context with only the serial number strategy.
    pub fn serial_only(existing: EquipmentView) -> Result<Self, TrackerError> {
        let mut context = Self::new();
        context.register(
            SERIAL_NUMBER,
            Box::new(SerialNumberValidationStrategy::new(Some(existing))),
        )?;
        Ok(context)
    }

    /// Empty or whitespace-only names are rejected as invalid arguments.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        strategy: Box<dyn ValidationStrategy>,
    ) -> Result<(), TrackerError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(TrackerError::invalid_argument(
                "name",
                "Strategy name cannot be empty.",
            ));
        }
        if self.has(&name) {
            return Err(TrackerError::DuplicateStrategy(name));
        }

        info!(name = %name, strategy = strategy.name(), "Registered validation strategy");
        self.strategies.push((name, strategy));
        Ok(())
    }

    /// Removes the named strategy. Returns false if it was not registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.strategies.len();
        self.strategies.retain(|(n, _)| n != name);
        let removed = self.strategies.len() != before;
        if removed {
            info!(name = %name, "Unregistered validation strategy");
        }
        removed
    }

    pub fn has(&self, name: &str) -> bool {
        self.strategies.iter().any(|(n, _)| n == name)
    }

    pub fn registered_names(&self) -> HashSet<String> {
        self.strategies.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Runs the named strategies, or every registered one when `names` is
    /// empty, and merges their results in order.
    ///
    /// All names are resolved before any strategy runs. With nothing to run
    /// the result is valid and empty.
    pub fn validate(
        &self,
        equipment: &Equipment,
        names: &[&str],
    ) -> Result<ValidationResult, TrackerError> {
        let selected: Vec<(&str, &dyn ValidationStrategy)> = if names.is_empty() {
            self.strategies
                .iter()
                .map(|(n, s)| (n.as_str(), s.as_ref()))
                .collect()
        } else {
            names
                .iter()
                .map(|name| {
                    self.find(name)
                        .map(|strategy| (*name, strategy))
                        .ok_or_else(|| TrackerError::UnknownStrategy(name.to_string()))
                })
                .collect::<Result<_, _>>()?
        };

        let mut combined = ValidationResult::new();
        for (name, strategy) in selected {
            let result = strategy
                .validate(equipment)
                .map_err(|source| TrackerError::StrategyFault {
                    strategy: name.to_string(),
                    source,
                })?;
            debug!(
                strategy = %name,
                errors = result.errors().len(),
                warnings = result.warnings().len(),
                "Strategy finished"
            );
            combined = combined.combine(&result);
        }

        Ok(combined)
    }

    fn find(&self, name: &str) -> Option<&dyn ValidationStrategy> {
        self.strategies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_ref())
    }
}
