// src/validation/service.rs
//! Composite validation over a list of strategies that keeps going when one
//! of them fails.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, warn};

use super::strategies::{
    BasicEquipmentValidationStrategy, BusinessRulesValidationStrategy,
    SerialNumberValidationStrategy,
};
use super::ValidationStrategy;
use crate::common::{TrackerError, ValidationResult};
use crate::equipment::{Equipment, EquipmentView};

pub struct EquipmentValidationService {
    strategies: Vec<Box<dyn ValidationStrategy>>,
}

impl EquipmentValidationService {
    /// Service with the default strategies. Serial numbers are checked for
    /// uniqueness against `existing`.
    pub fn new(existing: EquipmentView) -> Self {
        Self {
            strategies: vec![
                Box::new(BasicEquipmentValidationStrategy),
                Box::new(SerialNumberValidationStrategy::new(Some(existing))),
                Box::new(BusinessRulesValidationStrategy),
            ],
        }
    }

    /// Service with no strategies; every record passes until some are added.
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn add_strategy(&mut self, strategy: Box<dyn ValidationStrategy>) {
        self.strategies.push(strategy);
    }

    /// Removes the first strategy whose `name()` matches.
    pub fn remove_strategy(&mut self, name: &str) -> bool {
        match self.strategies.iter().position(|s| s.name() == name) {
            Some(index) => {
                self.strategies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Runs every strategy and merges the results.
    ///
    /// A strategy that returns an error or panics is recorded as an error on
    /// the combined result and the remaining strategies still run.
    pub fn validate_equipment(&self, equipment: &Equipment) -> ValidationResult {
        let mut combined = ValidationResult::new();

        for strategy in &self.strategies {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| strategy.validate(equipment)));
            match outcome {
                Ok(Ok(result)) => combined = combined.combine(&result),
                Ok(Err(e)) => {
                    warn!(strategy = strategy.name(), error = %e, "Validation strategy failed");
                    combined.add_error(format!(
                        "Validation strategy '{}' failed: {}",
                        strategy.name(),
                        e
                    ));
                }
                Err(payload) => {
                    let detail = panic_message(payload.as_ref());
                    error!(strategy = strategy.name(), detail = %detail, "Validation strategy panicked");
                    combined.add_error(format!(
                        "Validation strategy '{}' failed: {}",
                        strategy.name(),
                        detail
                    ));
                }
            }
        }

        combined
    }

    /// Name and description of every configured strategy, in run order.
    pub fn strategy_info(&self) -> Vec<(String, String)> {
        self.strategies
            .iter()
            .map(|s| (s.name().to_string(), s.description().to_string()))
            .collect()
    }

    /// Like [`validate_equipment`](Self::validate_equipment) but turns an
    /// invalid result into [`TrackerError::Validation`].
    pub fn ensure_valid(&self, equipment: &Equipment) -> Result<ValidationResult, TrackerError> {
        let result = self.validate_equipment(equipment);
        if result.is_valid() {
            Ok(result)
        } else {
            Err(TrackerError::Validation(result))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
