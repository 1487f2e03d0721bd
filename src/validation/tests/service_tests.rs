// src/validation/tests/service_tests.rs

use super::valid_equipment;
use crate::common::{StrategyError, TrackerError, ValidationResult};
use crate::equipment::{Equipment, EquipmentService};
use crate::validation::{EquipmentValidationService, ValidationStrategy};

struct FailingStrategy;

impl ValidationStrategy for FailingStrategy {
    fn name(&self) -> &str {
        "Failing"
    }

    fn description(&self) -> &str {
        "Returns an error"
    }

    fn validate(&self, _equipment: &Equipment) -> Result<ValidationResult, StrategyError> {
        Err(StrategyError::new("lookup timed out"))
    }
}

struct PanickingStrategy;

impl ValidationStrategy for PanickingStrategy {
    fn name(&self) -> &str {
        "Panicking"
    }

    fn description(&self) -> &str {
        "Panics"
    }

    fn validate(&self, _equipment: &Equipment) -> Result<ValidationResult, StrategyError> {
        panic!("index out of range");
    }
}

struct WarningStrategy;

impl ValidationStrategy for WarningStrategy {
    fn name(&self) -> &str {
        "Warning"
    }

    fn description(&self) -> &str {
        "Adds a warning"
    }

    fn validate(&self, _equipment: &Equipment) -> Result<ValidationResult, StrategyError> {
        let mut result = ValidationResult::new();
        result.add_warning("still ran");
        Ok(result)
    }
}

#[test]
fn test_default_strategies_info() {
    let service = EquipmentService::new();
    let validator = EquipmentValidationService::new(service.all_equipment());

    let names: Vec<String> = validator
        .strategy_info()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        [
            "Basic Equipment Validation",
            "Serial Number Validation",
            "Business Rules Validation"
        ]
    );
}

#[test]
fn test_default_strategies_accept_valid_equipment() {
    let service = EquipmentService::new();
    let validator = EquipmentValidationService::new(service.all_equipment());

    let result = validator.validate_equipment(&valid_equipment("MRI-001"));
    assert!(result.is_valid(), "{}", result.formatted_messages());
    assert!(validator.ensure_valid(&valid_equipment("MRI-001")).is_ok());
}

#[test]
fn test_default_strategies_detect_duplicates_in_live_inventory() {
    let mut service = EquipmentService::new();
    let validator = EquipmentValidationService::new(service.all_equipment());
    service.add(valid_equipment("MRI-001")).unwrap();

    let err = validator
        .ensure_valid(&valid_equipment("MRI-001"))
        .unwrap_err();
    let result = err.validation_result().unwrap();
    assert!(result
        .errors()
        .iter()
        .any(|e| e.contains("already in use")));
}

#[test]
fn test_failing_strategy_is_recorded_and_others_still_run() {
    let mut validator = EquipmentValidationService::empty();
    validator.add_strategy(Box::new(FailingStrategy));
    validator.add_strategy(Box::new(WarningStrategy));

    let result = validator.validate_equipment(&valid_equipment("MRI-001"));
    assert!(!result.is_valid());
    assert_eq!(
        result.errors(),
        ["Validation strategy 'Failing' failed: lookup timed out"]
    );
    assert_eq!(result.warnings(), ["still ran"]);
}

#[test]
fn test_panicking_strategy_is_recorded() {
    let mut validator = EquipmentValidationService::empty();
    validator.add_strategy(Box::new(PanickingStrategy));
    validator.add_strategy(Box::new(WarningStrategy));

    let result = validator.validate_equipment(&valid_equipment("MRI-001"));
    assert_eq!(
        result.errors(),
        ["Validation strategy 'Panicking' failed: index out of range"]
    );
    assert_eq!(result.warnings(), ["still ran"]);

    let err = validator
        .ensure_valid(&valid_equipment("MRI-001"))
        .unwrap_err();
    assert!(matches!(err, TrackerError::Validation(_)));
}

#[test]
fn test_remove_strategy_by_name() {
    let service = EquipmentService::new();
    let mut validator = EquipmentValidationService::new(service.all_equipment());

    assert!(validator.remove_strategy("Serial Number Validation"));
    assert!(!validator.remove_strategy("Serial Number Validation"));
    assert_eq!(validator.strategy_info().len(), 2);

    // Malformed serial passes once the serial strategy is gone
    let result = validator.validate_equipment(&valid_equipment("INVALID"));
    assert!(result.is_valid());
}

#[test]
fn test_empty_service_accepts_anything() {
    let validator = EquipmentValidationService::empty();
    let result = validator.validate_equipment(&Equipment::default());
    assert!(result.is_valid());
    assert!(validator.strategy_info().is_empty());
}
