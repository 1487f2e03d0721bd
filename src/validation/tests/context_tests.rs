// src/validation/tests/context_tests.rs

use std::collections::HashSet;

use super::valid_equipment;
use crate::common::{StrategyError, TrackerError, ValidationResult};
use crate::equipment::{Equipment, EquipmentService};
use crate::validation::strategies::{BASIC, BUSINESS_RULES, SERIAL_NUMBER};
use crate::validation::{
    BasicEquipmentValidationStrategy, SerialNumberValidationStrategy, ValidationContext,
    ValidationStrategy,
};

/// Emits one fixed error and one fixed warning.
struct FixedStrategy {
    error: &'static str,
    warning: &'static str,
}

impl ValidationStrategy for FixedStrategy {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn description(&self) -> &str {
        "Always reports the same messages"
    }

    fn validate(&self, _equipment: &Equipment) -> Result<ValidationResult, StrategyError> {
        let mut result = ValidationResult::new();
        result.add_error(self.error);
        result.add_warning(self.warning);
        Ok(result)
    }
}

struct BrokenStrategy;

impl ValidationStrategy for BrokenStrategy {
    fn name(&self) -> &str {
        "Broken"
    }

    fn description(&self) -> &str {
        "Never produces a result"
    }

    fn validate(&self, _equipment: &Equipment) -> Result<ValidationResult, StrategyError> {
        Err(StrategyError::new("inventory unavailable"))
    }
}

fn fixed(error: &'static str, warning: &'static str) -> Box<dyn ValidationStrategy> {
    Box::new(FixedStrategy { error, warning })
}

#[test]
fn test_register_and_lookup() {
    let mut context = ValidationContext::new();
    assert!(context.is_empty());

    context
        .register(BASIC, Box::new(BasicEquipmentValidationStrategy))
        .unwrap();
    context
        .register(SERIAL_NUMBER, Box::new(SerialNumberValidationStrategy::format_only()))
        .unwrap();

    assert!(context.has(BASIC));
    assert!(!context.has(BUSINESS_RULES));
    assert_eq!(context.len(), 2);
    assert_eq!(
        context.registered_names(),
        HashSet::from([BASIC.to_string(), SERIAL_NUMBER.to_string()])
    );
}

#[test]
fn test_register_duplicate_name_fails() {
    let mut context = ValidationContext::new();
    context
        .register("Basic", Box::new(BasicEquipmentValidationStrategy))
        .unwrap();

    let err = context
        .register("Basic", Box::new(BasicEquipmentValidationStrategy))
        .unwrap_err();
    assert!(matches!(err, TrackerError::DuplicateStrategy(ref name) if name == "Basic"));
    assert_eq!(context.len(), 1);
}

#[test]
fn test_register_blank_name_fails() {
    let mut context = ValidationContext::new();
    let err = context
        .register("  ", Box::new(BasicEquipmentValidationStrategy))
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidArgument { name: "name", .. }));
    assert!(context.is_empty());
}

#[test]
fn test_unregister() {
    let mut context = ValidationContext::new();
    context
        .register(BASIC, Box::new(BasicEquipmentValidationStrategy))
        .unwrap();

    assert!(context.unregister(BASIC));
    assert!(!context.unregister(BASIC));
    assert!(!context.has(BASIC));
}

#[test]
fn test_validate_with_no_strategies_is_valid() {
    let context = ValidationContext::new();
    let result = context.validate(&Equipment::default(), &[]).unwrap();
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    assert!(result.warnings().is_empty());
}

#[test]
fn test_validate_all_merges_in_registration_order() {
    let mut context = ValidationContext::new();
    context.register("first", fixed("e1", "w1")).unwrap();
    context.register("second", fixed("e2", "w2")).unwrap();

    let result = context.validate(&valid_equipment("MRI-001"), &[]).unwrap();
    assert!(!result.is_valid());
    assert_eq!(result.errors(), ["e1", "e2"]);
    assert_eq!(result.warnings(), ["w1", "w2"]);
}

#[test]
fn test_validate_selected_runs_only_named_in_argument_order() {
    let mut context = ValidationContext::new();
    context.register("first", fixed("e1", "w1")).unwrap();
    context.register("second", fixed("e2", "w2")).unwrap();
    context.register("third", fixed("e3", "w3")).unwrap();

    let result = context
        .validate(&valid_equipment("MRI-001"), &["third", "first"])
        .unwrap();
    assert_eq!(result.errors(), ["e3", "e1"]);
    assert_eq!(result.warnings(), ["w3", "w1"]);
}

#[test]
fn test_validate_unknown_name_fails() {
    let mut context = ValidationContext::new();
    context.register("first", fixed("e1", "w1")).unwrap();

    let err = context
        .validate(&valid_equipment("MRI-001"), &["first", "missing"])
        .unwrap_err();
    assert!(matches!(err, TrackerError::UnknownStrategy(ref name) if name == "missing"));
}

#[test]
fn test_validate_propagates_strategy_error() {
    let mut context = ValidationContext::new();
    context.register("first", fixed("e1", "w1")).unwrap();
    context.register("broken", Box::new(BrokenStrategy)).unwrap();

    let err = context.validate(&valid_equipment("MRI-001"), &[]).unwrap_err();
    match err {
        TrackerError::StrategyFault { strategy, source } => {
            assert_eq!(strategy, "broken");
            assert_eq!(source.message(), "inventory unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_with_defaults_registers_builtin_strategies() {
    let service = EquipmentService::new();
    let context = ValidationContext::with_defaults(service.all_equipment()).unwrap();

    assert_eq!(
        context.registered_names(),
        HashSet::from([
            BASIC.to_string(),
            SERIAL_NUMBER.to_string(),
            BUSINESS_RULES.to_string()
        ])
    );

    let result = context
        .validate(&valid_equipment("MRI-001"), &[SERIAL_NUMBER])
        .unwrap();
    assert!(result.is_valid());

    let serial_only = ValidationContext::serial_only(service.all_equipment()).unwrap();
    assert_eq!(serial_only.len(), 1);
    assert!(serial_only.has(SERIAL_NUMBER));
}
