// src/validation/strategies/basic.rs

use crate::common::helpers::{char_len, is_blank};
use crate::common::{StrategyError, ValidationResult};
use crate::equipment::Equipment;
use crate::validation::ValidationStrategy;

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 100;
const SERIAL_MAX_LEN: usize = 50;
const CATEGORY_MAX_LEN: usize = 50;
const STATUS_MAX_LEN: usize = 20;

/// Required fields and length limits.
pub struct BasicEquipmentValidationStrategy;

impl ValidationStrategy for BasicEquipmentValidationStrategy {
    fn name(&self) -> &str {
        "Basic Equipment Validation"
    }

    fn description(&self) -> &str {
        "Validates required fields, data types, and basic integrity constraints for equipment records."
    }

    fn validate(&self, equipment: &Equipment) -> Result<ValidationResult, StrategyError> {
        let mut result = ValidationResult::new();

        // Validate name
        if is_blank(&equipment.name) {
            result.add_error("Equipment name is required and cannot be empty.");
        } else if char_len(&equipment.name) > NAME_MAX_LEN {
            result.add_error("Equipment name cannot exceed 100 characters.");
        } else if char_len(&equipment.name) < NAME_MIN_LEN {
            result.add_error("Equipment name must be at least 2 characters long.");
        }

        // Validate serial number
        if is_blank(&equipment.serial_number) {
            result.add_error("Serial number is required and cannot be empty.");
        } else if char_len(&equipment.serial_number) > SERIAL_MAX_LEN {
            result.add_error("Serial number cannot exceed 50 characters.");
        }

        // Validate category
        if is_blank(&equipment.category) {
            result.add_error("Equipment category is required and cannot be empty.");
        } else if char_len(&equipment.category) > CATEGORY_MAX_LEN {
            result.add_error("Equipment category cannot exceed 50 characters.");
        }

        // Validate status
        if is_blank(&equipment.status) {
            result.add_error("Equipment status is required and cannot be empty.");
        } else if char_len(&equipment.status) > STATUS_MAX_LEN {
            result.add_error("Equipment status cannot exceed 20 characters.");
        }

        if equipment.purchase_date.is_none() {
            result.add_error("Purchase date is required and must be a valid date.");
        }

        if !is_blank(&equipment.name)
            && equipment.name.chars().next().is_some_and(char::is_lowercase)
        {
            result.add_warning("Equipment name should start with a capital letter.");
        }

        if !is_blank(&equipment.serial_number) && equipment.serial_number.contains(' ') {
            result.add_warning(
                "Serial number contains spaces, which may cause issues in some systems.",
            );
        }

        Ok(result)
    }
}
