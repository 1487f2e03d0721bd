// src/validation/strategies/serial_number.rs

use regex::Regex;
use std::sync::OnceLock;

use crate::common::helpers::{eq_ignore_case, is_blank};
use crate::common::{StrategyError, ValidationResult};
use crate::equipment::{Equipment, EquipmentView};
use crate::validation::ValidationStrategy;

const RECOGNIZED_PREFIXES: [&str; 10] = [
    "MRI", "CT", "XR", "XRAY", "US", "ECHO", "LAB", "SURG", "ICU", "ER",
];

/// Matches e.g. `MRI-001` or `XRAY-12345`.
fn serial_number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([A-Z]{2,4})-([0-9]{3,6})$").expect("Invalid regex"))
}

/// Serial number format, uniqueness and naming conventions.
///
/// Uniqueness is only checked when the strategy was given a view of the
/// existing equipment. The view is live, so records stored after the
/// strategy was built are taken into account.
pub struct SerialNumberValidationStrategy {
    existing_equipment: Option<EquipmentView>,
}

impl SerialNumberValidationStrategy {
    pub fn new(existing_equipment: Option<EquipmentView>) -> Self {
        Self { existing_equipment }
    }

    /// Strategy without a uniqueness check.
    pub fn format_only() -> Self {
        Self::new(None)
    }

    pub fn is_valid_format(serial_number: &str) -> bool {
        serial_number_regex().is_match(serial_number)
    }
}

impl ValidationStrategy for SerialNumberValidationStrategy {
    fn name(&self) -> &str {
        "Serial Number Validation"
    }

    fn description(&self) -> &str {
        "Validates serial number format, uniqueness, and compliance with organizational standards."
    }

    fn validate(&self, equipment: &Equipment) -> Result<ValidationResult, StrategyError> {
        let mut result = ValidationResult::new();
        let serial = equipment.serial_number.as_str();

        if is_blank(serial) {
            result.add_error("Serial number is required for validation.");
            return Ok(result);
        }

        let captures = serial_number_regex().captures(serial);
        if captures.is_none() {
            result.add_error(format!(
                "Serial number '{}' does not match required format. Expected format: 2-4 uppercase letters followed by dash and 3-6 digits (e.g., 'MRI-001', 'XRAY-12345').",
                serial
            ));
        }

        if let Some(existing) = &self.existing_equipment {
            // Same id is the record being revalidated on update
            let duplicate = existing.any(|other| {
                other.id != equipment.id && eq_ignore_case(&other.serial_number, serial)
            });
            if duplicate {
                result.add_error(format!(
                    "Serial number '{}' is already in use by another equipment item.",
                    serial
                ));
            }
        }

        if let Some(captures) = captures {
            let prefix = &captures[1];
            let number = &captures[2];

            if !RECOGNIZED_PREFIXES.iter().any(|known| *known == prefix) {
                result.add_warning(format!(
                    "Serial number prefix '{}' is not a recognized equipment category. Consider using standard prefixes like MRI, CT, XR, US, etc.",
                    prefix
                ));
            }

            let below_threshold = number.parse::<u32>().map(|n| n < 1000).unwrap_or(false);
            if number.len() > 3 && !number.starts_with('0') && below_threshold {
                result.add_warning(
                    "Consider using leading zeros in serial numbers for better organization (e.g., '001' instead of '1').",
                );
            }
        }

        Ok(result)
    }
}
