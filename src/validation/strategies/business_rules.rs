// src/validation/strategies/business_rules.rs

use chrono::{Datelike, Days, Local, Months, NaiveDate};

use crate::common::helpers::{contains_ignore_case, eq_ignore_case, is_blank};
use crate::common::{StrategyError, ValidationResult};
use crate::equipment::{Equipment, EquipmentStatus};
use crate::validation::ValidationStrategy;

const VALID_CATEGORIES: [&str; 7] = [
    "Imaging",
    "Laboratory",
    "Surgical",
    "Monitoring",
    "Support",
    "Emergency",
    "Rehabilitation",
];

const OLD_EQUIPMENT_YEARS: u32 = 20;
const RECENT_PURCHASE_DAYS: u64 = 30;

fn earliest_purchase_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1990, 1, 1)
}

/// Organizational policy: allowed statuses, standard categories, purchase
/// date sanity and lifecycle consistency.
///
/// Date rules are evaluated against the local calendar date.
pub struct BusinessRulesValidationStrategy;

impl BusinessRulesValidationStrategy {
    /// Runs every rule as if today were `today`.
    pub fn validate_on(&self, equipment: &Equipment, today: NaiveDate) -> ValidationResult {
        let mut result = ValidationResult::new();

        validate_status(equipment, &mut result);
        validate_category(equipment, &mut result);
        validate_purchase_date(equipment, today, &mut result);
        validate_lifecycle(equipment, today, &mut result);

        result
    }
}

impl ValidationStrategy for BusinessRulesValidationStrategy {
    fn name(&self) -> &str {
        "Business Rules Validation"
    }

    fn description(&self) -> &str {
        "Validates equipment records against business-specific rules, organizational policies, and operational constraints."
    }

    fn validate(&self, equipment: &Equipment) -> Result<ValidationResult, StrategyError> {
        Ok(self.validate_on(equipment, Local::now().date_naive()))
    }
}

fn validate_status(equipment: &Equipment, result: &mut ValidationResult) {
    // Blank status is reported by the basic strategy
    if is_blank(&equipment.status) {
        return;
    }

    if EquipmentStatus::parse(&equipment.status).is_none() {
        let allowed: Vec<&str> = EquipmentStatus::ALL.iter().map(|s| s.as_str()).collect();
        result.add_error(format!(
            "Status '{}' is not valid. Allowed values are: {}.",
            equipment.status,
            allowed.join(", ")
        ));
    }

    if equipment.is_new() && !eq_ignore_case(&equipment.status, EquipmentStatus::Active.as_str()) {
        result.add_warning(
            "New equipment items should typically start with 'Active' status unless there's a specific reason.",
        );
    }
}

fn validate_category(equipment: &Equipment, result: &mut ValidationResult) {
    if is_blank(&equipment.category) {
        return;
    }

    if !contains_ignore_case(&VALID_CATEGORIES, &equipment.category) {
        result.add_warning(format!(
            "Category '{}' is not in the standard list. Consider using one of: {}.",
            equipment.category,
            VALID_CATEGORIES.join(", ")
        ));
    }
}

fn validate_purchase_date(equipment: &Equipment, today: NaiveDate, result: &mut ValidationResult) {
    let Some(purchase_date) = equipment.purchase_date else {
        return;
    };

    if purchase_date > today {
        result.add_error("Purchase date cannot be in the future.");
    }

    if let Some(earliest) = earliest_purchase_date() {
        if purchase_date < earliest {
            result.add_error(format!(
                "Purchase date cannot be earlier than {}. Please verify the date.",
                earliest.format("%Y-%m-%d")
            ));
        }
    }

    let twenty_years_ago = today.checked_sub_months(Months::new(OLD_EQUIPMENT_YEARS * 12));
    // Inclusive: bought exactly twenty years ago today already counts
    if twenty_years_ago.is_some_and(|cutoff| purchase_date <= cutoff) {
        result.add_warning(
            "Equipment is over 20 years old. Consider reviewing maintenance schedules and replacement planning.",
        );
    }

    let recent_cutoff = today.checked_sub_days(Days::new(RECENT_PURCHASE_DAYS));
    if recent_cutoff.is_some_and(|cutoff| purchase_date > cutoff)
        && eq_ignore_case(&equipment.status, EquipmentStatus::Active.as_str())
    {
        result.add_warning(
            "Recently purchased equipment marked as 'Active'. Ensure installation and commissioning are complete.",
        );
    }
}

fn validate_lifecycle(equipment: &Equipment, today: NaiveDate, result: &mut ValidationResult) {
    // Calendar years, not elapsed time
    let age = equipment
        .purchase_date
        .map(|purchase_date| today.year() - purchase_date.year());
    let older_than = |years: i32| age.is_some_and(|age| age > years);

    match EquipmentStatus::parse(&equipment.status) {
        Some(EquipmentStatus::Retired) if age.is_some_and(|age| age < 5) => {
            result.add_warning(
                "Equipment marked as 'Retired' but is less than 5 years old. Verify retirement reason.",
            );
        }
        Some(EquipmentStatus::OutOfService) => {
            result.add_warning(
                "Equipment marked as 'Out of Service'. Ensure maintenance tickets are created for resolution.",
            );
        }
        Some(EquipmentStatus::Active) if older_than(15) => {
            result.add_warning(
                "Active equipment is over 15 years old. Consider maintenance review and potential replacement planning.",
            );
        }
        _ => {}
    }

    if eq_ignore_case(&equipment.category, "Imaging") && older_than(10) {
        result.add_warning(
            "Imaging equipment over 10 years old may require more frequent calibration and maintenance.",
        );
    }

    if eq_ignore_case(&equipment.category, "Laboratory") && older_than(12) {
        result.add_warning(
            "Laboratory equipment over 12 years old should be evaluated for accuracy and compliance standards.",
        );
    }
}
