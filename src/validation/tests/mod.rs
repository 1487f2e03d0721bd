// src/validation/tests/mod.rs

mod context_tests;
mod service_tests;

use chrono::NaiveDate;

use crate::equipment::Equipment;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A record every built-in strategy accepts without errors.
pub(super) fn valid_equipment(serial_number: &str) -> Equipment {
    Equipment::new(
        "MRI Scanner",
        serial_number,
        "Imaging",
        date(2020, 5, 15),
        "Active",
    )
}
