// src/equipment/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Equipment Models
// ============================================================================

/// A tracked piece of equipment.
///
/// `id` is 0 until the record has been stored by
/// [`EquipmentService`](crate::equipment::EquipmentService).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Equipment {
    pub id: u32,
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub purchase_date: Option<NaiveDate>, // None when the date was never supplied
    pub status: String,
}

impl Equipment {
    pub fn new(
        name: impl Into<String>,
        serial_number: impl Into<String>,
        category: impl Into<String>,
        purchase_date: NaiveDate,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            serial_number: serial_number.into(),
            category: category.into(),
            purchase_date: Some(purchase_date),
            status: status.into(),
        }
    }

    /// True while the record has not been assigned an identifier.
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// Recommended status values. The status field itself stays free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentStatus {
    Active,
    Inactive,
    Maintenance,
    Retired,
    OutOfService,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 5] = [
        EquipmentStatus::Active,
        EquipmentStatus::Inactive,
        EquipmentStatus::Maintenance,
        EquipmentStatus::Retired,
        EquipmentStatus::OutOfService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Active => "Active",
            EquipmentStatus::Inactive => "Inactive",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::Retired => "Retired",
            EquipmentStatus::OutOfService => "Out of Service",
        }
    }

    /// Case-insensitive lookup of a status string.
    pub fn parse(value: &str) -> Option<Self> {
        let lowered = value.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().to_lowercase() == lowered)
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Maintenance Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    pub id: u32,
    pub equipment_id: u32, // not enforced; the service cascades on delete
    pub maintenance_date: NaiveDate,
    pub maintenance_type: String,
    pub description: String,
    pub performed_by: String,
    pub cost: f64,
}

impl MaintenanceRecord {
    pub fn new(
        equipment_id: u32,
        maintenance_date: NaiveDate,
        maintenance_type: impl Into<String>,
        description: impl Into<String>,
        performed_by: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            id: 0,
            equipment_id,
            maintenance_date,
            maintenance_type: maintenance_type.into(),
            description: description.into(),
            performed_by: performed_by.into(),
            cost,
        }
    }
}
