// src/equipment/service.rs
//! In-memory equipment and maintenance repository.
//!
//! Identifiers are assigned here, starting at 1 and never reused within one
//! service. Deleting equipment also deletes its maintenance history.
//! Not synchronized for concurrent mutation; callers sharing a service
//! across threads must wrap it themselves.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::models::{Equipment, MaintenanceRecord};
use super::store::{EquipmentView, MaintenanceView, SharedCollection};
use crate::common::config::{TrackerConfig, ValidationMode};
use crate::common::TrackerError;
use crate::validation::ValidationContext;

pub struct EquipmentService {
    equipment: SharedCollection<Equipment>,
    maintenance_records: SharedCollection<MaintenanceRecord>,
    next_equipment_id: u32,
    next_maintenance_id: u32,
    validation_context: Option<ValidationContext>,
}

impl Default for EquipmentService {
    fn default() -> Self {
        Self::new()
    }
}

impl EquipmentService {
    /// Service that accepts every equipment record as-is.
    pub fn new() -> Self {
        Self::from_parts(SharedCollection::new(), None)
    }

    /// Service that validates every added record through `context`.
    ///
    /// Strategies needing the live inventory can be registered afterwards
    /// through [`validation_context_mut`](Self::validation_context_mut) using
    /// [`all_equipment`](Self::all_equipment).
    pub fn with_validation(context: ValidationContext) -> Self {
        Self::from_parts(SharedCollection::new(), Some(context))
    }

    /// Service validated by the basic, serial number and business rule
    /// strategies, with serial uniqueness checked against this service.
    pub fn with_default_validation() -> Result<Self, TrackerError> {
        let equipment = SharedCollection::new();
        let context = ValidationContext::with_defaults(equipment.view())?;
        Ok(Self::from_parts(equipment, Some(context)))
    }

    /// Builds a service the way `config` asks for, seeding sample data if enabled.
    pub fn from_config(config: &TrackerConfig) -> Result<Self, TrackerError> {
        let mut service = match config.validation {
            ValidationMode::Default => Self::with_default_validation()?,
            ValidationMode::SerialOnly => {
                let equipment = SharedCollection::new();
                let context = ValidationContext::serial_only(equipment.view())?;
                Self::from_parts(equipment, Some(context))
            }
            ValidationMode::Disabled => Self::new(),
        };

        if config.seed_sample_data {
            service.seed_sample_data()?;
        }

        Ok(service)
    }

    fn from_parts(
        equipment: SharedCollection<Equipment>,
        validation_context: Option<ValidationContext>,
    ) -> Self {
        Self {
            equipment,
            maintenance_records: SharedCollection::new(),
            next_equipment_id: 1,
            next_maintenance_id: 1,
            validation_context,
        }
    }

    /// Adds the two sample imaging devices.
    pub fn seed_sample_data(&mut self) -> Result<(), TrackerError> {
        let samples = [
            ("MRI Scanner", "MRI-001", NaiveDate::from_ymd_opt(2020, 5, 15)),
            ("X-Ray Machine", "XR-002", NaiveDate::from_ymd_opt(2019, 3, 10)),
        ];

        for (name, serial_number, purchase_date) in samples {
            self.add(Equipment {
                id: 0,
                name: name.to_string(),
                serial_number: serial_number.to_string(),
                category: "Imaging".to_string(),
                purchase_date,
                status: "Active".to_string(),
            })?;
        }

        debug!(count = self.equipment.read().len(), "Seeded sample equipment");
        Ok(())
    }

    pub fn validation_context(&self) -> Option<&ValidationContext> {
        self.validation_context.as_ref()
    }

    pub fn validation_context_mut(&mut self) -> Option<&mut ValidationContext> {
        self.validation_context.as_mut()
    }

    /// Validates (when a context is configured) and stores `equipment`,
    /// returning the stored record with its new id.
    ///
    /// Any id already set on `equipment` is discarded. On
    /// [`TrackerError::Validation`] nothing is stored and no id is used up.
    pub fn add(&mut self, mut equipment: Equipment) -> Result<Equipment, TrackerError> {
        // Unsaved until stored; a leftover id would exempt it from the serial
        // uniqueness check.
        equipment.id = 0;

        if let Some(context) = &self.validation_context {
            let result = context.validate(&equipment, &[])?;
            if !result.is_valid() {
                warn!(
                    serial_number = %equipment.serial_number,
                    errors = result.errors().len(),
                    warnings = result.warnings().len(),
                    "Equipment rejected by validation"
                );
                return Err(TrackerError::Validation(result));
            }
            if result.has_warnings() {
                debug!(
                    serial_number = %equipment.serial_number,
                    warnings = ?result.warnings(),
                    "Equipment accepted with warnings"
                );
            }
        }

        equipment.id = self.next_equipment_id;
        self.next_equipment_id = next_id(equipment.id, "equipment")?;
        self.equipment.write().push(equipment.clone());

        info!(id = equipment.id, serial_number = %equipment.serial_number, "Equipment added");
        Ok(equipment)
    }

    pub fn get(&self, id: u32) -> Option<Equipment> {
        self.equipment.read().iter().find(|e| e.id == id).cloned()
    }

    /// Overwrites name, serial number, category, purchase date and status of
    /// the stored record with the same id. Unknown ids are ignored.
    pub fn update(&mut self, equipment: &Equipment) {
        let mut items = self.equipment.write();
        match items.iter_mut().find(|e| e.id == equipment.id) {
            Some(existing) => {
                existing.name = equipment.name.clone();
                existing.serial_number = equipment.serial_number.clone();
                existing.category = equipment.category.clone();
                existing.purchase_date = equipment.purchase_date;
                existing.status = equipment.status.clone();
                info!(id = equipment.id, "Equipment updated");
            }
            None => debug!(id = equipment.id, "Update ignored, equipment not found"),
        }
    }

    /// Removes the equipment and all of its maintenance records. Unknown ids
    /// are ignored.
    pub fn delete(&mut self, id: u32) {
        let mut items = self.equipment.write();
        let Some(index) = items.iter().position(|e| e.id == id) else {
            debug!(id, "Delete ignored, equipment not found");
            return;
        };
        items.remove(index);
        drop(items);

        let mut records = self.maintenance_records.write();
        let before = records.len();
        records.retain(|m| m.equipment_id != id);
        info!(id, removed_records = before - records.len(), "Equipment deleted");
    }

    /// Stores a maintenance record. Records are not validated.
    pub fn add_maintenance_record(
        &mut self,
        mut record: MaintenanceRecord,
    ) -> Result<MaintenanceRecord, TrackerError> {
        record.id = self.next_maintenance_id;
        self.next_maintenance_id = next_id(record.id, "maintenance record")?;
        self.maintenance_records.write().push(record.clone());

        info!(
            id = record.id,
            equipment_id = record.equipment_id,
            "Maintenance record added"
        );
        Ok(record)
    }

    /// Maintenance history of one piece of equipment, oldest entry first.
    pub fn maintenance_records_for(&self, equipment_id: u32) -> Vec<MaintenanceRecord> {
        self.maintenance_records
            .read()
            .iter()
            .filter(|m| m.equipment_id == equipment_id)
            .cloned()
            .collect()
    }

    /// Live view of all equipment; later changes are visible through it.
    pub fn all_equipment(&self) -> EquipmentView {
        self.equipment.view()
    }

    /// Live view of all maintenance records.
    pub fn all_maintenance_records(&self) -> MaintenanceView {
        self.maintenance_records.view()
    }
}

fn next_id(current: u32, collection: &'static str) -> Result<u32, TrackerError> {
    current.checked_add(1).ok_or_else(|| {
        warn!(collection, "Identifier space exhausted");
        TrackerError::IdentifiersExhausted(collection)
    })
}
