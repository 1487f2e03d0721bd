//! Equipment inventory and maintenance history with a pluggable validation
//! pipeline.
//!
//! [`EquipmentService`] owns the equipment and maintenance collections and,
//! when given a [`ValidationContext`], screens every new equipment record
//! through the registered [`ValidationStrategy`] implementations.

pub mod common;
pub mod equipment;
pub mod validation;

pub use common::{StrategyError, TrackerConfig, TrackerError, ValidationMode, ValidationResult};
pub use equipment::{
    Equipment, EquipmentService, EquipmentStatus, EquipmentView, MaintenanceRecord,
    MaintenanceView,
};
pub use validation::{
    BasicEquipmentValidationStrategy, BusinessRulesValidationStrategy, EquipmentValidationService,
    SerialNumberValidationStrategy, ValidationContext, ValidationStrategy,
};
