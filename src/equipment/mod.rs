// src/equipment/mod.rs

pub mod models;
pub mod service;
pub mod store;


// Re-export commonly used items
pub use models::*;
pub use service::EquipmentService;
pub use store::{CollectionView, EquipmentView, MaintenanceView};
