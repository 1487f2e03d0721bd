// src/validation/mod.rs

pub mod context;
pub mod service;
pub mod strategies;
pub mod strategy;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use context::ValidationContext;
pub use service::EquipmentValidationService;
pub use strategies::{
    BasicEquipmentValidationStrategy, BusinessRulesValidationStrategy,
    SerialNumberValidationStrategy,
};
pub use strategy::ValidationStrategy;
