// src/main.rs
use dotenv::dotenv;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use equipment_tracker::{EquipmentService, EquipmentValidationService, TrackerConfig};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let config = TrackerConfig::from_env().apply_cli_args(env::args().skip(1));
    config.log_status();

    // ========================================================================
    // SERVICE SETUP
    // ========================================================================

    let service = EquipmentService::from_config(&config)?;
    let inventory = service.all_equipment();
    info!(equipment = inventory.len(), "Equipment service ready");

    // ========================================================================
    // INVENTORY REPORT
    // ========================================================================

    let validator = EquipmentValidationService::new(inventory.clone());
    println!("=== Validation Strategies ===");
    for (name, description) in validator.strategy_info() {
        println!("{}: {}", name, description);
    }

    println!();
    println!("=== Inventory ===");
    for equipment in inventory.snapshot() {
        let report = validator.validate_equipment(&equipment);
        println!("{}", serde_json::to_string_pretty(&equipment)?);
        let messages = report.formatted_messages();
        if !messages.is_empty() {
            println!("{}", messages);
        }
        let history = service.maintenance_records_for(equipment.id);
        println!("Maintenance records: {}", history.len());
    }

    Ok(())
}
