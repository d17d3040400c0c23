// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod lodgings;

pub use health::config as health_config;
pub use lodgings::config as lodgings_config;
