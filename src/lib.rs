// Tab Strip Library
// Terminal host for the animated tab strip component

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Core infrastructure - application state and events
pub mod core;

// Logging setup
pub mod logging;

// UI - host chrome around the tab set
pub mod ui;

// Re-export commonly used items for convenience
pub use crate::config::AppConfig;
pub use crate::core::{App, AppEvent, EventHandler};
