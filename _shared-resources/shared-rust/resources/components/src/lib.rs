// Tab components library
// Tab strip controller and terminal rendering for TUI applications

// Configuration errors
pub mod error;
// Core infrastructure (tab model, layout, controller)
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
pub use crate::core::{
    Badge, IndicatorGeometry, LayoutMode, LayoutRegistry, TabDescriptor, TabKey, TabLayoutRecord,
    TabSetConfig, TabSize, TabVariant, TabsController,
};
pub use crate::elements::{TabsAreas, TabsView};
pub use crate::error::{ConfigError, Result};
pub use crate::managers::{TabsConfigYaml, TabsManager};
pub use crate::utilities::{StyleDescriptor, StyleOverrides, TabVisualState};
