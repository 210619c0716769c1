// Managers module
// Provides OOP-style manager wrappers for TUI components

pub mod tabs;

pub use tabs::TabsManager;

// Re-export YAML configuration types from tabs module
pub use tabs::{
    convert_style, convert_style_overrides, convert_tabs_config, create_tab_descriptors,
    create_tabs_from_config, StyleOverridesYaml, StyleYaml, TabConfigYaml, TabIdYaml,
    TabsConfigYaml,
};
