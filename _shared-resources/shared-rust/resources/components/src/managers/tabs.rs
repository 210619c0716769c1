// Tabs Manager
// YAML configuration helpers and an OOP-style wrapper around a mounted tab set

use std::collections::HashSet;
use std::time::Duration;

use ratatui::{
    layout::{Position, Rect},
    Frame,
};
use serde::Deserialize;

use crate::core::controller::TabsController;
use crate::core::tabs::{
    Badge, LayoutMode, TabDescriptor, TabSetConfig, TabSize, TabVariant, DEFAULT_INDICATOR_COLOR,
};
use crate::elements::tab_strip::{report_layouts, split_area, visible_scroll, TabsView};
use crate::error::{ConfigError, Result};
use crate::utilities::parse_color;
use crate::utilities::styles::{StyleDescriptor, StyleOverrides};

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab id from YAML: either a string or a number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TabIdYaml {
    Number(i64),
    Text(String),
}

impl TabIdYaml {
    fn into_id(self) -> String {
        match self {
            TabIdYaml::Number(n) => n.to_string(),
            TabIdYaml::Text(text) => text,
        }
    }
}

/// Style override for one region. Colors are strings, parsed during conversion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleYaml {
    pub color: Option<String>,
    pub background: Option<String>,
    pub border_bottom: Option<String>,
    pub bold: Option<bool>,
    pub opacity: Option<f32>,
}

/// Style overrides per region
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOverridesYaml {
    pub tab: Option<StyleYaml>,
    pub active_tab: Option<StyleYaml>,
    pub text: Option<StyleYaml>,
    pub active_text: Option<StyleYaml>,
    pub content: Option<StyleYaml>,
    pub container: Option<StyleYaml>,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Optional explicit identity
    pub id: Option<TabIdYaml>,
    /// Tab display name
    pub title: String,
    /// Body shown while the tab is active
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
    /// Count (e.g. 3, 150) or text (e.g. "NEW")
    pub badge: Option<Badge>,
    pub icon: Option<String>,
}

/// Tab set configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabsConfigYaml {
    #[serde(default)]
    pub variant: TabVariant,
    #[serde(default)]
    pub size: TabSize,
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default)]
    pub centered: bool,
    /// Show the sliding indicator (defaults to true)
    #[serde(default = "default_show_indicator")]
    pub show_indicator: bool,
    /// Indicator color (defaults to "#007AFF")
    pub indicator_color: Option<String>,
    /// Tab active at mount (defaults to the first tab)
    pub initial_tab: Option<usize>,
    #[serde(default)]
    pub styles: StyleOverridesYaml,
    /// List of tabs
    #[serde(default)]
    pub tabs: Vec<TabConfigYaml>,
}

fn default_show_indicator() -> bool {
    true
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn convert_color(field: &str, value: &str) -> Result<ratatui::style::Color> {
    parse_color(value).ok_or_else(|| ConfigError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn convert_optional_color(field: &str, value: Option<&String>) -> Result<Option<ratatui::style::Color>> {
    value.map(|v| convert_color(field, v)).transpose()
}

/// Convert one YAML style override into a style descriptor
pub fn convert_style(region: &str, style: Option<&StyleYaml>) -> Result<StyleDescriptor> {
    let Some(style) = style else {
        return Ok(StyleDescriptor::default());
    };

    Ok(StyleDescriptor {
        color: convert_optional_color(&format!("styles.{region}.color"), style.color.as_ref())?,
        background: convert_optional_color(&format!("styles.{region}.background"), style.background.as_ref())?,
        border_bottom: convert_optional_color(&format!("styles.{region}.border_bottom"), style.border_bottom.as_ref())?,
        bold: style.bold,
        opacity: style.opacity.map(|o| o.clamp(0.0, 1.0)),
        ..StyleDescriptor::default()
    })
}

/// Convert YAML style overrides for every region
pub fn convert_style_overrides(styles: &StyleOverridesYaml) -> Result<StyleOverrides> {
    Ok(StyleOverrides {
        tab: convert_style("tab", styles.tab.as_ref())?,
        active_tab: convert_style("active_tab", styles.active_tab.as_ref())?,
        text: convert_style("text", styles.text.as_ref())?,
        active_text: convert_style("active_text", styles.active_text.as_ref())?,
        content: convert_style("content", styles.content.as_ref())?,
        container: convert_style("container", styles.container.as_ref())?,
    })
}

/// Convert YAML tab configurations to tab descriptors, rejecting duplicate ids
pub fn create_tab_descriptors(config: &TabsConfigYaml) -> Result<Vec<TabDescriptor>> {
    let mut seen = HashSet::new();
    config
        .tabs
        .iter()
        .map(|tab| {
            let id = tab.id.clone().map(TabIdYaml::into_id);
            if let Some(id) = &id {
                if !seen.insert(id.clone()) {
                    return Err(ConfigError::DuplicateTabId(id.clone()));
                }
            }
            Ok(TabDescriptor {
                id,
                title: tab.title.clone(),
                content: tab.content.clone(),
                disabled: tab.disabled,
                badge: tab.badge.clone(),
                icon: tab.icon.clone(),
            })
        })
        .collect()
}

/// Convert YAML tab set configuration to internal configuration data
pub fn convert_tabs_config(config: &TabsConfigYaml) -> Result<TabSetConfig> {
    let indicator_color = match &config.indicator_color {
        Some(color) => convert_color("indicator_color", color)?,
        None => DEFAULT_INDICATOR_COLOR,
    };

    if !config.show_indicator && config.indicator_color.is_some() {
        tracing::warn!("'indicator_color' has no effect while 'show_indicator' is false");
    } else if !config.variant.supports_indicator() && config.indicator_color.is_some() {
        tracing::warn!(variant = ?config.variant, "'indicator_color' is ignored for this variant");
    }

    Ok(TabSetConfig {
        tabs: create_tab_descriptors(config)?,
        variant: config.variant,
        size: config.size,
        layout: config.layout,
        centered: config.centered,
        show_indicator: config.show_indicator,
        indicator_color,
        styles: convert_style_overrides(&config.styles)?,
    })
}

/// Create a mounted controller from YAML configuration.
/// Combines config conversion and mounting at the configured initial tab.
pub fn create_tabs_from_config(config: &TabsConfigYaml) -> Result<TabsController> {
    let tab_set = convert_tabs_config(config)?;
    Ok(TabsController::new(tab_set, config.initial_tab))
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                              Tabs Manager - OOP Style Tab Operations                           │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Wraps a mounted tab set together with the area it was last laid out in,
/// so clicks can be mapped back to tabs.
#[derive(Debug)]
pub struct TabsManager {
    controller: TabsController,
    strip_area: Option<Rect>,
}

impl TabsManager {
    /// Create and mount a tab set from config
    pub fn create(config: &TabsConfigYaml) -> Result<Self> {
        Ok(Self::from_controller(create_tabs_from_config(config)?))
    }

    pub fn from_controller(controller: TabsController) -> Self {
        Self {
            controller,
            strip_area: None,
        }
    }

    pub fn controller(&self) -> &TabsController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TabsController {
        &mut self.controller
    }

    /// Register the host's tab change notification
    pub fn on_tab_change(&mut self, callback: impl FnMut(usize, &TabDescriptor) + 'static) {
        self.controller.set_on_tab_change(callback);
    }

    /// Layout pass for the area the tab set will occupy: measures every tab and
    /// reports the geometry to the controller
    pub fn prepare(&mut self, area: Rect) {
        let strip = split_area(area).strip;
        self.strip_area = Some(strip);
        report_layouts(&mut self.controller, strip);
    }

    /// Draw the tab set. Call after [`TabsManager::prepare`] with the same area.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(TabsView::new(&self.controller), area);
    }

    /// Advance animations; returns true while anything is still moving
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.controller.tick(dt)
    }

    /// Tab drawn at a screen position in the last prepared strip
    pub fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        let strip = self.strip_area?;
        if !strip.contains(Position::new(column, row)) {
            return None;
        }
        let x = column - strip.x + visible_scroll(&self.controller, strip.width);
        self.controller
            .layouts()
            .index_at(f32::from(x), self.controller.tab_count())
    }

    /// Press whatever tab is drawn at a screen position
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        match self.tab_at(column, row) {
            Some(index) => self.controller.press(index),
            None => false,
        }
    }

    /// Navigate to the previous enabled tab
    pub fn navigate_previous(&mut self) -> bool {
        self.controller.select_previous()
    }

    /// Navigate to the next enabled tab
    pub fn navigate_next(&mut self) -> bool {
        self.controller.select_next()
    }

    /// Set the active tab by index
    pub fn set_active(&mut self, index: usize) -> bool {
        self.controller.select(index)
    }
}
