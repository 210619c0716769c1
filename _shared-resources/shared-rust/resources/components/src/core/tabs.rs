// Tab Set Model
// Tab descriptors, badges and the tab set configuration supplied by the host

use ratatui::style::Color;
use serde::Deserialize;

use crate::utilities::hex_color;
use crate::utilities::styles::StyleOverrides;

/// Default indicator color (system blue)
pub const DEFAULT_INDICATOR_COLOR: Color = hex_color(0x007AFF);

/// Largest badge count shown verbatim; anything above renders as "99+"
pub const BADGE_COUNT_LIMIT: i64 = 99;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Enumerations                                           │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Presentation mode of the tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabVariant {
    /// Plain tabs with an underline indicator
    #[default]
    Default,
    /// Rounded pills, active tab filled
    Pills,
    /// Underline indicator over a bottom rule
    Underline,
    /// Flat filled buttons, active tab filled
    Filled,
}

impl TabVariant {
    pub const ALL: [TabVariant; 4] = [Self::Default, Self::Pills, Self::Underline, Self::Filled];

    /// Whether this variant draws the sliding indicator.
    /// Pills and filled mark the active tab with a background fill instead.
    pub const fn supports_indicator(self) -> bool {
        match self {
            Self::Default | Self::Underline => true,
            Self::Pills | Self::Filled => false,
        }
    }
}

/// Size class of the tab buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TabSize {
    pub const ALL: [TabSize; 3] = [Self::Small, Self::Medium, Self::Large];
}

/// How tabs are laid out along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Tabs share the container width evenly
    #[default]
    Fixed,
    /// Tabs take their content width inside a horizontally scrolling strip
    Scrollable,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                       Tab Descriptors                                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Identity of a tab: its explicit id, or its position when no id was given
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabKey {
    Id(String),
    Index(usize),
}

/// Badge attached to a tab title
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    Count(i64),
    Text(String),
}

impl Badge {
    /// Text shown inside the badge. Counts above 99 collapse to "99+".
    pub fn label(&self) -> String {
        match self {
            Badge::Count(count) if *count > BADGE_COUNT_LIMIT => "99+".to_string(),
            Badge::Count(count) => count.to_string(),
            Badge::Text(text) => text.clone(),
        }
    }

    /// A zero count or empty text renders no badge at all
    pub fn is_visible(&self) -> bool {
        match self {
            Badge::Count(count) => *count != 0,
            Badge::Text(text) => !text.is_empty(),
        }
    }

    /// Label to display, if the badge is visible
    pub fn display(&self) -> Option<String> {
        self.is_visible().then(|| self.label())
    }
}

impl From<i64> for Badge {
    fn from(count: i64) -> Self {
        Badge::Count(count)
    }
}

impl From<&str> for Badge {
    fn from(text: &str) -> Self {
        Badge::Text(text.to_string())
    }
}

/// One tab as supplied by the host. Read-only to the controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabDescriptor {
    /// Explicit identity (falls back to the position when absent)
    pub id: Option<String>,
    /// Label shown in the strip
    pub title: String,
    /// Payload shown while the tab is active; never interpreted by the controller
    pub content: String,
    /// Disabled tabs cannot be selected
    pub disabled: bool,
    pub badge: Option<Badge>,
    /// Short glyph drawn before the title
    pub icon: Option<String>,
}

impl TabDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_badge(mut self, badge: impl Into<Badge>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Identity of this tab at the given position
    pub fn key(&self, index: usize) -> TabKey {
        match &self.id {
            Some(id) => TabKey::Id(id.clone()),
            None => TabKey::Index(index),
        }
    }

    /// Badge label to render next to the title, if any
    pub fn badge_label(&self) -> Option<String> {
        self.badge.as_ref().and_then(Badge::display)
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                     Tab Set Configuration                                      │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Everything the host supplies about a tab set
#[derive(Debug, Clone, PartialEq)]
pub struct TabSetConfig {
    /// Ordered tabs; the order defines the index space
    pub tabs: Vec<TabDescriptor>,
    pub variant: TabVariant,
    pub size: TabSize,
    pub layout: LayoutMode,
    /// Center the row when it is narrower than the container
    pub centered: bool,
    pub show_indicator: bool,
    pub indicator_color: Color,
    pub styles: StyleOverrides,
}

impl Default for TabSetConfig {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            variant: TabVariant::default(),
            size: TabSize::default(),
            layout: LayoutMode::default(),
            centered: false,
            show_indicator: true,
            indicator_color: DEFAULT_INDICATOR_COLOR,
            styles: StyleOverrides::default(),
        }
    }
}

impl TabSetConfig {
    pub fn new(tabs: Vec<TabDescriptor>) -> Self {
        Self {
            tabs,
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: TabVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: TabSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn with_indicator(mut self, show: bool, color: Color) -> Self {
        self.show_indicator = show;
        self.indicator_color = color;
        self
    }

    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tab(&self, index: usize) -> Option<&TabDescriptor> {
        self.tabs.get(index)
    }

    /// True when the index exists and the tab is not disabled
    pub fn is_selectable(&self, index: usize) -> bool {
        self.tabs.get(index).map(|tab| !tab.disabled).unwrap_or(false)
    }

    /// Whether the indicator should be drawn at all (layout data aside)
    pub fn indicator_enabled(&self) -> bool {
        self.show_indicator && self.variant.supports_indicator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_labels() {
        assert_eq!(Badge::Count(150).label(), "99+");
        assert_eq!(Badge::Count(100).label(), "99+");
        assert_eq!(Badge::Count(99).label(), "99");
        assert_eq!(Badge::Count(42).label(), "42");
        assert_eq!(Badge::from("NEW").label(), "NEW");
    }

    #[test]
    fn test_badge_visibility() {
        assert_eq!(Badge::Count(0).display(), None);
        assert_eq!(Badge::Text(String::new()).display(), None);
        assert_eq!(Badge::Count(-3).display(), Some("-3".to_string()));

        let tab = TabDescriptor::new("Inbox").with_badge(150);
        assert_eq!(tab.badge_label(), Some("99+".to_string()));
        assert_eq!(TabDescriptor::new("Plain").badge_label(), None);
    }

    #[test]
    fn test_tab_key_falls_back_to_index() {
        let with_id = TabDescriptor::new("A").with_id("alpha");
        let without_id = TabDescriptor::new("B");
        assert_eq!(with_id.key(0), TabKey::Id("alpha".to_string()));
        assert_eq!(without_id.key(1), TabKey::Index(1));
    }

    #[test]
    fn test_indicator_support_by_variant() {
        assert!(TabVariant::Default.supports_indicator());
        assert!(TabVariant::Underline.supports_indicator());
        assert!(!TabVariant::Pills.supports_indicator());
        assert!(!TabVariant::Filled.supports_indicator());

        let config = TabSetConfig::default().with_variant(TabVariant::Pills);
        assert!(!config.indicator_enabled());
        let hidden = TabSetConfig::default().with_indicator(false, DEFAULT_INDICATOR_COLOR);
        assert!(!hidden.indicator_enabled());
    }

    #[test]
    fn test_is_selectable() {
        let config = TabSetConfig::new(vec![
            TabDescriptor::new("A"),
            TabDescriptor::new("B").with_disabled(true),
        ]);
        assert!(config.is_selectable(0));
        assert!(!config.is_selectable(1));
        assert!(!config.is_selectable(2));
    }
}
