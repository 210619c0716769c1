// Tab Styles
// Pure lookup tables mapping (variant, size, state) to style descriptors

use ratatui::style::{Color, Modifier, Style};

use crate::core::tabs::{TabSize, TabVariant};
use crate::utilities::hex_color;

/// Layout units per terminal column
pub const UNITS_PER_CELL: f32 = 9.0;
/// Layout units per terminal row
pub const UNITS_PER_ROW: f32 = 16.0;

const PRIMARY: Color = hex_color(0x007AFF);
const TEXT_MUTED: Color = hex_color(0x666666);
const TEXT_DISABLED: Color = hex_color(0xCCCCCC);
const BADGE_BACKGROUND: Color = hex_color(0xFF3B30);
const DISABLED_OPACITY: f32 = 0.4;

/// Visual state of one tab button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabVisualState {
    Inactive,
    Active,
    Disabled,
}

/// Dimensions for a size class, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub padding: f32,
    pub font_size: f32,
    pub min_height: f32,
}

impl SizeMetrics {
    /// Horizontal padding is one and a half times the vertical padding
    pub fn horizontal_padding(&self) -> f32 {
        self.padding * 1.5
    }

    /// Horizontal padding on each side of a label, in terminal cells
    pub fn padding_cells(&self) -> u16 {
        to_cells(self.horizontal_padding())
    }
}

/// Convert a horizontal distance in layout units to terminal columns
pub fn to_cells(units: f32) -> u16 {
    (units.max(0.0) / UNITS_PER_CELL).round() as u16
}

/// Convert a vertical distance in layout units to terminal rows
pub fn to_rows(units: f32) -> u16 {
    (units.max(0.0) / UNITS_PER_ROW).round() as u16
}

pub const fn size_metrics(size: TabSize) -> SizeMetrics {
    match size {
        TabSize::Small => SizeMetrics { padding: 8.0, font_size: 12.0, min_height: 32.0 },
        TabSize::Medium => SizeMetrics { padding: 12.0, font_size: 14.0, min_height: 44.0 },
        TabSize::Large => SizeMetrics { padding: 20.0, font_size: 18.0, min_height: 56.0 },
    }
}

/// Resolved styling for one region. Unset fields inherit from whatever is underneath.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleDescriptor {
    pub color: Option<Color>,
    pub background: Option<Color>,
    /// Rule drawn under the region
    pub border_bottom: Option<Color>,
    pub bold: Option<bool>,
    pub opacity: Option<f32>,
    pub padding_vertical: Option<f32>,
    pub padding_horizontal: Option<f32>,
    pub min_height: Option<f32>,
    pub font_size: Option<f32>,
}

impl StyleDescriptor {
    /// Layer `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: &StyleDescriptor) -> StyleDescriptor {
        StyleDescriptor {
            color: other.color.or(self.color),
            background: other.background.or(self.background),
            border_bottom: other.border_bottom.or(self.border_bottom),
            bold: other.bold.or(self.bold),
            opacity: other.opacity.or(self.opacity),
            padding_vertical: other.padding_vertical.or(self.padding_vertical),
            padding_horizontal: other.padding_horizontal.or(self.padding_horizontal),
            min_height: other.min_height.or(self.min_height),
            font_size: other.font_size.or(self.font_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == StyleDescriptor::default()
    }

    /// Terminal style for this descriptor. Partial opacity renders dimmed.
    pub fn to_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(color) = self.color {
            style = style.fg(color);
        }
        if let Some(background) = self.background {
            style = style.bg(background);
        }
        match self.bold {
            Some(true) => style = style.add_modifier(Modifier::BOLD),
            Some(false) => style = style.remove_modifier(Modifier::BOLD),
            None => {}
        }
        if self.opacity.map(|o| o < 1.0).unwrap_or(false) {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}

/// Host-supplied overrides, layered over the lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverrides {
    pub tab: StyleDescriptor,
    pub active_tab: StyleDescriptor,
    pub text: StyleDescriptor,
    pub active_text: StyleDescriptor,
    pub content: StyleDescriptor,
    pub container: StyleDescriptor,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                        Lookup Tables                                           │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

pub fn container_style(variant: TabVariant) -> StyleDescriptor {
    match variant {
        TabVariant::Default => StyleDescriptor {
            background: Some(Color::Reset),
            ..StyleDescriptor::default()
        },
        TabVariant::Pills => StyleDescriptor {
            background: Some(hex_color(0xF8F9FA)),
            padding_vertical: Some(4.0),
            ..StyleDescriptor::default()
        },
        TabVariant::Filled => StyleDescriptor {
            background: Some(hex_color(0xF0F0F0)),
            ..StyleDescriptor::default()
        },
        TabVariant::Underline => StyleDescriptor {
            border_bottom: Some(hex_color(0xE0E0E0)),
            ..StyleDescriptor::default()
        },
    }
}

pub fn tab_style(variant: TabVariant, size: TabSize, state: TabVisualState) -> StyleDescriptor {
    let metrics = size_metrics(size);
    let active = state == TabVisualState::Active;

    let base = StyleDescriptor {
        padding_vertical: Some(metrics.padding),
        padding_horizontal: Some(metrics.horizontal_padding()),
        min_height: Some(metrics.min_height),
        ..StyleDescriptor::default()
    };

    let variant_style = match variant {
        TabVariant::Default | TabVariant::Underline => StyleDescriptor {
            border_bottom: active.then_some(PRIMARY),
            ..StyleDescriptor::default()
        },
        TabVariant::Pills | TabVariant::Filled => StyleDescriptor {
            background: active.then_some(PRIMARY),
            ..StyleDescriptor::default()
        },
    };

    let state_style = match state {
        TabVisualState::Disabled => StyleDescriptor {
            opacity: Some(DISABLED_OPACITY),
            ..StyleDescriptor::default()
        },
        TabVisualState::Inactive | TabVisualState::Active => StyleDescriptor::default(),
    };

    base.merge(&variant_style).merge(&state_style)
}

pub fn text_style(variant: TabVariant, size: TabSize, state: TabVisualState) -> StyleDescriptor {
    let (color, bold) = match state {
        TabVisualState::Inactive => (TEXT_MUTED, false),
        TabVisualState::Disabled => (TEXT_DISABLED, false),
        // Filled backgrounds already use the primary color, so the label flips to white
        TabVisualState::Active => match variant {
            TabVariant::Default | TabVariant::Underline => (PRIMARY, true),
            TabVariant::Pills | TabVariant::Filled => (Color::White, true),
        },
    };

    StyleDescriptor {
        color: Some(color),
        bold: Some(bold),
        font_size: Some(size_metrics(size).font_size),
        ..StyleDescriptor::default()
    }
}

pub fn badge_style() -> StyleDescriptor {
    StyleDescriptor {
        color: Some(Color::White),
        background: Some(BADGE_BACKGROUND),
        bold: Some(true),
        font_size: Some(10.0),
        ..StyleDescriptor::default()
    }
}

pub fn content_style() -> StyleDescriptor {
    StyleDescriptor {
        padding_vertical: Some(16.0),
        padding_horizontal: Some(16.0),
        ..StyleDescriptor::default()
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Override Resolution                                         │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab button style with host overrides applied (active override last)
pub fn resolve_tab_style(
    overrides: &StyleOverrides,
    variant: TabVariant,
    size: TabSize,
    state: TabVisualState,
) -> StyleDescriptor {
    let resolved = tab_style(variant, size, state).merge(&overrides.tab);
    if state == TabVisualState::Active {
        resolved.merge(&overrides.active_tab)
    } else {
        resolved
    }
}

/// Tab label style with host overrides applied (active override last)
pub fn resolve_text_style(
    overrides: &StyleOverrides,
    variant: TabVariant,
    size: TabSize,
    state: TabVisualState,
) -> StyleDescriptor {
    let resolved = text_style(variant, size, state).merge(&overrides.text);
    if state == TabVisualState::Active {
        resolved.merge(&overrides.active_text)
    } else {
        resolved
    }
}

pub fn resolve_container_style(overrides: &StyleOverrides, variant: TabVariant) -> StyleDescriptor {
    container_style(variant).merge(&overrides.container)
}

pub fn resolve_content_style(overrides: &StyleOverrides) -> StyleDescriptor {
    content_style().merge(&overrides.content)
}
