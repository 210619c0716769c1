// Tab Strip Component
// Renders a tab set from its controller and measures tab buttons for the layout pass

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

use crate::core::controller::TabsController;
use crate::core::tabs::{LayoutMode, TabDescriptor, TabSetConfig};
use crate::utilities::styles::{
    badge_style, resolve_container_style, resolve_content_style, resolve_tab_style,
    resolve_text_style, size_metrics, to_cells, to_rows,
};

/// Rows taken by the strip: tab labels, then the indicator rule
pub const STRIP_HEIGHT: u16 = 2;

const INDICATOR_SYMBOL: &str = "━";
const RULE_SYMBOL: &str = "─";

/// Horizontal extent of one tab in strip content coordinates (before scrolling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub width: u16,
}

impl TabBounds {
    pub fn end(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Check if a content coordinate is within this tab's bounds
    pub fn contains(&self, x: u16) -> bool {
        x >= self.x && x < self.end()
    }
}

/// Regions of a rendered tab set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabsAreas {
    pub strip: Rect,
    pub content: Rect,
}

/// Split an area into the tab strip and the content region below it
pub fn split_area(area: Rect) -> TabsAreas {
    let strip_height = STRIP_HEIGHT.min(area.height);
    TabsAreas {
        strip: Rect { height: strip_height, ..area },
        content: Rect {
            y: area.y + strip_height,
            height: area.height - strip_height,
            ..area
        },
    }
}

/// Label for one tab: optional icon, title, optional badge
pub fn tab_label(tab: &TabDescriptor, text_style: Style, badge: Style) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(icon) = &tab.icon {
        spans.push(Span::styled(icon.clone(), text_style));
        if !tab.title.is_empty() {
            spans.push(Span::styled(" ", text_style));
        }
    }
    spans.push(Span::styled(tab.title.clone(), text_style));
    if let Some(label) = tab.badge_label() {
        spans.push(Span::styled(" ", text_style));
        spans.push(Span::styled(format!(" {} ", label), badge));
    }
    Line::from(spans)
}

/// Display width of a tab label in terminal cells
pub fn label_width(tab: &TabDescriptor) -> u16 {
    let width = tab_label(tab, Style::default(), Style::default()).width();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Measure every tab for a strip `strip_width` cells wide.
///
/// Fixed layout shares the width evenly (leftover cells go to the first tabs).
/// Scrollable layout sizes tabs to their labels plus padding and, when centered,
/// offsets a row narrower than the strip to its middle.
pub fn measure_tabs(config: &TabSetConfig, strip_width: u16) -> Vec<TabBounds> {
    let count = config.tab_count();
    if count == 0 {
        return Vec::new();
    }

    let widths: Vec<u16> = match config.layout {
        LayoutMode::Fixed => {
            let base = strip_width as usize / count;
            let remainder = strip_width as usize % count;
            (0..count)
                .map(|idx| (base + usize::from(idx < remainder)) as u16)
                .collect()
        }
        LayoutMode::Scrollable => {
            let padding = size_metrics(config.size).padding_cells();
            config
                .tabs
                .iter()
                .map(|tab| label_width(tab).saturating_add(padding.saturating_mul(2)))
                .collect()
        }
    };

    let total = widths.iter().fold(0u16, |acc, w| acc.saturating_add(*w));
    let mut x = if config.centered && total < strip_width {
        (strip_width - total) / 2
    } else {
        0
    };

    widths
        .into_iter()
        .map(|width| {
            let bounds = TabBounds { x, width };
            x = x.saturating_add(width);
            bounds
        })
        .collect()
}

/// Scroll offset actually applied when drawing. Same offset the controller hit tests
/// with, also kept inside the strip as measured for this frame.
pub fn visible_scroll(controller: &TabsController, strip_width: u16) -> u16 {
    let content_width = measure_tabs(controller.config(), strip_width)
        .last()
        .map(TabBounds::end)
        .unwrap_or(0);
    let max_scroll = content_width.saturating_sub(strip_width);
    (controller.visible_scroll_offset().min(f32::from(max_scroll))) as u16
}

/// Column where a label of `label_width` starts when centered in `bounds`
fn centered_x(bounds: TabBounds, label_width: u16) -> u16 {
    bounds
        .x
        .saturating_add(bounds.width.saturating_sub(label_width) / 2)
}

/// Run the layout pass: measure every tab and report the geometry to the controller
pub fn report_layouts(controller: &mut TabsController, strip: Rect) {
    controller.set_viewport_width(f32::from(strip.width));
    let bounds = measure_tabs(controller.config(), strip.width);
    for (idx, bounds) in bounds.into_iter().enumerate() {
        controller.report_layout(idx, f32::from(bounds.x), f32::from(bounds.width));
    }
}

/// Widget rendering a whole tab set: strip, indicator and active content
pub struct TabsView<'a> {
    controller: &'a TabsController,
}

impl<'a> TabsView<'a> {
    pub fn new(controller: &'a TabsController) -> Self {
        Self { controller }
    }

    fn render_to_buffer(&self, area: Rect, buf: &mut Buffer) {
        let areas = split_area(area);
        self.render_strip(areas.strip, buf);
        self.render_content(areas.content, buf);
    }

    fn render_strip(&self, strip: Rect, buf: &mut Buffer) {
        if strip.width == 0 || strip.height == 0 {
            return;
        }

        let controller = self.controller;
        let config = controller.config();
        let container = resolve_container_style(&config.styles, config.variant);
        let bounds = measure_tabs(config, strip.width);
        let content_width = bounds.last().map(TabBounds::end).unwrap_or(0).max(strip.width);
        let has_rule_row = strip.height > 1;

        // Draw the full-width strip off screen, then copy the scrolled window
        let mut row = Buffer::empty(Rect::new(0, 0, content_width, strip.height));
        row.set_style(row.area, container.to_style());

        if let (true, Some(color)) = (has_rule_row, container.border_bottom) {
            let rule = RULE_SYMBOL.repeat(content_width as usize);
            row.set_string(0, 1, rule, Style::default().fg(color));
        }

        let badge = badge_style().to_style();
        for (idx, (tab, tab_bounds)) in config.tabs.iter().zip(&bounds).enumerate() {
            if tab_bounds.width == 0 {
                continue;
            }
            let state = controller.visual_state(idx);
            let tab_style = resolve_tab_style(&config.styles, config.variant, config.size, state);
            let text_style = resolve_text_style(&config.styles, config.variant, config.size, state);

            let tab_area = Rect::new(tab_bounds.x, 0, tab_bounds.width, 1);
            row.set_style(tab_area, tab_style.to_style());

            let label = tab_label(tab, text_style.to_style(), badge);
            let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
            let label_x = centered_x(*tab_bounds, label_width);
            let available = tab_bounds.end().saturating_sub(label_x);
            row.set_line(label_x, 0, &label, available);

            if let (true, Some(color)) = (has_rule_row, tab_style.border_bottom) {
                let rule = RULE_SYMBOL.repeat(tab_bounds.width as usize);
                row.set_string(tab_bounds.x, 1, rule, Style::default().fg(color));
            }
        }

        if let (true, Some(geometry)) = (has_rule_row, controller.indicator_geometry()) {
            let start = geometry.offset.round().max(0.0) as u16;
            let width = geometry.width.round().max(0.0) as u16;
            let end = start.saturating_add(width).min(content_width);
            if end > start {
                let bar = INDICATOR_SYMBOL.repeat((end - start) as usize);
                row.set_string(start, 1, bar, Style::default().fg(config.indicator_color));
            }
        }

        let scroll = visible_scroll(controller, strip.width);
        for dy in 0..strip.height {
            for dx in 0..strip.width {
                let source = row.cell((scroll + dx, dy));
                let target = buf.cell_mut((strip.x + dx, strip.y + dy));
                if let (Some(source), Some(target)) = (source, target) {
                    *target = source.clone();
                }
            }
        }
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let Some(content) = self.controller.active_content() else {
            return;
        };

        let descriptor = resolve_content_style(&self.controller.config().styles);
        let horizontal = to_cells(descriptor.padding_horizontal.unwrap_or(0.0));
        let vertical = to_rows(descriptor.padding_vertical.unwrap_or(0.0));

        let mut style = descriptor.to_style();
        if self.controller.content_opacity() < 1.0 {
            style = style.add_modifier(Modifier::DIM);
        }

        let block = Block::default().padding(Padding::new(horizontal, horizontal, vertical, vertical));
        Paragraph::new(content.to_string())
            .style(style)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

impl Widget for TabsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_to_buffer(area, buf);
    }
}
