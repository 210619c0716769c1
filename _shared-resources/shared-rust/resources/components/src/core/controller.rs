// Tabs Controller
// Active-tab state machine, layout tracking and the animations derived from them
//
// Usage:
//   let mut tabs = TabsController::new(config, None)
//       .with_on_tab_change(|index, tab| println!("switched to {index}: {}", tab.title));
//   tabs.report_layout(0, 0.0, 12.0);      // after each layout pass
//   tabs.select(1);                        // on tap / key press
//   tabs.tick(Duration::from_millis(16));  // once per frame

use std::fmt;
use std::time::Duration;

use super::layout::{LayoutRegistry, TabLayoutRecord};
use super::tabs::{LayoutMode, TabDescriptor, TabSetConfig};
use crate::utilities::animation::{AnimatedValue, Easing, Motion, Sequence};
use crate::utilities::styles::TabVisualState;

/// Spring used for the indicator offset and width
const INDICATOR_TENSION: f32 = 100.0;
const INDICATOR_FRICTION: f32 = 8.0;

/// Content dips to 0.7 opacity, then returns to fully opaque
const CONTENT_FADE_STEPS: [(f32, Duration); 2] = [
    (0.7, Duration::from_millis(100)),
    (1.0, Duration::from_millis(150)),
];

const SCROLL_DURATION: Duration = Duration::from_millis(250);

/// Host notification for accepted selections
pub type TabChangeCallback = Box<dyn FnMut(usize, &TabDescriptor)>;

/// Current indicator geometry, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    pub offset: f32,
    pub width: f32,
}

/// Runtime state owned by one mounted tab set
#[derive(Debug, Clone)]
pub struct InteractionState {
    active_tab: usize,
    indicator_offset: AnimatedValue,
    indicator_width: AnimatedValue,
    content_fade: Sequence,
    scroll_offset: AnimatedValue,
}

impl InteractionState {
    fn new(active_tab: usize) -> Self {
        let spring = Motion::spring(INDICATOR_TENSION, INDICATOR_FRICTION);
        Self {
            active_tab,
            indicator_offset: AnimatedValue::new(0.0, spring),
            indicator_width: AnimatedValue::new(0.0, spring),
            content_fade: Sequence::new(1.0, Easing::EaseInOut),
            scroll_offset: AnimatedValue::new(0.0, Motion::timing(SCROLL_DURATION, Easing::EaseInOut)),
        }
    }

    fn advance(&mut self, dt: Duration) {
        self.indicator_offset.advance(dt);
        self.indicator_width.advance(dt);
        self.content_fade.advance(dt);
        self.scroll_offset.advance(dt);
    }

    fn is_animating(&self) -> bool {
        !(self.indicator_offset.is_settled()
            && self.indicator_width.is_settled()
            && self.content_fade.is_settled()
            && self.scroll_offset.is_settled())
    }
}

/// Scroll offset that centers a tab in the viewport, never scrolling before the start
pub fn scroll_target_for(record: TabLayoutRecord, viewport_width: f32) -> f32 {
    (record.offset - viewport_width / 2.0 + record.width / 2.0).max(0.0)
}

/// Owns the interaction state of one tab set and drives it from host events.
///
/// `initial_tab` outside the tab range is clamped to the last tab. An empty tab set
/// is inert: nothing is active and every selection is rejected.
pub struct TabsController {
    config: TabSetConfig,
    state: InteractionState,
    layouts: LayoutRegistry,
    viewport_width: f32,
    on_tab_change: Option<TabChangeCallback>,
}

impl TabsController {
    /// Mount a tab set with the given initial tab (defaults to the first one)
    pub fn new(config: TabSetConfig, initial_tab: Option<usize>) -> Self {
        let active_tab = Self::resolve_initial(&config, initial_tab.unwrap_or(0));
        Self {
            config,
            state: InteractionState::new(active_tab),
            layouts: LayoutRegistry::new(),
            viewport_width: 0.0,
            on_tab_change: None,
        }
    }

    pub fn with_on_tab_change(mut self, callback: impl FnMut(usize, &TabDescriptor) + 'static) -> Self {
        self.set_on_tab_change(callback);
        self
    }

    pub fn set_on_tab_change(&mut self, callback: impl FnMut(usize, &TabDescriptor) + 'static) {
        self.on_tab_change = Some(Box::new(callback));
    }

    fn resolve_initial(config: &TabSetConfig, requested: usize) -> usize {
        let count = config.tab_count();
        if count == 0 {
            return 0;
        }
        if requested >= count {
            tracing::warn!(requested, count, "initial tab out of range, clamping to last tab");
            return count - 1;
        }
        requested
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                         Queries                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn config(&self) -> &TabSetConfig {
        &self.config
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.config.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.config.tab_count()
    }

    /// Index of the active tab, or None for an empty tab set
    pub fn active_tab(&self) -> Option<usize> {
        (self.state.active_tab < self.tab_count()).then_some(self.state.active_tab)
    }

    pub fn active_descriptor(&self) -> Option<&TabDescriptor> {
        self.active_tab().and_then(|idx| self.config.tab(idx))
    }

    /// Content of the active tab. Rendered even if that tab is disabled.
    pub fn active_content(&self) -> Option<&str> {
        self.active_descriptor().map(|tab| tab.content.as_str())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_tab() == Some(index)
    }

    /// Visual state used for styling. Disabled wins over active.
    pub fn visual_state(&self, index: usize) -> TabVisualState {
        match self.config.tab(index) {
            Some(tab) if tab.disabled => TabVisualState::Disabled,
            Some(_) if self.is_active(index) => TabVisualState::Active,
            _ => TabVisualState::Inactive,
        }
    }

    pub fn layout(&self, index: usize) -> Option<TabLayoutRecord> {
        self.layouts.get(index)
    }

    pub fn layouts(&self) -> &LayoutRegistry {
        &self.layouts
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// The indicator shows only for variants that support it, once a tab of the
    /// current set was measured
    pub fn indicator_visible(&self) -> bool {
        self.config.indicator_enabled() && self.layouts.any_within(self.tab_count())
    }

    /// Current (animated) indicator geometry, if the indicator is visible
    pub fn indicator_geometry(&self) -> Option<IndicatorGeometry> {
        self.indicator_visible().then(|| IndicatorGeometry {
            offset: self.state.indicator_offset.value(),
            width: self.state.indicator_width.value(),
        })
    }

    /// Geometry the indicator is converging toward
    pub fn indicator_target(&self) -> IndicatorGeometry {
        IndicatorGeometry {
            offset: self.state.indicator_offset.target(),
            width: self.state.indicator_width.target(),
        }
    }

    pub fn content_opacity(&self) -> f32 {
        self.state.content_fade.value()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.state.scroll_offset.value()
    }

    pub fn scroll_target(&self) -> f32 {
        self.state.scroll_offset.target()
    }

    /// Furthest the strip can scroll: measured content width beyond the viewport
    pub fn max_scroll_offset(&self) -> f32 {
        (self.layouts.content_width(self.tab_count()) - self.viewport_width).max(0.0)
    }

    /// Scroll offset as drawn: rounded to a whole unit and kept inside the scrollable range
    pub fn visible_scroll_offset(&self) -> f32 {
        self.scroll_offset()
            .round()
            .min(self.max_scroll_offset())
            .max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Tab under a viewport-relative x coordinate (visible scroll offset applied)
    pub fn tab_at(&self, x: f32) -> Option<usize> {
        self.layouts.index_at(x + self.visible_scroll_offset(), self.tab_count())
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                       Transitions                                          │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Make `index` the active tab.
    ///
    /// Disabled or nonexistent tabs are rejected without any effect. An accepted
    /// selection (including re-selecting the active tab) notifies the host once,
    /// starts the content fade and retargets the indicator and scroll position.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(tab) = self.config.tabs.get(index) else {
            tracing::debug!(index, "ignoring selection of missing tab");
            return false;
        };
        if tab.disabled {
            tracing::debug!(index, title = %tab.title, "ignoring selection of disabled tab");
            return false;
        }

        tracing::debug!(index, title = %tab.title, "tab selected");
        self.state.content_fade.start(&CONTENT_FADE_STEPS);
        self.state.active_tab = index;
        self.follow_active();

        if let Some(callback) = self.on_tab_change.as_mut() {
            callback(index, &self.config.tabs[index]);
        }
        true
    }

    /// A tap on a tab button
    pub fn press(&mut self, index: usize) -> bool {
        self.select(index)
    }

    /// Select the next enabled tab, wrapping past the end
    pub fn select_next(&mut self) -> bool {
        let count = self.tab_count();
        let active = self.state.active_tab;
        let target = (1..count)
            .map(|step| (active + step) % count)
            .find(|&idx| self.config.is_selectable(idx));
        target.map(|idx| self.select(idx)).unwrap_or(false)
    }

    /// Select the previous enabled tab, wrapping past the start
    pub fn select_previous(&mut self) -> bool {
        let count = self.tab_count();
        let active = self.state.active_tab;
        let target = (1..count)
            .map(|step| (active + count - step) % count)
            .find(|&idx| self.config.is_selectable(idx));
        target.map(|idx| self.select(idx)).unwrap_or(false)
    }

    /// Record measured geometry for a tab.
    ///
    /// Returns true if the record changed. Measuring the active tab retargets the
    /// indicator. In scrollable mode any change retargets the scroll position, since
    /// the scrollable range depends on every tab. Never notifies the host.
    pub fn report_layout(&mut self, index: usize, offset: f32, width: f32) -> bool {
        if index >= self.tab_count() {
            tracing::debug!(index, "ignoring layout for tab outside the tab set");
            return false;
        }

        let changed = self.layouts.report(index, TabLayoutRecord::new(offset, width));
        if changed {
            tracing::trace!(index, offset, width, "tab layout updated");
            if index == self.state.active_tab || self.config.layout == LayoutMode::Scrollable {
                self.follow_active();
            }
        }
        changed
    }

    /// Visible width of the strip, used to center the active tab when scrolling
    pub fn set_viewport_width(&mut self, width: f32) {
        if width.is_finite() && (width - self.viewport_width).abs() > f32::EPSILON {
            self.viewport_width = width.max(0.0);
            self.follow_active();
        }
    }

    /// Replace the configuration (re-render with new props).
    ///
    /// The active index is clamped into the new range; a tab that became disabled
    /// stays active. Layout records are kept.
    pub fn set_config(&mut self, config: TabSetConfig) {
        let count = config.tab_count();
        self.config = config;

        if count == 0 {
            self.state.active_tab = 0;
        } else if self.state.active_tab >= count {
            tracing::debug!(previous = self.state.active_tab, count, "active tab clamped after configuration change");
            self.state.active_tab = count - 1;
        }
        self.follow_active();
    }

    /// Throw away all runtime state, as if the tab set were unmounted and mounted again
    pub fn remount(&mut self, initial_tab: Option<usize>) {
        let active_tab = Self::resolve_initial(&self.config, initial_tab.unwrap_or(0));
        self.state = InteractionState::new(active_tab);
        self.layouts.clear();
    }

    /// Advance every animation by `dt`. Returns true while anything is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.state.advance(dt);
        self.state.is_animating()
    }

    fn follow_active(&mut self) {
        let Some(record) = self.active_tab().and_then(|idx| self.layouts.get(idx)) else {
            return;
        };

        self.state.indicator_offset.set_target(record.offset);
        self.state.indicator_width.set_target(record.width);

        if self.config.layout == LayoutMode::Scrollable {
            let target = scroll_target_for(record, self.viewport_width).min(self.max_scroll_offset());
            self.state.scroll_offset.set_target(target);
        }
    }
}

impl fmt::Debug for TabsController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("layouts", &self.layouts)
            .field("viewport_width", &self.viewport_width)
            .field("on_tab_change", &self.on_tab_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tabs::{Badge, TabVariant};
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    type Calls = Rc<RefCell<Vec<(usize, String)>>>;

    fn abc(disabled: &[usize]) -> TabSetConfig {
        let tabs = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(idx, title)| {
                TabDescriptor::new(*title)
                    .with_content(format!("{title} content"))
                    .with_disabled(disabled.contains(&idx))
            })
            .collect();
        TabSetConfig::new(tabs)
    }

    fn recording(config: TabSetConfig, initial: Option<usize>) -> (TabsController, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let controller = TabsController::new(config, initial)
            .with_on_tab_change(move |index, tab| sink.borrow_mut().push((index, tab.title.clone())));
        (controller, calls)
    }

    fn settle(controller: &mut TabsController) {
        for _ in 0..400 {
            if !controller.tick(FRAME) {
                break;
            }
        }
    }

    #[test]
    fn test_select_enabled_tab_notifies_once() {
        let (mut tabs, calls) = recording(abc(&[]), Some(0));
        assert_eq!(tabs.active_tab(), Some(0));

        assert!(tabs.select(2));
        assert_eq!(tabs.active_tab(), Some(2));
        assert_eq!(tabs.active_content(), Some("C content"));
        assert_eq!(*calls.borrow(), vec![(2, "C".to_string())]);
    }

    #[test]
    fn test_every_enabled_index_is_selectable() {
        let (mut tabs, calls) = recording(abc(&[]), None);
        for index in 0..3 {
            assert!(tabs.select(index));
            assert_eq!(tabs.active_tab(), Some(index));
        }
        assert_eq!(calls.borrow().len(), 3);
    }

    #[test]
    fn test_select_disabled_tab_is_noop() {
        let (mut tabs, calls) = recording(abc(&[1]), Some(0));
        assert!(!tabs.select(1));
        assert_eq!(tabs.active_tab(), Some(0));
        assert!(calls.borrow().is_empty());
        assert_eq!(tabs.content_opacity(), 1.0);
        assert!(!tabs.is_animating());
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let (mut tabs, calls) = recording(abc(&[]), Some(1));
        assert!(!tabs.select(3));
        assert_eq!(tabs.active_tab(), Some(1));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_reselecting_active_tab_still_notifies() {
        let (mut tabs, calls) = recording(abc(&[]), Some(0));
        assert!(tabs.select(0));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_empty_tab_set_is_inert() {
        let (mut tabs, calls) = recording(TabSetConfig::default(), Some(3));
        assert_eq!(tabs.active_tab(), None);
        assert_eq!(tabs.active_content(), None);
        for index in 0..3 {
            assert!(!tabs.select(index));
        }
        assert!(!tabs.select_next());
        assert!(!tabs.select_previous());
        assert!(!tabs.report_layout(0, 0.0, 10.0));
        assert!(!tabs.indicator_visible());
        assert!(calls.borrow().is_empty());
        assert!(!tabs.tick(FRAME));
    }

    #[test]
    fn test_initial_tab_out_of_range_is_clamped() {
        let tabs = TabsController::new(abc(&[]), Some(7));
        assert_eq!(tabs.active_tab(), Some(2));

        let mut tabs = TabsController::new(abc(&[]), Some(1));
        tabs.remount(Some(99));
        assert_eq!(tabs.active_tab(), Some(2));
    }

    #[test]
    fn test_all_disabled_keeps_initial_content() {
        let (mut tabs, calls) = recording(abc(&[0, 1, 2]), Some(1));
        assert_eq!(tabs.active_tab(), Some(1));
        assert_eq!(tabs.active_content(), Some("B content"));
        assert_eq!(tabs.visual_state(1), TabVisualState::Disabled);

        for index in 0..3 {
            assert!(!tabs.select(index));
        }
        assert!(!tabs.select_next());
        assert_eq!(tabs.active_tab(), Some(1));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_report_layout_is_idempotent() {
        let (mut tabs, calls) = recording(abc(&[]), Some(0));
        assert!(tabs.report_layout(0, 10.0, 50.0));
        assert!(!tabs.report_layout(0, 10.0, 50.0));
        assert_eq!(tabs.layout(0), Some(TabLayoutRecord::new(10.0, 50.0)));
        assert_eq!(tabs.layouts().measured_count(), 1);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_relayout_of_active_tab_retargets_indicator() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        tabs.report_layout(0, 10.0, 50.0);
        assert_eq!(tabs.indicator_target(), IndicatorGeometry { offset: 10.0, width: 50.0 });

        tabs.report_layout(0, 10.0, 60.0);
        assert_eq!(tabs.indicator_target().width, 60.0);

        settle(&mut tabs);
        assert_eq!(tabs.indicator_geometry(), Some(IndicatorGeometry { offset: 10.0, width: 60.0 }));
    }

    #[test]
    fn test_layout_of_inactive_tab_does_not_move_indicator() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        tabs.report_layout(0, 0.0, 20.0);
        tabs.report_layout(1, 20.0, 30.0);
        assert_eq!(tabs.indicator_target(), IndicatorGeometry { offset: 0.0, width: 20.0 });
    }

    #[test]
    fn test_indicator_hidden_until_first_layout() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        assert!(!tabs.indicator_visible());
        assert_eq!(tabs.indicator_geometry(), None);

        tabs.select(1);
        settle(&mut tabs);
        assert!(!tabs.indicator_visible());

        tabs.report_layout(2, 40.0, 20.0);
        assert!(tabs.indicator_visible());
    }

    #[test]
    fn test_indicator_suppressed_for_fill_variants() {
        for variant in [TabVariant::Pills, TabVariant::Filled] {
            let mut tabs = TabsController::new(abc(&[]).with_variant(variant), None);
            tabs.report_layout(0, 0.0, 10.0);
            assert!(!tabs.indicator_visible());
        }
    }

    #[test]
    fn test_selection_before_layout_converges_once_measured() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        tabs.select(2);
        assert_eq!(tabs.indicator_target(), IndicatorGeometry { offset: 0.0, width: 0.0 });

        tabs.report_layout(0, 0.0, 20.0);
        tabs.report_layout(1, 20.0, 20.0);
        tabs.report_layout(2, 40.0, 25.0);
        assert_eq!(tabs.indicator_target(), IndicatorGeometry { offset: 40.0, width: 25.0 });
    }

    #[test]
    fn test_new_selection_retargets_in_flight_indicator() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        tabs.report_layout(0, 0.0, 20.0);
        tabs.report_layout(1, 20.0, 20.0);
        tabs.report_layout(2, 40.0, 20.0);
        settle(&mut tabs);

        tabs.select(2);
        tabs.tick(FRAME);
        tabs.tick(FRAME);
        let in_flight = tabs.indicator_geometry().map(|g| g.offset).unwrap_or_default();
        assert!(in_flight > 0.0 && in_flight < 40.0);

        tabs.select(1);
        assert_eq!(tabs.indicator_target().offset, 20.0);
        settle(&mut tabs);
        assert_eq!(tabs.indicator_geometry().map(|g| g.offset), Some(20.0));
    }

    #[test]
    fn test_content_fade_dips_and_recovers() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        tabs.select(1);
        assert!(tabs.is_animating());

        tabs.tick(Duration::from_millis(100));
        assert!((tabs.content_opacity() - 0.7).abs() < 1e-4);

        tabs.tick(Duration::from_millis(150));
        assert_eq!(tabs.content_opacity(), 1.0);
        assert!(!tabs.is_animating());
    }

    #[test]
    fn test_scroll_follows_active_tab() {
        let config = abc(&[]).with_layout(LayoutMode::Scrollable);
        let mut tabs = TabsController::new(config, Some(0));
        tabs.set_viewport_width(40.0);
        tabs.report_layout(0, 0.0, 30.0);
        tabs.report_layout(1, 30.0, 30.0);
        tabs.report_layout(2, 60.0, 30.0);

        // First tab would need a negative offset to be centered
        assert_eq!(tabs.scroll_target(), 0.0);

        tabs.select(1);
        assert_eq!(tabs.scroll_target(), 25.0);

        // Centering the last tab (55) would scroll past the end of the content
        tabs.select(2);
        assert_eq!(tabs.max_scroll_offset(), 50.0);
        assert_eq!(tabs.scroll_target(), 50.0);
        settle(&mut tabs);
        assert_eq!(tabs.scroll_offset(), 50.0);
        assert_eq!(tabs.tab_at(10.0), Some(2));
        assert_eq!(tabs.tab_at(0.0), Some(1));
    }

    #[test]
    fn test_hit_test_matches_scroll_at_end_of_strip() {
        let tabs = (0..10).map(|i| TabDescriptor::new(format!("T{i}"))).collect();
        let config = TabSetConfig::new(tabs).with_layout(LayoutMode::Scrollable);
        let mut tabs = TabsController::new(config, None);
        tabs.set_viewport_width(20.0);
        for index in 0..10 {
            tabs.report_layout(index, index as f32 * 6.0, 6.0);
        }

        tabs.select(9);
        settle(&mut tabs);
        assert_eq!(tabs.scroll_offset(), 40.0);
        assert_eq!(tabs.visible_scroll_offset(), 40.0);
        assert_eq!(tabs.tab_at(16.0), Some(9));
        assert_eq!(tabs.tab_at(10.0), Some(8));
        assert_eq!(tabs.tab_at(19.0), Some(9));
    }

    #[test]
    fn test_scroll_range_tracks_later_measurements() {
        let config = abc(&[]).with_layout(LayoutMode::Scrollable);
        let mut tabs = TabsController::new(config, Some(1));
        tabs.set_viewport_width(40.0);
        // Only the active tab is measured, so the range ends at its right edge
        tabs.report_layout(1, 30.0, 30.0);
        assert_eq!(tabs.scroll_target(), 20.0);

        tabs.report_layout(0, 0.0, 30.0);
        tabs.report_layout(2, 60.0, 30.0);
        assert_eq!(tabs.scroll_target(), 25.0);
    }

    #[test]
    fn test_fixed_layout_never_scrolls() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        tabs.set_viewport_width(20.0);
        tabs.report_layout(2, 60.0, 30.0);
        tabs.select(2);
        assert_eq!(tabs.scroll_target(), 0.0);
    }

    #[test]
    fn test_navigation_skips_disabled_and_wraps() {
        let (mut tabs, calls) = recording(abc(&[1]), Some(0));
        assert!(tabs.select_next());
        assert_eq!(tabs.active_tab(), Some(2));
        assert!(tabs.select_next());
        assert_eq!(tabs.active_tab(), Some(0));
        assert!(tabs.select_previous());
        assert_eq!(tabs.active_tab(), Some(2));
        assert_eq!(calls.borrow().len(), 3);
    }

    #[test]
    fn test_config_update_clamps_and_keeps_disabled_active() {
        let mut tabs = TabsController::new(abc(&[]), Some(2));
        tabs.report_layout(2, 40.0, 20.0);

        tabs.set_config(abc(&[2]));
        assert_eq!(tabs.active_tab(), Some(2));
        assert_eq!(tabs.visual_state(2), TabVisualState::Disabled);

        let two_tabs = TabSetConfig::new(vec![TabDescriptor::new("A"), TabDescriptor::new("B")]);
        tabs.set_config(two_tabs);
        assert_eq!(tabs.active_tab(), Some(1));
        assert_eq!(tabs.layout(2), Some(TabLayoutRecord::new(40.0, 20.0)));

        tabs.set_config(TabSetConfig::default());
        assert_eq!(tabs.active_tab(), None);
        assert!(!tabs.indicator_visible());
        assert_eq!(tabs.indicator_geometry(), None);
    }

    #[test]
    fn test_shrunk_tab_set_ignores_removed_records() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        tabs.report_layout(2, 40.0, 20.0);
        assert!(tabs.indicator_visible());

        let two_tabs = TabSetConfig::new(vec![TabDescriptor::new("A"), TabDescriptor::new("B")]);
        tabs.set_config(two_tabs);
        assert!(!tabs.indicator_visible());
        assert_eq!(tabs.tab_at(45.0), None);
    }

    #[test]
    fn test_remount_clears_layouts() {
        let mut tabs = TabsController::new(abc(&[]), Some(0));
        tabs.report_layout(0, 0.0, 10.0);
        tabs.select(1);
        tabs.remount(None);
        assert_eq!(tabs.active_tab(), Some(0));
        assert!(tabs.layouts().is_empty());
        assert!(!tabs.indicator_visible());
    }

    #[test]
    fn test_badge_formatting_through_descriptors() {
        let config = TabSetConfig::new(vec![
            TabDescriptor::new("A").with_badge(150),
            TabDescriptor::new("B").with_badge(42),
            TabDescriptor::new("C").with_badge(Badge::from("NEW")),
        ]);
        let tabs = TabsController::new(config, None);
        let labels: Vec<_> = tabs.tabs().iter().map(|t| t.badge_label()).collect();
        assert_eq!(
            labels,
            vec![Some("99+".to_string()), Some("42".to_string()), Some("NEW".to_string())]
        );
    }

    #[test]
    fn test_visual_states() {
        let tabs = TabsController::new(abc(&[2]), Some(1));
        assert_eq!(tabs.visual_state(0), TabVisualState::Inactive);
        assert_eq!(tabs.visual_state(1), TabVisualState::Active);
        assert_eq!(tabs.visual_state(2), TabVisualState::Disabled);
        assert_eq!(tabs.visual_state(9), TabVisualState::Inactive);
    }
}
