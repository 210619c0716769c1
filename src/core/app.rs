// Application State
// Main application state management and lifecycle

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ratatui::layout::Rect;
use tab_components::TabsManager;

use super::events::AppEvent;
use crate::config::AppConfig;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Window title shown in the header
    pub title: String,

    /// Interval between animation frames
    pub tick_rate: Duration,

    /// The mounted tab set
    pub tabs: TabsManager,

    /// Last notification received from the tab set, shown in the footer
    pub last_change: Rc<RefCell<Option<String>>>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance from loaded configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut tabs = TabsManager::create(&config.tabs).context("invalid tabs configuration")?;

        let last_change = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last_change);
        tabs.on_tab_change(move |index, tab| {
            tracing::info!(index, title = %tab.title, "tab changed");
            *sink.borrow_mut() = Some(format!("Switched to {} ({})", tab.title, index + 1));
        });

        Ok(Self {
            title: config.application.title.clone(),
            tick_rate: Duration::from_millis(config.application.tick_rate_ms),
            tabs,
            last_change,
            should_quit: false,
        })
    }

    /// Apply an application event. Returns true if the screen needs a redraw.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Quit => {
                self.quit();
                false
            }
            AppEvent::SelectNext => self.tabs.navigate_next(),
            AppEvent::SelectPrevious => self.tabs.navigate_previous(),
            AppEvent::Select(index) => self.tabs.set_active(index),
            AppEvent::Click(column, row) => self.tabs.handle_click(column, row),
            AppEvent::Resize => true,
            AppEvent::None => false,
        }
    }

    /// Layout pass for the area the tab set occupies this frame
    pub fn prepare(&mut self, tabs_area: Rect) {
        self.tabs.prepare(tabs_area);
    }

    /// Advance animations by one frame interval
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.tabs.tick(dt)
    }

    /// Whether animations are still running
    pub fn is_animating(&self) -> bool {
        self.tabs.controller().is_animating()
    }

    /// Footer status text
    pub fn status(&self) -> String {
        match self.last_change.borrow().as_ref() {
            Some(message) => message.clone(),
            None => match self.tabs.controller().active_descriptor() {
                Some(tab) => format!("Showing {}", tab.title),
                None => "No tabs configured".to_string(),
            },
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    const CONFIG: &str = r#"
application: { title: Demo, tick_rate_ms: 20 }
tabs:
  tabs:
    - { title: One, content: first }
    - { title: Two, content: second, disabled: true }
    - { title: Three, content: third }
"#;

    fn app() -> App {
        App::new(&parse_config(CONFIG).unwrap()).unwrap()
    }

    #[test]
    fn test_new_app_starts_on_first_tab() {
        let app = app();
        assert_eq!(app.title, "Demo");
        assert_eq!(app.tick_rate, Duration::from_millis(20));
        assert_eq!(app.tabs.controller().active_tab(), Some(0));
        assert_eq!(app.status(), "Showing One");
    }

    #[test]
    fn test_events_drive_selection_and_status() {
        let mut app = app();
        assert!(app.handle_event(AppEvent::SelectNext));
        assert_eq!(app.tabs.controller().active_tab(), Some(2));
        assert_eq!(app.status(), "Switched to Three (3)");

        assert!(!app.handle_event(AppEvent::Select(1)));
        assert!(!app.handle_event(AppEvent::Select(7)));
        assert_eq!(app.tabs.controller().active_tab(), Some(2));

        assert!(app.handle_event(AppEvent::SelectPrevious));
        assert_eq!(app.tabs.controller().active_tab(), Some(0));
    }

    #[test]
    fn test_click_after_prepare() {
        let mut app = app();
        app.prepare(Rect::new(0, 0, 30, 8));
        assert!(app.handle_event(AppEvent::Click(25, 0)));
        assert_eq!(app.tabs.controller().active_tab(), Some(2));
        assert!(app.is_animating());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.handle_event(AppEvent::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn test_invalid_tabs_config_is_an_error() {
        let config = parse_config("application: { title: T }\ntabs: { indicator_color: nope }").unwrap();
        assert!(App::new(&config).is_err());
    }
}
