// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Activate the previous enabled tab
    SelectPrevious,

    /// Activate the next enabled tab
    SelectNext,

    /// Activate a tab by zero-based index
    Select(usize),

    /// Left click at a terminal cell (column, row)
    Click(u16, u16),

    /// Terminal resized; layout is recomputed on the next draw
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Navigation
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => AppEvent::SelectPrevious,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppEvent::SelectNext,

            // Direct selection, 1-based on the keyboard
            KeyCode::Char(c @ '1'..='9') => AppEvent::Select(c as usize - '1' as usize),

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click(mouse.column, mouse.row),
            _ => AppEvent::None,
        }
    }
}
