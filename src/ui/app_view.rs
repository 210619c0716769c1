// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Styles;
use crate::core::App;

const HELP_TEXT: &str = "q: Quit | ←/→: Switch Tab | 1-9: Jump | Click: Select";

/// Screen regions of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppAreas {
    pub header: Rect,
    pub tabs: Rect,
    pub footer: Rect,
}

/// Split the screen into header, tab set and footer
pub fn app_layout(area: Rect) -> AppAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Tab set
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let header = chunks[0];
    // Inset one column so the tab set lines up with the text inside the header and footer boxes
    let tabs = Rect {
        x: chunks[1].x.saturating_add(1),
        y: chunks[1].y,
        width: chunks[1].width.saturating_sub(2),
        height: chunks[1].height,
    };
    AppAreas { header, tabs, footer: chunks[2] }
}

/// Render the entire application. The tab set must have been prepared for `areas.tabs`.
pub fn render_app(f: &mut Frame, app: &App, areas: &AppAreas) {
    render_header(f, app, areas.header);
    app.tabs.render(f, areas.tabs);
    render_footer(f, app, areas.footer);
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.title.as_str())
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the footer bar
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(HELP_TEXT, Styles::footer()),
        Span::raw("  "),
        Span::styled(app.status(), Styles::status()),
    ]);
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_layout_regions() {
        let areas = app_layout(Rect::new(0, 0, 40, 20));
        assert_eq!(areas.header, Rect::new(0, 0, 40, 3));
        assert_eq!(areas.tabs, Rect::new(1, 3, 38, 14));
        assert_eq!(areas.footer, Rect::new(0, 17, 40, 3));
        // Same left column as the bordered header text
        assert_eq!(areas.tabs.x, areas.header.x + 1);
        assert_eq!(areas.tabs.right(), areas.footer.right() - 1);
    }

    #[test]
    fn test_render_app_draws_title_tabs_and_content() {
        let config = parse_config(
            "application: { title: Demo }\ntabs: { tabs: [{ title: Alpha, content: hello }, { title: Beta }] }",
        )
        .unwrap();
        let mut app = App::new(&config).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();

        terminal
            .draw(|f| {
                let areas = app_layout(f.area());
                app.prepare(areas.tabs);
                render_app(f, &app, &areas);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| (0..40).map(|x| buffer[(x, y)].symbol().to_string()).collect::<String>();
        assert!(row(1).contains("Demo"));
        assert!(row(3).contains("Alpha"));
        assert!(row(3).contains("Beta"));
        assert!((5..17).any(|y| row(y).contains("hello")));
        assert!(row(18).contains("q: Quit"));
    }
}
