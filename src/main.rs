// Tab Strip
// TUI host for the animated tab strip component

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Instant;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use tab_strip::config_validation::load_and_validate_config;
use tab_strip::logging::{init_logging, log_file_path};
use tab_strip::ui::{app_layout, render_app};
use tab_strip::{App, EventHandler};

//--------------------------------------------------------<<

type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging(&log_file_path())?;

    // Optional config path as the first argument, bundled config.yaml otherwise
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let app_config = load_and_validate_config(config_path)?;
    let mut app = App::new(&app_config)?;

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "application exited with error");
    }
    result
}

fn setup_terminal() -> Result<TuiTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut TuiTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Draw while something changed or is animating; otherwise block on input
fn run(terminal: &mut TuiTerminal, app: &mut App) -> Result<()> {
    let mut last_frame = Instant::now();
    let mut needs_redraw = true;

    while !app.should_quit {
        let now = Instant::now();
        let dt = now - last_frame;
        last_frame = now;

        if needs_redraw || app.is_animating() {
            terminal.draw(|f| {
                // Measure, report layouts, advance animations, then draw
                let areas = app_layout(f.area());
                app.prepare(areas.tabs);
                app.tick(dt);
                render_app(f, app, &areas);
            })?;
            needs_redraw = false;
        }

        if event::poll(app.tick_rate)? {
            let app_event = EventHandler::handle(event::read()?);
            tracing::trace!(?app_event, "event");
            needs_redraw |= app.handle_event(app_event);
        }
    }

    tracing::info!("quit requested");
    Ok(())
}
