//! Wizard screen: the interactive POC planner.
//!
//! Provides a single-screen terminal UI with:
//! - Step sidebar with completion markers
//! - Form, checklist and preview content per step
//! - Live validation panel

mod app;
mod fields;
mod ui;

pub use app::{App, InputResult, LaunchOptions, Row};
pub use fields::{Field, FieldKind};
pub use ui::{dump_step, TITLE};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use poc_core::errors::PocError;
use poc_core::Step;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the wizard (interactive TUI).
pub fn run(options: LaunchOptions) -> Result<InputResult> {
    use std::io::IsTerminal;

    if !io::stdout().is_terminal() {
        return Err(PocError::NotATerminal(
            "the wizard needs an interactive terminal; use a subcommand for scripted runs"
                .to_string(),
        )
        .into());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(options);
    log::info!("wizard started");

    // Restore the terminal before surfacing a loop error.
    let result = run_ui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    log::info!("wizard closed");
    result
}

/// Render every step once and return the text dumps, logging each.
pub fn dump_all_steps(options: LaunchOptions) -> Vec<String> {
    let mut app = App::new(options);
    let mut dumps = Vec::new();
    for step in Step::all() {
        app.navigate(*step);
        let dump = dump_step(&app);
        log::info!("{}", dump);
        dumps.push(dump);
    }
    dumps
}

/// Main application loop (single screen)
pub fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<InputResult> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != event::KeyEventKind::Press {
                    continue;
                }
                if app.handle_input(key) == InputResult::Quit {
                    return Ok(InputResult::Quit);
                }
            }
        }
    }
}
