//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::ReservationView;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// How long to wait for input before checking for a refreshed countdown
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the reservation view until the user leaves it
pub fn run(view: &mut ReservationView) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_loop(&mut terminal, view);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    view: &mut ReservationView,
) -> Result<()> {
    loop {
        view.sync()?;
        terminal.draw(|frame| ui::render(frame, &view.display, view.target(), &view.state))?;

        if let Some(Event::Key(key)) = poll_event(POLL_INTERVAL)? {
            if handle_key(key) == HandleResult::Quit {
                view.should_quit = true;
            }
        }

        if view.should_quit {
            break;
        }
    }

    Ok(())
}
