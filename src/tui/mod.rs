//! Terminal UI for Strictly Rewind.

mod input;
mod ui;

pub use input::map_key;
pub use ui::draw;

use crate::app::App;
use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::ops::ControlFlow;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the player quits.
pub fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = setup_or_restore(setup_terminal, restore_terminal)?;

    let res = run_loop(&mut terminal, App::new(config));

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `setup`, undoing raw mode and the alternate screen if it fails.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            error!(error = %e, "Failed to set up terminal");
            restore()?;
            Err(e)
        }
    }
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(app_event) = map_key(key) else {
            continue;
        };

        debug!(?app_event, "Key mapped");
        if let ControlFlow::Break(()) = app.handle_event(app_event) {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no terminal")),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let value = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        )
        .expect("setup succeeds");

        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
