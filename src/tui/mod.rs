//! Terminal UI for the game.

mod app;
mod input;
mod ui;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use crate::Settings;
use app::App;
use ui::Regions;

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let setup = || -> Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        };
        // No guard exists yet, so a failed setup must undo raw mode itself.
        let terminal = restore_on_err(setup(), || {
            let mut stdout = io::stdout();
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
        })?;
        Ok(Self { terminal })
    }
}

/// Runs `restore` when `result` is an error, then passes the result through.
fn restore_on_err<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Terminal setup failed, restoring");
        restore();
    }
    result
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the interactive game until the player quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    init_file_logging(settings)?;
    info!(sort = ?settings.sort(), "Starting tic-tac-toe TUI");

    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(*settings.sort());

    let res = run_loop(&mut guard.terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, wait for one event, apply it; repeat.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut regions = Regions::default();
        terminal.draw(|f| regions = ui::draw(f, app))?;

        match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row, &regions);
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }

        if *app.should_quit() {
            return Ok(());
        }
    }
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let res: Result<()> = restore_on_err(Err(anyhow::anyhow!("no tty")), || {
            restored.set(true)
        });
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let res = restore_on_err(Ok(7), || restored.set(true));
        assert_eq!(res.unwrap(), 7);
        assert!(!restored.get());
    }
}
