use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::state::{State, LOG_CAPACITY};
use crate::store::RecipeStore;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::new(LOG_CAPACITY);
        logger::init(log_buffer.clone(), config.log_level_filter()?)?;

        info!("Starting application...");
        let theme = config.theme()?;
        let mut state = State::new(
            RecipeStore::seeded(),
            theme,
            config.hotkeys.clone(),
            log_buffer,
        );
        state
            .set_show_log(config.show_log)
            .set_config_location(config.file_path().map(|path| path.display().to_string()));

        let mut app = App { state, config };
        app.start_ui()?;

        // Remember whether the log pane was open
        app.config.show_log = app.state.is_log_visible();
        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether the
    /// loop ends on request or on error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let result = match enable_raw_mode() {
            Ok(()) => match Terminal::new(CrosstermBackend::new(stdout)) {
                Ok(mut terminal) => {
                    let result = terminal
                        .hide_cursor()
                        .map_err(anyhow::Error::from)
                        .and_then(|_| self.run(&mut terminal));
                    with_cleanup(result, || Ok(terminal.show_cursor()?))
                }
                Err(e) => Err(AppError::from(e).into()),
            },
            Err(e) => Err(AppError::Terminal(format!("Failed to enable raw mode: {}", e)).into()),
        };

        with_cleanup(result, restore_terminal)
    }

    fn run(&mut self, terminal: &mut CrosstermTerminal) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            self.state.sync_recipes();
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

/// Leave raw mode and the alternate screen, attempting both steps even if
/// the first fails.
///
fn restore_terminal() -> Result<()> {
    let raw_mode = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen)?;
    raw_mode?;
    Ok(())
}

/// Run `cleanup` after `result` was produced. The first error wins: a
/// cleanup failure is only returned when `result` succeeded, and is logged
/// otherwise.
///
fn with_cleanup<T>(result: Result<T>, cleanup: impl FnOnce() -> Result<()>) -> Result<T> {
    match (result, cleanup()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(cleanup_error)) => {
            error!("Failed to restore terminal: {}", cleanup_error);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn cleanup_runs_after_a_failed_loop() {
        let cleaned = Cell::new(false);
        let result: Result<()> = with_cleanup(Err(anyhow!("draw failed")), || {
            cleaned.set(true);
            Ok(())
        });
        assert!(cleaned.get());
        assert_eq!(result.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn loop_error_wins_over_cleanup_error() {
        let result: Result<()> = with_cleanup(Err(anyhow!("draw failed")), || {
            Err(anyhow!("restore failed"))
        });
        assert_eq!(result.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn cleanup_error_is_returned_after_success() {
        let result = with_cleanup(Ok(7), || Err(anyhow!("restore failed")));
        assert_eq!(result.unwrap_err().to_string(), "restore failed");
        assert_eq!(with_cleanup(Ok(7), || Ok(())).unwrap(), 7);
    }
}
