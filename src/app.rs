use crate::config::Config;
use crate::error::AppResult;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::CustomLogger;
use crate::state::{push_log, State};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

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
    pub fn start(config: Config) -> AppResult<()> {
        let mut app = App {
            state: State::new(&config)?,
            config,
        };

        let logger = CustomLogger::new(LevelFilter::Debug);
        let buffer = app.state.log_buffer();
        logger.set_log_callback(Box::new(move |line| push_log(&buffer, line)));
        logger.install()?;

        info!("Starting application...");
        let result = app.start_ui();

        // Remember the last value and theme for the next run
        app.state.write_back(&mut app.config);
        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        result
    }

    /// Take over the terminal, run the render loop on the main thread and
    /// restore the terminal afterwards, even if setup or the loop failed.
    ///
    fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let result = self.enter_and_run();
        let restored = restore_terminal(&mut stdout());
        result.and(restored)
    }

    fn enter_and_run(&mut self) -> AppResult<()> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        self.run(&mut terminal)
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);
        let terminal_event_handler = TerminalEventHandler::new(tick_rate);
        loop {
            draw(terminal, &mut self.state)?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

/// Leave raw mode and the alternate screen and show the cursor again.
///
pub fn restore_terminal<W: Write>(out: &mut W) -> AppResult<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
    Ok(())
}

/// Draw one frame of the picker screen.
///
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, state: &mut State) -> AppResult<()> {
    terminal.draw(|frame| crate::ui::render(frame, state))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_into_test_backend() {
        let mut state = State::new(&Config::new()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        draw(&mut terminal, &mut state).unwrap();
        draw(&mut terminal, &mut state).unwrap();
        assert_eq!(state.get_terminal_size().width, 40);
    }

    #[test]
    fn test_restore_terminal_without_setup() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
