//! Main application loop.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use super::person_screen::PersonScreen;

/// Display host owning the fully composed screen.
///
/// The screen is handed over at construction and never replaced; the loop
/// only redraws the same snapshot in response to terminal events.
pub struct App {
    screen: PersonScreen,
}

impl App {
    /// Creates the app around a constructed screen.
    #[must_use]
    pub const fn new(screen: PersonScreen) -> Self {
        Self { screen }
    }

    /// Runs the terminal event loop until a quit key arrives.
    ///
    /// # Errors
    /// Returns an error if drawing fails or the event stream breaks.
    pub async fn run(self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while let Some(event) = terminal_events.next().await {
            match event? {
                Event::Key(key) if Self::is_quit_key(key) => {
                    info!("Exit requested");
                    break;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    terminal.draw(|frame| self.render(frame))?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(&self.screen, frame.area());
    }

    fn is_quit_key(key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }
}
