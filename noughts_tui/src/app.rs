//! Application state and logic.

use crossterm::event::KeyCode;
use noughts::{Game, Intent, SortOrder};
use tracing::debug;

use crate::input;

/// Main application state: the game plus the board cursor.
pub struct App {
    game: Game,
    cursor: usize,
}

impl App {
    /// Creates a new application.
    pub fn new(descending: bool) -> Self {
        let mut game = Game::new();
        if descending {
            game.handle(Intent::SortOrderToggled);
        }
        Self { game, cursor: 4 }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the board cursor position (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Routes one key press to a game intent or a cursor update.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Handling key");

        match key {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.game.handle(Intent::CellClicked(index));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.game.handle(Intent::CellClicked(self.cursor));
            }
            KeyCode::Char(',') => {
                let step = self.game.current_step().saturating_sub(1);
                self.game.handle(Intent::HistoryStepSelected(step));
            }
            KeyCode::Char('.') => {
                let last = self.game.history_len() - 1;
                let step = (self.game.current_step() + 1).min(last);
                self.game.handle(Intent::HistoryStepSelected(step));
            }
            KeyCode::Char('g') => {
                self.game.handle(Intent::HistoryStepSelected(0));
            }
            KeyCode::Char('G') => {
                let last = self.game.history_len() - 1;
                self.game.handle(Intent::HistoryStepSelected(last));
            }
            KeyCode::Char('s') => {
                self.game.handle(Intent::SortOrderToggled);
            }
            KeyCode::Char('n') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Starts a fresh game, keeping the move-list sort order.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        let order = self.game.sort_order();
        self.game = Game::new();
        if order == SortOrder::Descending {
            self.game.handle(Intent::SortOrderToggled);
        }
        self.cursor = 4;
    }
}
