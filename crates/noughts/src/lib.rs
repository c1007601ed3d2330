//! Tic-tac-toe game logic with move history and time-travel.
//!
//! The [`Game`] state machine keeps every board snapshot it has passed
//! through, so the presentation layer can jump back to any earlier step.
//! A move made from a past step discards the future and branches from
//! there. Whose turn it is and whether the game is over are derived from
//! the current step, never stored alongside it.
//!
//! # Example
//!
//! ```
//! use noughts::{Game, Player};
//!
//! let mut game = Game::new();
//! game.attempt_move(4);
//! assert_eq!(game.next_player(), Player::O);
//!
//! game.jump_to(0);
//! assert_eq!(game.next_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod rules;
mod types;

pub use game::{Game, Intent};
pub use history::{HistoryEntry, MoveLabel, SortOrder};
pub use rules::{WIN_LINES, Win, evaluate};
pub use types::{Board, Player, Square};
