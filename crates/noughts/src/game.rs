//! Game state machine: history, time-travel, derived status.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::history::{HistoryEntry, MoveLabel, SortOrder};
use crate::rules::{self, Win};
use crate::types::{Board, Player};

/// User intents forwarded from the presentation layer.
///
/// Each intent is handled synchronously and to completion by
/// [`Game::handle`]; there is no queueing or dispatch framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A board cell was clicked (index 0-8).
    CellClicked(usize),
    /// A move-list entry was selected.
    HistoryStepSelected(usize),
    /// The move-list sort order was toggled.
    SortOrderToggled,
}

/// Tic-tac-toe game with append-only history and time-travel.
///
/// Only the history, the current step and the move-list order are
/// stored. The player to move and the game-over status are derived from
/// `current_step`, so they cannot fall out of sync with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    history: Vec<HistoryEntry>,
    current_step: usize,
    sort_order: SortOrder,
}

impl Game {
    /// Creates a new game: one initial history entry, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            sort_order: SortOrder::Ascending,
        }
    }

    /// Dispatches one presentation intent.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::CellClicked(index) => self.attempt_move(index),
            Intent::HistoryStepSelected(step) => self.jump_to(step),
            Intent::SortOrderToggled => self.toggle_sort_order(),
        }
    }

    /// Places the next player's mark at `index`.
    ///
    /// The move is silently ignored when the board at the current step
    /// already has a winner or the cell is not empty (this covers
    /// out-of-range indices too). A move made from a past step first
    /// discards every later entry; there is no redo after branching.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, index: usize) {
        let board = self.history[self.current_step].board();

        if rules::evaluate(board).is_some() {
            debug!(index, "Move rejected: game already won at this step");
            return;
        }
        if !board.is_empty(index) {
            debug!(index, "Move rejected: square not empty");
            return;
        }

        let player = self.next_player();
        let next = board.place(index, player);
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::after_move(next, index));
        self.current_step = self.history.len() - 1;

        debug!(index, %player, step = self.current_step, "Move applied");
    }

    /// Moves the current step without touching history.
    ///
    /// Callers must pass a valid step (`step < history_len()`); the move
    /// list and the TUI only ever offer valid steps.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(step < self.history.len(), "jump target out of range");
        debug!(step, "Jumping to step");
        self.current_step = step;
    }

    /// Flips the move-list display order.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Move-list labels in the current sort order.
    pub fn describe_moves(&self) -> Vec<MoveLabel> {
        let mut moves: Vec<MoveLabel> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveLabel {
                step,
                label: entry.label(step),
            })
            .collect();

        if self.sort_order == SortOrder::Descending {
            moves.reverse();
        }
        moves
    }

    /// Status line for the current step.
    pub fn status(&self) -> String {
        match self.winning_line() {
            Some(win) => format!("Winner: {}", win.player),
            None => format!("Next player: {}", self.next_player()),
        }
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.history[self.current_step].board()
    }

    /// Winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<Win> {
        rules::evaluate(self.board())
    }

    /// Player to move at the current step. X moves on even steps.
    pub fn next_player(&self) -> Player {
        if self.current_step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// True when the current step is terminal: a line is complete or all
    /// nine moves have been made.
    pub fn is_over(&self) -> bool {
        self.winning_line().is_some() || self.current_step == 9
    }

    /// Index of the current step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Number of history entries (initial entry included).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current move-list display order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
