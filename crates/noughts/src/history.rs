//! Append-only move history.

use serde::{Deserialize, Serialize};

use crate::types::Board;

/// One snapshot in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    /// Cell index of the move that produced this entry. `None` only for
    /// the initial entry.
    last_move: Option<usize>,
}

impl HistoryEntry {
    /// The initial entry: empty board, no move made yet.
    pub(crate) fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(crate) fn after_move(board: Board, index: usize) -> Self {
        Self {
            board,
            last_move: Some(index),
        }
    }

    /// The board snapshot at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this entry, if any.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Move-list label for this entry at the given step. Coordinates are
    /// 1-based (column, row).
    pub(crate) fn label(&self, step: usize) -> String {
        match self.last_move {
            Some(index) => format!("Go to move #{} ({}, {})", step, index % 3 + 1, index / 3 + 1),
            None => "Go to game start".to_string(),
        }
    }
}

/// Display order for the rendered move list. Presentation-only: toggling
/// it never touches gameplay state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Chronological, game start first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One entry of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLabel {
    /// Step this label jumps to.
    pub step: usize,
    /// Human-readable label, e.g. `Go to move #3 (2, 1)`.
    pub label: String,
}
