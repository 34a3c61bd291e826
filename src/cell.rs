//! Cell state for a single grid position.

use crate::config::{FLAG_MARKER, HIDDEN_MARKER};

/// Whether a cell has been revealed to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Revealed,
}

/// Whether the player has flagged a cell as a suspected mine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagState {
    Unflagged,
    Flagged,
}

/// One grid position: fixed coordinates plus mutable display state.
///
/// The display symbol is the single source of truth for rendering; it is
/// rewritten by the board as the cell is flagged, revealed, or disclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    symbol: char,
    visibility: Visibility,
    flag: FlagState,
}

impl Cell {
    /// Create a hidden, unflagged cell at (`row`, `column`).
    pub fn new(row: usize, column: usize) -> Self {
        Cell {
            row,
            column,
            symbol: HIDDEN_MARKER,
            visibility: Visibility::Hidden,
            flag: FlagState::Unflagged,
        }
    }

    /// Row index, fixed at creation.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, fixed at creation.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Current display symbol.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.flag == FlagState::Flagged
    }

    /// Mark the cell revealed. The board clears any flag beforehand.
    pub fn reveal(&mut self) {
        debug_assert!(!self.is_flagged());
        self.visibility = Visibility::Revealed;
    }

    /// Flip flagged↔unflagged and update the display symbol.
    /// Only hidden cells may be flagged.
    pub fn toggle_flag(&mut self) {
        debug_assert!(!self.is_revealed());
        self.flag = match self.flag {
            FlagState::Unflagged => FlagState::Flagged,
            FlagState::Flagged => FlagState::Unflagged,
        };
        self.symbol = match self.flag {
            FlagState::Unflagged => HIDDEN_MARKER,
            FlagState::Flagged => FLAG_MARKER,
        };
    }

    /// Overwrite the display symbol (digit, open marker, or disclosed mine).
    pub(crate) fn set_symbol(&mut self, symbol: char) {
        self.symbol = symbol;
    }
}
