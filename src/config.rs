/// Default field dimensions and mine count, matching the classic 9×9 game.
pub const DEFAULT_ROWS: usize = 9;
pub const DEFAULT_COLUMNS: usize = 9;
pub const DEFAULT_MINES: usize = 10;

/// Display marker for a hidden, unflagged cell.
pub const HIDDEN_MARKER: char = '.';
/// Display marker for a flagged cell.
pub const FLAG_MARKER: char = '*';
/// Display marker for a revealed cell with no adjacent mines.
pub const OPEN_MARKER: char = '/';
/// Display marker for a disclosed mine, shown only at end-of-game.
pub const MINE_MARKER: char = 'X';
