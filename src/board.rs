//! Game board state machine: mine placement, first-move safety, flag
//! bookkeeping, flood-fill reveal, and win/loss determination.

use crate::bitgrid::BitGrid;
use crate::cell::Cell;
use crate::common::{BoardError, GameStatus, RevealResult};
use crate::config::{MINE_MARKER, OPEN_MARKER};
use core::fmt;
use rand::Rng;
use std::collections::VecDeque;

/// 8-directional neighbor offsets.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ERR_ALREADY_EXPLORED: &str = "That cell is already explored";
const ERR_STILL_MARKED: &str = "That cell is marked; unmark it first";

/// The grid of cells plus the mine set and global counters.
///
/// Constructed once per game; mines may be wholly re-placed exactly once if
/// the very first reveal lands on a mine. Won and Lost are absorbing: the
/// caller checks [`Board::status`] before issuing further commands.
pub struct Board {
    rows: usize,
    columns: usize,
    mines: usize,
    cells: Vec<Cell>,
    mine_map: BitGrid,
    flagged: usize,
    revealed: usize,
    first_move_done: bool,
    status: GameStatus,
}

impl Board {
    /// Create a board with `mines` mines placed uniformly at random.
    pub fn new<R: Rng>(
        rows: usize,
        columns: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut board = Self::empty(rows, columns, mines)?;
        board.place_mines(rng);
        Ok(board)
    }

    /// Create a board with an explicit mine layout.
    ///
    /// Used for scripted layouts and tests; positions must be distinct and
    /// within bounds.
    pub fn with_mines(
        rows: usize,
        columns: usize,
        mines: &[(usize, usize)],
    ) -> Result<Self, BoardError> {
        let mut board = Self::empty(rows, columns, mines.len())?;
        for &(r, c) in mines {
            if board.mine_map.get(r, c).map_err(|_| {
                BoardError::ConfigurationError("mine position is outside the grid")
            })? {
                return Err(BoardError::ConfigurationError("duplicate mine position"));
            }
            let _ = board.mine_map.set(r, c);
        }
        Ok(board)
    }

    fn empty(rows: usize, columns: usize, mines: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::ConfigurationError(
                "board dimensions must be positive",
            ));
        }
        if mines > rows * columns {
            return Err(BoardError::ConfigurationError(
                "mine count exceeds grid capacity",
            ));
        }
        let mut cells = Vec::with_capacity(rows * columns);
        for r in 0..rows {
            for c in 0..columns {
                cells.push(Cell::new(r, c));
            }
        }
        let mine_map = BitGrid::new(rows, columns)?;
        Ok(Board {
            rows,
            columns,
            mines,
            cells,
            mine_map,
            flagged: 0,
            revealed: 0,
            first_move_done: false,
            status: GameStatus::Active,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Configured mine count, fixed for the game's lifetime.
    pub fn mine_count(&self) -> usize {
        self.mines
    }

    /// Number of currently flagged cells.
    pub fn flagged_count(&self) -> usize {
        self.flagged
    }

    /// Number of revealed cells.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Immutable view of the cell at (row, col), if in bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.columns {
            Some(&self.cells[row * self.columns + col])
        } else {
            None
        }
    }

    /// Whether (row, col) currently holds a mine.
    pub fn is_mine(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.mine_map.get(row, col)?)
    }

    /// Iterator over the current mine positions, in row-major order.
    pub fn mine_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mine_map.iter_set_bits()
    }

    /// Flip flagged↔unflagged on a hidden cell.
    ///
    /// Fails with `InvalidOperation` if the cell is already revealed. The
    /// win-by-flags condition is checked afterwards.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        let idx = row * self.columns + col;
        if self.cells[idx].is_revealed() {
            return Err(BoardError::InvalidOperation(ERR_ALREADY_EXPLORED));
        }
        if self.cells[idx].is_flagged() {
            self.flagged -= 1;
        } else {
            self.flagged += 1;
        }
        self.cells[idx].toggle_flag();
        self.update_status();
        Ok(())
    }

    /// Reveal the cell at (row, col), flood-filling its safe region.
    ///
    /// The first reveal of a game never detonates: if it lands on a mine the
    /// whole placement is re-sampled first. On any later move, revealing a
    /// mine discloses all mines and ends the game as lost. Fails with
    /// `InvalidOperation` if the cell is already revealed or still flagged.
    pub fn reveal<R: Rng>(
        &mut self,
        row: usize,
        col: usize,
        rng: &mut R,
    ) -> Result<RevealResult, BoardError> {
        self.check_bounds(row, col)?;
        let idx = row * self.columns + col;
        if self.cells[idx].is_revealed() {
            return Err(BoardError::InvalidOperation(ERR_ALREADY_EXPLORED));
        }
        if self.cells[idx].is_flagged() {
            return Err(BoardError::InvalidOperation(ERR_STILL_MARKED));
        }

        if self.mine_map.get(row, col).unwrap_or(false) {
            // A full board leaves no mine-free position to re-seed toward.
            if !self.first_move_done && self.mines < self.rows * self.columns {
                self.reseed_mines(row, col, rng);
            } else {
                self.first_move_done = true;
                self.disclose_mines();
                self.status = GameStatus::Lost;
                return Ok(RevealResult::Detonated);
            }
        }

        self.first_move_done = true;
        self.flood_fill(row, col);
        self.update_status();
        Ok(RevealResult::Safe)
    }

    /// Deterministic textual rendering of the grid (see the `Display` impl).
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.columns {
            Err(BoardError::OutOfRange)
        } else {
            Ok(())
        }
    }

    /// Choose `self.mines` distinct positions uniformly, rejecting duplicates.
    fn place_mines<R: Rng>(&mut self, rng: &mut R) {
        debug_assert!(self.mine_map.is_empty());
        for _ in 0..self.mines {
            loop {
                let r = rng.random_range(0..self.rows);
                let c = rng.random_range(0..self.columns);
                if !self.mine_map.get(r, c).unwrap_or(false) {
                    let _ = self.mine_map.set(r, c);
                    break;
                }
            }
        }
    }

    /// Discard the current placement and re-place until (row, col) is clear.
    fn reseed_mines<R: Rng>(&mut self, row: usize, col: usize, rng: &mut R) {
        let mut attempts = 0;
        while self.mine_map.get(row, col).unwrap_or(false) {
            attempts += 1;
            self.mine_map.clear_all();
            self.place_mines(rng);
        }
        log::debug!(
            "first move hit a mine at ({}, {}); re-placed mines ({} attempts)",
            row,
            col,
            attempts
        );
    }

    /// Breadth-first reveal starting from a known-safe position.
    ///
    /// Zero-neighbor cells propagate to all 8 neighbors; cells bordering a
    /// mine take their digit and stop the spread. Each cell is enqueued at
    /// most once, bounding the traversal to one pass over the grid.
    fn flood_fill(&mut self, row: usize, col: usize) {
        let mut queue = VecDeque::new();
        self.cells[row * self.columns + col].reveal();
        self.revealed += 1;
        queue.push_back((row, col));

        let mut region = 0usize;
        while let Some((r, c)) = queue.pop_front() {
            region += 1;
            let idx = r * self.columns + c;
            let count = self.neighbor_mines(r, c);
            if count > 0 {
                self.cells[idx].set_symbol((b'0' + count) as char);
                continue;
            }
            self.cells[idx].set_symbol(OPEN_MARKER);
            for (nr, nc) in Self::neighbors(self.rows, self.columns, r, c) {
                let nidx = nr * self.columns + nc;
                if self.cells[nidx].is_revealed() || self.mine_map.get(nr, nc).unwrap_or(false) {
                    continue;
                }
                if self.cells[nidx].is_flagged() {
                    self.cells[nidx].toggle_flag();
                    self.flagged -= 1;
                }
                self.cells[nidx].reveal();
                self.revealed += 1;
                queue.push_back((nr, nc));
            }
        }
        log::debug!("revealed a region of {} cells from ({}, {})", region, row, col);
    }

    /// Count mines among the ≤8 grid-bounded neighbors of (row, col).
    fn neighbor_mines(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (r, c) in Self::neighbors(self.rows, self.columns, row, col) {
            if self.mine_map.get(r, c).unwrap_or(false) {
                count += 1;
            }
        }
        count
    }

    /// Grid-bounded 8-directional neighbors of (row, col).
    fn neighbors(
        rows: usize,
        columns: usize,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        NEIGHBORS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < columns).then_some((r, c))
        })
    }

    /// Check both win conditions; runs after every flag or reveal operation.
    fn update_status(&mut self) {
        if self.status != GameStatus::Active {
            return;
        }
        let all_flags_on_mines = self
            .cells
            .iter()
            .filter(|cell| cell.is_flagged())
            .all(|cell| self.mine_map.get(cell.row(), cell.column()).unwrap_or(false));
        let win_by_flags = self.flagged == self.mines && all_flags_on_mines;
        let win_by_exhaustion = self.revealed + self.mines == self.rows * self.columns;
        if win_by_flags || win_by_exhaustion {
            self.status = GameStatus::Won;
        }
    }

    /// Show the mine marker at every mine position (loss disclosure).
    fn disclose_mines(&mut self) {
        let positions: Vec<_> = self.mine_map.iter_set_bits().collect();
        for (r, c) in positions {
            self.cells[r * self.columns + c].set_symbol(MINE_MARKER);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " │")?;
        for c in 0..self.columns {
            write!(f, "{}", (c + 1) % 10)?;
        }
        writeln!(f, "│")?;
        writeln!(f, "—│{}│", "—".repeat(self.columns))?;
        for r in 0..self.rows {
            write!(f, "{}│", r + 1)?;
            for c in 0..self.columns {
                write!(f, "{}", self.cells[r * self.columns + c].symbol())?;
            }
            writeln!(f, "│")?;
        }
        write!(f, "—│{}│", "—".repeat(self.columns))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ {}x{}, mines: {}, flagged: {}, revealed: {}, status: {:?} }}",
            self.rows, self.columns, self.mines, self.flagged, self.revealed, self.status
        )?;
        writeln!(f, "{:?}", self.mine_map)?;
        write!(f, "{}", self)
    }
}
