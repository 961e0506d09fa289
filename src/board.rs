use crate::error::{Error, MoveRejection, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// A single cell of the board.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by the first player.
    X,
    /// Marked by the second player.
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player's mark. `X` always moves first.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Returns the other player.
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Returns the cell value this player writes onto the board.
    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` coordinate of the cell a player wants to mark.
///
/// Actions produced by [`actions`](crate::moves::actions) always point at an empty cell.
/// Actions built by hand with [`Action::new`] are checked when applied.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn is_in_range(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3×3 tic-tac-toe board.
///
/// The grid is private: every constructor checks that `X` has placed either as many marks as `O`
/// or exactly one more, so a `Board` value is always a position reachable by alternating play
/// (ignoring whether the game should already have stopped). Whose turn it is is derived from the
/// marks and never stored.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Returns a fresh board with every cell empty.
pub fn reset() -> Board {
    Board::new()
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a fixed-size grid, checking the mark counts.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        let board = Self { cells };
        let x_count = board.count(Cell::X);
        let o_count = board.count(Cell::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidBoard {
                reason: format!(
                    "X has {x_count} marks and O has {o_count}; X must equal O or lead by one"
                ),
            });
        }
        Ok(board)
    }

    /// Builds a board from rows of arbitrary length, checking shape and mark counts.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(Error::InvalidBoard {
                reason: format!("expected {BOARD_SIZE} rows, got {}", rows.len()),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in rows.into_iter().enumerate() {
            cells[i] = row.try_into().map_err(|row: Vec<Cell>| Error::InvalidBoard {
                reason: format!("row {i} has {} cells, expected {BOARD_SIZE}", row.len()),
            })?;
        }
        Self::from_cells(cells)
    }

    /// Returns the grid, row by row.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the cell at `(row, col)`, or `None` when the coordinate is off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Counts cells holding the given value.
    pub fn count(&self, value: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == value)
            .count()
    }

    /// Returns the player to move: `X` when both players have placed the same number of marks,
    /// `O` otherwise.
    pub fn player(&self) -> Symbol {
        if self.count(Cell::O) < self.count(Cell::X) {
            Symbol::O
        } else {
            Symbol::X
        }
    }

    /// Returns a new board with `action` marked for the player to move. `self` is left untouched.
    pub fn result(&self, action: Action) -> Result<Board> {
        if !action.is_in_range() {
            return Err(Error::InvalidMove {
                row: action.row,
                col: action.col,
                reason: MoveRejection::OutOfRange,
            });
        }
        if !self.is_empty(action.row, action.col) {
            return Err(Error::InvalidMove {
                row: action.row,
                col: action.col,
                reason: MoveRejection::Occupied,
            });
        }
        Ok(self.place(action))
    }

    /// Applies `action` to this board in place.
    pub fn make_move(&mut self, action: Action) -> Result<()> {
        let next = self.result(action)?;
        trace!(%action, player = %self.player(), "move applied");
        *self = next;
        Ok(())
    }

    /// Returns `true` if the cell at `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Cell::Empty)
    }

    /// Returns `true` if nobody has played yet.
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell == Cell::Empty)
    }

    /// Copy of this board with `action` marked for the player to move.
    ///
    /// Callers guarantee `action` is in range and empty.
    pub(crate) fn place(&self, action: Action) -> Board {
        let mut next = *self;
        next.cells[action.row][action.col] = self.player().to_cell();
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine cells in row-major order, e.g. `"XX./OO./..."`.
    ///
    /// `/`, `|` and line breaks separate rows and are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut index = 0;
        for c in s.chars().filter(|c| !matches!(c, '/' | '|' | '\n' | '\r')) {
            let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidBoard {
                reason: format!("unexpected character '{c}'"),
            })?;
            if index >= BOARD_SIZE * BOARD_SIZE {
                return Err(Error::InvalidBoard {
                    reason: format!("more than {} cells", BOARD_SIZE * BOARD_SIZE),
                });
            }
            cells[index / BOARD_SIZE][index % BOARD_SIZE] = cell;
            index += 1;
        }
        if index != BOARD_SIZE * BOARD_SIZE {
            return Err(Error::InvalidBoard {
                reason: format!("expected {} cells, got {index}", BOARD_SIZE * BOARD_SIZE),
            });
        }
        Self::from_cells(cells)
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}
