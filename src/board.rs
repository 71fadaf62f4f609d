use std::fmt;
use thiserror::Error;

/// Board edge length. The win rule is fixed at 4-in-a-row on this grid.
pub const SIZE: usize = 4;
pub const WIN_LEN: usize = 4;
/// Rows + columns + both main diagonals.
pub const LINE_COUNT: usize = 2 * SIZE + 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// X is the human and moves first; O is the engine and maximizes in search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },
    #[error("no empty cell remains")]
    NoLegalMove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    XWins,
    OWins,
    Draw,
}

/// Fixed 4x4 grid, row-major. Equality covers every cell, which makes the
/// board usable directly as a memoization key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-range coordinates are programmer errors and panic.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Places `player`'s mark, rejecting occupied cells before any mutation.
    pub fn apply(&mut self, mv: Move, player: Player) -> Result<(), GameError> {
        if self.cells[mv.row][mv.col] != Cell::Empty {
            return Err(GameError::InvalidMove { row: mv.row, col: mv.col });
        }
        self.cells[mv.row][mv.col] = player.mark();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&c| c != Cell::Empty))
    }

    pub fn empty_cells(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(SIZE * SIZE);
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == Cell::Empty {
                    out.push(Move::new(row, col));
                }
            }
        }
        out
    }

    /// All winnable lines in a stable order: 4 rows, then 4 columns, then the
    /// main diagonal, then the anti-diagonal.
    pub fn lines(&self) -> [[Cell; SIZE]; LINE_COUNT] {
        let mut lines = [[Cell::Empty; SIZE]; LINE_COUNT];
        for i in 0..SIZE {
            lines[i] = self.cells[i];
            for j in 0..SIZE {
                lines[SIZE + i][j] = self.cells[j][i];
            }
            lines[2 * SIZE][i] = self.cells[i][i];
            lines[2 * SIZE + 1][i] = self.cells[i][SIZE - 1 - i];
        }
        lines
    }

    /// True iff some line holds `run` consecutive cells of `player`. The
    /// counter resets on any other cell, so gapped marks never count.
    pub fn has_run(&self, player: Player, run: usize) -> bool {
        let mark = player.mark();
        self.lines().iter().any(|line| {
            let mut count = 0;
            for &c in line {
                if c == mark {
                    count += 1;
                    if count == run {
                        return true;
                    }
                } else {
                    count = 0;
                }
            }
            false
        })
    }

    /// Terminal signal for the external caller, queried after any move.
    pub fn state(&self) -> GameState {
        if self.has_run(Player::X, WIN_LEN) {
            GameState::XWins
        } else if self.has_run(Player::O, WIN_LEN) {
            GameState::OWins
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0   1   2   3")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r} ")?;
            for &c in row {
                let s = match c {
                    Cell::Empty => ".",
                    Cell::X => "X",
                    Cell::O => "O",
                };
                write!(f, "  {s} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
