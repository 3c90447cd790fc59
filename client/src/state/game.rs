//! Tic-tac-toe state machine shown while a styling request is pending.
//!
//! DESIGN
//! ======
//! The game is pure data with no rendering or network dependency. It only
//! exists to keep the user busy, so invalid moves are silently ignored rather
//! than reported.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

/// Number of cells on the 3x3 board.
pub const CELL_COUNT: usize = 9;

/// Winning triples, scanned in order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

/// Fixed 3x3 board; `None` is an empty cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    /// Mark at `index`, or `None` when empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.cells
    }

    /// Copy of this board with `index` set to `player`.
    #[must_use]
    fn with_mark(mut self, index: usize, player: Player) -> Self {
        self.cells[index] = Some(player);
        self
    }

    /// The symbol of the first uniform, non-empty line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }
}

/// Game state: either waiting for `next` to move, or finished with a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress { board: Board, next: Player },
    Won { board: Board, winner: Player },
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress { board: Board::default(), next: Player::X }
    }
}

impl GameState {
    /// Place the current player's mark at `index`.
    ///
    /// Ignored when the game is already won, the index is out of range, or
    /// the cell is occupied. Returns whether the move was applied.
    pub fn apply_move(&mut self, index: usize) -> bool {
        let Self::InProgress { board, next } = *self else {
            return false;
        };
        if !board.is_empty_at(index) {
            return false;
        }

        let board = board.with_mark(index, next);
        *self = match board.winner() {
            Some(winner) => Self::Won { board, winner },
            None => Self::InProgress { board, next: next.opponent() },
        };
        true
    }

    /// Discard the current game and start over with X to move.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        match self {
            Self::InProgress { board, .. } | Self::Won { board, .. } => board,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Won { winner, .. } => Some(*winner),
            Self::InProgress { .. } => None,
        }
    }

    #[must_use]
    pub fn next_player(&self) -> Option<Player> {
        match self {
            Self::InProgress { next, .. } => Some(*next),
            Self::Won { .. } => None,
        }
    }

    /// Status line shown under the board.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            Self::Won { winner, .. } => format!("Winner: {}!", winner.symbol()),
            Self::InProgress { next, .. } => format!("Next player: {}", next.symbol()),
        }
    }
}
