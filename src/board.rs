//! Board state representation and turn/move rules

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::LineAnalyzer;

/// A cell on the tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
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
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game.
///
/// X is the maximizer and always moves first; O is the minimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move target: the (row, column) of an empty cell on some board.
///
/// Actions are defined relative to a specific board; an action valid for one
/// board may be invalid for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board of cells, indexed by (row, column) with row, column in {0,1,2}.
///
/// This type implements `Copy` for efficiency since it's only 9 bytes. A board
/// is an immutable value: [`Board::apply`] returns a new board and never
/// mutates the original, so a parent state is never aliased by its successors.
/// The player to move is derived from the piece counts rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; 3]; 3],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl Board {
    /// Create a new empty board with X to move
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_minimax::{Board, Player};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.current_player(), Player::X);
    /// assert_eq!(board.legal_actions().len(), 9);
    /// ```
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::X => count.x += 1,
                    Cell::O => count.o += 1,
                    Cell::Empty => {}
                }
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order
    /// (whitespace is filtered out). The player to move is implied by the
    /// piece counts, with X always opening.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are provided
    /// - Any character is not a valid cell representation
    /// - The piece counts are unreachable by legal play (X must have the same
    ///   number of marks as O, or exactly one more)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(9).enumerate() {
            board.cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                })?;
        }

        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if the cell at (row, col) is empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// Get the player whose turn it is.
    ///
    /// X moves on even occupied counts, O on odd ones, so turns alternate
    /// strictly from the empty board. The result is not game-relevant on a
    /// terminal board; callers should check [`Board::is_terminal`] first.
    pub fn current_player(&self) -> Player {
        if self.occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Get all legal actions: the empty cells, enumerated row-major.
    ///
    /// The result has set semantics; the enumeration order is not part of the
    /// contract. A board won before the grid filled still reports its empty
    /// cells, matching the loose terminal contract of [`Board::current_player`].
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == Cell::Empty {
                    actions.push(Action { row, col });
                }
            }
        }
        actions
    }

    /// Apply an action and return the resulting board.
    ///
    /// The mark placed belongs to [`Board::current_player`] evaluated on the
    /// board prior to the move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if either coordinate is outside {0,1,2}
    /// or the target cell is already occupied.
    ///
    /// [`Error::InvalidMove`]: crate::Error::InvalidMove
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        let Action { row, col } = action;
        if row >= 3 || col >= 3 || !self.is_empty_at(row, col) {
            return Err(crate::Error::InvalidMove { row, col });
        }

        let mut next = *self;
        next.cells[row][col] = self.current_player().to_cell();
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full grid)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.legal_actions().is_empty()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.legal_actions().is_empty() && self.winner().is_none()
    }

    /// Scalar outcome from the maximizer's perspective: +1 if X has won, -1
    /// if O has won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards; a non-terminal board reports 0,
    /// which the search relies on being total.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Get the row-major string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&c| c.to_char())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
