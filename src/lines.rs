//! Winning line analysis

use std::collections::HashSet;

use crate::board::{Action, Cell, Player};

/// Winning line coordinates on the 3x3 board
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a line
    pub fn has_won(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
    }

    /// Find all cells that would immediately win for the player
    pub fn winning_moves(cells: &[[Cell; 3]; 3], player: Player) -> HashSet<Action> {
        let mut moves = HashSet::new();
        for line in &WINNING_LINES {
            if let Some(action) = Self::winning_move_in_line(cells, player, line) {
                moves.insert(action);
            }
        }
        moves
    }

    /// Find the winning move in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[[Cell; 3]; 3],
        player: Player,
        line: &[(usize, usize); 3],
    ) -> Option<Action> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_at = None;

        for &(r, c) in line {
            match cells[r][c] {
                Cell::Empty => {
                    if empty_at.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_at = Some(Action::new(r, c));
                }
                cell if cell == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_at } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> [[Cell; 3]; 3] {
        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, c) in s.chars().enumerate() {
            cells[i / 3][i % 3] = Cell::from_char(c).unwrap();
        }
        cells
    }

    #[test]
    fn test_has_won_horizontal() {
        let cells = cells_from("XXX......");
        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let cells = cells_from("O..O..O..");
        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonals() {
        let cells = cells_from("X...X...X");
        assert!(LineAnalyzer::has_won(&cells, Player::X));

        let cells = cells_from("..O.O.O..");
        assert!(LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_winning_moves() {
        // X.X on the top row; the gap completes it
        let cells = cells_from("X.X......");
        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Action::new(0, 1)));
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX. / X.. / ... threatens the top row and the left column
        let cells = cells_from("XX.X.....");
        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Action::new(0, 2)));
        assert!(moves.contains(&Action::new(2, 0)));
    }

    #[test]
    fn test_blocked_line_is_not_winning() {
        // Top row has two X's but an O in the gap
        let cells = cells_from("XOX......");
        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }
}
