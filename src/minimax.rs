//! Exhaustive minimax search

use tracing::{debug, instrument};

use crate::board::{Action, Board, Player};

/// Returns the optimal action for the player to move, or `None` on a
/// terminal board.
///
/// X maximizes the backed-up [`Board::utility`] of the resulting position, O
/// minimizes it. Every reachable terminal state is visited (no pruning, no
/// memoization); the tree is at most 9 plies deep, so a root call from the
/// empty board evaluates on the order of 9! leaves. Among equally optimal
/// actions the first one encountered is kept, so the choice is deterministic
/// over the row-major action order.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{Board, minimax};
///
/// let board = Board::new();
/// let action = minimax(&board).expect("empty board is not terminal");
/// assert!(board.apply(action).is_ok());
/// ```
#[instrument]
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    let mut best_action = None;
    match board.current_player() {
        Player::X => {
            let mut best_value = i32::MIN;
            for action in board.legal_actions() {
                let value = min_value(&child(board, action));
                if value > best_value {
                    best_value = value;
                    best_action = Some(action);
                }
            }
            debug!(?best_action, best_value, "maximizer move selected");
        }
        Player::O => {
            let mut best_value = i32::MAX;
            for action in board.legal_actions() {
                let value = max_value(&child(board, action));
                if value < best_value {
                    best_value = value;
                    best_action = Some(action);
                }
            }
            debug!(?best_action, best_value, "minimizer move selected");
        }
    }

    best_action
}

/// Apply an action drawn from `legal_actions`.
///
/// A failure here is an internal contract violation, not a recoverable
/// runtime error.
fn child(board: &Board, action: Action) -> Board {
    board
        .apply(action)
        .expect("legal action generation should not fail")
}

/// Best achievable value for X from this position, assuming optimal play by
/// both sides. Mutually recursive with [`min_value`]; each call removes one
/// empty cell, so the recursion terminates within 9 plies.
fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut value = i32::MIN;
    for action in board.legal_actions() {
        value = value.max(min_value(&child(board, action)));
    }
    value
}

/// Dual of [`max_value`]: best achievable value for O.
fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut value = i32::MAX;
    for action in board.legal_actions() {
        value = value.min(max_value(&child(board, action)));
    }
    value
}
