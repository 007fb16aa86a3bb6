//! Adaptive search depth

use crate::board::{Board, Player};

/// Never search shallower than this in the opening
pub const MIN_OPENING_DEPTH: u32 = 3;
/// Positions with fewer pieces than this count as the opening
pub const OPENING_PIECES: usize = 8;
/// Positions with more pieces than this count as the endgame
pub const ENDGAME_PIECES: usize = 30;

/// Adjusts the requested depth to the position: deeper when either side has
/// an immediate win available or the board is nearly full, shallower in the opening.
pub fn adaptive_depth(board: &Board, base_depth: u32) -> u32 {
    let threats = board.count_immediate_wins(Player::O) + board.count_immediate_wins(Player::X);
    match threats {
        0 => {}
        1 => return base_depth + 1,
        _ => return base_depth + 2,
    }

    let pieces = board.count_occupied();
    if pieces < OPENING_PIECES {
        MIN_OPENING_DEPTH.max(base_depth.saturating_sub(1))
    } else if pieces > ENDGAME_PIECES {
        base_depth + 1
    } else {
        base_depth
    }
}
