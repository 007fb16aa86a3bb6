//! Static evaluation of a position
//!
//! Scores are additive and unnormalised: positional bonuses for pieces near
//! the center plus a threat score for every line of four cells on the board.

use crate::board::{Board, Cell, Player};
use crate::{CENTER, CONNECT, HEIGHT};

/// Score of a completed line, also used as the win magnitude by the search
pub const WIN_SCORE: i32 = 1_000_000;

pub const CENTER_BONUS: i32 = 200;
pub const NEAR_CENTER_BONUS: i32 = 100;

pub const OPEN_THREE: i32 = 5000;
pub const THREE: i32 = 150;
pub const CONNECTED_TWO: i32 = 50;
pub const SPLIT_TWO: i32 = 60;

pub const OPPONENT_OPEN_THREE: i32 = -10_000;
pub const OPPONENT_THREE: i32 = -500;
pub const OPPONENT_TWO: i32 = -50;

/// Scores a position as goodness for `player`
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let own = player.cell();
    let mut score = 0;

    // center control, the near-center bonus counts at most once per row
    for row in 0..HEIGHT {
        if board.get(row, CENTER) == own {
            score += CENTER_BONUS;
        }
        if board.get(row, CENTER - 1) == own || board.get(row, CENTER + 1) == own {
            score += NEAR_CENTER_BONUS;
        }
    }

    score + board.windows().map(|window| score_window(&window, own)).sum::<i32>()
}

/// Scores a single line of four cells for the side owning `own`
pub fn score_window(window: &[Cell; CONNECT], own: Cell) -> i32 {
    let own_count = window.iter().filter(|&&c| c == own).count();
    let empty_count = window.iter().filter(|c| c.is_empty()).count();
    let opponent_count = CONNECT - own_count - empty_count;

    if own_count == CONNECT {
        return WIN_SCORE;
    }

    // both ends of the window open, which a window holding three pieces never is
    let ends_open = window[0].is_empty() && window[CONNECT - 1].is_empty();
    let mut score = 0;

    if own_count == 3 && empty_count == 1 {
        score += if ends_open { OPEN_THREE } else { THREE };
    } else if own_count == 2 && empty_count == 2 {
        let connected = window.windows(2).any(|pair| pair[0] == own && pair[1] == own);
        score += if connected { CONNECTED_TWO } else { SPLIT_TWO };
    }

    if opponent_count == 3 && empty_count == 1 {
        score += if ends_open {
            OPPONENT_OPEN_THREE
        } else {
            OPPONENT_THREE
        };
    } else if opponent_count == 2 && empty_count == 2 {
        score += OPPONENT_TWO;
    }

    score
}
