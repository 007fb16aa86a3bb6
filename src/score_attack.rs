//! Line counting for the score-attack mode

use crate::board::{Board, Player};
use crate::{CONNECT, HEIGHT, WIDTH};

/// Points for a finished run: one per window of four it covers
fn run_points(streak: usize) -> u32 {
    if streak >= CONNECT {
        (streak - (CONNECT - 1)) as u32
    } else {
        0
    }
}

/// Scores the runs along one row or column
fn line_points(cells: impl Iterator<Item = bool>) -> u32 {
    let mut points = 0;
    let mut streak = 0;
    for own in cells {
        if own {
            streak += 1;
        } else {
            points += run_points(streak);
            streak = 0;
        }
    }
    points + run_points(streak)
}

/// Counts the lines `player` has made on a board.
///
/// Rows and columns score every run of four or more by the number of windows
/// of four it covers, so a run of five scores 2. Diagonals score one point
/// per aligned window of four.
pub fn final_score(board: &Board, player: Player) -> u32 {
    let own = player.cell();
    let mut score = 0;

    for row in 0..HEIGHT {
        score += line_points((0..WIDTH).map(|column| board.get(row, column) == own));
    }
    for column in 0..WIDTH {
        score += line_points((0..HEIGHT).map(|row| board.get(row, column) == own));
    }

    // down-right diagonals
    for row in 0..=HEIGHT - CONNECT {
        for column in 0..=WIDTH - CONNECT {
            if (0..CONNECT).all(|i| board.get(row + i, column + i) == own) {
                score += 1;
            }
        }
    }
    // up-right diagonals
    for row in CONNECT - 1..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            if (0..CONNECT).all(|i| board.get(row - i, column + i) == own) {
                score += 1;
            }
        }
    }

    score
}
