//! Heuristic move ordering for the search

use crate::board::{Board, Player};
use crate::evaluate::{evaluate, WIN_SCORE};
use crate::{CENTER, HEIGHT, WIDTH};

/// Bonus for playing in the center column, reduced by `CENTER_STEP` per column away from it
const CENTER_BIAS: i32 = 30;
const CENTER_STEP: i32 = 10;
/// Bonus for stacking directly on one of the side's own pieces
const BUILDING_BONUS: i32 = 40;

/// Sorted sequence of playable columns, best first
///
/// Columns are yielded once each in descending score order, with ties going
/// to the leftmost column.
pub struct MoveSorter {
    size: usize,
    // column and score
    moves: [(usize, i32); WIDTH],
}

impl MoveSorter {
    pub fn new() -> Self {
        Self {
            size: 0,
            moves: [(0, 0); WIDTH],
        }
    }

    /// Inserts a move, keeping the buffer in ascending score order.
    ///
    /// A move goes after existing moves of the same score, so pushing columns
    /// right to left makes the leftmost column pop first among equals.
    pub fn push(&mut self, column: usize, score: i32) {
        let mut pos = self.size;
        self.size += 1;
        while pos != 0 && self.moves[pos - 1].1 > score {
            self.moves[pos] = self.moves[pos - 1];
            pos -= 1;
        }
        self.moves[pos] = (column, score);
    }
}

impl Default for MoveSorter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for MoveSorter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self.size {
            0 => None,
            _ => {
                self.size -= 1;
                Some(self.moves[self.size].0)
            }
        }
    }
}

/// Heuristic score of dropping `player`'s piece in `column`, or `None` if the column is full
pub fn move_score(board: &mut Board, column: usize, player: Player) -> Option<i32> {
    board.with_piece(column, player, |board, row| {
        if board.has_line(player) {
            return WIN_SCORE;
        }

        let mut score = evaluate(board, player);
        score += CENTER_BIAS - CENTER_STEP * (column as i32 - CENTER as i32).abs();
        if row + 1 < HEIGHT && board.get(row + 1, column) == player.cell() {
            score += BUILDING_BONUS;
        }
        score
    })
}

/// Orders the playable columns for `player` so the most promising are searched first.
///
/// The board is restored before returning.
pub fn ordered_moves(board: &mut Board, player: Player) -> MoveSorter {
    let mut moves = MoveSorter::new();
    // push right to left so ties resolve to the lower column
    for column in (0..WIDTH).rev() {
        if let Some(score) = move_score(board, column, player) {
            moves.push(column, score);
        }
    }
    moves
}
