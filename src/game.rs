//! Game state for the outer play loop

use std::cmp::Ordering;

use tracing::debug;

use crate::board::{Board, Player};
use crate::config::{Difficulty, GameMode};
use crate::error::MoveError;
use crate::score_attack::final_score;
use crate::search::SearchEngine;
use crate::WIDTH;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Playing,
    Won(Player),
    Draw,
}

/// A game in progress. `X` moves first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    mode: GameMode,
    num_moves: usize,
    outcome: Outcome,
}

impl Game {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            mode,
            num_moves: 0,
            outcome: Outcome::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Line counts of `X` and `O`
    pub fn scores(&self) -> (u32, u32) {
        (
            final_score(&self.board, Player::X),
            final_score(&self.board, Player::O),
        )
    }

    /// Plays a 0-indexed column for the side to move
    pub fn play(&mut self, column: usize) -> Result<Outcome, MoveError> {
        if self.outcome != Outcome::Playing {
            return Err(MoveError::GameOver);
        }
        self.board.place(column, self.to_move)?;
        self.num_moves += 1;

        self.outcome = match self.mode {
            GameMode::Classic if self.board.has_line(self.to_move) => Outcome::Won(self.to_move),
            GameMode::Classic if self.board.is_full() => Outcome::Draw,
            GameMode::ScoreAttack if self.board.is_full() => {
                let (x, o) = self.scores();
                match x.cmp(&o) {
                    Ordering::Greater => Outcome::Won(Player::X),
                    Ordering::Less => Outcome::Won(Player::O),
                    Ordering::Equal => Outcome::Draw,
                }
            }
            _ => Outcome::Playing,
        };

        if self.outcome == Outcome::Playing {
            self.to_move = self.to_move.other();
        }
        Ok(self.outcome)
    }
}

/// Finds a column that wins on the spot for `side` or blocks such a win for
/// the opponent, whichever comes first scanning left to right
pub fn immediate_tactic(board: &Board, side: Player) -> Option<usize> {
    let mut scratch = *board;
    (0..WIDTH).find(|&column| {
        scratch.is_winning_move(column, side) || scratch.is_winning_move(column, side.other())
    })
}

/// Picks the AI's column for the side to move.
///
/// Outside score-attack games an instant win or block is played without
/// searching. Falls back to the leftmost playable column if the search has no move.
pub fn choose_ai_move(
    engine: &mut SearchEngine,
    game: &Game,
    difficulty: Difficulty,
) -> Option<usize> {
    let side = game.to_move();
    let score_attack = game.mode().is_score_attack();

    if !score_attack {
        if let Some(column) = immediate_tactic(game.board(), side) {
            debug!(side = %side, column, "playing instant win or block");
            return Some(column);
        }
    }

    let result = engine.best_move(game.board(), side, difficulty.depth(), score_attack);
    result
        .column
        .or_else(|| game.board().playable_columns().next())
}
