//! Minimax search with alpha-beta pruning and a transposition cache

use tracing::debug;

use crate::board::{Board, Player};
use crate::config::EngineConfig;
use crate::depth::adaptive_depth;
use crate::evaluate::{evaluate, WIN_SCORE};
use crate::ordering::ordered_moves;
use crate::transposition_table::{Entry, Key, TranspositionTable};

/// Root scores above this are a forced win, and end the root search early
pub const FORCED_WIN: i32 = 900_000;

/// Search parameters fixed for the whole tree
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchContext {
    /// Play on past the first line; terminal checks and the endgame horizon are skipped
    pub score_attack: bool,
    /// Depth the root was searched with
    pub original_depth: u32,
}

/// Outcome of a top-level search
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen column, or `None` when no column is playable
    pub column: Option<usize>,
    /// Score of the chosen line from `O`'s point of view
    pub score: i32,
    /// Depth the search ran at after adaptive adjustment
    pub depth: u32,
    /// Nodes visited by this search
    pub nodes: usize,
}

/// A game tree searcher owning its transposition cache
///
/// # Notes
/// All scores are from the point of view of `O` ([`Player::CANONICAL`]):
/// the maximizing side plays `O` and the minimizing side plays `X`. A win is
/// worth `WIN_SCORE` plus the remaining depth, so faster wins score higher
/// and slower losses score less negative.
///
/// The cache survives between searches and is only ever emptied wholesale
/// when it fills up.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    transposition_table: TranspositionTable,
    node_count: usize,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::new_with_transposition_table(TranspositionTable::with_capacity(
            config.cache_capacity,
        ))
    }

    /// Creates a new `SearchEngine` reusing an existing transposition table
    pub fn new_with_transposition_table(transposition_table: TranspositionTable) -> Self {
        Self {
            transposition_table,
            node_count: 0,
        }
    }

    /// The number of nodes searched by this `SearchEngine` so far (for diagnostics only)
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn cache_len(&self) -> usize {
        self.transposition_table.len()
    }

    pub fn clear_cache(&mut self) {
        self.transposition_table.clear();
    }

    /// Picks a move for `side` without modifying `board`.
    ///
    /// The depth is adapted to the position once, then the tree is searched
    /// on a private copy of the board.
    pub fn best_move(
        &mut self,
        board: &Board,
        side: Player,
        base_depth: u32,
        score_attack: bool,
    ) -> SearchResult {
        let depth = adaptive_depth(board, base_depth);
        let context = SearchContext {
            score_attack,
            original_depth: depth,
        };
        let nodes_before = self.node_count;

        let mut scratch = *board;
        let (column, score) = self.search(
            &mut scratch,
            depth,
            i32::MIN,
            i32::MAX,
            side == Player::CANONICAL,
            context,
        );
        debug_assert_eq!(&scratch, board, "search must restore the board");

        let result = SearchResult {
            column,
            score,
            depth,
            nodes: self.node_count - nodes_before,
        };
        debug!(
            side = %side,
            base_depth,
            depth,
            nodes = result.nodes,
            cache = self.transposition_table.len(),
            column = ?result.column,
            score,
            "search finished"
        );
        result
    }

    /// Minimax with alpha-beta pruning
    ///
    /// Returns the best column for the side to move (`O` when `maximizing`)
    /// and the score of the position. The board is restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        mut depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        context: SearchContext,
    ) -> (Option<usize>, i32) {
        self.node_count += 1;

        let key = Key::new(board, depth, maximizing);
        if let Some(entry) = self.transposition_table.get(&key) {
            return (entry.column, entry.score);
        }

        if !context.score_attack {
            if board.has_line(Player::CANONICAL) {
                return (None, WIN_SCORE + depth as i32);
            }
            if board.has_line(Player::CANONICAL.other()) {
                return (None, -WIN_SCORE - depth as i32);
            }

            // close to the end of the game, search all the way to a full board
            let empty = board.count_empty() as u32;
            if empty <= context.original_depth * 2 {
                depth = empty;
            }
        }

        if depth == 0 {
            return (None, evaluate(board, Player::CANONICAL));
        }

        let side = if maximizing {
            Player::CANONICAL
        } else {
            Player::CANONICAL.other()
        };
        let mut moves = ordered_moves(board, side).peekable();
        let mut best_column = match moves.peek() {
            Some(&column) => Some(column),
            None => return (None, 0),
        };

        let mut best_score;
        if maximizing {
            best_score = i32::MIN;
            for column in moves {
                let score = match board.with_piece(column, side, |board, _| {
                    self.search(board, depth - 1, alpha, beta, false, context).1
                }) {
                    Some(score) => score,
                    None => continue,
                };

                if score > best_score {
                    best_score = score;
                    best_column = Some(column);
                    // a forced win at the root is good enough
                    if depth == context.original_depth && score > FORCED_WIN {
                        self.transposition_table.force_set(
                            key,
                            Entry {
                                column: best_column,
                                score: best_score,
                            },
                        );
                        return (best_column, best_score);
                    }
                }
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    break;
                }
            }
        } else {
            best_score = i32::MAX;
            for column in moves {
                let score = match board.with_piece(column, side, |board, _| {
                    self.search(board, depth - 1, alpha, beta, true, context).1
                }) {
                    Some(score) => score,
                    None => continue,
                };

                if score < best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                beta = beta.min(best_score);
                if beta <= alpha {
                    break;
                }
            }
        }

        self.transposition_table.set(
            key,
            Entry {
                column: best_column,
                score: best_score,
            },
        );
        (best_column, best_score)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
