//! Array board with gravity drops and line detection

use std::fmt;

use crate::error::{MoveError, ParseError};
use crate::{CONNECT, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    PlayerX,
    PlayerO,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn code(self) -> u128 {
        match self {
            Cell::Empty => 0b00,
            Cell::PlayerX => 0b01,
            Cell::PlayerO => 0b10,
        }
    }
}

/// One of the two sides. `X` always moves first, `O` is the side the
/// search engine maximizes.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The side every static evaluation is computed for
    pub const CANONICAL: Player = Player::O;

    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::X => Cell::PlayerX,
            Player::O => Cell::PlayerO,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Row/column steps of the four line directions: horizontal, vertical and both diagonals
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A 6x7 Connect 4 grid
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom. Pieces are
/// only ever written to the lowest open cell of a column, so a cell below an
/// occupied cell is never empty.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board by playing 1-indexed columns in order, starting with `X`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, ParseError> {
        let mut board = Self::new();
        let mut player = Player::X;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.place(column - 1, player)?;
                    player = player.other();
                }
                _ => return Err(ParseError::InvalidMove(column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a board from its rows, top row first, using `.` for empty cells
    /// and `X`/`O` for pieces
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseError> {
        if rows.len() != HEIGHT {
            return Err(ParseError::RowCount {
                expected: HEIGHT,
                found: rows.len(),
            });
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != WIDTH {
                return Err(ParseError::RowLength {
                    row,
                    expected: WIDTH,
                    found,
                });
            }
            for (column, c) in line.chars().enumerate() {
                board.cells[row][column] = match c.to_ascii_uppercase() {
                    '.' | ' ' | '_' => Cell::Empty,
                    'X' => Cell::PlayerX,
                    'O' => Cell::PlayerO,
                    other => return Err(ParseError::InvalidCell(other)),
                };
            }
        }

        // reject pieces that sit above a hole
        for row in 0..HEIGHT - 1 {
            for column in 0..WIDTH {
                if !board.cells[row][column].is_empty() && board.cells[row + 1][column].is_empty() {
                    return Err(ParseError::FloatingPiece { row, column });
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Returns the lowest empty row of a column, or `None` if it is full
    pub fn lowest_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).rev().find(|&row| self.cells[row][column].is_empty())
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.playable(column))
    }

    /// Drops a piece into a column, returning the row it landed on.
    /// The board is left untouched on failure.
    pub fn place(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        let row = self
            .lowest_open_row(column)
            .ok_or(MoveError::ColumnFull { column })?;
        self.cells[row][column] = player.cell();
        Ok(row)
    }

    /// Resets a cell written by `place`
    pub fn undo(&mut self, row: usize, column: usize) {
        self.cells[row][column] = Cell::Empty;
    }

    /// Drops a piece, runs `f` on the resulting board and takes the piece back.
    ///
    /// Returns `None` without calling `f` if the column is full.
    pub fn with_piece<R>(
        &mut self,
        column: usize,
        player: Player,
        f: impl FnOnce(&mut Board, usize) -> R,
    ) -> Option<R> {
        let row = self.lowest_open_row(column)?;
        self.cells[row][column] = player.cell();
        let result = f(self, row);
        self.cells[row][column] = Cell::Empty;
        Some(result)
    }

    /// Returns every line of `CONNECT` cells on the board
    pub fn windows(&self) -> impl Iterator<Item = [Cell; CONNECT]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(d_row, d_column)| {
            (0..HEIGHT).flat_map(move |row| {
                (0..WIDTH).filter_map(move |column| self.window(row, column, d_row, d_column))
            })
        })
    }

    fn window(&self, row: usize, column: usize, d_row: isize, d_column: isize) -> Option<[Cell; CONNECT]> {
        let span = CONNECT as isize - 1;
        let end_row = row as isize + d_row * span;
        let end_column = column as isize + d_column * span;
        if end_row < 0 || end_row >= HEIGHT as isize || end_column < 0 || end_column >= WIDTH as isize {
            return None;
        }

        let mut window = [Cell::Empty; CONNECT];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = row as isize + d_row * i as isize;
            let c = column as isize + d_column * i as isize;
            *cell = self.cells[r as usize][c as usize];
        }
        Some(window)
    }

    /// Checks whether `player` has `CONNECT` aligned pieces anywhere on the board
    pub fn has_line(&self, player: Player) -> bool {
        let cell = player.cell();
        self.windows().any(|window| window.iter().all(|&c| c == cell))
    }

    /// Checks whether dropping a piece in `column` completes a line for `player`
    pub fn is_winning_move(&mut self, column: usize, player: Player) -> bool {
        self.with_piece(column, player, |board, _| board.has_line(player))
            .unwrap_or(false)
    }

    /// Counts the columns in which `player` would complete a line with their next piece
    pub fn count_immediate_wins(&self, player: Player) -> usize {
        let mut scratch = *self;
        (0..WIDTH)
            .filter(|&column| scratch.is_winning_move(column, player))
            .count()
    }

    pub fn count_occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn count_empty(&self) -> usize {
        WIDTH * HEIGHT - self.count_occupied()
    }

    pub fn is_full(&self) -> bool {
        self.playable_columns().next().is_none()
    }

    /// Returns the board reflected left to right
    pub fn mirrored(&self) -> Self {
        let mut mirror = *self;
        for row in mirror.cells.iter_mut() {
            row.reverse();
        }
        mirror
    }

    /// Returns the board with its rows in reverse order, swapping the two
    /// diagonal directions. The result may have pieces above holes.
    pub fn flipped(&self) -> Self {
        let mut flip = *self;
        flip.cells.reverse();
        flip
    }

    /// Packs the grid into two bits per cell, a unique key for the contents
    pub fn packed(&self) -> u128 {
        self.cells
            .iter()
            .flatten()
            .fold(0u128, |key, cell| (key << 2) | cell.code())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::PlayerX => 'X',
                    Cell::PlayerO => 'O',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
