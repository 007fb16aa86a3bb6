use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{
    board::Cell,
    config::GameMode,
    game::Game,
    HEIGHT, WIDTH,
};

/// Draws the board, plus the running line counts in score-attack games
pub fn display(game: &Game) -> Result<()> {
    let mut stdout = stdout();

    let title = match game.mode() {
        GameMode::Classic => "CLASSIC MODE",
        GameMode::ScoreAttack => "SCORE ATTACK",
    };
    stdout.queue(PrintStyledContent(
        style(format!("\n=== {} ===\n", title)).attribute(Attribute::Bold),
    ))?;

    if game.mode() == GameMode::ScoreAttack {
        let (x, o) = game.scores();
        stdout
            .queue(PrintStyledContent(style(format!("X: {}", x)).with(Color::Red)))?
            .queue(PrintStyledContent(style("    ")))?
            .queue(PrintStyledContent(style(format!("O: {}\n", o)).with(Color::Yellow)))?;
    }

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    let board = game.board();
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, column) {
                        Cell::PlayerX => Color::Red,
                        Cell::PlayerO => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
