use anyhow::{bail, Result};
use indicatif::ProgressBar;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::io::{stdin, stdout, Stdin, Write};
use std::path::PathBuf;

use connect4_engine::{
    board::Player,
    config::{Config, Difficulty, GameMode, Opponent, CONFIG_FILE},
    game::{choose_ai_move, Game, Outcome},
    search::SearchEngine,
};

mod render;

/// Side played by the AI; humans always move first
const AI_SIDE: Player = Player::O;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config_path = std::env::var_os("CONNECT4_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = Config::load_or_default(&config_path)?;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("CLASSIC MODE: connect 4 pieces in a row, the game stops on the first line.");
    println!("SCORE ATTACK: play until the board is full, the most lines wins.\n");

    let mode = match config.mode {
        Some(mode) => mode,
        None => match read_number(&stdin, "1. CLASSIC MODE\n2. SCORE ATTACK\nChoice: ")? {
            2 => GameMode::ScoreAttack,
            _ => GameMode::Classic,
        },
    };

    let opponent = match config.opponent {
        Some(opponent) => opponent,
        None => match read_number(&stdin, "1. HUMAN VS HUMAN\n2. HUMAN VS AI\nChoice: ")? {
            2 => Opponent::Ai,
            _ => Opponent::Human,
        },
    };

    let difficulty = match (opponent, config.difficulty) {
        (Opponent::Human, _) => None,
        (Opponent::Ai, Some(difficulty)) => Some(difficulty),
        (Opponent::Ai, None) => Some(Difficulty::from_choice(read_number(
            &stdin,
            "1. EASY (Depth 2)\n2. MEDIUM (Depth 4)\n3. HARD (Depth 6)\n4. EXPERT (Depth 7)\nChoice: ",
        )?)),
    };

    // keep the engine out here so its cache is re-used between moves
    let mut engine = SearchEngine::new(config.engine);
    let mut game = Game::new(mode);

    // game loop
    loop {
        render::display(&game)?;

        match game.outcome() {
            Outcome::Playing => {
                let column = match difficulty {
                    // AI player
                    Some(difficulty) if game.to_move() == AI_SIDE => {
                        let spinner = ProgressBar::new_spinner();
                        spinner.set_message(&format!(
                            "AI is thinking (depth {})...",
                            difficulty.depth()
                        ));
                        spinner.enable_steady_tick(100);
                        let column = choose_ai_move(&mut engine, &game, difficulty);
                        spinner.finish_and_clear();

                        match column {
                            Some(column) => {
                                println!("AI plays: {}", column + 1);
                                column
                            }
                            None => bail!("no legal move left for the AI"),
                        }
                    }

                    // human player
                    _ => {
                        let prompt = format!("Player {}, choose column (1-7): ", game.to_move());
                        match read_number(&stdin, &prompt)? {
                            0 => {
                                println!("Invalid move, columns start at 1");
                                continue;
                            }
                            column => column as usize - 1,
                        }
                    }
                };

                if let Err(err) = game.play(column) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            Outcome::Won(player) => {
                if mode == GameMode::ScoreAttack {
                    let (x, o) = game.scores();
                    println!("FINAL SCORE: X={} | O={}", x, o);
                }
                if difficulty.is_some() && player == AI_SIDE {
                    println!("AI wins!");
                } else {
                    println!("Player {} wins!", player);
                }
                break;
            }
            Outcome::Draw => {
                if mode == GameMode::ScoreAttack {
                    let (x, o) = game.scores();
                    println!("FINAL SCORE: X={} | O={}", x, o);
                }
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

/// Prompts until a non-negative number is entered
fn read_number(stdin: &Stdin, prompt: &str) -> Result<u32> {
    print!("{}", prompt);
    stdout().flush()?;
    loop {
        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            bail!("input closed");
        }
        match buffer.trim().parse::<u32>() {
            Ok(number) => return Ok(number),
            Err(_) => {
                print!("Invalid input. Please enter a number: ");
                stdout().flush()?;
            }
        }
    }
}
