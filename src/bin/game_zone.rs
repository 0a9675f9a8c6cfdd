//! game-zone: play the Game Zone mini-games in a terminal.
//!
//! Both games are auto-played from a seed so that a session can be
//! reproduced exactly. Wins are credited to the points ledger.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::{Parser, Subcommand};

use game_zone::board::{Board, CellKind};
use game_zone::core::GameZoneConfig;
use game_zone::ladders::{GameState, LaddersEngine};
use game_zone::memory::{FlipOutcome, MemoryMatch, MISMATCH_HIDE_DELAY};
use game_zone::rules::MiniGame;
use game_zone::zone::GameZone;
use game_zone::Error;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Seed for every roll and deal (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; missing sections use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll until the final cell is reached.
    Ladders {
        /// Show the rolling animation in real time.
        #[arg(long)]
        animate: bool,

        /// Print the board after every roll.
        #[arg(long)]
        show_board: bool,

        /// Give up after this many rolls.
        #[arg(long, default_value_t = 500)]
        max_rolls: u32,
    },
    /// Flip cards until every pair is found.
    Memory {
        /// Wait between a mismatch and hiding it, like the on-screen game.
        #[arg(long)]
        realtime: bool,
    },
    /// List the titles and their rewards.
    Catalog,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => GameZoneConfig::from_json_file(path)?,
        None => GameZoneConfig::default(),
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut zone = GameZone::new(config, seed)?;
    log::info!("seed {}", zone.seed());

    match cli.command {
        Command::Ladders {
            animate,
            show_board,
            max_rolls,
        } => {
            let mut engine = zone.ladders()?;
            let state = play_ladders(&mut engine, animate, show_board, max_rolls);
            if let Some(points) = zone.settle(&state) {
                println!("+{} points earned.", points);
            }
        }
        Command::Memory { realtime } => {
            let mut game = zone.memory()?;
            play_memory(&mut game, realtime);
            if let Some(points) = zone.settle(&game) {
                println!("You won in {} moves! +{} points earned.", game.moves(), points);
            }
        }
        Command::Catalog => {
            for info in zone.catalog().iter() {
                println!(
                    "{:<16} {:<7} {:<12} {:>4} pts{}",
                    info.name,
                    info.difficulty,
                    info.category,
                    info.points,
                    if info.playable { "" } else { "  (coming soon)" }
                );
            }
        }
    }

    println!("Total points: {}", zone.ledger().balance());
    Ok(())
}

fn play_ladders(engine: &mut LaddersEngine, animate: bool, show_board: bool, max_rolls: u32) -> GameState {
    let mut state = engine.reset();
    println!("{}", state.message);

    while !state.won && state.rolls_taken < max_rolls {
        state = if animate {
            match engine.begin_roll(&state) {
                Some((rolling, animation)) => {
                    println!("{}", rolling.message);
                    for (_, face) in animation.frames() {
                        print!("[{}] ", face);
                        let _ = io::stdout().flush();
                        thread::sleep(animation.frame_interval());
                    }
                    println!();
                    engine.commit_roll(&rolling, &animation)
                }
                None => state,
            }
        } else {
            engine.roll(&state)
        };

        if let Some(face) = state.last_roll {
            println!("Roll {:>3}: [{}] {}", state.rolls_taken, face, state.message);
        }
        if show_board {
            print_board(engine.board(), &state);
        }
    }

    if !state.won {
        println!("Stopped after {} rolls at position {}.", state.rolls_taken, state.position);
    }
    state
}

fn print_board(board: &Board, state: &GameState) {
    for row in board.rows(10) {
        let line: Vec<String> = row
            .into_iter()
            .map(|cell| {
                let mark = if cell == state.position {
                    '@'
                } else {
                    match board.cell_kind(cell) {
                        CellKind::SnakeHead => 'S',
                        CellKind::LadderFoot => 'L',
                        CellKind::Plain => ' ',
                    }
                };
                format!("{:>3}{}", cell, mark)
            })
            .collect();
        println!("{}", line.join(" "));
    }
}

/// Plays with perfect recall of every card it has seen.
fn play_memory(game: &mut MemoryMatch, realtime: bool) {
    let mut seen: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut unseen: Vec<usize> = (0..game.len()).collect();

    while !game.is_won() {
        let known_pair = seen
            .values()
            .find(|idx| idx.len() == 2 && !game.is_matched(idx[0]))
            .map(|idx| (idx[0], idx[1]));

        let outcome = match known_pair {
            Some((a, b)) => {
                game.flip(a);
                game.flip(b)
            }
            None => {
                let Some(first) = next_unseen(&mut unseen) else {
                    break;
                };
                let symbol = reveal(game, first, &mut seen);
                let partner = seen[&symbol].iter().copied().find(|&i| i != first);
                match partner {
                    Some(p) => game.flip(p),
                    None => match next_unseen(&mut unseen) {
                        Some(second) => {
                            let outcome = game.flip(second);
                            remember(game, second, &mut seen);
                            outcome
                        }
                        None => break,
                    },
                }
            }
        };

        match outcome {
            FlipOutcome::Matched(a, b) => println!(
                "Move {:>2}: {} {} match! score {}",
                game.moves(),
                game.symbol(a).unwrap_or("?"),
                game.symbol(b).unwrap_or("?"),
                game.score()
            ),
            FlipOutcome::Mismatched(a, b) => {
                println!(
                    "Move {:>2}: {} {} no match",
                    game.moves(),
                    game.visible(a).unwrap_or("?"),
                    game.visible(b).unwrap_or("?")
                );
                if realtime {
                    thread::sleep(MISMATCH_HIDE_DELAY);
                }
                game.hide_mismatch();
            }
            FlipOutcome::Revealed(_) | FlipOutcome::Ignored => {}
        }
    }
}

fn next_unseen(unseen: &mut Vec<usize>) -> Option<usize> {
    (!unseen.is_empty()).then(|| unseen.remove(0))
}

/// Flip a face-down card as the first of an attempt and remember it.
fn reveal(game: &mut MemoryMatch, index: usize, seen: &mut BTreeMap<String, Vec<usize>>) -> String {
    game.flip(index);
    remember(game, index, seen)
}

fn remember(game: &MemoryMatch, index: usize, seen: &mut BTreeMap<String, Vec<usize>>) -> String {
    let symbol = game.visible(index).unwrap_or_default().to_string();
    let entry = seen.entry(symbol.clone()).or_default();
    if !entry.contains(&index) {
        entry.push(index);
    }
    symbol
}
