//! Cube Turn Engine
//!
//! Expands blindfold commutator notation into face turns and plays them on
//! a headless 3x3x3 model, printing the resulting piece layout.

use std::error::Error;
use std::io::Write;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{error, info};

use cubeturn::executor::{ExecutorConfig, ExecutorEvent, MoveExecutor};
use cubeturn::inverse::reverse_sequence;
use cubeturn::pieces::solved_layout;
use cubeturn::{catalog, grid, Algorithm, AlgorithmPlayer, ManualScheduler, Move};

/// Expands and executes Rubik's cube algorithm notation.
#[derive(Parser)]
#[command(name = "cubeturn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the parts and full move sequence of an algorithm.
    Expand {
        /// Plain moves, or a commutator such as "[R U R': [U, R2]]".
        notation: String,
    },
    /// Print the inverse of a move sequence.
    Invert {
        moves: String,
    },
    /// Play an algorithm on a solved cube and print the final layout.
    Run {
        /// Notation to play. Ignored when --name is given.
        notation: Option<String>,
        /// Play a built-in algorithm instead.
        #[arg(long)]
        name: Option<String>,
        /// Nominal animation time per move, in milliseconds.
        #[arg(long, default_value_t = 600)]
        move_ms: u64,
    },
    /// List the built-in algorithms.
    List,
}

/// Initialize the logger with appropriate settings
fn init_logger() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Expand { notation } => run_expand(&notation),
        Command::Invert { moves } => {
            println!("{}", reverse_sequence(&moves));
            Ok(())
        }
        Command::Run {
            notation,
            name,
            move_ms,
        } => run_play(notation.as_deref(), name.as_deref(), move_ms),
        Command::List => {
            run_list();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Joins moves back into notation text.
fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders an algorithm's parts followed by its realized moves.
fn describe(algorithm: &Algorithm) -> String {
    let mut output = String::new();
    for part in algorithm.parts() {
        output.push_str(&format!("{:<12} {}\n", part.kind.to_string(), part.moves));
    }
    let moves = algorithm.get_moves();
    output.push_str(&format!("{} moves: {}\n", moves.len(), format_moves(&moves)));
    output
}

fn run_expand(notation: &str) -> Result<(), Box<dyn Error>> {
    let algorithm = Algorithm::detect("cli", notation)?;
    print!("{}", describe(&algorithm));
    Ok(())
}

/// Plays an algorithm to the end on a headless scheduler.
fn run_play(
    notation: Option<&str>,
    name: Option<&str>,
    move_ms: u64,
) -> Result<(), Box<dyn Error>> {
    let algorithm = match (name, notation) {
        (Some(name), _) => catalog::find(name)
            .ok_or_else(|| format!("no built-in algorithm named {name:?}"))?
            .algorithm()?,
        (None, Some(notation)) => Algorithm::detect("cli", notation)?,
        (None, None) => return Err("give a notation or --name".into()),
    };

    let config = ExecutorConfig {
        move_duration: Duration::from_millis(move_ms),
    };
    let mut executor = MoveExecutor::new(solved_layout(), ManualScheduler::new(), config)?;
    executor.subscribe(|event| {
        if let ExecutorEvent::MoveStarted(mv) = event {
            let part = mv.part.map(|kind| kind.to_string()).unwrap_or_default();
            println!("{:<4} {part}", mv.to_string());
        }
    });

    let mut player = AlgorithmPlayer::new(executor);
    player.select(algorithm);
    player.play();
    let committed = player.executor_mut().run_to_completion();

    let executor = player.executor();
    let nominal = executor.config().move_duration * committed as u32;
    info!("{committed} move(s), nominal animation time {nominal:?}");
    println!();
    print!("{}", grid::format_layout(executor.pieces()));
    if executor.is_solved() {
        println!("solved");
    }
    Ok(())
}

fn run_list() {
    for entry in catalog::ALGORITHMS {
        println!("{:<14} {}", entry.name, entry.notation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_setup_commutator() {
        let algorithm = Algorithm::detect("test", "[R U R' : [U, R2]]").unwrap();
        insta::assert_snapshot!(describe(&algorithm).trim_end(), @r"
        setup        R U R'
        interchange  U
        insert       R2
        10 moves: R U R' U R2 U' R2 R U' R'
        ");
    }

    #[test]
    fn test_describe_plain_algorithm() {
        let algorithm = Algorithm::detect("test", "R U R' U'").unwrap();
        insta::assert_snapshot!(describe(&algorithm).trim_end(), @r"
        Normal       R U R' U'
        4 moves: R U R' U'
        ");
    }

    #[test]
    fn test_run_rejects_unknown_name() {
        assert!(run_play(None, Some("missing"), 600).is_err());
        assert!(run_play(None, None, 600).is_err());
    }

    #[test]
    fn test_every_catalog_entry_runs() {
        for entry in catalog::ALGORITHMS {
            assert!(run_play(None, Some(entry.name), 0).is_ok(), "{}", entry.name);
        }
    }
}
