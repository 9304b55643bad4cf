use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hashi::config::{parse_undo_limit, DEFAULT_UNDO_LIMIT};
use hashi::loader::load_board;
use hashi::{Board, IslandStatus};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};

mod command;

#[derive(Parser)]
#[command(name = "hashi-player", version, about = "Play a Hashiwokakero puzzle on the command line")]
struct Cli {
    /// A solution for the given input file, ending in .xy.solution.
    #[arg(long)]
    solution: Option<PathBuf>,
    /// Amount of allowed undo operations.
    #[arg(long)]
    undos: Option<String>,
    /// The puzzle, ending in .xy or .plain.
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let undo_limit = cli.undos.as_deref().map_or(DEFAULT_UNDO_LIMIT, parse_undo_limit);
    let mut board = load_board(&cli.input, cli.solution.as_deref(), undo_limit)?;

    let mut out = io::stdout().lock();
    writeln!(out, "Hashiwokakero {} X {}", board.width(), board.height())?;
    if board.solution().is_none() {
        writeln!(out, "no valid solution file")?;
    }
    writeln!(out, "{HELP}")?;
    render(&mut out, &board, None)?;

    for line in io::stdin().lock().lines() {
        let message = match line?.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => Some(HELP.to_string()),
            Ok(command) => apply(&mut board, command),
            Err(err) => Some(format!("{err:#}")),
        };
        render(&mut out, &board, message.as_deref())?;
    }

    Ok(())
}

/// Run one board action, returning a message worth showing the player.
fn apply(board: &mut Board, command: Command) -> Option<String> {
    debug!(?command, "applying");
    match command {
        Command::Click(location) => {
            board.click(location);
            None
        }
        // illegal bridges and empty undo histories are silent no-ops
        Command::Bridge(a, b) => {
            // a typed bridge abandons any half-finished click gesture
            board.clear_selection();
            board.toggle_bridge(a, b).ok();
            None
        }
        Command::Undo => {
            board.undo().ok();
            None
        }
        Command::Reset => {
            board.reset();
            None
        }
        Command::Solve => board.replay_solution().err().map(|err| err.to_string()),
        Command::Help | Command::Quit => None,
    }
}

fn render(out: &mut impl Write, board: &Board, message: Option<&str>) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{board}")?;

    let overfull = board.islands()
        .filter(|(location, _)| board.island_status(*location) == Some(IslandStatus::Overfull))
        .map(|(location, _)| location.to_string())
        .collect::<Vec<_>>();
    if !overfull.is_empty() {
        writeln!(out, "too many bridges: {}", overfull.join(" "))?;
    }
    if let Some(selected) = board.selection() {
        writeln!(out, "selected {selected}")?;
    }
    if board.is_solved() {
        writeln!(out, "*SOLVED*  enter q to exit ...")?;
    }
    if let Some(message) = message {
        writeln!(out, "{message}")?;
    }

    out.flush()
}
