use std::path::PathBuf;

use clap::{Parser, Subcommand};

use search::MAX_DEPTH;

#[derive(Parser, Debug)]
#[command(name = "Halfmove")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log UCI communication to a file for debugging.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Search depth in plies, used when `go` does not name one.
    #[arg(short, long, global = true, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=MAX_DEPTH as i64))]
    pub depth: u8,

    /// Speaks UCI on stdin/stdout when no command is given.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a game against the engine in the terminal.
    Play,
}
