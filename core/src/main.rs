mod args;
mod engine;
mod halfmove;
mod play;

use args::{Args, Command};
use clap::Parser;
use engine::Engine;
use halfmove::Halfmove;
use log::{info, LevelFilter};
use search::EngineConfig;
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::io;
use uci::UciConnection;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    if let Some(Command::Play) = args.command {
        info!("Starting terminal game at depth {}", args.depth);
        play::run(io::stdin().lock(), io::stdout(), args.depth)?;
        return Ok(());
    }

    let mut uci = UciConnection::new();

    let config = EngineConfig::with_depth(args.depth);
    let engine = engine::create(&config);
    info!("Starting {} at depth {}", engine.name(), config.depth.value);

    let mut halfmove = Halfmove::new(engine, config);
    uci.listen(|input, output| halfmove.handle(input, &output))?;
    uci.close()?;

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}
