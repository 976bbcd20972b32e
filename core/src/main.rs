mod args;
mod bench;
mod engine;
mod play;
mod select;

use args::{Args, Command};
use clap::Parser;
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::error::Error;
use std::fs::File;

const ENGINE_NAME: &str = "Cairn";
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    debug!("{} {} starting: {:?}", ENGINE_NAME, ENGINE_VERSION, args.command);

    match &args.command {
        Command::Select { fen, moves, search } => select::run(fen.as_deref(), moves, search)?,
        Command::Play { fen, plies, search } => play::run(fen.as_deref(), *plies, search)?,
        Command::Bench { depth } => bench::run(*depth)?,
    }

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
    } else {
        TermLogger::init(
            args.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;
    }

    Ok(args)
}
