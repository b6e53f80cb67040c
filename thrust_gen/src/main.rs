use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, Level};

pub mod cache;
pub mod commands;
pub mod config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Show { config } => {
            let table = commands::show(&config)?;
            println!("{table}");
        }
        Command::Generate { config, out } => {
            let (out, _) = commands::generate(&config, out)?;
            info!("Output path: {}", out.display());
        }
    }

    Ok(())
}

/// Thrust allocation matrix generator
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Log more, repeat for trace output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the allocation matrix of a propeller layout
    Show {
        /// TOML config or `.json` propeller cache
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Write thrust_allocate.h and thrust_allocate.c for a propeller layout
    Generate {
        /// TOML config or `.json` propeller cache
        #[arg(short, long)]
        config: PathBuf,
        /// Output directory, overrides the config
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
