use std::io;

use clap::Parser;

use chess_core::cli::run_session;
use chess_core::search::{Ai, AiConfig, Difficulty};

/// Play chess against the computer in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Search depth in plies (overrides --difficulty)
    #[arg(long)]
    depth: Option<u32>,

    /// Preset search depth
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = AiConfig::from(args.difficulty);
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }
    log::info!("starting with search depth {}", config.depth);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout.lock(), Ai::new(config))?;
    Ok(())
}
