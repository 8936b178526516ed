//! fibernet - interactive editor for fiber optic network graphs.
//!
//! Edits locations and cable links, persists them to a text file, and
//! reduces a connected network to its minimum spanning tree.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use fibernet::{run, AppConfig, CliArgs, Console, Session};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = AppConfig::load(&args)?;

    common::logging::init_logging(config.logging.level).context("Failed to initialise logging")?;

    info!("Starting fibernet v{}", env!("CARGO_PKG_VERSION"));
    info!(path = %config.storage.path.display(), "Graph file");

    let mut session = Session::new(&config);
    if args.load {
        if let Err(e) = session.graph.load_from_path(&session.path) {
            warn!("Could not load {}: {}. Starting with an empty graph.", session.path.display(), e);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run(&mut session, &mut console).context("Console failure")?;

    info!("fibernet stopped");
    Ok(())
}
