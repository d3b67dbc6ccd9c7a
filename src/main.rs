use std::io;

use anyhow::Result;
use tracing::info;

use pawnchess_cli::Session;
use pawnchess_core::Outcome;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("pawnchess starting");

    let stdin = io::stdin();
    let outcome: Option<Outcome> = Session::new(stdin.lock(), io::stdout()).run()?;

    info!(?outcome, "pawnchess shutting down");
    Ok(())
}
