//! CLI entry point for rendering a layered tile board

use clap::Parser;
use spillgrid::io::cli::{Cli, Session};
use tracing_subscriber::EnvFilter;

fn main() -> spillgrid::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spillgrid=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::new(cli);
    session.run()?;
    Ok(())
}
