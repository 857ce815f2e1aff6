use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod report;
mod source;

#[cfg(test)]
mod tests;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity, `info` by default
    model::init_tracing();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
