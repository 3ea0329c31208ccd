use anyhow::Result;
use portfolio_terminal::cli;

fn main() -> Result<()> {
    cli::run()
}
