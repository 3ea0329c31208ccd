use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::remote::{GithubClient, HttpOracle};
use crate::sync::ProjectIndex;
use crate::tui;

#[derive(Parser)]
#[command(name = "portfolio-terminal")]
#[command(version = "0.1.0")]
#[command(about = "Interactive terminal portfolio synced from GitHub", long_about = None)]
pub struct Cli {
    /// GitHub user whose public repositories are synced
    #[arg(long, default_value = "enterk0d3")]
    pub user: String,

    /// Base URL of the hosting API
    #[arg(long, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Endpoint of the oracle question-answering proxy
    #[arg(long, default_value = "https://oracle.enterk0d3.dev/api/ask")]
    pub oracle_url: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sync the project index and print it without entering the TUI
    Sync,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let browser = GithubClient::new(Some(cli.api_url.clone()));

    match &cli.command {
        Some(Commands::Sync) => show_sync(browser, &cli.user),
        None => {
            let oracle = HttpOracle::new(cli.oracle_url.clone());
            tui::run_interactive(browser, oracle, &cli.user)
        }
    }
}

fn show_sync(browser: GithubClient, user: &str) -> Result<()> {
    let mut index = ProjectIndex::new(browser, user);
    index.sync();

    println!("Portfolio Project Index");
    println!("================================");
    println!("User: {}", user);
    println!("Projects: {}", index.projects().len());
    println!();

    for project in index.projects() {
        println!("{}", project.title);
        println!("  repo: {}", project.repo);
        if !project.commit_hash.is_empty() {
            println!("  head: {}", project.commit_hash);
        }
        if !project.tags.is_empty() {
            println!("  tags: {}", project.tags.join(", "));
        }
        if let Some(history) = &project.history {
            println!("  history: {} nodes", history.len());
        }
    }

    Ok(())
}
