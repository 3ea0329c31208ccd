//! Portfolio Terminal - an interactive TUI portfolio synced from GitHub
//!
//! This library implements a stylized developer-portfolio terminal. It
//! supports:
//!
//! - Syncing public repositories into a project index (up to 5 non-fork
//!   repos) with classified commit timelines
//! - A line-oriented command shell with recall history and a virtual
//!   working directory backed by the remote file tree
//! - A filterable command palette whose actions run through the same
//!   dispatch path as typed commands
//! - Free-text questions answered by a remote oracle proxy
//!
//! # Example
//!
//! ```no_run
//! use portfolio_terminal::remote::{GithubClient, HttpOracle};
//! use portfolio_terminal::sync::ProjectIndex;
//!
//! let browser = GithubClient::new(None);
//! let mut index = ProjectIndex::new(browser, "enterk0d3");
//! index.sync();
//! println!("Synced {} projects", index.projects().len());
//! ```

pub mod bus;
pub mod cli;
pub mod models;
pub mod palette;
pub mod remote;
pub mod shell;
pub mod sync;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use models::{HistoryNode, NodeKind, Project, TerminalMessage, classify_commit};
pub use remote::{GithubClient, HttpOracle, Oracle, RepoBrowser};
pub use shell::ShellSession;
pub use sync::ProjectIndex;
