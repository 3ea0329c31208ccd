//! Data models for the portfolio terminal.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Project`] / [`HistoryNode`] - Synced repositories and their classified
//!   commit timelines
//! - [`TerminalMessage`] - One line or block in the shell transcript
//! - Wire types in [`remote`] - serde DTOs for the hosting API and the
//!   oracle proxy
//!
//! Commit classification ([`classify_commit`]) is a pure function of the
//! source message and is never reassigned after construction.

pub mod project;
pub mod remote;
pub mod terminal;

pub use project::{HistoryNode, NodeKind, Project, classify_commit, history_node};
pub use remote::{
    CommitActor, CommitDetail, CommitRecord, CommitSignature, ContentEntry, EntryKind,
    OracleAnswer, OracleQuestion, RepoRecord,
};
pub use terminal::{MessageRole, TerminalMessage};
