//! Wire types for the hosting API and the oracle proxy.
//!
//! These mirror the JSON shapes of the GitHub REST endpoints the app
//! consumes plus the oracle proxy's request/response contract. Unknown
//! fields are ignored by serde; optional fields default to `None`/empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One repository from `GET /users/{user}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
}

/// One commit from `GET /repos/{owner}/{name}/commits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    pub commit: CommitDetail,
    #[serde(default)]
    pub author: Option<CommitActor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    #[serde(default)]
    pub author: Option<CommitSignature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSignature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitActor {
    pub login: String,
}

/// Kind tag for a directory-listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Submodules, symlinks and future API kinds; listed but not readable.
    #[serde(other)]
    Other,
}

/// One entry from `GET /repos/{owner}/{name}/contents/{path}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Request body for the oracle proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleQuestion {
    pub question: String,
}

/// Success body from the oracle proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleAnswer {
    pub text: String,
}
