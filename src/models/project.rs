use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a history node, derived once from the commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Commit,
    Merge,
    Release,
}

/// One node in a project's commit timeline.
///
/// Immutable once constructed; insertion order (API order, newest first)
/// is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub date: String,
    pub description: String,
    pub author: Option<String>,
}

/// A portfolio project synced from the hosting API.
///
/// Created from the repository-list response and enriched in place (matched
/// by `id`) when its commit hash and history are fetched later. Never
/// deleted, only replaced wholesale by a fresh sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub repo: String,
    pub commit_hash: String,
    pub preview_url: Option<String>,
    pub history: Option<Vec<HistoryNode>>,
}

impl Project {
    /// The `owner/name` portion of the repository locator, with the host
    /// prefix stripped (`github.com/owner/name` → `owner/name`).
    pub fn slug(&self) -> &str {
        self.repo.strip_prefix("github.com/").unwrap_or(&self.repo)
    }
}

/// Classify a raw commit message into a [`NodeKind`].
///
/// Pure function: a message starting with "merge" (any case) is a merge;
/// otherwise a message containing "release" or starting with "v" is a
/// release; everything else is an ordinary commit.
pub fn classify_commit(message: &str) -> NodeKind {
    let lower = message.to_lowercase();
    if lower.starts_with("merge") {
        NodeKind::Merge
    } else if lower.contains("release") || lower.starts_with('v') {
        NodeKind::Release
    } else {
        NodeKind::Commit
    }
}

/// Build a [`HistoryNode`] from raw commit fields.
///
/// The label is the first line of the message, upper-cased; the date is
/// reduced to day precision.
pub fn history_node(
    sha: &str,
    message: &str,
    date: Option<DateTime<Utc>>,
    author: Option<String>,
) -> HistoryNode {
    let short = sha.chars().take(7).collect::<String>();
    let label = message.lines().next().unwrap_or("").to_uppercase();
    HistoryNode {
        id: short,
        label,
        kind: classify_commit(message),
        date: date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "UNKNOWN".into()),
        description: message.to_string(),
        author,
    }
}
