//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use portfolio_terminal::models::{
    CommitActor, CommitDetail, CommitRecord, CommitSignature, ContentEntry, EntryKind, RepoRecord,
};
use portfolio_terminal::remote::{FILE_STREAM_ERROR, Oracle, RepoBrowser};

/// Scripted in-memory stand-in for the hosting API.
///
/// Listings are keyed by `slug:path`, raw bodies by download URL. Every call
/// is recorded so tests can assert on request behavior, not just output.
pub struct ScriptedHost {
    repos: Vec<RepoRecord>,
    commits: HashMap<String, Vec<CommitRecord>>,
    listings: HashMap<String, Vec<ContentEntry>>,
    raw: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self {
            repos: Vec::new(),
            commits: HashMap::new(),
            listings: HashMap::new(),
            raw: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_repo(mut self, record: RepoRecord) -> Self {
        self.repos.push(record);
        self
    }

    pub fn with_commits(mut self, slug: &str, commits: Vec<CommitRecord>) -> Self {
        self.commits.insert(slug.to_string(), commits);
        self
    }

    pub fn with_listing(mut self, slug: &str, path: &str, entries: Vec<ContentEntry>) -> Self {
        self.listings.insert(format!("{}:{}", slug, path), entries);
        self
    }

    pub fn with_raw(mut self, url: &str, body: &str) -> Self {
        self.raw.insert(url.to_string(), body.to_string());
        self
    }
}

impl RepoBrowser for ScriptedHost {
    fn list_repos(&self, user: &str) -> Vec<RepoRecord> {
        self.calls.borrow_mut().push(format!("repos:{}", user));
        self.repos.clone()
    }

    fn commit_log(&self, slug: &str, per_page: u32) -> Vec<CommitRecord> {
        self.calls.borrow_mut().push(format!("commits:{}:{}", slug, per_page));
        let mut commits = self.commits.get(slug).cloned().unwrap_or_default();
        commits.truncate(per_page as usize);
        commits
    }

    fn list_contents(&self, slug: &str, path: &str) -> Vec<ContentEntry> {
        self.calls.borrow_mut().push(format!("contents:{}:{}", slug, path));
        self.listings.get(&format!("{}:{}", slug, path)).cloned().unwrap_or_default()
    }

    fn fetch_raw(&self, download_url: &str) -> String {
        self.calls.borrow_mut().push(format!("raw:{}", download_url));
        self.raw.get(download_url).cloned().unwrap_or_else(|| FILE_STREAM_ERROR.to_string())
    }
}

/// Oracle fake that records questions and answers from a fixed script.
pub struct ScriptedOracle {
    answer: String,
    pub questions: RefCell<Vec<String>>,
}

impl ScriptedOracle {
    pub fn answering(answer: &str) -> Self {
        Self { answer: answer.to_string(), questions: RefCell::new(Vec::new()) }
    }
}

impl Oracle for ScriptedOracle {
    fn ask(&self, question: &str) -> String {
        self.questions.borrow_mut().push(question.to_string());
        self.answer.clone()
    }
}

/// Builder for repository-list records
pub struct RepoRecordBuilder {
    record: RepoRecord,
}

impl RepoRecordBuilder {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            record: RepoRecord {
                id,
                name: name.to_string(),
                description: None,
                fork: false,
                topics: Vec::new(),
                language: None,
                html_url: format!("https://github.com/enterk0d3/{}", name),
            },
        }
    }

    pub fn fork(mut self) -> Self {
        self.record.fork = true;
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.record.description = Some(text.to_string());
        self
    }

    pub fn topics(mut self, topics: &[&str]) -> Self {
        self.record.topics = topics.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.record.language = Some(language.to_string());
        self
    }

    pub fn build(self) -> RepoRecord {
        self.record
    }
}

pub fn commit_record(sha: &str, message: &str, date: Option<&str>, login: Option<&str>) -> CommitRecord {
    let date = date.map(|d| {
        DateTime::parse_from_rfc3339(d).expect("valid RFC3339 date").with_timezone(&Utc)
    });
    CommitRecord {
        sha: sha.to_string(),
        commit: CommitDetail {
            message: message.to_string(),
            author: Some(CommitSignature { name: Some("Kai".to_string()), date }),
        },
        author: login.map(|l| CommitActor { login: l.to_string() }),
    }
}

pub fn dir_entry(name: &str, path: &str) -> ContentEntry {
    ContentEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind: EntryKind::Dir,
        download_url: None,
    }
}

pub fn file_entry(name: &str, path: &str, download_url: Option<&str>) -> ContentEntry {
    ContentEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind: EntryKind::File,
        download_url: download_url.map(String::from),
    }
}
