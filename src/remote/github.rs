//! Thin client for the code-hosting REST API.
//!
//! # Error Handling Strategy
//!
//! This client follows a **graceful degradation** approach: every transport,
//! HTTP-status or decode failure is absorbed at this boundary and converted
//! to an empty collection or a sentinel string. Callers (the shell, the sync
//! orchestrator) cannot distinguish "transient failure" from "genuinely
//! empty" and never receive an `Err`. Failures are reported via stderr as
//! warnings so a user running from a terminal still sees what happened.

use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::models::{CommitRecord, ContentEntry, RepoRecord};
use crate::utils::strip_ansi_codes;

/// Sentinel returned when raw file content cannot be fetched.
pub const FILE_STREAM_ERROR: &str = "ERROR_READING_FILE_STREAM";

const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("portfolio-terminal/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read access to a remote repository tree.
///
/// The shell and the sync orchestrator depend on this trait rather than the
/// concrete HTTP client so tests can substitute fakes.
pub trait RepoBrowser {
    /// Public repositories for a user, most recently updated first.
    fn list_repos(&self, user: &str) -> Vec<RepoRecord>;

    /// Commit log for `owner/name`, newest first, at most `per_page` entries.
    fn commit_log(&self, slug: &str, per_page: u32) -> Vec<CommitRecord>;

    /// Directory listing at `path` within `owner/name`. Empty `path` is the
    /// repository root.
    fn list_contents(&self, slug: &str, path: &str) -> Vec<ContentEntry>;

    /// Raw text content at a download locator, or [`FILE_STREAM_ERROR`].
    fn fetch_raw(&self, download_url: &str) -> String;
}

// The shell and the project index each hold their own handle to one client.
impl<T: RepoBrowser + ?Sized> RepoBrowser for std::rc::Rc<T> {
    fn list_repos(&self, user: &str) -> Vec<RepoRecord> {
        (**self).list_repos(user)
    }

    fn commit_log(&self, slug: &str, per_page: u32) -> Vec<CommitRecord> {
        (**self).commit_log(slug, per_page)
    }

    fn list_contents(&self, slug: &str, path: &str) -> Vec<ContentEntry> {
        (**self).list_contents(slug, path)
    }

    fn fetch_raw(&self, download_url: &str) -> String {
        (**self).fetch_raw(download_url)
    }
}

/// [`RepoBrowser`] backed by the GitHub REST API.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(base_url: Option<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { http, base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()) }
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str, label: &str) -> Option<T> {
        let result = self
            .http
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>());
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                eprintln!("Warning: {} request failed: {}", label, e);
                None
            }
        }
    }

    /// Percent-encode one virtual-path segment for use in a contents URL.
    fn encode_segment(segment: &str) -> String {
        utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
    }

    fn contents_url(&self, slug: &str, path: &str) -> String {
        let encoded = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Self::encode_segment)
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/repos/{}/contents/{}", self.base_url, slug, encoded)
    }
}

impl RepoBrowser for GithubClient {
    fn list_repos(&self, user: &str) -> Vec<RepoRecord> {
        let url = format!("{}/users/{}/repos?sort=updated&per_page=100", self.base_url, user);
        self.get_json(&url, "repository list").unwrap_or_default()
    }

    fn commit_log(&self, slug: &str, per_page: u32) -> Vec<CommitRecord> {
        let url = format!("{}/repos/{}/commits?per_page={}", self.base_url, slug, per_page);
        self.get_json(&url, "commit log").unwrap_or_default()
    }

    fn list_contents(&self, slug: &str, path: &str) -> Vec<ContentEntry> {
        let url = self.contents_url(slug, path);
        self.get_json(&url, "directory listing").unwrap_or_default()
    }

    fn fetch_raw(&self, download_url: &str) -> String {
        let result =
            self.http.get(download_url).send().and_then(|resp| resp.error_for_status()).and_then(
                |resp| resp.text(),
            );
        match result {
            Ok(body) => strip_ansi_codes(&body),
            Err(e) => {
                eprintln!("Warning: raw file fetch failed: {}", e);
                FILE_STREAM_ERROR.to_string()
            }
        }
    }
}
