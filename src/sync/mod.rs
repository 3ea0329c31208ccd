//! Project index: bulk sync from the hosting API and on-demand enrichment.
//!
//! The index owns the project list and the active selection. A bulk sync
//! replaces the list wholesale (up to [`MAX_PROJECTS`] non-fork repos, API
//! order) and eagerly enriches the first project; selecting a project whose
//! history has not been fetched enriches it on demand before activating it.
//! Enrichment mutates a project in place, matched by id.

use crate::models::{Project, RepoRecord, history_node};
use crate::remote::RepoBrowser;

/// Cap on the number of portfolio projects kept from a sync.
pub const MAX_PROJECTS: usize = 5;

/// Commits fetched per enrichment.
const HISTORY_PAGE: u32 = 10;

/// Map one repository record to an un-enriched project.
///
/// Titles follow the persona's UPPER_SNAKE convention; tags come from the
/// repo topics, falling back to the primary language when none are set.
pub fn project_from_repo(record: &RepoRecord) -> Project {
    let tags = if !record.topics.is_empty() {
        record.topics.clone()
    } else {
        record.language.clone().map(|lang| vec![lang]).unwrap_or_default()
    };

    let repo = record
        .html_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string();

    Project {
        id: record.id.to_string(),
        title: record.name.to_uppercase().replace('-', "_"),
        description: record.description.clone().unwrap_or_default(),
        tags,
        repo,
        commit_hash: String::new(),
        preview_url: None,
        history: None,
    }
}

pub struct ProjectIndex<R> {
    browser: R,
    user: String,
    projects: Vec<Project>,
    active: Option<usize>,
    syncing: bool,
}

impl<R: RepoBrowser> ProjectIndex<R> {
    pub fn new(browser: R, user: impl Into<String>) -> Self {
        Self { browser, user: user.into(), projects: Vec::new(), active: None, syncing: false }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn active(&self) -> Option<&Project> {
        self.active.map(|i| &self.projects[i])
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn syncing(&self) -> bool {
        self.syncing
    }

    /// Replace the project list from the hosting API.
    ///
    /// Keeps up to [`MAX_PROJECTS`] non-fork repositories in API order,
    /// eagerly enriches the first one and marks it active. An empty or
    /// failed repo listing leaves an empty index with no active project.
    pub fn sync(&mut self) {
        // The flag flips on and back off within this one blocking call, so
        // no frame drawn between redraws ever observes it set. It only reads
        // true if a caller draws mid-sync, e.g. from a progress callback.
        self.syncing = true;
        let records = self.browser.list_repos(&self.user);
        self.projects = records
            .iter()
            .filter(|record| !record.fork)
            .take(MAX_PROJECTS)
            .map(project_from_repo)
            .collect();

        self.active = if self.projects.is_empty() { None } else { Some(0) };
        if self.active.is_some() {
            self.enrich(0);
        }
        self.syncing = false;
    }

    /// Activate the project with this id, fetching its history first if it
    /// has none. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            return;
        };
        if self.projects[index].history.is_none() {
            self.enrich(index);
        }
        self.active = Some(index);
    }

    /// Step the active selection by `delta` places, clamped to the list.
    pub fn step(&mut self, delta: isize) {
        if self.projects.is_empty() {
            return;
        }
        let current = self.active.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.projects.len() as isize - 1) as usize;
        if self.projects[next].history.is_none() {
            self.enrich(next);
        }
        self.active = Some(next);
    }

    fn enrich(&mut self, index: usize) {
        let slug = self.projects[index].slug().to_string();
        let commits = self.browser.commit_log(&slug, HISTORY_PAGE);

        let project = &mut self.projects[index];
        if let Some(first) = commits.first() {
            project.commit_hash = first.sha.chars().take(7).collect();
        }
        project.history = Some(
            commits
                .iter()
                .map(|record| {
                    history_node(
                        &record.sha,
                        &record.commit.message,
                        record.commit.author.as_ref().and_then(|sig| sig.date),
                        record
                            .author
                            .as_ref()
                            .map(|actor| actor.login.clone())
                            .or_else(|| {
                                record.commit.author.as_ref().and_then(|sig| sig.name.clone())
                            }),
                    )
                })
                .collect(),
        );
    }
}
