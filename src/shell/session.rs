//! The interactive command shell.
//!
//! A single-threaded, line-oriented interpreter bound to one active-project
//! context. It owns the transcript, the input buffer, the recall history and
//! a virtual working directory scoped to the active project's remote file
//! tree. Commands arriving from the palette (via the command bus) run
//! through the same [`ShellSession::submit`] path as typed ones, so they are
//! indistinguishable in the transcript.
//!
//! # Dispatch
//!
//! The trimmed line is split on whitespace; the first token selects the
//! command case-insensitively, the rest are positional arguments (joined
//! with single spaces for free-text commands like `oracle`). Not-found and
//! usage errors surface as `Error` transcript lines; nothing is ever raised
//! past the command boundary, and no error is fatal to the session.

use crate::models::{EntryKind, Project, TerminalMessage};
use crate::remote::{Oracle, RepoBrowser};
use crate::shell::recall::{RecallBuffer, RecallStep};

const USER_LINE_GLOBAL: &str = "USER: enterk0d3 | STATUS: ARCHITECT | LOC: NULL_SPACE";
const HELP_LINE: &str =
    "AVAILABLE COMMANDS: [help, whoami, projects, ls, cd <dir>, cat <file>, git <cmd>, oracle <query>, clear]";
const PROJECTS_LINE: &str =
    "REPO INDEX SYNCED FROM ORBIT. OPEN THE COMMAND PALETTE [CTRL+K] TO SWITCH PROJECTS.";
const GIT_USAGE: &str = "usage: git <command> [<args>]\n\nSupported commands: status, log, branch";
const GIT_BRANCHES: &str = "* core\n  experimental-gl\n  ghost-protocol-fix\n  chaos-theory-v2";
const NO_PROJECT: &str = "NO PROJECT ACTIVE";
const EMPTY_DIR: &str = "EMPTY_DIRECTORY";

/// Maximum characters of raw file content echoed by `cat`.
const CAT_LIMIT: usize = 2000;
const CAT_TRUNCATION_MARKER: &str = "\n... [STREAM TRUNCATED AT 2000 CHARS]";

pub struct ShellSession<R, O> {
    repo: R,
    oracle: O,
    transcript: Vec<TerminalMessage>,
    input: String,
    recall: RecallBuffer,
    path: Vec<String>,
    thinking: bool,
}

impl<R: RepoBrowser, O: Oracle> ShellSession<R, O> {
    pub fn new(repo: R, oracle: O) -> Self {
        Self {
            repo,
            oracle,
            transcript: vec![
                TerminalMessage::system("SYSTEM_BOOT_COMPLETE"),
                TerminalMessage::system("TYPE \"help\" FOR COMMANDS"),
            ],
            input: String::new(),
            recall: RecallBuffer::new(),
            path: Vec::new(),
            thinking: false,
        }
    }

    pub fn transcript(&self) -> &[TerminalMessage] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn thinking(&self) -> bool {
        self.thinking
    }

    /// Slash-joined virtual path; empty at repository root.
    pub fn virtual_path(&self) -> String {
        self.path.join("/")
    }

    /// Drop back to the repository root, e.g. when the active project changes.
    pub fn reset_path(&mut self) {
        self.path.clear();
    }

    /// Append a `System` transcript line from outside the dispatch path.
    pub fn notify(&mut self, content: impl Into<String>) {
        self.transcript.push(TerminalMessage::system(content));
    }

    pub fn push_input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submit the current input buffer against the active project.
    pub fn submit_input(&mut self, project: Option<&Project>) {
        let line = std::mem::take(&mut self.input);
        self.submit(&line, project);
    }

    /// Execute one raw line. Blank or whitespace-only input is a no-op.
    pub fn submit(&mut self, raw_line: &str, project: Option<&Project>) {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            return;
        }

        self.recall.push(trimmed);
        self.transcript.push(TerminalMessage::input(trimmed));
        self.input.clear();
        self.dispatch(trimmed, project);
    }

    /// Replace the input buffer with the next-older recalled line.
    pub fn recall_previous(&mut self) {
        if let Some(line) = self.recall.previous() {
            self.input = line.to_string();
        }
    }

    /// Replace the input buffer with the next-newer recalled line, clearing
    /// the input when stepping past the newest.
    pub fn recall_next(&mut self) {
        match self.recall.next() {
            RecallStep::Replace(line) => self.input = line,
            RecallStep::Clear => self.input.clear(),
            RecallStep::Keep => {}
        }
    }

    fn output(&mut self, content: impl Into<String>) {
        self.transcript.push(TerminalMessage::output(content));
    }

    fn error(&mut self, content: impl Into<String>) {
        self.transcript.push(TerminalMessage::error(content));
    }

    fn dispatch(&mut self, line: &str, project: Option<&Project>) {
        let mut tokens = line.split_whitespace();
        let command = tokens.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = tokens.collect();

        match command.as_str() {
            "help" => self.output(HELP_LINE),
            "clear" => self.transcript.clear(),
            "whoami" => self.cmd_whoami(project),
            "ls" => self.cmd_ls(project),
            "cd" => self.cmd_cd(args.first().copied(), project),
            "cat" => self.cmd_cat(args.first().copied(), project),
            "oracle" => self.cmd_oracle(&args.join(" ")),
            "projects" => self.output(PROJECTS_LINE),
            "git" => self.cmd_git(args.first().copied(), project),
            other => self.error(format!("COMMAND NOT FOUND: {}", other)),
        }
    }

    fn cmd_whoami(&mut self, project: Option<&Project>) {
        match project {
            Some(p) => {
                self.output(format!("USER: enterk0d3 | STATUS: ARCHITECT | PROJECT: {}", p.title))
            }
            None => self.output(USER_LINE_GLOBAL),
        }
    }

    fn cmd_ls(&mut self, project: Option<&Project>) {
        let Some(project) = project else {
            self.error(NO_PROJECT);
            return;
        };

        let entries = self.repo.list_contents(project.slug(), &self.virtual_path());
        if entries.is_empty() {
            self.output(EMPTY_DIR);
            return;
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|entry| match entry.kind {
                EntryKind::Dir => format!("[DIR] {}", entry.name),
                _ => format!("      {}", entry.name),
            })
            .collect();
        self.output(lines.join("\n"));
    }

    fn cmd_cd(&mut self, target: Option<&str>, project: Option<&Project>) {
        if project.is_none() {
            self.error(NO_PROJECT);
            return;
        }

        // Optimistic navigation: no existence check against the remote side.
        match target {
            None | Some(".") => {}
            Some("..") => {
                self.path.pop();
            }
            Some(segment) => self.path.push(segment.to_string()),
        }
    }

    fn cmd_cat(&mut self, name: Option<&str>, project: Option<&Project>) {
        let Some(project) = project else {
            self.error(NO_PROJECT);
            return;
        };
        let Some(name) = name else {
            self.error("USAGE: cat <filename>");
            return;
        };

        let entries = self.repo.list_contents(project.slug(), &self.virtual_path());
        let target = entries
            .iter()
            .find(|entry| entry.kind == EntryKind::File && entry.name == name)
            .and_then(|entry| entry.download_url.as_deref());

        match target {
            Some(url) => {
                let content = self.repo.fetch_raw(url);
                let mut shown: String = content.chars().take(CAT_LIMIT).collect();
                if content.chars().count() > CAT_LIMIT {
                    shown.push_str(CAT_TRUNCATION_MARKER);
                }
                self.output(shown);
            }
            None => self.error(format!("FILE NOT FOUND: {}", name)),
        }
    }

    fn cmd_oracle(&mut self, question: &str) {
        if question.is_empty() {
            self.error("USAGE: oracle <question>");
            return;
        }

        self.thinking = true;
        let answer = self.oracle.ask(question);
        self.thinking = false;
        self.output(format!("ORACLE > {}", answer));
    }

    fn cmd_git(&mut self, subcommand: Option<&str>, project: Option<&Project>) {
        let sub = subcommand.map(|s| s.to_lowercase());
        match (sub.as_deref(), project) {
            (Some("status"), Some(p)) => self.output(format!(
                "PROJECT: {}\nHEAD: {} (core)\n\nnothing to commit, working tree clean",
                p.title, p.commit_hash
            )),
            (Some("log"), Some(p)) => {
                let rendered = render_git_log(p);
                self.output(rendered);
            }
            (Some("branch"), Some(_)) => self.output(GIT_BRANCHES),
            _ => self.output(GIT_USAGE),
        }
    }
}

/// Render the active project's fetched history as a `git log`-style block
/// with a trailing visual graph.
fn render_git_log(project: &Project) -> String {
    let Some(history) = project.history.as_deref().filter(|h| !h.is_empty()) else {
        return format!("NO HISTORY SYNCED FOR {}", project.title);
    };

    let mut out = String::new();
    for (i, node) in history.iter().enumerate() {
        let head = if i == 0 { " (HEAD -> core)" } else { "" };
        out.push_str(&format!(
            "commit {}{}\nAuthor: {}\nDate:   {}\n\n    {}\n\n",
            node.id,
            head,
            node.author.as_deref().unwrap_or("unknown"),
            node.date,
            node.label
        ));
    }

    out.push_str("--- VISUAL_GRAPH ---");
    for node in history {
        match node.kind {
            crate::models::NodeKind::Merge => {
                out.push_str(&format!("\n|\\\n| *  [{}] {}\n|/", node.id, node.label));
            }
            _ => out.push_str(&format!("\n*  [{}] {}\n|", node.id, node.label)),
        }
    }
    out
}
