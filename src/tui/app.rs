//! TUI application state and event handling.
//!
//! The `App` struct wires the four state machines together and runs the main
//! event loop:
//!
//! - **Project index**: synced repo list with an active selection
//! - **Shell session**: transcript, input line, recall, virtual path
//! - **Command palette**: filterable action overlay
//! - **Command bus**: palette-issued command lines, drained into the shell
//!   each tick so they run through the same submit path as typed input
//!
//! Keyboard actions are routed by overlay state: while the palette is open,
//! input and navigation go to the palette; otherwise they go to the shell.
//! Rendering is dirty-flag driven with a periodic forced redraw so terminal
//! resizes are picked up.

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Utc};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{PaletteView, RenderState, render_ui};
use crate::bus::{CommandBus, CommandSender};
use crate::palette::{CommandPalette, PaletteEffect, Section};
use crate::remote::{Oracle, RepoBrowser};
use crate::shell::ShellSession;
use crate::sync::ProjectIndex;

pub struct App<R, O> {
    index: ProjectIndex<Rc<R>>,
    shell: ShellSession<Rc<R>, O>,
    palette: CommandPalette,
    commands: CommandSender,
    bus: CommandBus,
    focus: Section,
    last_sync: Option<DateTime<Utc>>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<R: RepoBrowser, O: Oracle> App<R, O> {
    pub fn new(browser: R, oracle: O, user: &str) -> Self {
        let browser = Rc::new(browser);
        let (commands, bus) = CommandBus::new();

        Self {
            index: ProjectIndex::new(Rc::clone(&browser), user),
            shell: ShellSession::new(browser, oracle),
            palette: CommandPalette::new(),
            commands,
            bus,
            focus: Section::Terminal,
            last_sync: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Pull the project list from the hosting API and rebuild palette actions.
    pub fn sync(&mut self) {
        self.index.sync();
        self.palette.set_projects(self.index.projects());
        self.shell.reset_path();
        self.last_sync = Some(Utc::now());
        self.needs_redraw = true;
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.drain_bus();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let virtual_path = self.shell.virtual_path();
                terminal.draw(|f| {
                    let palette = self.palette.is_open().then(|| PaletteView {
                        query: self.palette.query(),
                        actions: self.palette.filtered(),
                        highlighted: self.palette.highlighted(),
                    });
                    let state = RenderState {
                        projects: self.index.projects(),
                        active_index: self.index.active_index(),
                        transcript: self.shell.transcript(),
                        input: self.shell.input(),
                        virtual_path: &virtual_path,
                        thinking: self.shell.thinking(),
                        syncing: self.index.syncing(),
                        focus: self.focus,
                        last_sync: self.last_sync,
                        palette,
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Run palette-issued command lines through the normal submit path.
    fn drain_bus(&mut self) {
        for line in self.bus.drain() {
            self.shell.submit(&line, self.index.active());
            self.needs_redraw = true;
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        self.needs_redraw = true;

        if let Action::Quit = action {
            self.should_quit = true;
            return;
        }
        if let Action::TogglePalette = action {
            self.palette.toggle();
            return;
        }

        if self.palette.is_open() {
            self.handle_palette_action(action);
        } else {
            self.handle_shell_action(action);
        }
    }

    fn handle_palette_action(&mut self, action: Action) {
        match action {
            Action::Cancel => self.palette.close(),
            Action::MoveUp => self.palette.move_up(),
            Action::MoveDown => self.palette.move_down(),
            Action::InputChar(c) => self.palette.input_char(c),
            Action::Backspace => self.palette.backspace(),
            Action::Confirm => {
                if let Some(effect) = self.palette.confirm() {
                    self.apply_effect(effect);
                }
            }
            _ => {}
        }
    }

    fn handle_shell_action(&mut self, action: Action) {
        match action {
            Action::Confirm => self.shell.submit_input(self.index.active()),
            Action::Cancel => self.shell.clear_input(),
            Action::MoveUp => self.shell.recall_previous(),
            Action::MoveDown => self.shell.recall_next(),
            Action::InputChar(c) => self.shell.push_input_char(c),
            Action::Backspace => self.shell.backspace(),
            Action::ProjectPrev => self.step_project(-1),
            Action::ProjectNext => self.step_project(1),
            Action::Resync => self.sync(),
            _ => {}
        }
    }

    fn apply_effect(&mut self, effect: PaletteEffect) {
        match effect {
            PaletteEffect::RunShellCommand(line) => self.commands.send(line),
            PaletteEffect::SelectProject(id) => {
                self.index.select(&id);
                self.shell.reset_path();
            }
            PaletteEffect::ScrollTo(section) => self.focus = section,
            PaletteEffect::OpenLink(url) => self.shell.notify(format!("LINK: {}", url)),
        }
    }

    fn step_project(&mut self, delta: isize) {
        self.index.step(delta);
        self.shell.reset_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CommitDetail, CommitRecord, CommitSignature, ContentEntry, MessageRole, RepoRecord,
    };

    struct StubBrowser {
        repos: Vec<RepoRecord>,
        commits: Vec<CommitRecord>,
    }

    impl RepoBrowser for StubBrowser {
        fn list_repos(&self, _user: &str) -> Vec<RepoRecord> {
            self.repos.clone()
        }

        fn commit_log(&self, _slug: &str, _per_page: u32) -> Vec<CommitRecord> {
            self.commits.clone()
        }

        fn list_contents(&self, _slug: &str, _path: &str) -> Vec<ContentEntry> {
            vec![]
        }

        fn fetch_raw(&self, _download_url: &str) -> String {
            String::new()
        }
    }

    struct StubOracle;

    impl Oracle for StubOracle {
        fn ask(&self, _question: &str) -> String {
            "OK".into()
        }
    }

    fn repo(id: u64, name: &str) -> RepoRecord {
        RepoRecord {
            id,
            name: name.into(),
            description: None,
            fork: false,
            topics: vec![],
            language: None,
            html_url: format!("https://github.com/enterk0d3/{}", name),
        }
    }

    fn commit(sha: &str, message: &str) -> CommitRecord {
        CommitRecord {
            sha: sha.into(),
            commit: CommitDetail {
                message: message.into(),
                author: Some(CommitSignature { name: None, date: None }),
            },
            author: None,
        }
    }

    fn app_with_projects() -> App<StubBrowser, StubOracle> {
        let browser = StubBrowser {
            repos: vec![repo(1, "void-engine"), repo(2, "neural-net-viz")],
            commits: vec![commit("a1b2c3d4e5", "fix typo")],
        };
        let mut app = App::new(browser, StubOracle, "enterk0d3");
        app.sync();
        app
    }

    #[test]
    fn test_sync_populates_index_and_palette() {
        let mut app = app_with_projects();
        assert_eq!(app.index.projects().len(), 2);
        assert!(app.last_sync.is_some());

        app.palette.toggle();
        for c in "switch".chars() {
            app.palette.input_char(c);
        }
        assert_eq!(app.palette.filtered().len(), 2);
    }

    #[test]
    fn test_typed_input_routes_to_shell() {
        let mut app = app_with_projects();
        for c in "help".chars() {
            app.handle_action(Action::InputChar(c));
        }
        app.handle_action(Action::Confirm);

        let last = app.shell.transcript().last().unwrap();
        assert!(last.content.contains("AVAILABLE COMMANDS"));
    }

    #[test]
    fn test_open_palette_captures_input() {
        let mut app = app_with_projects();
        app.handle_action(Action::TogglePalette);
        app.handle_action(Action::InputChar('g'));

        assert_eq!(app.palette.query(), "g");
        assert_eq!(app.shell.input(), "");
    }

    #[test]
    fn test_palette_command_runs_through_shell() {
        let mut app = app_with_projects();
        app.handle_action(Action::TogglePalette);
        for c in "whoami".chars() {
            app.handle_action(Action::InputChar(c));
        }
        app.handle_action(Action::Confirm);
        assert!(!app.palette.is_open());

        app.drain_bus();
        let tail: Vec<_> = app.shell.transcript().iter().rev().take(2).collect();
        assert_eq!(tail[1].role, MessageRole::Input);
        assert_eq!(tail[1].content, "whoami");
        assert!(tail[0].content.contains("VOID_ENGINE"));
    }

    #[test]
    fn test_select_project_resets_virtual_path() {
        let mut app = app_with_projects();
        app.shell.submit("cd src", app.index.active());
        assert_eq!(app.shell.virtual_path(), "src");

        app.apply_effect(PaletteEffect::SelectProject("2".into()));
        assert_eq!(app.index.active().unwrap().id, "2");
        assert_eq!(app.shell.virtual_path(), "");
    }

    #[test]
    fn test_scroll_to_moves_focus() {
        let mut app = app_with_projects();
        app.apply_effect(PaletteEffect::ScrollTo(Section::GitFlow));
        assert_eq!(app.focus, Section::GitFlow);
    }

    #[test]
    fn test_open_link_surfaces_system_line() {
        let mut app = app_with_projects();
        app.apply_effect(PaletteEffect::OpenLink("https://github.com/enterk0d3".into()));

        let last = app.shell.transcript().last().unwrap();
        assert_eq!(last.role, MessageRole::System);
        assert!(last.content.contains("github.com/enterk0d3"));
    }

    #[test]
    fn test_quit_action_stops_loop() {
        let mut app = app_with_projects();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_cancel_clears_shell_input() {
        let mut app = app_with_projects();
        app.handle_action(Action::InputChar('x'));
        app.handle_action(Action::Cancel);
        assert_eq!(app.shell.input(), "");
    }

    #[test]
    fn test_project_step_keys() {
        let mut app = app_with_projects();
        app.handle_action(Action::ProjectNext);
        assert_eq!(app.index.active().unwrap().id, "2");
        app.handle_action(Action::ProjectPrev);
        assert_eq!(app.index.active().unwrap().id, "1");
    }
}
