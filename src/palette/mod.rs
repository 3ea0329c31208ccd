//! Command palette: a filterable overlay of actions.
//!
//! The palette is pure state; it never touches the shell or the project
//! list directly. Confirming an action yields a [`PaletteEffect`] that the
//! event loop interprets (shell commands go through the command bus, so
//! palette-triggered commands and typed commands share one dispatch path).

use crate::models::Project;

/// Grouping shown next to each action; also matched by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    System,
    Social,
    Projects,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::System => "System",
            Category::Social => "Social",
            Category::Projects => "Projects",
        }
    }
}

/// A focusable region of the interface that navigation actions target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    GitFlow,
    Terminal,
}

/// What confirming an action asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEffect {
    /// Run a literal command line through the shell's normal submit path.
    RunShellCommand(String),
    /// Activate the project with this id, enriching it first if needed.
    SelectProject(String),
    /// Move focus to a section of the interface.
    ScrollTo(Section),
    /// Surface an external link. Opening it is the caller's concern.
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteAction {
    pub id: String,
    pub label: String,
    pub category: Category,
    pub shortcut: Option<&'static str>,
    pub effect: PaletteEffect,
}

fn static_actions() -> Vec<PaletteAction> {
    vec![
        PaletteAction {
            id: "nav-projects".into(),
            label: "Go to Projects".into(),
            category: Category::Navigation,
            shortcut: Some("G P"),
            effect: PaletteEffect::ScrollTo(Section::Projects),
        },
        PaletteAction {
            id: "nav-git".into(),
            label: "View Git Flow".into(),
            category: Category::Navigation,
            shortcut: Some("G G"),
            effect: PaletteEffect::ScrollTo(Section::GitFlow),
        },
        PaletteAction {
            id: "nav-terminal".into(),
            label: "Focus Terminal".into(),
            category: Category::Navigation,
            shortcut: Some("G T"),
            effect: PaletteEffect::ScrollTo(Section::Terminal),
        },
        PaletteAction {
            id: "sys-clear".into(),
            label: "Clear Terminal".into(),
            category: Category::System,
            shortcut: None,
            effect: PaletteEffect::RunShellCommand("clear".into()),
        },
        PaletteAction {
            id: "sys-whoami".into(),
            label: "Identify User (whoami)".into(),
            category: Category::System,
            shortcut: None,
            effect: PaletteEffect::RunShellCommand("whoami".into()),
        },
        PaletteAction {
            id: "social-github".into(),
            label: "Open GitHub Profile".into(),
            category: Category::Social,
            shortcut: None,
            effect: PaletteEffect::OpenLink("https://github.com/enterk0d3".into()),
        },
        PaletteAction {
            id: "social-twitter".into(),
            label: "Open Twitter".into(),
            category: Category::Social,
            shortcut: None,
            effect: PaletteEffect::OpenLink("https://twitter.com/enterk0d3".into()),
        },
        PaletteAction {
            id: "social-email".into(),
            label: "Send Email".into(),
            category: Category::Social,
            shortcut: None,
            effect: PaletteEffect::OpenLink("mailto:null@enterk0d3.dev".into()),
        },
    ]
}

/// Palette state: open flag, query, highlight, and the action list.
///
/// Project-switch actions are rebuilt whenever the project list changes;
/// the static actions always come first.
pub struct CommandPalette {
    open: bool,
    query: String,
    highlighted: usize,
    actions: Vec<PaletteAction>,
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPalette {
    pub fn new() -> Self {
        Self { open: false, query: String::new(), highlighted: 0, actions: static_actions() }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open with a fresh query and the highlight on the first result.
    pub fn toggle(&mut self) {
        if self.open {
            self.open = false;
        } else {
            self.open = true;
            self.query.clear();
            self.highlighted = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn input_char(&mut self, c: char) {
        self.query.push(c);
        self.highlighted = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.highlighted = 0;
    }

    /// Rebuild the per-project "Switch to" actions from the current list.
    pub fn set_projects(&mut self, projects: &[Project]) {
        self.actions = static_actions();
        for project in projects {
            self.actions.push(PaletteAction {
                id: format!("project-{}", project.id),
                label: format!("Switch to: {}", project.title),
                category: Category::Projects,
                shortcut: None,
                effect: PaletteEffect::SelectProject(project.id.clone()),
            });
        }
        self.highlighted = 0;
    }

    /// Actions whose label or category contains the query, case-insensitive.
    pub fn filtered(&self) -> Vec<&PaletteAction> {
        let needle = self.query.to_lowercase();
        self.actions
            .iter()
            .filter(|action| {
                needle.is_empty()
                    || action.label.to_lowercase().contains(&needle)
                    || action.category.name().to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn move_down(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn move_up(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    /// Execute the highlighted action: return its effect and close.
    pub fn confirm(&mut self) -> Option<PaletteEffect> {
        let effect = self.filtered().get(self.highlighted).map(|action| action.effect.clone());
        if effect.is_some() {
            self.open = false;
        }
        effect
    }
}
