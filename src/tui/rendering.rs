use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use super::layout::AppLayout;
use super::timestamps::format_sync_age;
use crate::models::{MessageRole, NodeKind, Project, TerminalMessage};
use crate::palette::{PaletteAction, Section};
use crate::utils::markdown_to_lines;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ALERT: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Palette overlay snapshot for one frame.
pub struct PaletteView<'a> {
    pub query: &'a str,
    pub actions: Vec<&'a PaletteAction>,
    pub highlighted: usize,
}

/// Everything the renderer needs for one frame.
pub struct RenderState<'a> {
    pub projects: &'a [Project],
    pub active_index: Option<usize>,
    pub transcript: &'a [TerminalMessage],
    pub input: &'a str,
    pub virtual_path: &'a str,
    pub thinking: bool,
    pub syncing: bool,
    pub focus: Section,
    pub last_sync: Option<DateTime<Utc>>,
    pub palette: Option<PaletteView<'a>>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());
    let active = state.active_index.and_then(|i| state.projects.get(i));

    render_project_strip(frame, layout.projects_area, state);
    render_terminal(frame, layout.terminal_area, state);
    render_timeline(frame, layout.timeline_area, active, state.focus);
    render_status_bar(frame, layout.status_area, state);

    if let Some(palette) = &state.palette {
        render_palette(frame, AppLayout::palette_area(frame.area()), palette);
    }
}

fn border_style(focused: bool) -> Style {
    if focused { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
}

fn render_project_strip(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut spans: Vec<Span> = Vec::new();
    for (idx, project) in state.projects.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  |  ", Style::default().fg(MUTED)));
        }
        let style = if Some(idx) == state.active_index {
            Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} ", project.title), style));
    }
    if state.projects.is_empty() {
        let text = if state.syncing { "SYNCING..." } else { "NO PROJECTS SYNCED" };
        spans.push(Span::styled(text, Style::default().fg(MUTED)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(state.focus == Section::Projects))
            .title(" Projects "),
    );
    frame.render_widget(paragraph, area);
}

fn message_style(role: MessageRole) -> Style {
    match role {
        MessageRole::Input => Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        MessageRole::Output => Style::default().fg(ACCENT),
        MessageRole::Error => Style::default().fg(ALERT),
        MessageRole::System => Style::default().fg(MUTED),
    }
}

fn render_terminal(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut lines: Vec<Line> = Vec::new();
    for message in state.transcript {
        let style = message_style(message.role);
        for (i, text) in message.content.lines().enumerate() {
            let line = if message.role == MessageRole::Input && i == 0 {
                Line::from(vec![
                    Span::styled("$ ", Style::default().fg(MUTED)),
                    Span::styled(text.to_string(), style),
                ])
            } else {
                Line::from(Span::styled(text.to_string(), style))
            };
            lines.push(line);
        }
        // Blank content still occupies a transcript row
        if message.content.is_empty() {
            lines.push(Line::from(""));
        }
    }

    let prompt = format!("enterk0d3:~/{}$ ", state.virtual_path);
    lines.push(Line::from(vec![
        Span::styled(prompt, Style::default().fg(ACCENT)),
        Span::styled(state.input.to_string(), Style::default().fg(BRIGHT)),
        Span::styled("█", Style::default().fg(ACCENT)),
    ]));

    // Keep the prompt in view: drop lines that scrolled past the top
    let visible = area.height.saturating_sub(2) as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(state.focus == Section::Terminal))
                .title(" Terminal "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn node_marker(kind: NodeKind) -> (&'static str, Color) {
    match kind {
        NodeKind::Commit => ("*", MUTED),
        NodeKind::Merge => ("M", ACCENT),
        NodeKind::Release => ("R", ALERT),
    }
}

fn render_timeline(frame: &mut Frame, area: Rect, project: Option<&Project>, focus: Section) {
    let content = if let Some(project) = project {
        let mut lines: Vec<Line> = Vec::new();
        for text in markdown_to_lines(&project.description) {
            lines.push(Line::from(Span::styled(text, Style::default().fg(MUTED))));
        }
        if !project.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("[{}]", project.tags.join("] [")),
                Style::default().fg(ACCENT),
            )));
        }
        if let Some(url) = &project.preview_url {
            lines.push(Line::from(Span::styled(
                format!("preview: {}", url),
                Style::default().fg(MUTED),
            )));
        }
        lines.push(Line::from(""));

        match project.history.as_deref() {
            Some(history) if !history.is_empty() => {
                for node in history {
                    let (marker, color) = node_marker(node.kind);
                    lines.push(Line::from(vec![
                        Span::styled(format!("{} ", marker), Style::default().fg(color)),
                        Span::styled(format!("{} ", node.id), Style::default().fg(MUTED)),
                        Span::styled(format!("{} ", node.date), Style::default().fg(MUTED)),
                        Span::styled(node.label.clone(), Style::default().fg(BRIGHT)),
                    ]));
                }
            }
            _ => lines.push(Line::from(Span::styled(
                "NO HISTORY SYNCED",
                Style::default().fg(MUTED),
            ))),
        }
        Text::from(lines)
    } else {
        Text::from("No project selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focus == Section::GitFlow))
                .title(" Git Flow "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut parts = vec![];

    if state.syncing {
        parts.push("[SYNCING]".to_string());
    } else if state.thinking {
        parts.push("[ORACLE...]".to_string());
    }

    parts.push("USER: enterk0d3".to_string());
    parts.push(format!("~/{}", state.virtual_path));
    parts.push(format!("{} projects", state.projects.len()));
    if let Some(synced) = state.last_sync {
        parts.push(format!("synced {}", format_sync_age(&synced)));
    }
    parts.push("Ctrl+K: palette".to_string());
    parts.push("Ctrl+C: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(BRIGHT).bg(BAR_BG));
    frame.render_widget(paragraph, area);
}

fn render_palette(frame: &mut Frame, area: Rect, palette: &PaletteView) {
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = palette
        .actions
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let shortcut = action.shortcut.map(|s| format!("  [{}]", s)).unwrap_or_default();
            let content =
                format!("{:<12} {}{}", action.category.name().to_uppercase(), action.label, shortcut);
            let style = if idx == palette.highlighted {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let title = format!(" > {}█ ", palette.query);
    let list = List::new(items).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)).title(title),
    );
    frame.render_widget(list, area);
}
