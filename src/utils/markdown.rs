//! Markdown flattening for project descriptions.
//!
//! Repository descriptions arrive as markdown (emphasis, inline code,
//! bullet lists). The TUI renders plain styled lines, so the markup is
//! flattened to text: list items become `* `-prefixed lines, inline code
//! keeps its backticks stripped, emphasis markers are dropped.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Flatten a markdown string into display lines.
pub fn markdown_to_lines(source: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_item = false;

    let flush = |current: &mut String, lines: &mut Vec<String>| {
        if !current.trim().is_empty() {
            lines.push(current.trim_end().to_string());
        }
        current.clear();
    };

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::Item) => {
                flush(&mut current, &mut lines);
                in_item = true;
                current.push_str("* ");
            }
            Event::End(TagEnd::Item) => {
                flush(&mut current, &mut lines);
                in_item = false;
            }
            Event::Start(Tag::Paragraph) => {
                if !in_item {
                    flush(&mut current, &mut lines);
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if !in_item {
                    flush(&mut current, &mut lines);
                }
            }
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => {
                flush(&mut current, &mut lines);
                if in_item {
                    current.push_str("  ");
                }
            }
            _ => {}
        }
    }
    flush(&mut current, &mut lines);

    lines
}
