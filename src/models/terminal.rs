use serde::{Deserialize, Serialize};

/// Role tag for one line or block in the shell transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    Input,
    Output,
    Error,
    System,
}

/// A single entry in the shell's append-only transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalMessage {
    pub role: MessageRole,
    pub content: String,
}

impl TerminalMessage {
    pub fn input(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Input, content: content.into() }
    }

    pub fn output(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Output, content: content.into() }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Error, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self { role: MessageRole::System, content: content.into() }
    }
}
