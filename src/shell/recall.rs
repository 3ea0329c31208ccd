//! Bounded, deduplicating recall history for submitted command lines.

/// Maximum number of remembered command lines.
pub const RECALL_CAPACITY: usize = 50;

/// Result of moving the recall cursor toward newer entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallStep {
    /// Replace the input buffer with this recalled line.
    Replace(String),
    /// Stepped past the newest entry: clear the input, stop browsing.
    Clear,
    /// Not browsing; leave the input untouched.
    Keep,
}

/// Most-recent-first list of distinct submitted lines with a browse cursor.
///
/// Each push removes any older occurrence of the same literal line before
/// inserting at the front, so a line appears at most once. The linear
/// removal is fine at this capacity.
#[derive(Debug, Default)]
pub struct RecallBuffer {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl RecallBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop browsing.
    pub fn push(&mut self, line: &str) {
        self.entries.retain(|existing| existing != line);
        self.entries.insert(0, line.to_string());
        self.entries.truncate(RECALL_CAPACITY);
        self.cursor = None;
    }

    /// Move toward older entries; bounded at the oldest.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        Some(&self.entries[next])
    }

    /// Move toward newer entries; stepping past the newest clears the input.
    pub fn next(&mut self) -> RecallStep {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                RecallStep::Clear
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                RecallStep::Replace(self.entries[i - 1].clone())
            }
            None => RecallStep::Keep,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
