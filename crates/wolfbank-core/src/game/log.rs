use core::fmt;
use serde::Serialize;
use time::OffsetDateTime;
use time::macros::format_description;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    stamp: String,
    text: String,
}

impl LogEntry {
    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stamp, self.text)
    }
}

/// Append-only table history. Lynch and bite entries never name the card hit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry {
            stamp: now_stamp(),
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(LogEntry::text)
    }

    /// Entries appended at or after `from`.
    pub fn since(&self, from: usize) -> &[LogEntry] {
        self.entries.get(from..).unwrap_or(&[])
    }
}

fn now_stamp() -> String {
    let format = format_description!("[hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| String::from("--:--:--"))
}
