/// Number of entries shown by shells.
pub const RECENT_LIMIT: usize = 5;

/// Transient list of fetched playlist names, oldest first.
#[derive(Debug, Default)]
pub struct HistoryManager {
    entries: Vec<String>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` unless it is blank or equals the latest entry.
    pub fn record(&mut self, name: &str) -> bool {
        if name.is_empty() || self.entries.last().is_some_and(|last| last == name) {
            return false;
        }
        self.entries.push(name.to_string());
        true
    }

    /// Up to `limit` names, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<String> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }
}
