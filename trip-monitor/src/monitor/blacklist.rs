//! Line blacklist.

use std::collections::HashSet;

/// Lines whose trips are never shown.
///
/// The trip planner happily suggests lines that technically connect two
/// stops but are useless in practice; blacklisting them hides those trips.
#[derive(Debug, Default)]
pub struct Blacklist {
    lines: HashSet<String>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line. Returns false if it was already blacklisted.
    pub fn insert(&mut self, line: impl Into<String>) -> bool {
        self.lines.insert(line.into())
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut blacklist = Blacklist::new();
        assert!(blacklist.insert("174"));
        assert!(!blacklist.insert("174"));
        assert_eq!(blacklist.len(), 1);
    }

    #[test]
    fn contains_exact_line_only() {
        let mut blacklist = Blacklist::new();
        blacklist.insert("174");

        assert!(blacklist.contains("174"));
        assert!(!blacklist.contains("17"));
        assert!(!blacklist.contains("1740"));
    }
}
