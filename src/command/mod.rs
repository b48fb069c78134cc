pub mod executor;
pub mod literal;
pub mod parser;
pub mod runner;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Ordered mapping from a trigger pattern to a response string.
///
/// Order is semantically significant: the session layer tries patterns in
/// declaration order and the first match wins. Inserting an already-present
/// pattern overwrites the response in place: position is fixed by the first
/// insertion, the value by the last write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternMap {
    entries: Vec<(String, String)>,
}

impl PatternMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a pattern/response pair. Both sides are trimmed of surrounding
    /// whitespace before storage.
    pub fn insert(&mut self, pattern: &str, response: &str) {
        let pattern = pattern.trim();
        let response = response.trim();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.0 == pattern) {
            entry.1 = response.to_string();
        } else {
            self.entries.push((pattern.to_string(), response.to_string()));
        }
    }

    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.0 == pattern)
            .map(|e| e.1.as_str())
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.0.as_str(), e.1.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PatternMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Streamed as a JSON object in insertion order.
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, response) in self.iter() {
            map.serialize_entry(pattern, response)?;
        }
        map.end()
    }
}

/// One sub-command of a specification string: the literal text to send plus
/// the action and error pattern maps extracted from its marker literals.
///
/// Constructed once per parse, executed at most once against a live session,
/// then discarded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComplexCommand {
    pub command: String,
    pub action_map: PatternMap,
    pub error_map: PatternMap,
}

impl ComplexCommand {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.trim().to_string(),
            action_map: PatternMap::new(),
            error_map: PatternMap::new(),
        }
    }

    /// Register a pattern that, when matched against device output, makes the
    /// session send `response` as a new line.
    pub fn add_action(&mut self, pattern: &str, response: &str) {
        self.action_map.insert(pattern, response);
    }

    /// Register a pattern that aborts execution with `message` when matched.
    pub fn add_error(&mut self, pattern: &str, message: &str) {
        self.error_map.insert(pattern, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let mut map = PatternMap::new();
        map.insert("c", "3");
        map.insert("a", "1");
        map.insert("b", "2");
        let keys: Vec<&str> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn insert_trims_both_sides() {
        let mut map = PatternMap::new();
        map.insert("  More  ", "  y  ");
        assert_eq!(map.get("More"), Some("y"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn duplicate_key_keeps_position_takes_last_value() {
        let mut map = PatternMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "9");
        let pairs: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(pairs, vec![("a", "9"), ("b", "2")]);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut map = PatternMap::new();
        map.insert("z", "1");
        map.insert("a", "2");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }

    #[test]
    fn new_command_trims_and_starts_empty() {
        let command = ComplexCommand::new("  show version  ");
        assert_eq!(command.command, "show version");
        assert!(command.action_map.is_empty());
        assert!(command.error_map.is_empty());
    }

    #[test]
    fn add_action_and_error_land_in_their_maps() {
        let mut command = ComplexCommand::new("reload");
        command.add_action("[yes/no]", "yes");
        command.add_error("Invalid input", "reload rejected");
        assert_eq!(command.action_map.get("[yes/no]"), Some("yes"));
        assert_eq!(command.error_map.get("Invalid input"), Some("reload rejected"));
    }
}
