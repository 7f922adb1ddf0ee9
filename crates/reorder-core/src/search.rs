//! Search & Highlight
//!
//! Case-insensitive substring match over item names with a wrapping cursor.

use crate::item::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    query: String,
    matches: Vec<ItemId>,
    cursor: usize,
}

impl Search {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn matches(&self) -> &[ItemId] {
        &self.matches
    }

    /// Store the raw query and rematch
    pub fn set_query(&mut self, query: &str, items: &[Item]) {
        self.query = query.to_string();
        self.refresh(items);
    }

    /// Rematch against the current list; the cursor goes back to the first hit
    pub fn refresh(&mut self, items: &[Item]) {
        let keyword = self.query.trim().to_lowercase();
        self.cursor = 0;
        if keyword.is_empty() {
            self.matches.clear();
            return;
        }
        self.matches = items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&keyword))
            .map(|item| item.id)
            .collect();
    }

    pub fn highlighted(&self) -> Option<ItemId> {
        self.matches.get(self.cursor).copied()
    }

    pub fn next(&mut self) -> Option<ItemId> {
        if self.matches.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.matches.len();
        self.highlighted()
    }

    pub fn prev(&mut self) -> Option<ItemId> {
        if self.matches.is_empty() {
            return None;
        }
        let n = self.matches.len();
        self.cursor = (self.cursor + n - 1) % n;
        self.highlighted()
    }

    /// `"i/n"`, or `"0/0"` without matches
    pub fn counter(&self) -> String {
        if self.matches.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.cursor + 1, self.matches.len())
        }
    }

    pub fn clear(&mut self) {
        *self = Search::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Item> {
        vec![
            Item::new(1, "Alice", 1),
            Item::new(2, "bob", 2),
            Item::new(3, "ALINA", 3),
            Item::new(4, "Carol", 4),
        ]
    }

    #[test]
    fn test_case_insensitive_match() {
        let mut search = Search::default();
        search.set_query("  ali ", &staff());
        assert_eq!(search.matches(), &[1, 3]);
        assert_eq!(search.highlighted(), Some(1));
        assert_eq!(search.counter(), "1/2");
    }

    #[test]
    fn test_cursor_wraps() {
        let mut search = Search::default();
        search.set_query("al", &staff());
        assert_eq!(search.next(), Some(3));
        assert_eq!(search.next(), Some(1));
        assert_eq!(search.prev(), Some(3));
        assert_eq!(search.counter(), "2/2");
    }

    #[test]
    fn test_no_matches() {
        let mut search = Search::default();
        search.set_query("zzz", &staff());
        assert!(search.has_query());
        assert_eq!(search.highlighted(), None);
        assert_eq!(search.next(), None);
        assert_eq!(search.counter(), "0/0");
    }

    #[test]
    fn test_blank_query_highlights_nothing() {
        let mut search = Search::default();
        search.set_query("   ", &staff());
        assert!(!search.has_query());
        assert!(search.matches().is_empty());
    }

    #[test]
    fn test_refresh_follows_list_order() {
        let mut search = Search::default();
        let mut items = staff();
        search.set_query("al", &items);
        search.next();

        items.swap(0, 2);
        search.refresh(&items);
        assert_eq!(search.matches(), &[3, 1]);
        assert_eq!(search.highlighted(), Some(3));
    }

    #[test]
    fn test_clear() {
        let mut search = Search::default();
        search.set_query("bob", &staff());
        search.clear();
        assert_eq!(search.query(), "");
        assert_eq!(search.highlighted(), None);
    }
}
