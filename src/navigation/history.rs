//! Linear browsing history with a cursor.

/// Ordered list of visited locations and the index of the one on screen.
///
/// A history always holds at least its seed entry, so the cursor is always
/// a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Create a history holding a single seed entry.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            entries: vec![seed.into()],
            cursor: 0,
        }
    }

    /// The entry at the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history keeps at least its seed entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a visit.
    ///
    /// Returns `false` without touching anything if `location` is already the
    /// current entry. Otherwise drops every entry after the cursor, appends
    /// `location` and moves the cursor to it.
    pub fn push(&mut self, location: impl Into<String>) -> bool {
        let location = location.into();
        if self.current() == location {
            return false;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
        true
    }

    /// Whether there is an entry before the cursor.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is an entry after the cursor.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Move the cursor back one entry, returning the new current entry.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Move the cursor forward one entry, returning the new current entry.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_history_has_one_entry() {
        let history = History::new("https://www.apple.com");
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), "https://www.apple.com");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn push_moves_cursor_to_tail() {
        let mut history = History::new("https://a.com");
        assert!(history.push("https://b.com"));
        assert!(history.push("https://c.com"));
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), "https://c.com");
    }

    #[test]
    fn push_same_location_is_ignored() {
        let mut history = History::new("https://a.com");
        assert!(!history.push("https://a.com"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn push_from_middle_discards_forward_entries() {
        let mut history = History::new("https://a.com");
        history.push("https://b.com");
        history.push("https://c.com");
        history.back();
        history.back();
        history.push("https://d.com");

        assert_eq!(history.entries(), ["https://a.com", "https://d.com"]);
        assert_eq!(history.cursor(), 1);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn back_at_start_is_noop() {
        let mut history = History::new("https://a.com");
        assert_eq!(history.back(), None);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn forward_at_tail_is_noop() {
        let mut history = History::new("https://a.com");
        history.push("https://b.com");
        assert_eq!(history.forward(), None);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn back_then_forward() {
        let mut history = History::new("https://a.com");
        history.push("https://b.com");
        assert_eq!(history.back(), Some("https://a.com"));
        assert!(history.can_go_forward());
        assert_eq!(history.forward(), Some("https://b.com"));
        assert!(!history.can_go_forward());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_url() -> impl Strategy<Value = String> {
            "[a-z]{3,10}".prop_map(|s| format!("https://{s}.com"))
        }

        #[derive(Debug, Clone)]
        enum Op {
            Push(String),
            Back,
            Forward,
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                arb_url().prop_map(Op::Push),
                Just(Op::Back),
                Just(Op::Forward),
            ]
        }

        proptest! {
            #[test]
            fn cursor_always_in_bounds(ops in proptest::collection::vec(arb_op(), 0..50)) {
                let mut history = History::new("https://seed.com");
                for op in ops {
                    match op {
                        Op::Push(url) => { history.push(url); }
                        Op::Back => { history.back(); }
                        Op::Forward => { history.forward(); }
                    }
                    prop_assert!(history.cursor() < history.len());
                    prop_assert_eq!(history.can_go_back(), history.cursor() > 0);
                    prop_assert_eq!(history.can_go_forward(), history.cursor() + 1 < history.len());
                }
            }

            #[test]
            fn push_keeps_prefix_and_lands_on_tail(
                ops in proptest::collection::vec(arb_op(), 0..30),
                url in arb_url(),
            ) {
                let mut history = History::new("https://seed.com");
                for op in ops {
                    match op {
                        Op::Push(u) => { history.push(u); }
                        Op::Back => { history.back(); }
                        Op::Forward => { history.forward(); }
                    }
                }
                let before = history.entries()[..=history.cursor()].to_vec();
                let grew = history.push(url.clone());
                prop_assert_eq!(history.current(), url.as_str());
                if grew {
                    prop_assert_eq!(history.cursor(), history.len() - 1);
                    prop_assert_eq!(history.len(), before.len() + 1);
                    prop_assert_eq!(&history.entries()[..before.len()], before.as_slice());
                }
            }

            #[test]
            fn back_all_the_way_reaches_seed(urls in proptest::collection::vec(arb_url(), 1..20)) {
                let mut history = History::new("https://seed.com");
                for url in &urls {
                    history.push(url.clone());
                }
                while history.back().is_some() {}
                prop_assert_eq!(history.cursor(), 0);
                prop_assert_eq!(history.current(), "https://seed.com");
            }
        }
    }
}
