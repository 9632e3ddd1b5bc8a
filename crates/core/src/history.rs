//! Linear undo/redo history of committed colors.
//!
//! A history is a non-empty sequence plus a cursor. Committing after an undo
//! discards everything past the cursor; undo and redo at the ends are no-ops
//! that still return the color under the cursor.

use crate::color::Hsv;

/// Undo/redo stack over committed colors.
///
/// Invariants: `entries.len() >= 1` and `cursor < entries.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorHistory<C = Hsv> {
    entries: Vec<C>,
    cursor: usize,
}

impl<C: Clone + std::fmt::Debug> ColorHistory<C> {
    /// Starts a history holding only `initial`.
    pub fn new(initial: C) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Appends `color`, dropping any redo tail first.
    pub fn commit(&mut self, color: C) {
        log::debug!("commit color to history: {color:?}");
        if self.cursor != self.last_index() {
            log::debug!(
                "discarding {} redo entries",
                self.last_index() - self.cursor
            );
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(color);
        self.cursor = self.last_index();
    }

    /// Steps back one entry if possible and returns the entry under the cursor.
    pub fn undo(&mut self) -> C {
        if self.can_undo() {
            self.cursor -= 1;
            log::debug!("undo to entry {}", self.cursor);
        } else {
            log::debug!("nothing to undo");
        }
        self.current().clone()
    }

    /// Steps forward one entry if possible and returns the entry under the cursor.
    pub fn redo(&mut self) -> C {
        if self.can_redo() {
            self.cursor += 1;
            log::debug!("redo to entry {}", self.cursor);
        } else {
            log::debug!("nothing to redo");
        }
        self.current().clone()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.last_index()
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &C {
        &self.entries[self.cursor]
    }

    /// Index of the entry under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, including any redo tail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[C] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(h: f64) -> Hsv {
        Hsv::new(h, 1.0, 1.0)
    }

    #[test]
    fn new_history_has_single_entry_and_no_moves() {
        let history = ColorHistory::new(hsv(0.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.is_empty());
    }

    #[test]
    fn undo_at_start_returns_oldest_entry() {
        let mut history = ColorHistory::new(hsv(10.0));
        assert_eq!(history.undo(), hsv(10.0));
        assert_eq!(history.undo(), hsv(10.0));
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn redo_at_end_is_noop() {
        let mut history = ColorHistory::new(hsv(10.0));
        history.commit(hsv(20.0));
        assert_eq!(history.redo(), hsv(20.0));
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn commit_moves_cursor_to_end() {
        let mut history = ColorHistory::new(hsv(0.0));
        history.commit(hsv(1.0));
        history.commit(hsv(2.0));
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), &hsv(2.0));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_redo_commit_sequence() {
        let (a, b, c, d) = (hsv(10.0), hsv(20.0), hsv(30.0), hsv(40.0));
        let mut history = ColorHistory::new(hsv(0.0));
        history.commit(a);
        history.commit(b);
        history.commit(c);

        assert_eq!(history.undo(), b);
        assert_eq!(history.undo(), a);
        assert_eq!(history.redo(), b);

        history.commit(d);
        assert_eq!(history.entries(), &[hsv(0.0), a, b, d]);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), d);
    }

    #[test]
    fn commit_after_undo_to_start_discards_everything_else() {
        let mut history = ColorHistory::new(1u32);
        history.commit(2);
        history.commit(3);
        history.undo();
        history.undo();
        history.commit(4);
        assert_eq!(history.entries(), &[1, 4]);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn can_flags_track_cursor() {
        let mut history = ColorHistory::new('a');
        history.commit('b');
        history.commit('c');
        history.undo();
        assert!(history.can_undo());
        assert!(history.can_redo());
        history.undo();
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Commit(u8),
            Undo,
            Redo,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<u8>().prop_map(Op::Commit),
                Just(Op::Undo),
                Just(Op::Redo),
            ]
        }

        proptest! {
            #[test]
            fn cursor_always_within_bounds(ops in proptest::collection::vec(op(), 0..64)) {
                let mut history = ColorHistory::new(0u8);
                for op in ops {
                    match op {
                        Op::Commit(c) => {
                            history.commit(c);
                            prop_assert_eq!(*history.current(), c);
                            prop_assert!(!history.can_redo());
                        }
                        Op::Undo => {
                            let before = history.cursor();
                            let got = history.undo();
                            prop_assert_eq!(history.cursor(), before.saturating_sub(1));
                            prop_assert_eq!(got, *history.current());
                        }
                        Op::Redo => {
                            let before = history.cursor();
                            let got = history.redo();
                            prop_assert_eq!(history.cursor(), (before + 1).min(history.len() - 1));
                            prop_assert_eq!(got, *history.current());
                        }
                    }
                    prop_assert!(!history.is_empty());
                    prop_assert!(history.cursor() < history.len());
                    prop_assert_eq!(history.can_undo(), history.cursor() > 0);
                    prop_assert_eq!(history.can_redo(), history.cursor() + 1 < history.len());
                }
            }
        }
    }
}
