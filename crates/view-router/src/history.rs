//! Navigation history stack
//!
//! An ordered record of visited paths with a cursor. A push while the cursor
//! is not at the tail discards the forward entries, like a browser does.

/// One visited location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    path: String,
    /// Logical timestamp, strictly increasing within one resolver
    sequence: u64,
    /// Index of the matched route in the route table
    route: usize,
}

impl HistoryEntry {
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    #[inline]
    pub(crate) fn route(&self) -> usize {
        self.route
    }
}

/// History entries plus the cursor into them
///
/// Invariant: when `entries` is non-empty, `cursor < entries.len()`.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    next_sequence: u64,
    /// Maximum number of retained entries (oldest dropped first)
    limit: Option<usize>,
}

impl History {
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|l| l.max(1)),
            ..Self::default()
        }
    }

    fn next_entry(&mut self, path: &str, route: usize) -> HistoryEntry {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        HistoryEntry {
            path: path.to_string(),
            sequence,
            route,
        }
    }

    /// Record a new navigation after the cursor and move onto it
    pub fn push(&mut self, path: &str, route: usize) -> &HistoryEntry {
        if !self.entries.is_empty() {
            let keep = self.cursor + 1;
            if keep < self.entries.len() {
                tracing::trace!(
                    "Discarding {} forward history entries",
                    self.entries.len() - keep
                );
                self.entries.truncate(keep);
            }
        }

        let entry = self.next_entry(path, route);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;

        if let Some(limit) = self.limit
            && self.entries.len() > limit
        {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
            self.cursor -= excess;
        }

        &self.entries[self.cursor]
    }

    /// Overwrite the entry under the cursor, keeping forward entries
    ///
    /// Falls back to `push` on an empty history.
    pub fn replace(&mut self, path: &str, route: usize) -> &HistoryEntry {
        if self.entries.is_empty() {
            return self.push(path, route);
        }
        let entry = self.next_entry(path, route);
        self.entries[self.cursor] = entry;
        &self.entries[self.cursor]
    }

    /// Index reached by moving the cursor by `delta`, if it exists
    pub fn target(&self, delta: isize) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor
            .checked_add_signed(delta)
            .filter(|&index| index < self.entries.len())
    }

    /// Move the cursor without touching the entries
    pub fn move_to(&mut self, index: usize) -> &HistoryEntry {
        debug_assert!(index < self.entries.len());
        self.cursor = index;
        &self.entries[self.cursor]
    }

    #[inline]
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.cursor)
    }

    #[inline]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
