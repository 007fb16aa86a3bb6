use std::collections::HashMap;

use crate::board::Board;

/// Default number of entries kept before the table is cleared
pub const TABLE_MAX_SIZE: usize = 2_000_000;

/// Identifies a search node: board contents, remaining depth and side to move
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Key {
    cells: u128,
    depth: u32,
    maximizing: bool,
}

impl Key {
    pub fn new(board: &Board, depth: u32, maximizing: bool) -> Self {
        Self {
            cells: board.packed(),
            depth,
            maximizing,
        }
    }
}

/// Best column and score found for a node
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Entry {
    pub column: Option<usize>,
    pub score: i32,
}

/// Memo table of exact search results
///
/// Entries carry no bound information. Once `capacity` entries are stored the
/// next insertion empties the whole table instead of storing its entry.
#[derive(Clone, Debug)]
pub struct TranspositionTable {
    entries: HashMap<Key, Entry>,
    capacity: usize,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::with_capacity(TABLE_MAX_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
        }
    }

    /// Stores an entry while below capacity, otherwise clears the table
    pub fn set(&mut self, key: Key, entry: Entry) {
        if self.entries.len() < self.capacity {
            self.entries.insert(key, entry);
        } else {
            self.entries.clear();
        }
    }

    /// Stores an entry regardless of capacity
    pub fn force_set(&mut self, key: Key, entry: Entry) {
        self.entries.insert(key, entry);
    }

    pub fn get(&self, key: &Key) -> Option<Entry> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
