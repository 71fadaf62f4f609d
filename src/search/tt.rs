use crate::board::Board;
use std::collections::HashMap;
use std::sync::Mutex;

type Key = (Board, u32, bool);

/// Memoized search results keyed by (board, depth, maximizing). The game is
/// deterministic, so a key always maps to the same value and entries are
/// never invalidated; the map grows for the lifetime of its searcher unless
/// a capacity is set or `clear` is called.
///
/// Interior locking keeps the API `&self` so one cache can be shared across
/// parallel root workers behind an `Arc`.
#[derive(Default)]
pub struct Cache {
    map: Mutex<HashMap<Key, i32>>,
    capacity: Option<usize>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry-count bound. A full cache skips new inserts rather than
    /// evicting; entries are cheap to recompute.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self { map: Mutex::new(HashMap::new()), capacity: Some(capacity) }
    }

    pub fn get(&self, board: &Board, depth: u32, maximizing: bool) -> Option<i32> {
        let g = self.map.lock().unwrap();
        g.get(&(*board, depth, maximizing)).copied()
    }

    pub fn put(&self, board: &Board, depth: u32, maximizing: bool, score: i32) {
        let mut g = self.map.lock().unwrap();
        if let Some(cap) = self.capacity {
            if g.len() >= cap && !g.contains_key(&(*board, depth, maximizing)) {
                return;
            }
        }
        g.insert((*board, depth, maximizing), score);
    }

    pub fn len(&self) -> usize {
        self.map.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.map.lock().unwrap().clear();
    }
}
