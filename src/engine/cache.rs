//! Bounded memoization cache with least-recently-used eviction.
//!
//! The recency list is an arena of entries linked by integer indices (no
//! pointer graph, no unsafe): `head` is the most recently used entry, `tail`
//! the next eviction victim. Freed indices are recycled through a free list,
//! so a cache of capacity N never holds more than N entries.
//!
//! A miss is `None`, distinct from a present-but-empty merged value.

use std::collections::HashMap;

#[derive(Debug)]
struct CacheEntry {
    key: String,
    value: String,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct LruCache {
    capacity: usize,
    index: HashMap<String, usize>,
    entries: Vec<CacheEntry>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl LruCache {
    /// Create a cache bounded to `capacity` entries. Capacity is validated at
    /// configuration construction and is always at least 1 here.
    pub(crate) fn new(capacity: usize) -> Self {
        LruCache {
            capacity,
            index: HashMap::with_capacity(capacity.min(1024)),
            entries: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Look up `key`, promoting a present entry to most-recently-used.
    pub(crate) fn get(&mut self, key: &str) -> Option<String> {
        let slot = *self.index.get(key)?;
        self.detach(slot);
        self.push_front(slot);
        Some(self.entries[slot].value.clone())
    }

    /// Insert or refresh `key`, evicting the least-recently-used entry when
    /// the bound is exceeded.
    pub(crate) fn put(&mut self, key: String, value: String) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].value = value;
            self.detach(slot);
            self.push_front(slot);
            return;
        }

        if self.index.len() >= self.capacity {
            self.evict_tail();
        }

        let entry = CacheEntry { key: key.clone(), value, prev: None, next: None };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.entries[slot] = entry;
                slot
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        self.index.insert(key, slot);
        self.push_front(slot);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    fn detach(&mut self, slot: usize) {
        let (prev, next) = (self.entries[slot].prev, self.entries[slot].next);
        match prev {
            Some(p) => self.entries[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entries[n].prev = prev,
            None => self.tail = prev,
        }
        self.entries[slot].prev = None;
        self.entries[slot].next = None;
    }

    fn push_front(&mut self, slot: usize) {
        self.entries[slot].prev = None;
        self.entries[slot].next = self.head;
        if let Some(old) = self.head {
            self.entries[old].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }

    fn evict_tail(&mut self) {
        let Some(victim) = self.tail else { return };
        self.detach(victim);
        let key = std::mem::take(&mut self.entries[victim].key);
        self.entries[victim].value = String::new();
        self.index.remove(&key);
        self.free.push(victim);
    }
}
