//! Bounded word frequency table, and ranking of its contents

use fnv::FnvHashMap;
use std::cmp::Ordering;
use std::fmt;

/// Default maximum number of distinct words tracked
pub const DEFAULT_CAPACITY: usize = 1024;

/// One word and the number of times it was seen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FreqEntry {
    /// the word, lowercase
    pub word: String,
    /// times seen, always at least one
    pub count: u64,
}

impl FreqEntry {
    /// new entry
    pub fn new(word: &str, count: u64) -> Self {
        Self {
            word: word.to_string(),
            count,
        }
    }
}

impl fmt::Display for FreqEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.word, self.count)
    }
}

/// what happened to an inserted word
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Inserted {
    /// word was already present, count incremented
    Counted,
    /// word was new, and now has count one
    Added,
    /// word was new, but the table was full
    Dropped,
}

/// Word counts, in order of first appearance.
///
/// Once the table holds `capacity` distinct words, new words are silently
/// ignored, while words already present go on being counted.
/// A capacity of zero means no limit.
///```
/// use textan::freq::{FreqTable, Inserted};
/// let mut t = FreqTable::with_capacity(1);
/// assert_eq!(t.insert("a"), Inserted::Added);
/// assert_eq!(t.insert("b"), Inserted::Dropped);
/// assert_eq!(t.insert("a"), Inserted::Counted);
/// assert_eq!(t.get("a"), Some(2));
/// assert_eq!(t.len(), 1);
///```
#[derive(Debug, Clone)]
pub struct FreqTable {
    entries: Vec<FreqEntry>,
    index: FnvHashMap<String, usize>,
    capacity: usize,
    dropped: u64,
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FreqTable {
    /// new table with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
    /// new table holding at most `capacity` distinct words, zero for unlimited
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: FnvHashMap::default(),
            capacity,
            dropped: 0,
        }
    }
    /// count one more occurrence of `word`
    pub fn insert(&mut self, word: &str) -> Inserted {
        self.insert_n(word, 1)
    }
    fn insert_n(&mut self, word: &str, n: u64) -> Inserted {
        if let Some(&pos) = self.index.get(word) {
            self.entries[pos].count += n;
            Inserted::Counted
        } else if self.is_saturated() {
            self.dropped += n;
            Inserted::Dropped
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push(FreqEntry::new(word, n));
            Inserted::Added
        }
    }
    /// count for one word, if tracked
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&pos| self.entries[pos].count)
    }
    /// number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// no words at all?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// maximum distinct words, zero for unlimited
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
    /// will new words be ignored?
    pub fn is_saturated(&self) -> bool {
        self.capacity != 0 && self.entries.len() >= self.capacity
    }
    /// number of occurrences ignored because the table was full
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }
    /// sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
    /// entries in order of first appearance
    pub fn entries(&self) -> &[FreqEntry] {
        &self.entries
    }
    /// Fold another table into this one, in the other table's insertion order.
    /// Words the other table tracked but this one has no room for are counted as dropped.
    pub fn merge(&mut self, other: &Self) {
        for e in &other.entries {
            self.insert_n(&e.word, e.count);
        }
        self.dropped += other.dropped;
    }
    /// all entries, most frequent first
    pub fn sorted(&self) -> Vec<FreqEntry> {
        let mut v = self.entries.clone();
        v.sort_by(rank_cmp);
        v
    }
}

/// Ranking order : higher count first, ties broken by word
pub fn rank_cmp(a: &FreqEntry, b: &FreqEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// The `k` most frequent words, most frequent first.
/// Equal counts are ordered by word, so the result does not depend on
/// the order in which words were first seen.
pub fn top_k(table: &FreqTable, k: usize) -> Vec<FreqEntry> {
    let mut v = table.sorted();
    v.truncate(k);
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[&str], capacity: usize) -> FreqTable {
        let mut t = FreqTable::with_capacity(capacity);
        for w in words {
            t.insert(w);
        }
        t
    }

    #[test]
    fn counting() {
        let t = table(&["b", "a", "b", "c", "b", "a"], 10);
        assert_eq!(t.len(), 3);
        assert_eq!(t.get("b"), Some(3));
        assert_eq!(t.get("a"), Some(2));
        assert_eq!(t.get("c"), Some(1));
        assert_eq!(t.get("d"), None);
        assert_eq!(t.total(), 6);
        let order: Vec<&str> = t.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn saturation() {
        let mut t = FreqTable::with_capacity(2);
        assert_eq!(t.insert("x"), Inserted::Added);
        assert_eq!(t.insert("y"), Inserted::Added);
        assert!(t.is_saturated());
        assert_eq!(t.insert("z"), Inserted::Dropped);
        assert_eq!(t.insert("z"), Inserted::Dropped);
        assert_eq!(t.insert("x"), Inserted::Counted);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("z"), None);
        assert_eq!(t.get("x"), Some(2));
        assert_eq!(t.dropped(), 2);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn unlimited() {
        let mut t = FreqTable::with_capacity(0);
        for i in 0..5000 {
            t.insert(&format!("w{i}"));
        }
        assert_eq!(t.len(), 5000);
        assert!(!t.is_saturated());
        assert_eq!(t.dropped(), 0);
    }

    #[test]
    fn default_capacity() {
        let mut t = FreqTable::new();
        for i in 0..2000 {
            t.insert(&format!("word{i}"));
        }
        assert_eq!(t.len(), DEFAULT_CAPACITY);
        assert_eq!(t.dropped(), 2000 - DEFAULT_CAPACITY as u64);
        assert_eq!(t.total() + t.dropped(), 2000);
    }

    #[test]
    fn ranking() {
        let t = table(&["the", "cat", "sat", "on", "the", "mat", "the", "cat", "ran"], 0);
        let top = top_k(&t, 3);
        assert_eq!(top[0], FreqEntry::new("the", 3));
        assert_eq!(top[1], FreqEntry::new("cat", 2));
        // five words tie at one, alphabetical wins
        assert_eq!(top[2], FreqEntry::new("mat", 1));
        assert_eq!(top_k(&t, 100).len(), 6);
        assert!(top_k(&t, 0).is_empty());
        assert!(top_k(&FreqTable::new(), 5).is_empty());
    }

    #[test]
    fn top_is_prefix() {
        let t = table(&["q", "w", "e", "w", "q", "q", "z", "e"], 0);
        let all = t.sorted();
        for k in 0..6 {
            let top = top_k(&t, k);
            assert_eq!(top.len(), k.min(t.len()));
            assert_eq!(&all[..top.len()], &top[..]);
        }
    }

    #[test]
    fn tie_break_ignores_insertion_order() {
        let a = table(&["x", "y", "z", "y"], 0);
        let b = table(&["z", "y", "x", "y"], 0);
        assert_eq!(top_k(&a, 3), top_k(&b, 3));
    }

    #[test]
    fn merging() {
        let mut a = table(&["foo", "foo", "bar"], 0);
        let b = table(&["foo", "foo", "bar"], 0);
        a.merge(&b);
        assert_eq!(a.get("foo"), Some(4));
        assert_eq!(a.get("bar"), Some(2));
        assert_eq!(a.len(), 2);

        let mut small = table(&["a"], 1);
        small.merge(&table(&["b", "b", "a"], 0));
        assert_eq!(small.get("a"), Some(2));
        assert_eq!(small.dropped(), 2);
    }
}
