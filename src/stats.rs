//! Character, word and line counts, plus word frequencies, for a file or a tree of files

use crate::freq::{FreqTable, Inserted};
use crate::tokenize::words;
use crate::util::{lines, read_all, Result};
use crate::walk::walk_text_files;
use log::{debug, info};
use std::path::Path;

/// Running totals for one analysis
#[derive(Debug, Clone, Default)]
pub struct AggregateStat {
    /// bytes read, including newlines
    pub chars: u64,
    /// words read, including those the table had no room for
    pub words: u64,
    /// lines read
    pub lines: u64,
    /// files read
    pub files: u64,
    /// word frequencies
    pub table: FreqTable,
}

impl AggregateStat {
    /// new, with default table capacity
    pub fn new() -> Self {
        Self::default()
    }
    /// new, table holds at most `capacity` distinct words, zero for unlimited
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: FreqTable::with_capacity(capacity),
            ..Self::default()
        }
    }
    /// count one line, which should include its newline, if any
    pub fn add_line(&mut self, line: &[u8]) {
        self.lines += 1;
        self.chars += line.len() as u64;
        for w in words(line) {
            self.words += 1;
            if self.table.insert(&w) == Inserted::Dropped && self.table.dropped() == 1 {
                debug!(
                    "word table full at {} entries, new words are no longer tracked",
                    self.table.len()
                );
            }
        }
    }
    /// count every line in a buffer
    pub fn add_text(&mut self, data: &[u8]) {
        for line in lines(data) {
            self.add_line(line);
        }
    }
    /// Read a file and count it. `-` is stdin.
    /// Returns the contents, which the caller may want for a second pass.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<u8>> {
        let data = read_all(path.as_ref())?;
        self.add_text(&data);
        self.files += 1;
        info!("read {} ({} bytes)", path.as_ref().display(), data.len());
        Ok(data)
    }
    /// Count every text file under `dir` into this one set of totals.
    /// Only a failure to read `dir` itself is an error.
    pub fn add_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        walk_text_files(dir.as_ref(), &mut |path: &Path| {
            self.add_file(path)?;
            Ok(())
        })
    }
    /// Fold another set of totals into this one
    pub fn merge(&mut self, other: &Self) {
        self.chars += other.chars;
        self.words += other.words;
        self.lines += other.lines;
        self.files += other.files;
        self.table.merge(&other.table);
    }
}

/// totals for a single file
pub fn analyze_file<P: AsRef<Path>>(path: P, capacity: usize) -> Result<AggregateStat> {
    let mut stat = AggregateStat::with_capacity(capacity);
    stat.add_file(path)?;
    Ok(stat)
}

/// totals for all text files in a directory tree
pub fn analyze_dir<P: AsRef<Path>>(dir: P, capacity: usize) -> Result<AggregateStat> {
    let mut stat = AggregateStat::with_capacity(capacity);
    stat.add_dir(dir)?;
    Ok(stat)
}
