//! Human readable summary of an analysis

use crate::freq::{top_k, FreqEntry};
use crate::highlight::{highlight_line, Style};
use crate::stats::AggregateStat;
use crate::util::{get_writer, lines, Result};
use std::io::Write;
use std::path::Path;

/// title of a single file report
pub const FILE_TITLE: &str = "Text Analysis Report";
/// title of a directory report
pub const DIR_TITLE: &str = "Text Analysis Summary Report";

const RULE: &str = "==============================";
const THIN_RULE: &str = "------------------------------";
const TABLE_RULE: &str = "+----------------------+--------+";
const WORD_WIDTH: usize = 20;

/// Everything that goes into a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// first line of the report
    pub title: String,
    /// where the text came from, for single file reports
    pub source: Option<String>,
    /// number of files, for directory reports
    pub files: Option<u64>,
    /// total bytes
    pub chars: u64,
    /// total words
    pub words: u64,
    /// total lines
    pub lines: u64,
    /// number of words asked for
    pub top_n: usize,
    /// most frequent words, most frequent first
    pub top: Vec<FreqEntry>,
}

impl Summary {
    /// summary of one file
    pub fn for_file(stat: &AggregateStat, path: &str, top_n: usize) -> Self {
        Self::new(FILE_TITLE, Some(path.to_string()), None, stat, top_n)
    }
    /// summary of a directory tree
    pub fn for_dir(stat: &AggregateStat, top_n: usize) -> Self {
        Self::new(DIR_TITLE, None, Some(stat.files), stat, top_n)
    }
    fn new(
        title: &str,
        source: Option<String>,
        files: Option<u64>,
        stat: &AggregateStat,
        top_n: usize,
    ) -> Self {
        Self {
            title: title.to_string(),
            source,
            files,
            chars: stat.chars,
            words: stat.words,
            lines: stat.lines,
            top_n,
            top: top_k(&stat.table, top_n),
        }
    }
    /// the top words, without counts
    pub fn top_words(&self) -> Vec<&str> {
        self.top.iter().map(|e| e.word.as_str()).collect()
    }
    /// Write the report, with the top words in `style`
    pub fn write(&self, w: &mut impl Write, style: Style) -> Result<()> {
        writeln!(w, "{}", RULE)?;
        writeln!(w, "  {}", self.title)?;
        writeln!(w, "{}", RULE)?;
        if let Some(source) = &self.source {
            writeln!(w, "File: {}", source)?;
        }
        writeln!(w, "{}", THIN_RULE)?;
        writeln!(w, "Total characters : {}", self.chars)?;
        writeln!(w, "Total words      : {}", self.words)?;
        writeln!(w, "Total lines      : {}", self.lines)?;
        if let Some(files) = self.files {
            writeln!(w, "Files scanned    : {}", files)?;
        }
        writeln!(w, "{}", THIN_RULE)?;
        writeln!(w, "Top {} frequent words:", self.top_n)?;
        writeln!(w, "{}", TABLE_RULE)?;
        writeln!(w, "| {:<WORD_WIDTH$} | {:<6} |", "Word", "Count")?;
        writeln!(w, "{}", TABLE_RULE)?;
        for e in &self.top {
            w.write_all(b"| ")?;
            style.write(w, e.word.as_bytes())?;
            let pad = WORD_WIDTH.saturating_sub(e.word.len());
            writeln!(w, "{:pad$} | {:<6} |", "", e.count)?;
        }
        writeln!(w, "{}", TABLE_RULE)?;
        writeln!(w, "{}", RULE)?;
        Ok(())
    }
    /// the report as plain text
    pub fn to_plain(&self) -> String {
        let mut v = Vec::new();
        // writing to a Vec cannot fail
        let _ = self.write(&mut v, Style::plain());
        String::from_utf8_lossy(&v).into_owned()
    }
    /// Write the plain report to a named file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut w = get_writer(path)?;
        self.write(&mut w, Style::plain())?;
        w.flush()?;
        Ok(())
    }
}

/// Write all of `data` with the top words of `summary` highlighted
pub fn write_highlighted(
    w: &mut impl Write,
    data: &[u8],
    summary: &Summary,
    style: Style,
) -> Result<()> {
    let top = summary.top_words();
    for line in lines(data) {
        highlight_line(w, line, &top, style)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(text: &str) -> AggregateStat {
        let mut s = AggregateStat::new();
        s.add_text(text.as_bytes());
        s
    }

    #[test]
    fn file_report() {
        let s = stat("The cat sat on the mat. The cat ran.");
        let sum = Summary::for_file(&s, "story.txt", 2);
        let expect = "\
==============================
  Text Analysis Report
==============================
File: story.txt
------------------------------
Total characters : 36
Total words      : 9
Total lines      : 1
------------------------------
Top 2 frequent words:
+----------------------+--------+
| Word                 | Count  |
+----------------------+--------+
| the                  | 3      |
| cat                  | 2      |
+----------------------+--------+
==============================
";
        assert_eq!(sum.to_plain(), expect);
        assert_eq!(sum.top_words(), vec!["the", "cat"]);
    }

    #[test]
    fn dir_report() {
        let mut s = stat("foo foo bar\n");
        s.files = 2;
        let text = Summary::for_dir(&s, 10).to_plain();
        assert!(text.contains("  Text Analysis Summary Report\n"));
        assert!(!text.contains("File:"));
        assert!(text.contains("Files scanned    : 2\n"));
        assert!(text.contains("Top 10 frequent words:\n"));
        assert!(text.contains("| foo                  | 2      |\n"));
    }

    #[test]
    fn empty_report() {
        let sum = Summary::for_file(&stat(""), "empty.txt", 10);
        assert!(sum.top.is_empty());
        let text = sum.to_plain();
        assert!(text.contains("Total characters : 0\n"));
        assert!(text.contains(&format!("{TABLE_RULE}\n{TABLE_RULE}\n{RULE}\n")));
    }

    #[test]
    fn styled_rows_keep_alignment() {
        let sum = Summary::for_file(&stat("hello hello world"), "x", 1);
        let mut v = Vec::new();
        sum.write(&mut v, Style::new("red")).unwrap();
        let text = String::from_utf8(v).unwrap();
        assert!(text.contains("| \x1b[1;31mhello\x1b[0m                | 2      |\n"));
    }

    #[test]
    fn long_words_overflow_column() {
        let word = "a".repeat(25);
        let sum = Summary::for_file(&stat(&word), "x", 1);
        assert!(sum.to_plain().contains(&format!("| {word} | 1      |\n")));
    }

    #[test]
    fn saves_plain_file() -> Result<()> {
        let tmp = tempfile::TempDir::new()?;
        let out = tmp.path().join("report.txt");
        let sum = Summary::for_file(&stat("a b a"), "in.txt", 10);
        sum.save(&out)?;
        let saved = fs_err::read_to_string(&out)?;
        assert_eq!(saved, sum.to_plain());
        assert!(!saved.contains('\x1b'));
        Ok(())
    }

    #[test]
    fn highlighted_text() {
        let text = "A cat.\nCategory: cat\n";
        let sum = Summary::for_file(&stat(text), "x", 1);
        let mut v = Vec::new();
        write_highlighted(&mut v, text.as_bytes(), &sum, Style::new("cyan")).unwrap();
        assert_eq!(
            String::from_utf8(v).unwrap(),
            "A \x1b[1;36mcat\x1b[0m.\nCategory: \x1b[1;36mcat\x1b[0m\n"
        );
    }
}
