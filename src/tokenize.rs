//! Split raw text into words.
//!
//! A word is a maximal run of ASCII alphanumeric bytes, folded to lowercase.
//! Every other byte, including any byte of a multi-byte UTF-8 sequence,
//! separates words.

/// Longest word ever produced. Longer runs are cut to this many bytes,
/// and the rest of the run is thrown away.
pub const MAX_WORD_LEN: usize = 65535;

/// is this byte part of a word?
#[inline]
pub const fn is_word_byte(ch: u8) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Iterator over the words of a line
///```
/// let v: Vec<String> = textan::tokenize::words(b"The cat's  HAT-3").collect();
/// assert_eq!(v, vec!["the", "cat", "s", "hat", "3"]);
///```
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a [u8],
    max_len: usize,
}

/// words in a line of text
pub const fn words(line: &[u8]) -> Words<'_> {
    Words {
        rest: line,
        max_len: MAX_WORD_LEN,
    }
}

impl<'a> Words<'a> {
    /// as `words`, but with a different maximum word length
    pub const fn with_max_len(line: &'a [u8], max_len: usize) -> Self {
        Self {
            rest: line,
            max_len,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        loop {
            let start = self.rest.iter().position(|ch| is_word_byte(*ch))?;
            let run = &self.rest[start..];
            let len = run
                .iter()
                .position(|ch| !is_word_byte(*ch))
                .unwrap_or(run.len());
            self.rest = &run[len..];
            let keep = len.min(self.max_len);
            if keep > 0 {
                return Some(run[..keep].iter().map(|ch| ch.to_ascii_lowercase() as char).collect());
            }
        }
    }
}
