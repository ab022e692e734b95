//! Terminal colors, and highlighting of words within a line

use crate::tokenize::is_word_byte;
use crate::util::Result;
use fnv::FnvHashMap;
use lazy_static::lazy_static;
use std::io::Write;

/// escape sequence that ends any highlight
pub const RESET: &str = "\x1b[0m";

/// color used for unknown names
pub const DEFAULT_COLOR: &str = "yellow";

const PALETTE: [(&str, &str); 21] = [
    ("yellow", "\x1b[1;33m"),
    ("red", "\x1b[1;31m"),
    ("green", "\x1b[1;32m"),
    ("blue", "\x1b[1;34m"),
    ("magenta", "\x1b[1;35m"),
    ("cyan", "\x1b[1;36m"),
    ("white", "\x1b[1;37m"),
    ("black", "\x1b[1;30m"),
    ("gray", "\x1b[1;38m"),
    ("pink", "\x1b[1;95m"),
    ("orange", "\x1b[38;5;208m"),
    ("brown", "\x1b[38;5;94m"),
    ("purple", "\x1b[38;5;93m"),
    ("brightred", "\x1b[1;91m"),
    ("brightgreen", "\x1b[1;92m"),
    ("brightblue", "\x1b[1;94m"),
    ("brightmagenta", "\x1b[1;95m"),
    ("brightcyan", "\x1b[1;96m"),
    ("brightwhite", "\x1b[1;97m"),
    ("lightgray", "\x1b[0;37m"),
    ("darkgray", "\x1b[1;90m"),
];

lazy_static! {
    static ref COLORS: FnvHashMap<&'static str, &'static str> = PALETTE.iter().copied().collect();
}

/// A highlight style, made from a color name
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Style {
    name: &'static str,
    code: &'static str,
}

impl Default for Style {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl Style {
    /// Style for a color name. Unknown names give the default color.
    pub fn new(name: &str) -> Self {
        match COLORS.get_key_value(name) {
            Some((&name, &code)) => Self { name, code },
            None => {
                log::debug!("unknown color '{}', using {}", name, DEFAULT_COLOR);
                let (name, code) = PALETTE[0];
                Self { name, code }
            }
        }
    }
    /// A style that writes text unchanged
    pub const fn plain() -> Self {
        Self { name: "", code: "" }
    }
    /// is this the plain style?
    pub fn is_plain(&self) -> bool {
        self.code.is_empty()
    }
    /// canonical color name
    pub const fn name(&self) -> &'static str {
        self.name
    }
    /// escape sequence that starts the highlight
    pub const fn code(&self) -> &'static str {
        self.code
    }
    /// write some text in this style
    pub fn write(&self, w: &mut impl Write, text: &[u8]) -> Result<()> {
        if self.is_plain() {
            w.write_all(text)?;
        } else {
            w.write_all(self.code.as_bytes())?;
            w.write_all(text)?;
            w.write_all(RESET.as_bytes())?;
        }
        Ok(())
    }
}

/// Escape sequence for a color name, if the name is known
pub fn color_code(name: &str) -> Option<&'static str> {
    COLORS.get(name).copied()
}

/// names of all known colors
pub fn color_names() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|x| x.0)
}

/// Does `word` appear at `pos`, ignoring case, as a whole word?
fn whole_word_at(line: &[u8], pos: usize, word: &[u8]) -> bool {
    let end = pos + word.len();
    if word.is_empty() || end > line.len() || !line[pos..end].eq_ignore_ascii_case(word) {
        return false;
    }
    let before_ok = pos == 0 || !is_word_byte(line[pos - 1]);
    let after_ok = end == line.len() || !is_word_byte(line[end]);
    before_ok && after_ok
}

/// Write `line`, with every whole word occurrence of any of `words` highlighted.
///
/// Matching ignores ASCII case. At each position the words are tried in order,
/// and the first match wins. Text is written with its original case.
///```
/// use textan::highlight::{highlight_line, Style};
/// let mut out = Vec::new();
/// highlight_line(&mut out, b"category Cat cats", &["cat"], Style::new("red")).unwrap();
/// assert_eq!(out, b"category \x1b[1;31mCat\x1b[0m cats");
///```
pub fn highlight_line<S: AsRef<str>>(
    w: &mut impl Write,
    line: &[u8],
    words: &[S],
    style: Style,
) -> Result<()> {
    let mut pos = 0;
    let mut plain_from = 0;
    while pos < line.len() {
        let found = words
            .iter()
            .map(|x| x.as_ref().as_bytes())
            .find(|x| whole_word_at(line, pos, x));
        match found {
            Some(word) => {
                w.write_all(&line[plain_from..pos])?;
                style.write(w, &line[pos..pos + word.len()])?;
                pos += word.len();
                plain_from = pos;
            }
            None => pos += 1,
        }
    }
    w.write_all(&line[plain_from..])?;
    Ok(())
}
