//! Line by line comparison of two files

use crate::util::{chomp, lines, read_all, write_all_nl, Result};
use std::io::Write;
use std::path::Path;

/// Compare two buffers line by line, writing each difference to `w`.
/// Lines are compared without their line endings.
/// Returns the number of differences reported.
pub fn diff_text(w: &mut impl Write, left: &[u8], right: &[u8]) -> Result<usize> {
    let mut a = lines(left);
    let mut b = lines(right);
    let mut line_num = 1;
    let mut diffs = 0;
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if chomp(x) != chomp(y) {
                    writeln!(w, "Line {} differs:", line_num)?;
                    w.write_all(b"< ")?;
                    write_all_nl(w, x)?;
                    w.write_all(b"> ")?;
                    write_all_nl(w, y)?;
                    diffs += 1;
                }
            }
            (Some(x), None) => {
                write!(w, "Line {} only in first: ", line_num)?;
                write_all_nl(w, x)?;
                diffs += 1;
            }
            (None, Some(y)) => {
                write!(w, "Line {} only in second: ", line_num)?;
                write_all_nl(w, y)?;
                diffs += 1;
            }
            (None, None) => break,
        }
        line_num += 1;
    }
    Ok(diffs)
}

/// Compare two files line by line. Failure to read either file is an error.
pub fn diff_files<P: AsRef<Path>, Q: AsRef<Path>>(
    w: &mut impl Write,
    first: P,
    second: Q,
) -> Result<usize> {
    let left = read_all(first)?;
    let right = read_all(second)?;
    diff_text(w, &left, &right)
}
