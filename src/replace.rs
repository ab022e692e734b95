//! Literal search and replace within files

use crate::util::{err, Result};
use crate::walk::walk_text_files;
use fs_err as fs;
use log::{debug, info};
use memchr::memmem;
use std::io::{self, Write};
use std::path::Path;

/// Replace every occurrence of `old` in `data` with `new`, scanning left to right.
/// Returns the new data and the number of replacements.
///```
/// let (out, n) = textan::replace::replace_all(b"aaa", b"aa", b"b");
/// assert_eq!(out, b"ba");
/// assert_eq!(n, 1);
///```
pub fn replace_all(data: &[u8], old: &[u8], new: &[u8]) -> (Vec<u8>, usize) {
    if old.is_empty() {
        return (data.to_vec(), 0);
    }
    let mut out = Vec::with_capacity(data.len());
    let mut count = 0;
    let mut last = 0;
    for pos in memmem::find_iter(data, old) {
        // find_iter never reports overlapping matches
        out.extend_from_slice(&data[last..pos]);
        out.extend_from_slice(new);
        last = pos + old.len();
        count += 1;
    }
    out.extend_from_slice(&data[last..]);
    (out, count)
}

/// Rewrite one file with every `old` replaced by `new`.
/// The file is rewritten, via a temporary file in the same directory,
/// only if something changed. Returns the number of replacements.
pub fn rewrite_file<P: AsRef<Path>>(path: P, old: &str, new: &str) -> Result<usize> {
    let path = path.as_ref();
    if old.is_empty() {
        return err!("Cannot replace an empty string in {}", path.display());
    }
    let data = fs::read(path)?;
    let (out, count) = replace_all(&data, old.as_bytes(), new.as_bytes());
    if count == 0 {
        debug!("no '{}' in {}", old, path.display());
        return Ok(0);
    }
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&out)?;
    tmp.flush()?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(path)?;
    info!("{} replacements in {}", count, path.display());
    Ok(count)
}

fn note_replaced(w: &mut impl Write, path: &Path, old: &str, new: &str) -> io::Result<()> {
    writeln!(w, "[replaced] {} | '{}' => '{}'", path.display(), old, new)
}

/// Replace `old` with `new` throughout one file, as [rewrite_file],
/// then write a `[replaced]` line to `w` if anything changed.
pub fn replace_in_file<P: AsRef<Path>>(
    w: &mut impl Write,
    path: P,
    old: &str,
    new: &str,
) -> Result<usize> {
    let path = path.as_ref();
    let count = rewrite_file(path, old, new)?;
    if count > 0 {
        note_replaced(w, path, old, new)?;
    }
    Ok(count)
}

/// Replace `old` with `new` in every text file under `dir`.
/// Progress goes to `w`. If `w` fails, every file is still rewritten
/// and the write error is returned at the end.
/// Returns the total number of replacements.
pub fn replace_in_dir<P: AsRef<Path>>(
    w: &mut impl Write,
    dir: P,
    old: &str,
    new: &str,
) -> Result<usize> {
    if old.is_empty() {
        return err!("Cannot replace an empty string");
    }
    let mut total = 0;
    let mut lost: Option<io::Error> = None;
    walk_text_files(dir.as_ref(), &mut |path: &Path| {
        if lost.is_none() {
            if let Err(e) = writeln!(w, "[processing] {}", path.display()) {
                lost = Some(e);
            }
        }
        let count = rewrite_file(path, old, new)?;
        total += count;
        if count > 0 && lost.is_none() {
            if let Err(e) = note_replaced(w, path, old, new) {
                lost = Some(e);
            }
        }
        Ok(())
    })?;
    match lost {
        Some(e) => Err(e.into()),
        None => Ok(total),
    }
}
