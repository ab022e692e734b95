//! Depth first traversal of the text files in a directory tree

use crate::util::Result;
use fs_err as fs;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

/// file name suffixes treated as text
pub const TEXT_SUFFIXES: [&str; 3] = [".txt", ".md", ".log"];

/// Does this file name end in one of the text suffixes?
/// Only the part after the last dot counts, so `notes.txt.bak` is not text.
pub fn is_text_file(name: &str) -> bool {
    match name.rfind('.') {
        Some(pos) => TEXT_SUFFIXES.contains(&&name[pos..]),
        None => false,
    }
}

/// directory entries, sorted by name so every walk visits files in the same order
fn read_dir_sorted(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut v = Vec::new();
    for entry in fs::read_dir(dir)? {
        v.push(entry?);
    }
    v.sort_by_key(|e| e.file_name());
    Ok(v)
}

/// Call `visit` on every text file under `dir`, depth first.
///
/// Symbolic links are never followed, so the walk always ends.
/// Failure to read `dir` itself is returned. Failure to read anything
/// below it, or an error from `visit`, is logged and the walk continues.
pub fn walk_text_files<F>(dir: &Path, visit: &mut F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    let entries = read_dir_sorted(dir)?;
    debug!("scanning {}", dir.display());
    for entry in entries {
        let path: PathBuf = entry.path();
        let kind = match entry.file_type() {
            Ok(kind) => kind,
            Err(e) => {
                warn!("skipping {} : {}", path.display(), e);
                continue;
            }
        };
        if kind.is_dir() {
            if let Err(e) = walk_text_files(&path, visit) {
                warn!("skipping directory {} : {}", path.display(), e);
            }
        } else if kind.is_file() && is_text_file(&entry.file_name().to_string_lossy()) {
            if let Err(e) = visit(&path) {
                warn!("skipping file {} : {}", path.display(), e);
            }
        } else {
            trace!("ignoring {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn suffixes() {
        assert!(is_text_file("a.txt"));
        assert!(is_text_file("README.md"));
        assert!(is_text_file("server.log"));
        assert!(is_text_file(".txt"));
        assert!(!is_text_file("a.TXT"));
        assert!(!is_text_file("notes.txt.bak"));
        assert!(!is_text_file("Makefile"));
        assert!(!is_text_file("main.rs"));
    }

    #[test]
    fn walk() -> Result<()> {
        let tmp = TempDir::new()?;
        let top = tmp.path();
        fs::create_dir_all(top.join("sub/deeper"))?;
        fs::write(top.join("b.txt"), "x")?;
        fs::write(top.join("a.md"), "x")?;
        fs::write(top.join("skip.rs"), "x")?;
        fs::write(top.join("sub/c.log"), "x")?;
        fs::write(top.join("sub/deeper/d.txt"), "x")?;
        fs::create_dir(top.join("dir.txt"))?;

        let mut seen = Vec::new();
        walk_text_files(top, &mut |p: &Path| {
            seen.push(p.strip_prefix(top).unwrap().to_path_buf());
            Ok(())
        })?;
        let expect: Vec<PathBuf> = ["a.md", "b.txt", "sub/c.log", "sub/deeper/d.txt"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(seen, expect);
        Ok(())
    }

    #[test]
    fn missing_top_is_error() {
        let tmp = TempDir::new().unwrap();
        let r = walk_text_files(&tmp.path().join("nope"), &mut |_: &Path| Ok(()));
        assert!(r.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_not_followed() -> Result<()> {
        let tmp = TempDir::new()?;
        let top = tmp.path();
        fs::create_dir(top.join("sub"))?;
        fs::write(top.join("sub/a.txt"), "x")?;
        std::os::unix::fs::symlink(top, top.join("sub/loop"))?;
        std::os::unix::fs::symlink(top.join("sub/a.txt"), top.join("link.txt"))?;
        let mut count = 0;
        walk_text_files(top, &mut |_: &Path| {
            count += 1;
            Ok(())
        })?;
        assert_eq!(count, 1);
        Ok(())
    }
}
