//! Misc utility stuff

use flate2::read::MultiGzDecoder;
use fs_err as fs;
use std::error;
use std::io::{self, BufRead, Read, Write};
use std::ops::{Deref, DerefMut};
use std::fmt;
use std::path::Path;

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err($crate::util::Error::Error($e.to_string()))};
    ($e:expr) => {Err($crate::util::Error::Error($e))};
    ($($e:expr),+) => {Err($crate::util::Error::Error(format!($($e),+)))}
}
pub use err;
// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom textan error
    Error(String),
    /// pass through ParseIntError
    ParseIntError(std::num::ParseIntError),
    /// pass through io::Error
    IoError(std::io::Error),
    /// pass through a failed atomic rename of a temp file
    PersistError(tempfile::PersistError),
    /// be an error, but don't report anything
    Silent,
}
/// Result type for textan
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Error::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
    /// return true if this error should be treated as an error, but silently
    pub const fn silent(&self) -> bool {
        matches!(self, Error::Silent)
    }
}

err_type!(std::io::Error, Error::IoError);
err_type!(std::num::ParseIntError, Error::ParseIntError);
err_type!(tempfile::PersistError, Error::PersistError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Error(s) => write!(f, "{}", s)?,
            Error::ParseIntError(s) => write!(f, "ParseIntError : {}", s)?,
            Error::IoError(s) => write!(f, "IoError : {}", s)?,
            Error::PersistError(s) => write!(f, "PersistError : {}", s)?,
            Error::Silent => write!(f, "Silent")?,
        }
        Ok(())
    }
}

/// Input file. Wrapped in a type so I can 'impl Debug'
pub struct Infile(
    /// The file being read
    pub io::BufReader<Box<dyn Read>>,
);

impl Infile {
    /// create a new input file
    pub fn new(f: io::BufReader<Box<dyn Read>>) -> Self {
        Self(f)
    }
}

impl Default for Infile {
    fn default() -> Self {
        Self::new(io::BufReader::new(Box::new(io::empty())))
    }
}

impl fmt::Debug for Infile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Infile")
    }
}

impl Deref for Infile {
    type Target = io::BufReader<Box<dyn Read>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Infile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// Make an Outfile from a file name.
/// `-` is stdout, `--` is stderr, anything else is created or truncated.
pub fn get_writer<P: AsRef<Path>>(name: P) -> Result<Outfile> {
    let name = name.as_ref();
    let inner: Box<dyn Write> = {
        if name == Path::new("-") {
            Box::new(io::stdout())
        } else if name == Path::new("--") {
            Box::new(io::stderr())
        } else {
            Box::new(
                fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(name)?,
            )
        }
    };
    Ok(io::BufWriter::new(inner))
}

/// Make an Infile from a file name.
/// `-` is stdin. Gzipped input is decompressed on the fly.
pub fn get_reader<P: AsRef<Path>>(name: P) -> Result<Infile> {
    let name = name.as_ref();
    let inner: Box<dyn Read> = {
        if name == Path::new("-") {
            Box::new(io::stdin())
        } else {
            Box::new(fs::File::open(name)?)
        }
    };
    let mut outer = io::BufReader::new(inner);
    let start = outer.fill_buf()?;
    if start.starts_with(&[0x1fu8, 0x8bu8, 0x08u8]) {
        outer = io::BufReader::new(Box::new(MultiGzDecoder::new(outer)));
    }
    Ok(Infile::new(outer))
}

/// Read the whole of a named file into memory
pub fn read_all<P: AsRef<Path>>(name: P) -> Result<Vec<u8>> {
    let mut f = get_reader(name)?;
    let mut data = Vec::new();
    f.read_to_end(&mut data)?;
    Ok(data)
}

/// Iterator over the lines of a buffer, each including its trailing newline.
/// The final line may lack a newline. An empty buffer has no lines.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

/// lines of a buffer
pub const fn lines(data: &[u8]) -> Lines<'_> {
    Lines { rest: data }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];
    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = match memchr::memchr(b'\n', self.rest) {
            Some(pos) => pos + 1,
            None => self.rest.len(),
        };
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

/// write a buffer. If non-empty, ensure trailing newline
pub fn write_all_nl(w: &mut impl Write, buf: &[u8]) -> Result<()> {
    if !buf.is_empty() {
        w.write_all(buf)?;
        if buf[buf.len() - 1] != b'\n' {
            w.write_all(&[b'\n'])?;
        }
    }
    Ok(())
}

/// remove trailing end of line characters
pub fn chomp(mut x: &[u8]) -> &[u8] {
    while !x.is_empty() {
        let len = x.len() - 1;
        if x[len] != b'\n' && x[len] != b'\r' {
            break;
        } else {
            x = &x[..len];
        }
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    #[test]
    fn split_lines() {
        let v: Vec<&[u8]> = lines(b"one\ntwo\n\nthree").collect();
        assert_eq!(v, vec![&b"one\n"[..], &b"two\n"[..], &b"\n"[..], &b"three"[..]]);
        assert_eq!(lines(b"").count(), 0);
        assert_eq!(lines(b"\n").count(), 1);
        assert_eq!(lines(b"abc\n").count(), 1);
    }

    #[test]
    fn chomping() {
        assert_eq!(chomp(b"abc\r\n"), b"abc");
        assert_eq!(chomp(b"abc"), b"abc");
        assert_eq!(chomp(b"\n"), b"");
    }

    #[test]
    fn newline_writer() {
        let mut v = Vec::new();
        write_all_nl(&mut v, b"abc").unwrap();
        write_all_nl(&mut v, b"def\n").unwrap();
        write_all_nl(&mut v, b"").unwrap();
        assert_eq!(v, b"abc\ndef\n");
    }

    #[test]
    fn reader_writer() {
        let dir = tempfile::TempDir::new().unwrap();
        let plain = dir.path().join("plain.txt");
        {
            let mut w = get_writer(&plain).unwrap();
            w.write_all(b"a much longer first version\n").unwrap();
        }
        {
            let mut w = get_writer(&plain).unwrap();
            w.write_all(b"short\n").unwrap();
        }
        assert_eq!(read_all(&plain).unwrap(), b"short\n");

        let gz = dir.path().join("packed.txt");
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"hello gzip\n").unwrap();
        std::fs::write(&gz, enc.finish().unwrap()).unwrap();
        assert_eq!(read_all(&gz).unwrap(), b"hello gzip\n");

        let missing = read_all(dir.path().join("nope.txt"));
        assert!(matches!(missing, Err(Error::IoError(ref e)) if e.kind() == io::ErrorKind::NotFound));
    }
}
