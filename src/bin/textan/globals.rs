//! settings gathered from the command line

use crate::args::{ArgSpec, ArgValue};
use crate::{arg, arg_pair, args};
use textan::freq::DEFAULT_CAPACITY;
use textan::highlight::{color_names, Style, DEFAULT_COLOR};
use textan::prelude::*;

/// file analyzed when no arguments are given
pub const DEFAULT_INPUT: &str = "input.txt";
/// number of frequent words shown when not asked otherwise
pub const DEFAULT_TOP: usize = 10;

const A: [ArgSpec; 10] = [
    arg! {"path", "p", "File", "Analyze one file, '-' for stdin."},
    arg! {"recursive", "r", "Dir", "Analyze every .txt, .md and .log file under a directory."},
    arg! {"output", "o", "File", "Also write the report to this file. Needs --path or --recursive."},
    arg_pair! {"change", "c", "Old New", "Replace Old with New in the --path file or the --recursive tree."},
    arg! {"highlight", "h", "Color", "Color for frequent words. See --colors for the choices."},
    arg_pair! {"diff", "d", "File1 File2", "Compare two files line by line."},
    arg! {"top", "n", "Number", "How many frequent words to show. Default 10."},
    arg! {"capacity", "", "Number", "Most distinct words tracked, 0 for no limit. Default 1024."},
    arg! {"verbose", "v", "", "Say more on stderr. Repeat for even more."},
    arg! {"colors", "", "", "List the highlight colors."},
];

pub fn global_args() -> &'static [ArgSpec] {
    &A
}

#[derive(Clone, Debug)]
pub struct Settings {
    /// single file to analyze
    pub path: Option<String>,
    /// directory tree to analyze
    pub dir: Option<String>,
    /// where to write the plain report
    pub output: Option<String>,
    /// literal replacement, old then new
    pub change: Option<(String, String)>,
    /// files to compare
    pub diff: Option<(String, String)>,
    /// highlight style for frequent words
    pub style: Style,
    /// how many frequent words
    pub top: usize,
    /// word table capacity, zero for no limit
    pub capacity: usize,
    /// log level, 0 is warnings only
    pub verbose: usize,
    /// just list colors
    pub list_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: None,
            dir: None,
            output: None,
            change: None,
            diff: None,
            style: Style::new(DEFAULT_COLOR),
            top: DEFAULT_TOP,
            capacity: DEFAULT_CAPACITY,
            verbose: 0,
            list_colors: false,
        }
    }
}

fn pair(x: &ArgValue) -> Result<(String, String)> {
    match x.values.as_slice() {
        [a, b] => Ok((a.clone(), b.clone())),
        _ => err!("--{} takes exactly two values", x.name),
    }
}

fn number(x: &ArgValue) -> Result<usize> {
    x.value().parse::<usize>().map_err(|e| {
        let e = Error::from(e);
        Error::Error(format!("--{} takes a whole number, not '{}' : {}", x.name, x.value(), e))
    })
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
    /// Settings used when the program is run with no arguments
    pub fn no_args() -> Self {
        Self {
            path: Some(DEFAULT_INPUT.to_string()),
            ..Self::default()
        }
    }
    /// each color name, written in its own color
    pub fn show_colors(w: &mut impl Write) -> Result<()> {
        for name in color_names() {
            Style::new(name).write(w, name.as_bytes())?;
            w.write_all(b"\n")?;
        }
        Ok(())
    }
    /// later values replace earlier ones
    pub fn consume(&mut self, args: &[ArgValue]) -> Result<()> {
        for x in args {
            if x.name == "path" {
                self.path = Some(x.value().to_string());
            } else if x.name == "recursive" {
                self.dir = Some(x.value().to_string());
            } else if x.name == "output" {
                self.output = Some(x.value().to_string());
            } else if x.name == "change" {
                self.change = Some(pair(x)?);
            } else if x.name == "highlight" {
                self.style = Style::new(x.value());
            } else if x.name == "diff" {
                self.diff = Some(pair(x)?);
            } else if x.name == "top" {
                self.top = number(x)?;
            } else if x.name == "capacity" {
                self.capacity = number(x)?;
            } else if x.name == "verbose" {
                self.verbose += 1;
            } else if x.name == "colors" {
                self.list_colors = true;
            } else {
                unreachable!();
            }
        }
        Ok(())
    }
}
