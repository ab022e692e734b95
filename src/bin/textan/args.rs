use textan::prelude::*;
use clap::ArgAction;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, nargs: 1 }
    };
}

#[macro_export]
macro_rules! arg_pair {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, nargs: 2 }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

impl ProgSpec {
    pub const fn new(help: &'static str) -> Self {
        Self { help, author: "textan developers", version: env!("CARGO_PKG_VERSION") }
    }
}

/// One command line option.
/// An empty `value` makes a flag, otherwise the option takes `nargs` values,
/// named by the space separated words of `value`.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
    pub nargs: usize,
}

/// One use of an option on the command line
#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub values: Vec<String>,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, values: Vec<String>, index: usize) -> Self {
        Self { name: name.to_string(), values, index }
    }
    /// the first value, empty for a flag
    pub fn value(&self) -> &str {
        self.values.first().map_or("", String::as_str)
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name);
    if let Some(ch) = x.short.chars().next() {
        b = b.short(ch);
    }
    b = b.long(x.name).help(x.help);
    if x.value.is_empty() {
        b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
    } else {
        b = b
            .value_names(x.value.split(' '))
            .num_args(x.nargs)
            .action(ArgAction::Append);
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    let Some(occurrences) = m.get_occurrences::<String>(x.name) else {
        return;
    };
    let Some(indices) = m.indices_of(x.name) else {
        return;
    };
    let indices: Vec<usize> = indices.collect();
    let step = if x.value.is_empty() { 1 } else { x.nargs.max(1) };
    for (i, occ) in occurrences.enumerate() {
        let values = if x.value.is_empty() { Vec::new() } else { occ.cloned().collect() };
        let index = indices.get(i * step).copied().unwrap_or(usize::MAX);
        v.push(ArgValue::new(x.name, values, index));
    }
}

/// Parse the command line.
/// Returns None if help or version was requested and has been printed.
pub fn parse(prog: &ProgSpec, spec: &[ArgSpec], argv: &[String]) -> Result<Option<Vec<ArgValue>>> {
    let mut a = clap::Command::new("textan")
        .version(prog.version)
        .author(prog.author)
        .about(prog.help)
        .disable_help_flag(true)
        .arg(clap::Arg::new("help").long("help").help("Print help").action(ArgAction::Help));

    for x in spec {
        a = add_arg(a, x);
    }
    let m = match a.try_get_matches_from(argv) {
        Ok(m) => m,
        Err(e) => {
            e.print()?;
            return if e.use_stderr() { Err(Error::Silent) } else { Ok(None) };
        }
    };
    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok(Some(v))
}
