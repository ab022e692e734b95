use std::env;
use std::io::Write;
use textan::util::{get_writer, Error, Result};

pub mod args;
mod analyze_main;
mod change_main;
mod diff_main;
pub mod globals;
mod logger;
use crate::globals::Settings;

const USAGE: &str =
    "USAGE : textan [-p File] [-o Report] [-c Old New] [-h Color] [-d File1 File2] [-r Dir]";

fn main() {
    match inner_main(env::args().collect()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(1);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

pub fn inner_main(argv: Vec<String>) -> Result<()> {
    let mut settings = Settings::new();
    if argv.len() < 2 {
        settings = Settings::no_args();
    } else {
        let prog = args::ProgSpec::new("Count, rank and highlight the words in text files.");
        let Some(values) = args::parse(&prog, globals::global_args(), &argv)? else {
            return Ok(());
        };
        settings.consume(&values)?;
    }
    logger::init(settings.verbose);
    run(&settings)
}

/// Pick one thing to do. Comparing files wins over everything,
/// then a directory beats a single file, and replacing beats analyzing.
fn run(settings: &Settings) -> Result<()> {
    if settings.list_colors {
        let mut w = get_writer("-")?;
        Settings::show_colors(&mut w)?;
        w.flush()?;
        return Ok(());
    }
    if let Some((a, b)) = &settings.diff {
        return diff_main::main(a, b);
    }
    if let Some(dir) = &settings.dir {
        return match &settings.change {
            Some((old, new)) => change_main::dir(dir, old, new),
            None => analyze_main::dir(dir, settings),
        };
    }
    if let Some(path) = &settings.path {
        return match &settings.change {
            Some((old, new)) => change_main::file(path, old, new),
            None => analyze_main::file(path, settings),
        };
    }
    eprintln!("{}", USAGE);
    eprintln!("Type 'textan --help' for more details");
    Err(Error::Silent)
}
