//! The command line tool `textan` counts characters, words and lines in
//! plain text files, ranks the most frequent words and highlights them.
//! It can also replace literal strings across files, and compare two files line by line.
//! The library underneath is usable on its own.

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,

//    clippy::all,
//    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
#![allow(clippy::multiple_crate_versions)]

pub mod diff;
pub mod freq;
pub mod highlight;
pub mod prelude;
pub mod replace;
pub mod report;
pub mod stats;
pub mod tokenize;
pub mod util;
pub mod walk;

pub use util::{Error, Result};
