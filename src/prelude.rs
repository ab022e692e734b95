//! The prelude

#[doc(inline)]
pub use crate::freq::{top_k, FreqEntry, FreqTable, Inserted, DEFAULT_CAPACITY};
#[doc(inline)]
pub use crate::highlight::{highlight_line, Style};
#[doc(inline)]
pub use crate::report::{write_highlighted, Summary};
#[doc(inline)]
pub use crate::stats::{analyze_dir, analyze_file, AggregateStat};
#[doc(inline)]
pub use crate::tokenize::words;
#[doc(inline)]
pub use crate::util::{err, get_reader, get_writer, Error, Result};

#[doc(inline)]
pub use std::io::{BufRead, Read, Write};
