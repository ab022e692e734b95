use textan::diff::diff_files;
use textan::prelude::*;

pub fn main(first: &str, second: &str) -> Result<()> {
    let mut w = get_writer("-")?;
    let diffs = diff_files(&mut w, first, second)?;
    w.flush()?;
    log::info!("{} differences", diffs);
    Ok(())
}
