use textan::prelude::*;
use textan::replace::{replace_in_dir, replace_in_file};

pub fn file(path: &str, old: &str, new: &str) -> Result<()> {
    let mut w = get_writer("-")?;
    replace_in_file(&mut w, path, old, new)?;
    w.flush()?;
    Ok(())
}

pub fn dir(dir: &str, old: &str, new: &str) -> Result<()> {
    let mut w = get_writer("-")?;
    let total = replace_in_dir(&mut w, dir, old, new)?;
    w.flush()?;
    log::info!("{} replacements in all", total);
    Ok(())
}
