use crate::globals::Settings;
use log::warn;
use textan::prelude::*;

/// Write the plain report, if one was asked for.
/// A report that cannot be written is not fatal, the terminal copy still appears.
fn save_report(summary: &Summary, settings: &Settings) {
    if let Some(out) = &settings.output {
        if let Err(e) = summary.save(out) {
            warn!("could not write report {} : {}", out, e);
        }
    }
}

/// Analyze one file, then show it with the frequent words highlighted
pub fn file(path: &str, settings: &Settings) -> Result<()> {
    let mut stat = AggregateStat::with_capacity(settings.capacity);
    let data = stat.add_file(path)?;
    let summary = Summary::for_file(&stat, path, settings.top);
    save_report(&summary, settings);

    let mut w = get_writer("-")?;
    summary.write(&mut w, settings.style)?;
    w.write_all(b"\nOriginal text (frequent words highlighted):\n")?;
    write_highlighted(&mut w, &data, &summary, settings.style)?;
    w.flush()?;
    Ok(())
}

/// Analyze every text file in a tree, as one
pub fn dir(dir: &str, settings: &Settings) -> Result<()> {
    let stat = analyze_dir(dir, settings.capacity)?;
    if stat.table.dropped() > 0 {
        log::info!(
            "{} words were not tracked, the table holds {} distinct words",
            stat.table.dropped(),
            stat.table.len()
        );
    }
    let summary = Summary::for_dir(&stat, settings.top);
    save_report(&summary, settings);

    let mut w = get_writer("-")?;
    summary.write(&mut w, settings.style)?;
    w.flush()?;
    Ok(())
}
