use anyhow::Result;
use std::path::Path;

use general_prefs::{
    locator::platform_locator,
    resolve::resolve,
    store::{ConfigStore, FileStore, SIZE_UNITS_KEY},
    units::SizeUnits,
};

pub fn cmd_resolve(file: &Path) -> Result<()> {
    let store = FileStore::load()?;
    let resolution = resolve(&store, &*platform_locator(), file)?;
    if resolution.guessed {
        eprintln!("No {} configured, using {}", resolution.tool, resolution.program);
    }
    println!("{}", resolution.command_line);
    Ok(())
}

pub fn cmd_format_size(bytes: u64, units: Option<SizeUnits>) -> Result<()> {
    let units = match units {
        Some(units) => units,
        None => SizeUnits::from_config(&FileStore::load()?.read(SIZE_UNITS_KEY, "1")),
    };
    println!("{}", units.format_size(bytes));
    Ok(())
}
