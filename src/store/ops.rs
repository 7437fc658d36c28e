use anyhow::{bail, Result};

use super::{ConfigStore, EDITOR_KEY, IMAGE_VIEWER_KEY, SIZE_UNITS_KEY, VIDEO_VIEWER_KEY};
use crate::units::SizeUnits;

const KNOWN_KEYS: [&str; 4] = [EDITOR_KEY, SIZE_UNITS_KEY, VIDEO_VIEWER_KEY, IMAGE_VIEWER_KEY];

/// Canonical `/`-prefixed form of a known key, accepting `editor` or `/editor`.
pub fn canonical_key(key: &str) -> Result<&'static str> {
    let wanted = key.trim_start_matches('/');
    match KNOWN_KEYS.iter().copied().find(|k| k.trim_start_matches('/') == wanted) {
        Some(k) => Ok(k),
        None => bail!("Unknown config key: {key}"),
    }
}

/// Get a config value by key, with the same defaults the preferences page uses
pub fn get_value(store: &dyn ConfigStore, key: &str) -> Result<String> {
    let key = canonical_key(key)?;
    let default = if key == SIZE_UNITS_KEY { "1" } else { "" };
    Ok(store.read(key, default))
}

/// Set a config value by key. Size units accept `1`/`2` or `automatic`/`bytes`.
pub fn set_value(store: &mut dyn ConfigStore, key: &str, value: &str) -> Result<()> {
    let key = canonical_key(key)?;
    if key == SIZE_UNITS_KEY {
        let units = match value.to_ascii_lowercase().as_str() {
            "1" | "automatic" => SizeUnits::Automatic,
            "2" | "bytes" => SizeUnits::Bytes,
            _ => bail!("Invalid size units: {value} (expected automatic or bytes)"),
        };
        store.write(key, units.as_config());
    } else {
        store.write(key, value);
    }
    Ok(())
}
