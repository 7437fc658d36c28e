use anyhow::Result;
use clap::Subcommand;
use general_prefs::store::{self, ConfigStore, FileStore};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print every stored setting
    Show,
    /// Print the configuration file path
    Path,
    /// Set a configuration value (e.g. editor "/usr/bin/code")
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = FileStore::load()?;
            for (key, value) in config.entries() {
                println!("{key} = {value}");
            }
        }
        ConfigAction::Path => {
            let path = FileStore::path()?;
            println!("{}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = FileStore::load()?;
            store::set_value(&mut config, &key, &value)?;
            config.flush()?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let config = FileStore::load()?;
            println!("{}", store::get_value(&config, &key)?);
        }
    }
    Ok(())
}
