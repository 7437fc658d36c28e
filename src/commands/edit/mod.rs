mod prompt;

use anyhow::Result;
use clap::ValueEnum;
use std::rc::Rc;

use general_prefs::{
    form::WindowId,
    locator::{platform_locator, DefaultToolLocator},
    page::{ApplyMode, GeneralPage, PreferencesEditor},
    store::{self, FileStore},
};

#[derive(Clone, Copy, ValueEnum)]
pub enum ApplyArg {
    /// Save every answer as soon as it is given
    Immediate,
    /// Save once at the end, after confirmation
    OnConfirm,
}

impl From<ApplyArg> for ApplyMode {
    fn from(arg: ApplyArg) -> Self {
        match arg {
            ApplyArg::Immediate => Self::Immediate,
            ApplyArg::OnConfirm => Self::OnConfirm,
        }
    }
}

pub fn cmd_edit(apply: Option<ApplyArg>) -> Result<()> {
    let path = FileStore::path()?;
    let store = store::shared(FileStore::at(&path)?);
    let locator: Rc<dyn DefaultToolLocator> = Rc::from(platform_locator());
    let apply = apply.map_or_else(ApplyMode::platform_default, ApplyMode::from);

    let mut dialog = PreferencesEditor::new(apply);
    dialog.add_page(Box::new(GeneralPage::new(store, locator)));
    dialog.show(WindowId::default());

    let stdin = std::io::stdin();
    let saved = prompt::run(&mut dialog, &mut stdin.lock())?;
    if saved {
        eprintln!("Saved preferences to {}", path.display());
    } else {
        eprintln!("Discarded changes");
    }
    Ok(())
}
