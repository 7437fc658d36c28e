use anyhow::Result;
use clap::Subcommand;
use std::rc::Rc;

use general_prefs::{
    form::{render, WindowId},
    locator::{platform_locator, DefaultToolLocator},
    page::{ApplyMode, GeneralPage, PreferencesPage},
    panel::GeneralPanel,
    store::{self, FileStore},
};

#[derive(Subcommand)]
pub enum PanelAction {
    /// Print the General page as loaded from the config
    Show,
    /// Press "Default": store the guessed editor
    DefaultEditor,
}

pub fn cmd_panel(action: PanelAction) -> Result<()> {
    let shared = store::shared(FileStore::load()?);
    let locator: Rc<dyn DefaultToolLocator> = Rc::from(platform_locator());

    match action {
        PanelAction::Show => {
            let page = GeneralPage::new(shared, locator);
            let mut window = page.create_window(WindowId::default(), ApplyMode::OnConfirm);
            window.transfer_data_to_window();
            println!("{}", render(&window.layout()));
        }
        PanelAction::DefaultEditor => {
            let mut panel =
                GeneralPanel::new(WindowId::default(), shared, locator, ApplyMode::OnConfirm);
            panel.transfer_data_to_window();
            panel.on_default_editor();
            if panel.editor_path().is_empty() {
                eprintln!("No text editor found; keeping the current setting");
                return Ok(());
            }
            panel.transfer_data_from_window();
            println!("Set editor = {}", panel.editor_path());
        }
    }
    Ok(())
}
