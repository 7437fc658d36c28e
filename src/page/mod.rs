//! Preferences pages and the host dialog that shows them.

use std::rc::Rc;

use crate::form::{FormEvent, FormRow, WindowId};
use crate::locator::DefaultToolLocator;
use crate::panel::GeneralPanel;
use crate::store::SharedStore;

mod editor;


pub use editor::PreferencesEditor;

/// When edits made in a preferences window reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Every edit is saved as soon as it happens.
    Immediate,
    /// Edits are saved when the dialog is confirmed.
    OnConfirm,
}

impl ApplyMode {
    /// Native convention: Windows dialogs have OK/Cancel, macOS and GTK apply live.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "windows") {
            Self::OnConfirm
        } else {
            Self::Immediate
        }
    }
}

/// Window created by a [`PreferencesPage`].
pub trait PreferencesWindow {
    /// Window this one is parented to.
    fn parent(&self) -> WindowId;

    /// Current controls, top to bottom.
    fn layout(&self) -> Vec<FormRow>;

    /// Load stored values into the controls.
    fn transfer_data_to_window(&mut self) -> bool;

    /// Save control values into the store.
    fn transfer_data_from_window(&mut self) -> bool;

    /// React to user input on one of this window's controls.
    fn handle(&mut self, event: FormEvent);
}

/// One page of the preferences dialog.
pub trait PreferencesPage {
    /// Tab title.
    fn name(&self) -> &'static str;

    /// Build a fresh window for this page under `parent`.
    fn create_window(&self, parent: WindowId, apply: ApplyMode) -> Box<dyn PreferencesWindow>;
}

/// The "General" page: editor path and file size units.
pub struct GeneralPage {
    store: SharedStore,
    locator: Rc<dyn DefaultToolLocator>,
}

impl GeneralPage {
    /// Page backed by `store`, guessing defaults with `locator`.
    pub fn new(store: SharedStore, locator: Rc<dyn DefaultToolLocator>) -> Self {
        Self { store, locator }
    }
}

impl PreferencesPage for GeneralPage {
    fn name(&self) -> &'static str {
        "General"
    }

    fn create_window(&self, parent: WindowId, apply: ApplyMode) -> Box<dyn PreferencesWindow> {
        Box::new(GeneralPanel::new(
            parent,
            Rc::clone(&self.store),
            Rc::clone(&self.locator),
            apply,
        ))
    }
}
