use crate::form::{FormEvent, WindowId};

use super::{ApplyMode, PreferencesPage, PreferencesWindow};

/// Host dialog: owns the pages, the apply mode, and the windows while shown.
pub struct PreferencesEditor {
    apply: ApplyMode,
    pages: Vec<Box<dyn PreferencesPage>>,
    windows: Vec<Box<dyn PreferencesWindow>>,
}

impl PreferencesEditor {
    /// Empty dialog using `apply` for every page.
    pub fn new(apply: ApplyMode) -> Self {
        Self {
            apply,
            pages: Vec::new(),
            windows: Vec::new(),
        }
    }

    /// Append a page.
    pub fn add_page(&mut self, page: Box<dyn PreferencesPage>) {
        self.pages.push(page);
    }

    /// Mode handed to every window this dialog creates.
    pub const fn apply_mode(&self) -> ApplyMode {
        self.apply
    }

    /// Page titles in tab order.
    pub fn page_names(&self) -> Vec<&'static str> {
        self.pages.iter().map(|p| p.name()).collect()
    }

    /// Whether windows are currently shown.
    pub fn is_shown(&self) -> bool {
        !self.windows.is_empty()
    }

    /// Create every page window under `parent` and load stored values into it.
    /// Windows from a previous show are discarded.
    pub fn show(&mut self, parent: WindowId) {
        self.windows = self
            .pages
            .iter()
            .map(|page| {
                let mut window = page.create_window(parent, self.apply);
                window.transfer_data_to_window();
                window
            })
            .collect();
        tracing::debug!(pages = self.windows.len(), mode = ?self.apply, "preferences shown");
    }

    /// Window of page `index`, while shown.
    pub fn window(&self, index: usize) -> Option<&(dyn PreferencesWindow + 'static)> {
        self.windows.get(index).map(AsRef::as_ref)
    }

    /// Forward user input to the window of page `index`. Ignored when not shown.
    pub fn dispatch(&mut self, index: usize, event: FormEvent) {
        if let Some(window) = self.windows.get_mut(index) {
            window.handle(event);
        }
    }

    /// OK pressed: save every window when edits were deferred, then close.
    pub fn confirm(&mut self) -> bool {
        let mut ok = true;
        if self.apply == ApplyMode::OnConfirm {
            for window in &mut self.windows {
                ok &= window.transfer_data_from_window();
            }
        }
        self.windows.clear();
        ok
    }

    /// Cancel pressed: close without saving anything not already applied.
    pub fn dismiss(&mut self) {
        self.windows.clear();
    }
}
