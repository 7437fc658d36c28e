//! The "General" preferences panel.

use std::rc::Rc;

use crate::form::{Control, FormEvent, FormRow, WindowId};
use crate::locator::{DefaultToolLocator, Tool};
use crate::page::{ApplyMode, PreferencesWindow};
use crate::store::{SharedStore, EDITOR_KEY, SIZE_UNITS_KEY};
use crate::units::SizeUnits;


/// Id of the editor path text field.
pub const EDITOR_PATH: &str = "editor_path";
/// Id of the button that fills in a guessed editor.
pub const EDITOR_DEFAULT: &str = "editor_default";
/// Id of the file size units choice.
pub const SIZE_UNITS: &str = "size_units";

/// Editor path and file size unit settings bound to a [`ConfigStore`](crate::store::ConfigStore).
///
/// Change handlers are inert until [`GeneralPanel::transfer_data_to_window`]
/// has populated the controls, so loading never looks like a user edit.
pub struct GeneralPanel {
    parent: WindowId,
    store: SharedStore,
    locator: Rc<dyn DefaultToolLocator>,
    apply: ApplyMode,
    editor_path: String,
    size_units: Option<usize>,
    listening: bool,
}

impl GeneralPanel {
    /// Empty panel under `parent`. Nothing is read until the host loads it.
    pub fn new(
        parent: WindowId,
        store: SharedStore,
        locator: Rc<dyn DefaultToolLocator>,
        apply: ApplyMode,
    ) -> Self {
        Self {
            parent,
            store,
            locator,
            apply,
            editor_path: String::new(),
            size_units: None,
            listening: false,
        }
    }

    /// Current editor field contents.
    pub fn editor_path(&self) -> &str {
        &self.editor_path
    }

    /// Current size units selection, `None` before the panel is loaded.
    pub const fn size_units_selection(&self) -> Option<usize> {
        self.size_units
    }

    /// Unit the current selection stands for.
    pub fn size_units(&self) -> SizeUnits {
        self.size_units.map_or(SizeUnits::Automatic, SizeUnits::from_index)
    }

    /// Whether change handlers are attached.
    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// Populate the controls from the store, then attach change handlers.
    pub fn transfer_data_to_window(&mut self) -> bool {
        let (editor, units) = {
            let store = self.store.borrow();
            (store.read(EDITOR_KEY, ""), store.read(SIZE_UNITS_KEY, "1"))
        };
        self.editor_path = editor;
        self.size_units = Some(SizeUnits::from_config(&units).index());

        self.listening = true;
        true
    }

    /// Write both settings and flush. Flush failures are logged, not reported.
    pub fn transfer_data_from_window(&self) -> bool {
        let mut store = self.store.borrow_mut();
        store.write(EDITOR_KEY, &self.editor_path);
        store.write(SIZE_UNITS_KEY, self.size_units().as_config());
        if let Err(e) = store.flush() {
            tracing::warn!("could not save general preferences: {e:#}");
        }
        true
    }

    /// Editor field edited.
    pub fn on_editor_changed(&mut self, value: &str) {
        value.clone_into(&mut self.editor_path);
        self.changed();
    }

    /// Size units selection changed. Indices outside the option list are ignored.
    pub fn on_size_units_changed(&mut self, index: usize) {
        if index >= SizeUnits::LABELS.len() {
            tracing::debug!(index, "ignoring out of range size units selection");
            return;
        }
        self.size_units = Some(index);
        self.changed();
    }

    /// "Default" pressed: replace the editor field with the guessed editor.
    /// Goes through the same path as typing, so it is saved only when edits apply immediately.
    pub fn on_default_editor(&mut self) {
        let guess = self.locator.guess(Tool::TextEditor);
        self.on_editor_changed(&guess);
    }

    fn changed(&self) {
        if self.listening && self.apply == ApplyMode::Immediate {
            self.transfer_data_from_window();
        }
    }
}

impl PreferencesWindow for GeneralPanel {
    fn parent(&self) -> WindowId {
        self.parent
    }

    fn layout(&self) -> Vec<FormRow> {
        vec![
            FormRow {
                label: "Editor path:",
                controls: vec![
                    Control::Text {
                        id: EDITOR_PATH,
                        value: self.editor_path.clone(),
                        width: 220,
                    },
                    Control::Button {
                        id: EDITOR_DEFAULT,
                        label: "Default",
                        width: 70,
                    },
                ],
            },
            FormRow {
                label: "File size units:",
                controls: vec![Control::Choice {
                    id: SIZE_UNITS,
                    options: SizeUnits::LABELS.to_vec(),
                    selection: self.size_units,
                    width: 300,
                }],
            },
        ]
    }

    fn transfer_data_to_window(&mut self) -> bool {
        Self::transfer_data_to_window(self)
    }

    fn transfer_data_from_window(&mut self) -> bool {
        Self::transfer_data_from_window(self)
    }

    fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::TextChanged { id: EDITOR_PATH, value } => self.on_editor_changed(&value),
            FormEvent::ButtonPressed { id: EDITOR_DEFAULT } => self.on_default_editor(),
            FormEvent::ChoiceSelected { id: SIZE_UNITS, index } => self.on_size_units_changed(index),
            other => tracing::debug!(?other, "event for unknown control"),
        }
    }
}
