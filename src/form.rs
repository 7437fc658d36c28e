//! Toolkit-agnostic description of a preferences form.
//!
//! Pages describe their controls as rows; a host renders them with whatever
//! toolkit it has and reports user input back as [`FormEvent`]s.

use std::fmt;

/// Opaque handle of the host window a page is parented to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowId(pub u64);

/// Identifies a control within a page.
pub type ControlId = &'static str;

/// A single form control and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Single-line text input.
    Text {
        /// Control id.
        id: ControlId,
        /// Current contents.
        value: String,
        /// Preferred width in pixels.
        width: u16,
    },
    /// Push button.
    Button {
        /// Control id.
        id: ControlId,
        /// Button caption.
        label: &'static str,
        /// Preferred width in pixels.
        width: u16,
    },
    /// Drop-down with fixed options.
    Choice {
        /// Control id.
        id: ControlId,
        /// Options in display order.
        options: Vec<&'static str>,
        /// Selected option, `None` before anything is selected.
        selection: Option<usize>,
        /// Preferred width in pixels.
        width: u16,
    },
}

/// A labelled horizontal row of controls. Rows stack vertically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    /// Caption shown before the controls.
    pub label: &'static str,
    /// Controls, left to right.
    pub controls: Vec<Control>,
}

/// User input reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Text control contents changed.
    TextChanged {
        /// Control id.
        id: ControlId,
        /// New contents.
        value: String,
    },
    /// Button activated.
    ButtonPressed {
        /// Control id.
        id: ControlId,
    },
    /// Choice selection changed.
    ChoiceSelected {
        /// Control id.
        id: ControlId,
        /// New selection.
        index: usize,
    },
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { value, .. } => write!(f, "[{value}]"),
            Self::Button { label, .. } => write!(f, "({label})"),
            Self::Choice { options, selection, .. } => {
                let rendered: Vec<String> = options
                    .iter()
                    .enumerate()
                    .map(|(i, o)| {
                        if Some(i) == *selection {
                            format!("*{o}")
                        } else {
                            (*o).to_string()
                        }
                    })
                    .collect();
                write!(f, "<{}>", rendered.join(" | "))
            }
        }
    }
}

impl fmt::Display for FormRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for control in &self.controls {
            write!(f, " {control}")?;
        }
        Ok(())
    }
}

/// Render rows one per line.
pub fn render(rows: &[FormRow]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
