//! "General" preferences for a desktop file manager: the editor path and file
//! size unit settings, the page that edits them, and default tool detection.

pub mod form;
pub mod locator;
pub mod page;
pub mod panel;
pub mod resolve;
pub mod store;
pub mod units;

pub use locator::{guess_text_editor, guess_video_player, DefaultToolLocator, Tool};
pub use page::{ApplyMode, GeneralPage, PreferencesEditor};
pub use panel::GeneralPanel;
pub use store::{ConfigStore, FileStore, MemoryStore};
pub use units::SizeUnits;
