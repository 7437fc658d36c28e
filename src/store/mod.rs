//! Key-value configuration storage behind the preferences pages.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

mod file;
mod memory;
mod ops;

#[cfg(test)]
mod tests;

pub use file::{FileStore, CONFIG_PATH_ENV};
pub use memory::MemoryStore;
pub use ops::{canonical_key, get_value, set_value};

/// Key holding the editor path or command.
pub const EDITOR_KEY: &str = "/editor";
/// Key holding the file size display unit (`"1"` automatic, `"2"` bytes).
pub const SIZE_UNITS_KEY: &str = "/size_units";
/// Key holding the video player path or command. Read only by this crate.
pub const VIDEO_VIEWER_KEY: &str = "/video_viewer";
/// Key holding the image viewer path or command. Read only by this crate.
pub const IMAGE_VIEWER_KEY: &str = "/image_viewer";

/// String-keyed, string-valued settings storage owned by the host application.
///
/// Keys are slash-prefixed paths such as `/editor`.
pub trait ConfigStore {
    /// Value for `key`, or `default` when it is not set.
    fn read(&self, key: &str, default: &str) -> String;

    /// Set `key` to `value`. Not persisted until [`ConfigStore::flush`].
    fn write(&mut self, key: &str, value: &str);

    /// Persist pending writes.
    fn flush(&mut self) -> Result<()>;
}

/// Store handle shared by the host dialog and its pages on the UI thread.
pub type SharedStore = Rc<RefCell<dyn ConfigStore>>;

/// Wrap a store so it can be handed to pages.
pub fn shared<S: ConfigStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}
