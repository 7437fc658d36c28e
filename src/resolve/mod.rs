//! Pick the external tool a downloaded file should be opened with.

use anyhow::{bail, Result};
use std::path::Path;

use crate::locator::{DefaultToolLocator, Tool};
use crate::store::{ConfigStore, EDITOR_KEY, IMAGE_VIEWER_KEY, VIDEO_VIEWER_KEY};

#[cfg(test)]
mod tests;

/// Extensions handed to the image viewer. Compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg"];

/// Extensions handed to the video player. Compared case-insensitively.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "webm"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

/// Tool that handles `path`, judged by its extension.
pub fn tool_for(path: &Path) -> Tool {
    if has_extension(path, IMAGE_EXTENSIONS) {
        Tool::ImageViewer
    } else if has_extension(path, VIDEO_EXTENSIONS) {
        Tool::VideoPlayer
    } else {
        Tool::TextEditor
    }
}

/// Config key holding the configured command for `tool`.
pub const fn config_key(tool: Tool) -> &'static str {
    match tool {
        Tool::TextEditor => EDITOR_KEY,
        Tool::VideoPlayer => VIDEO_VIEWER_KEY,
        Tool::ImageViewer => IMAGE_VIEWER_KEY,
    }
}

/// How a file would be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Tool chosen for the file.
    pub tool: Tool,
    /// Configured or guessed tool command.
    pub program: String,
    /// Whether `program` was guessed rather than configured.
    pub guessed: bool,
    /// Full command line: the program followed by the quoted path.
    pub command_line: String,
}

/// Build the command line that opens `path`, preferring the configured tool over a guess.
pub fn resolve(
    store: &dyn ConfigStore,
    locator: &dyn DefaultToolLocator,
    path: &Path,
) -> Result<Resolution> {
    let tool = tool_for(path);
    let configured = store.read(config_key(tool), "");
    let (program, guessed) = if configured.is_empty() {
        (locator.guess(tool), true)
    } else {
        (configured, false)
    };
    if program.is_empty() {
        let title = match tool {
            Tool::TextEditor => "text editor",
            Tool::VideoPlayer => "video viewer",
            Tool::ImageViewer => "image viewer",
        };
        bail!("No {title} configured. Set one in Preferences.");
    }

    let quoted = path.to_string_lossy().replace('"', "\\\"");
    let command_line = format!("{program} \"{quoted}\"");
    tracing::debug!(%tool, guessed, %command_line, "resolved opener");
    Ok(Resolution {
        tool,
        program,
        guessed,
        command_line,
    })
}
