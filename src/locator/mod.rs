//! Default tool detection by probing well-known install locations.

use std::path::{Path, PathBuf};

mod linux;
mod macos;
mod windows;


pub use linux::LinuxLocator;
pub use macos::MacLocator;
pub use windows::WindowsLocator;

/// An external tool the file manager hands files to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Text editor used for everything that is not a video or an image.
    TextEditor,
    /// Video player used for video files.
    VideoPlayer,
    /// Image viewer used for pictures. No install locations are known for it.
    ImageViewer,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextEditor => write!(f, "text editor"),
            Self::VideoPlayer => write!(f, "video player"),
            Self::ImageViewer => write!(f, "image viewer"),
        }
    }
}

/// A known install location and the command to report when it is present.
///
/// The probe path and the command usually coincide, but not always: a macOS
/// app bundle is probed on disk yet returned as an `open -a` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path checked for existence.
    pub probe: PathBuf,
    /// Path or command string returned when `probe` exists.
    pub command: String,
}

impl Candidate {
    /// Candidate whose probe path is also the returned command.
    pub fn path(path: &str) -> Self {
        Self {
            probe: PathBuf::from(path),
            command: path.to_string(),
        }
    }

    /// Candidate that probes `probe` but reports `command`.
    pub fn probed(probe: &str, command: &str) -> Self {
        Self {
            probe: PathBuf::from(probe),
            command: command.to_string(),
        }
    }
}

/// Capability to guess where a default tool is installed.
pub trait DefaultToolLocator {
    /// Candidates for `tool`, most preferred first.
    fn candidates(&self, tool: Tool) -> Vec<Candidate>;

    /// Command returned when no candidate exists, if the platform has one.
    fn fallback(&self, tool: Tool) -> Option<String>;

    /// Existence probe. Only checks presence, never that the target is executable.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// First existing candidate, else the fallback, else an empty string.
    fn guess(&self, tool: Tool) -> String {
        for candidate in self.candidates(tool) {
            if self.exists(&candidate.probe) {
                tracing::debug!(%tool, probe = %candidate.probe.display(), "found default tool");
                return candidate.command;
            }
        }
        let fallback = self.fallback(tool).unwrap_or_default();
        tracing::debug!(%tool, %fallback, "no known install found, using fallback");
        fallback
    }
}

/// Operating system family whose install layout a locator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows: `Program Files` installs and per-user `AppData` installs.
    Windows,
    /// macOS: app bundles under `/Applications`.
    MacOs,
    /// Linux and other Unix systems: distro and snap binaries.
    Linux,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            _ => Self::Linux,
        }
    }
}

/// Locator for an explicit platform.
pub fn locator_for(platform: Platform) -> Box<dyn DefaultToolLocator> {
    match platform {
        Platform::Windows => Box::new(WindowsLocator::from_env()),
        Platform::MacOs => Box::new(MacLocator),
        Platform::Linux => Box::new(LinuxLocator),
    }
}

/// Locator for the running platform.
pub fn platform_locator() -> Box<dyn DefaultToolLocator> {
    locator_for(Platform::current())
}

/// Guess a text editor for the running platform.
pub fn guess_text_editor() -> String {
    platform_locator().guess(Tool::TextEditor)
}

/// Guess a video player for the running platform.
pub fn guess_video_player() -> String {
    platform_locator().guess(Tool::VideoPlayer)
}
