use super::{Candidate, DefaultToolLocator, Tool};

/// `Program Files` installs, plus per-user installs under the user's profile.
#[derive(Debug, Clone, Default)]
pub struct WindowsLocator {
    user: String,
}

impl WindowsLocator {
    /// Locator for the named Windows account.
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    /// Locator for the account running this process.
    pub fn from_env() -> Self {
        let user = std::env::var("USERNAME")
            .ok()
            .filter(|u| !u.is_empty())
            .or_else(|| {
                dirs::home_dir()
                    .and_then(|h| h.file_name().map(|n| n.to_string_lossy().into_owned()))
            })
            .unwrap_or_default();
        Self::new(user)
    }
}

impl DefaultToolLocator for WindowsLocator {
    fn candidates(&self, tool: Tool) -> Vec<Candidate> {
        match tool {
            Tool::TextEditor => {
                let user_code = format!(
                    "C:\\Users\\{}\\AppData\\Local\\Programs\\Microsoft VS Code\\Code.exe",
                    self.user
                );
                vec![
                    Candidate::path("C:\\Program Files\\Sublime Text 3\\sublime_text.exe"),
                    Candidate::path("C:\\Program Files (x86)\\Sublime Text 3\\sublime_text.exe"),
                    Candidate::path("C:\\Program Files\\Sublime Text\\sublime_text.exe"),
                    Candidate::probed(
                        "C:\\Program Files (x86)\\Sublime Text\\",
                        "C:\\Program Files (x86)\\Sublime Text\\sublime_text.exe",
                    ),
                    Candidate::path("C:\\Program Files\\Microsoft VS Code\\Code.exe"),
                    Candidate::path(&user_code),
                    Candidate::path("C:\\Program Files\\Notepad++\\notepad++.exe"),
                    Candidate::path("C:\\Program Files (x86)\\Notepad++\\notepad++.exe"),
                ]
            }
            Tool::VideoPlayer => vec![
                Candidate::path("C:\\Program Files\\Windows Media Player\\wmplayer.exe"),
                Candidate::path("C:\\Program Files (x86)\\Windows Media Player\\wmplayer.exe"),
                Candidate::path("C:\\Program Files\\VideoLAN\\VLC\\vlc.exe"),
                Candidate::path("C:\\Program Files (x86)\\VideoLAN\\VLC\\vlc.exe"),
            ],
            Tool::ImageViewer => Vec::new(),
        }
    }

    fn fallback(&self, tool: Tool) -> Option<String> {
        match tool {
            Tool::TextEditor => Some("notepad".to_string()),
            Tool::VideoPlayer | Tool::ImageViewer => None,
        }
    }
}
