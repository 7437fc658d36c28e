use super::{Candidate, DefaultToolLocator, Tool};

/// Distro packages first, then snaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxLocator;

impl DefaultToolLocator for LinuxLocator {
    fn candidates(&self, tool: Tool) -> Vec<Candidate> {
        let paths: &[&str] = match tool {
            Tool::TextEditor => &[
                "/usr/bin/subl",
                "/usr/bin/code",
                "/snap/bin/code",
                "/usr/bin/gedit",
            ],
            Tool::VideoPlayer => &["/usr/bin/vlc", "/usr/bin/xdg-open"],
            Tool::ImageViewer => &[],
        };
        paths.iter().map(|p| Candidate::path(p)).collect()
    }

    fn fallback(&self, _tool: Tool) -> Option<String> {
        None
    }
}
