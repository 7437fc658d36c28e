use super::{Candidate, DefaultToolLocator, Tool};

/// App bundles in `/Applications`, launched through `open -a`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacLocator;

impl DefaultToolLocator for MacLocator {
    fn candidates(&self, tool: Tool) -> Vec<Candidate> {
        match tool {
            Tool::TextEditor => vec![
                // The command line is split on spaces, so the reported path is escaped.
                Candidate::probed(
                    "/Applications/Sublime Text.app/Contents/SharedSupport/bin/subl",
                    "/Applications/Sublime\\ Text.app/Contents/SharedSupport/bin/subl",
                ),
                Candidate::probed(
                    "/Applications/Visual Studio Code.app",
                    "open -a \"Visual Studio Code\"",
                ),
            ],
            Tool::VideoPlayer => vec![Candidate::probed("/Applications/VLC.app", "open -a \"VLC\"")],
            Tool::ImageViewer => Vec::new(),
        }
    }

    fn fallback(&self, tool: Tool) -> Option<String> {
        let cmd = match tool {
            Tool::TextEditor => "open -a \"TextEdit\"",
            Tool::VideoPlayer => "open -a \"QuickTime Player\"",
            Tool::ImageViewer => return None,
        };
        Some(cmd.to_string())
    }
}
