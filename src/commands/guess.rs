use anyhow::Result;
use clap::ValueEnum;
use general_prefs::locator::{platform_locator, Tool};

#[derive(Clone, Copy, ValueEnum)]
pub enum ToolArg {
    /// Text editor
    Editor,
    /// Video player
    Video,
    /// Image viewer
    Image,
}

impl From<ToolArg> for Tool {
    fn from(arg: ToolArg) -> Self {
        match arg {
            ToolArg::Editor => Self::TextEditor,
            ToolArg::Video => Self::VideoPlayer,
            ToolArg::Image => Self::ImageViewer,
        }
    }
}

pub fn cmd_guess(tool: ToolArg, all: bool) -> Result<()> {
    let locator = platform_locator();
    let tool = Tool::from(tool);

    if all {
        for candidate in locator.candidates(tool) {
            let mark = if locator.exists(&candidate.probe) { "found" } else { "-" };
            println!("{mark:>5}  {}", candidate.command);
        }
        if let Some(fallback) = locator.fallback(tool) {
            println!("{:>5}  {fallback}", "else");
        }
        return Ok(());
    }

    let guess = locator.guess(tool);
    if guess.is_empty() {
        eprintln!("No {tool} found");
    } else {
        println!("{guess}");
    }
    Ok(())
}
