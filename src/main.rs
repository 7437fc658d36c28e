//! `prefs`: view and edit the file manager's general preferences.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use general_prefs::units::SizeUnits;

mod commands;

use commands::{
    config::{cmd_config, ConfigAction},
    edit::{cmd_edit, ApplyArg},
    guess::{cmd_guess, ToolArg},
    panel::{cmd_panel, PanelAction},
    resolve::{cmd_format_size, cmd_resolve},
};

#[derive(Parser)]
#[command(name = "prefs", about = "View and edit general file manager preferences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read and write raw configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Detect an installed text editor or video player
    Guess {
        #[arg(value_enum)]
        tool: ToolArg,

        /// List every candidate location instead of the first match
        #[arg(long)]
        all: bool,
    },

    /// Drive the General preferences page non-interactively
    Panel {
        #[command(subcommand)]
        action: PanelAction,
    },

    /// Edit the General preferences interactively
    Edit {
        /// When answers are written (defaults to the platform convention)
        #[arg(long, value_enum)]
        apply: Option<ApplyArg>,
    },

    /// Print the command line that would open a downloaded file
    Resolve {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Format a byte count using the configured size units
    FormatSize {
        bytes: u64,

        /// Override the configured units
        #[arg(long, value_enum)]
        units: Option<UnitsArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Automatic,
    Bytes,
}

impl From<UnitsArg> for SizeUnits {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Automatic => Self::Automatic,
            UnitsArg::Bytes => Self::Bytes,
        }
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => cmd_config(action)?,
        Commands::Guess { tool, all } => cmd_guess(tool, all)?,
        Commands::Panel { action } => cmd_panel(action)?,
        Commands::Edit { apply } => cmd_edit(apply)?,
        Commands::Resolve { file } => cmd_resolve(&file)?,
        Commands::FormatSize { bytes, units } => cmd_format_size(bytes, units.map(SizeUnits::from))?,
    }

    Ok(())
}
