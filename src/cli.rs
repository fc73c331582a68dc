//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Generate the banner and night-sky background images for the web app.
#[derive(Parser, Debug)]
#[command(name = "skyline-assets", version, about)]
pub struct Cli {
    /// Which asset to generate. Both when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project root that `public/images/` is resolved against.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Config file path override.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed the star field for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Preferred font file, tried before the configured candidates.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Asset selection.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate `public/images/banner.png`.
    Banner,
    /// Generate `public/images/masjid-bg.jpg`.
    Background,
    /// Generate both assets.
    All,
}

impl Cli {
    /// The selected command, defaulting to [`Command::All`].
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::All)
    }
}
