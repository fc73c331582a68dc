//! skyline-assets - procedural banner and background images for the web app.

mod adapters;
mod background;
mod banner;
mod canvas;
mod cli;
mod config;
mod error;
mod font;
mod output;
mod ports;
mod primitive;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::AssetError;
use crate::font::resolve_typeface;
use crate::output::{resolve_output_path, save_canvas, validate_quality, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), AssetError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref(), &cli.root);
    let config = Config::load(&config_path).map_err(AssetError::Config)?;
    info!("Project root: {}", cli.root.display());

    let command = cli.command();
    if matches!(command, Command::Banner | Command::All) {
        let path = generate_banner(cli, &config)?;
        println!("Banner created successfully at: {}", path.display());
    }
    if matches!(command, Command::Background | Command::All) {
        let path = generate_background(cli, &config)?;
        println!("Masjid background created at: {}", path.display());
    }

    Ok(())
}

fn generate_banner(cli: &Cli, config: &Config) -> Result<PathBuf, AssetError> {
    let mut candidates: Vec<PathBuf> = cli.font.iter().cloned().collect();
    candidates.extend(config.font_candidates(&cli.root));

    let resolved = resolve_typeface(&candidates);
    debug!("Banner typeface: {}", resolved.typeface.name());
    if resolved.fallback {
        info!("Banner text uses the built-in face; glyph shapes will be placeholders");
    }

    let canvas = banner::render_banner(resolved.typeface.as_ref());
    let path = resolve_output_path(&cli.root, banner::FILE_NAME);
    save_canvas(&canvas, &path, OutputFormat::Png)?;
    Ok(path)
}

fn generate_background(cli: &Cli, config: &Config) -> Result<PathBuf, AssetError> {
    let quality = validate_quality(config.background.quality).map_err(AssetError::InvalidArgument)?;
    let stars = config.background.stars;

    let canvas = match cli.seed.or(config.background.seed) {
        Some(seed) => {
            info!("Star field seed: {seed}");
            background::render_background(&mut StdRng::seed_from_u64(seed), stars)
        }
        None => background::render_background(&mut rand::rng(), stars),
    };

    let path = resolve_output_path(&cli.root, background::FILE_NAME);
    save_canvas(&canvas, &path, OutputFormat::Jpeg { quality })?;
    Ok(path)
}
