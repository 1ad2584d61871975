//! Emoji overlay renderer: plays a scripted detection scenario over a
//! background and writes every frame as a PNG.

use anyhow::{Context, Result};
use clap::Parser;
use emoji_overlay::app::OverlayApp;
use emoji_overlay::config::Config;
use emoji_overlay::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use emoji_overlay::scenario::Scenario;
use image::RgbImage;
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file with per-frame detections (YAML format)
    #[arg(short, long)]
    scenario: PathBuf,

    /// Background image; a blank canvas is used when omitted
    #[arg(short, long)]
    background: Option<PathBuf>,

    /// Blank canvas width
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    width: u32,

    /// Blank canvas height
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    height: u32,

    /// Output directory for rendered frames
    #[arg(short, long, default_value = "frames")]
    output: PathBuf,

    /// Glyph mode (vector, cartoon, neon, cyberpunk)
    #[arg(short, long)]
    mode: Option<String>,

    /// Start with avatars scattered around their faces
    #[arg(long)]
    scatter: bool,

    /// Random seed for reproducible animation
    #[arg(long)]
    seed: Option<u64>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Emoji Overlay");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    if args.seed.is_some() {
        config.tracker.seed = args.seed;
    }

    let scenario = Scenario::from_file(&args.scenario)
        .with_context(|| format!("Failed to load scenario {}", args.scenario.display()))?;

    let background = match &args.background {
        Some(path) => image::open(path)
            .with_context(|| format!("Failed to open background {}", path.display()))?
            .to_rgb8(),
        None => RgbImage::new(args.width, args.height),
    };
    info!("Canvas: {}x{}", background.width(), background.height());

    let mut app = OverlayApp::new(config)?;
    if let Some(mode) = &args.mode {
        if let Err(e) = app.set_mode_by_name(mode) {
            warn!("{e}. Keeping {} mode.", app.mode());
        }
    }
    app.set_scatter(args.scatter);

    let written = app.run_scenario(&scenario, &background, &args.output)?;
    info!("Done: {written} frame(s) in {}", args.output.display());

    Ok(())
}
