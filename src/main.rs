//! Floorwalk - Entry Point
//!
//! Generates one level and prints it as JSON on stdout. Logs go to stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use floorwalk::config::DEFAULT_CONFIG_PATH;
use floorwalk::world::Tile;
use floorwalk::{GeneratorConfig, Level, LevelGenerator};

/// Random-walk dungeon floor generator
#[derive(Parser, Debug)]
#[command(name = "floorwalk")]
#[command(author, version, about = "Generate a dungeon floor plan", long_about = None)]
struct Args {
    /// Seed for the level (drawn from the OS if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Generator config in RON format (must be valid when given).
    /// Without it the default path is tried, falling back to built-in values.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Write the active config to this path and exit
    #[arg(long = "export-config")]
    export_config: Option<PathBuf>,

    /// Include wall tiles and variant ids in the output
    #[arg(short = 't', long = "tiles")]
    tiles: bool,

    /// Single-line JSON instead of pretty-printed
    #[arg(long = "compact")]
    compact: bool,
}

/// What gets written to stdout
#[derive(serde::Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    level: &'a Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    tiles: Option<Vec<Tile>>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    log::info!("Starting floorwalk v{}", env!("CARGO_PKG_VERSION"));

    let config = GeneratorConfig::resolve(args.config.as_deref()).with_context(|| {
        let path = args.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        format!("failed to load config from {}", path.display())
    })?;

    if let Some(path) = args.export_config {
        config
            .export(&path)
            .with_context(|| format!("failed to export config to {}", path.display()))?;
        log::info!("Config written to {}", path.display());
        return Ok(());
    }

    let mut generator = LevelGenerator::new(config).context("invalid generator config")?;
    let level = generator
        .generate(args.seed)
        .context("level generation failed")?;

    let output = Output {
        level,
        tiles: args.tiles.then(|| level.tiles()),
    };
    let json = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
