//! # Terrain Report
//!
//! Runs the full pipeline for one config and prints height statistics before
//! and after erosion plus a biome histogram.
//!
//! ## Usage
//!
//! ```bash
//! terrain_report --config terrain.toml --seed 42
//! RUST_LOG=strata_procedural=debug terrain_report
//! ```
//!
//! Moisture comes from a second simplex field seeded from the master seed.

use std::process::ExitCode;

use strata_core::GridStats;
use strata_procedural::pipeline::MOISTURE_STREAM;
use strata_procedural::{
    Biome, FractalParams, NoiseSource, SimplexNoise, TerrainConfig, TerrainPipeline, TerrainResult,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Moisture varies more slowly than height.
const MOISTURE_SCALE_FACTOR: f64 = 1.5;

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

struct Options {
    config_path: Option<String>,
    seed: Option<u64>,
}

fn parse_args() -> Option<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        config_path: None,
        seed: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    options.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Usage: terrain_report [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>   TOML config (default: built-in defaults)");
                println!("  -s, --seed <SEED>     Override the config seed");
                println!("  -h, --help            Show this help");
                return None;
            }
            _ => {}
        }
        i += 1;
    }
    Some(options)
}

fn print_stats(label: &str, stats: Option<GridStats>) {
    match stats {
        Some(s) => println!(
            "│ {label:<10} min {:>8.4}  max {:>8.4}  mean {:>8.4}  std {:>8.4}",
            s.min, s.max, s.mean, s.std_dev
        ),
        None => println!("│ {label:<10} (empty)"),
    }
}

fn run(options: &Options) -> TerrainResult<()> {
    let mut config = match &options.config_path {
        Some(path) => TerrainConfig::load(path)?,
        None => TerrainConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }

    let pipeline = TerrainPipeline::new(config)?;
    let config = pipeline.config();

    let moisture_noise = SimplexNoise::new(pipeline.seed().derive(MOISTURE_STREAM));
    let moisture = moisture_noise.generate_grid(
        config.width,
        config.height,
        config.noise.scale * MOISTURE_SCALE_FACTOR,
        &FractalParams::default(),
    );

    let maps = pipeline.run(&moisture)?;
    info!("pipeline finished");

    println!("┌─ TERRAIN ───────────────────────────────────────────────────────");
    println!(
        "│ seed {}  size {}x{}  kernel {:?}",
        config.seed, config.width, config.height, config.noise.kernel
    );
    print_stats("before", maps.heightmap.stats());
    print_stats("after", maps.eroded.stats());
    if let Some(stats) = maps.erosion {
        println!(
            "│ droplets {}  steps {}  eroded {:.4}  deposited {:.4}",
            stats.droplets, stats.steps, stats.total_eroded, stats.total_deposited
        );
    }
    println!("├─ BIOMES ────────────────────────────────────────────────────────");

    #[allow(clippy::cast_precision_loss)]
    let total = maps.biomes.len() as f64;
    for (biome, count) in Biome::ALL.iter().zip(maps.biome_counts()) {
        if count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let share = count as f64 / total * 100.0;
            println!("│ {:<22} {count:>8}  {share:>5.1}%", biome.name());
        }
    }
    println!("└─────────────────────────────────────────────────────────────────");
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let Some(options) = parse_args() else {
        return ExitCode::SUCCESS;
    };
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "terrain report failed");
            ExitCode::FAILURE
        }
    }
}
