use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{
    AutoPlay, LifeConfig, LifeEngine, SharedEngine, StepStrategy, presets, rendering,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "toroidal-life",
    version,
    about = "Run Conway's Game of Life on a wrapping square grid"
)]
struct Cli {
    /// JSON config file; command-line flags override its values.
    #[arg(long, env = "LIFE_CONFIG")]
    config: Option<PathBuf>,
    /// Side length of the square grid.
    #[arg(long)]
    size: Option<usize>,
    /// Delay between automatic steps in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,
    /// Seed for the random fill.
    #[arg(long)]
    seed: Option<u64>,
    /// serial, parallel or auto.
    #[arg(long)]
    strategy: Option<StepStrategy>,
    /// Start from a named pattern instead of a random fill.
    #[arg(long)]
    pattern: Option<String>,
    /// Number of generations to play before exiting.
    #[arg(long, default_value_t = 20)]
    generations: u64,
    /// Mark cells about to be born or die.
    #[arg(long)]
    forecast: bool,
    /// Skip printing frames.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(
        grid_size = config.grid_size,
        step_interval_ms = config.step_interval_ms,
        strategy = config.strategy.name(),
        "starting life engine"
    );

    let engine = SharedEngine::new(seed_engine(&cli, &config)?);
    if !cli.quiet {
        print_frame(&engine, cli.forecast)?;
    }

    let start = engine.generation_count()?;
    let target = target_generation(start, cli.generations);
    let (tx, rx) = mpsc::channel();
    let driver = AutoPlay::spawn(engine.clone(), config.step_interval(), move |generation| {
        let _ = tx.send(generation);
    })?;
    driver.set_running(cli.generations > 0);

    while cli.generations > 0 {
        let Ok(generation) = rx.recv() else {
            warn!("auto-play ended before reaching the target generation");
            break;
        };
        if !cli.quiet {
            print_frame(&engine, cli.forecast)?;
        }
        if generation >= target {
            break;
        }
    }
    driver.set_running(false);
    driver.shutdown();

    let snapshot = engine.read()?;
    info!(
        generation = snapshot.generation_count(),
        population = snapshot.population(),
        "finished"
    );
    Ok(())
}

/// Generation at which playback stops
fn target_generation(start: u64, generations: u64) -> u64 {
    start.saturating_add(generations)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(cli: &Cli) -> Result<LifeConfig> {
    let mut config = match &cli.config {
        Some(path) => LifeConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LifeConfig::default(),
    };
    if let Some(size) = cli.size {
        config.grid_size = size;
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.step_interval_ms = interval_ms;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

fn seed_engine(cli: &Cli, config: &LifeConfig) -> Result<LifeEngine> {
    let mut engine = LifeEngine::from_config(config)?;
    match &cli.pattern {
        Some(name) => {
            let pattern = presets::by_name(name)?;
            let (x, y) = pattern.centered_origin(engine.size());
            engine.place_pattern(&pattern, x, y)?;
            info!(
                pattern = pattern.name,
                description = pattern.description,
                x,
                y,
                "placed pattern"
            );
        }
        None => match config.seed {
            Some(seed) => engine.randomize_fill(&mut StdRng::seed_from_u64(seed)),
            None => engine.randomize_fill_entropy(),
        },
    }
    Ok(engine)
}

fn print_frame(engine: &SharedEngine, forecast: bool) -> Result<()> {
    let engine = engine.read()?;
    println!("{}", rendering::render_title(&engine));
    print!("{}", rendering::render_text(&engine, forecast));
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_generation_saturates() {
        assert_eq!(target_generation(1, 20), 21);
        assert_eq!(target_generation(1, u64::MAX), u64::MAX);
    }
}
