//! Glide CLI
//!
//! Drive the infinite carousel headlessly and manage its configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glide_animation::{is_scheduler_installed, GlobalSchedulerGuard};
use glide_carousel::{Simulation, Strip};
use glide_sections::Testimonial;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod script;

use config::GlideConfig;
use script::{parse_script, Step};

const DEFAULT_SCRIPT: &str = "next,next,wait:700,drag:-333,wait:500,prev,wait:700";

#[derive(Parser)]
#[command(name = "glide")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless infinite drag carousel", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted interaction against a simulated strip
    Simulate {
        /// Configuration file (defaults to ./glide.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of placeholder items (overrides the configured testimonials)
        #[arg(short = 'n', long)]
        items: Option<usize>,

        /// Card width in pixels
        #[arg(long)]
        card_width: Option<f32>,

        /// Gap between cards in pixels
        #[arg(long)]
        gap: Option<f32>,

        /// Comma-separated steps: next, prev, drag:<dx>, wait:<ms>, resize:<width>
        #[arg(short, long, default_value = DEFAULT_SCRIPT)]
        script: String,
    },

    /// Print the default configuration as TOML
    Config,

    /// Validate a configuration file
    Check {
        /// Configuration file
        #[arg(default_value = config::CONFIG_FILE)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            config,
            items,
            card_width,
            gap,
            script,
        } => cmd_simulate(config.as_deref(), items, card_width, gap, &script),

        Commands::Config => cmd_config(),

        Commands::Check { file } => cmd_check(&file),
    }
}

fn cmd_simulate(
    config_path: Option<&Path>,
    items: Option<usize>,
    card_width: Option<f32>,
    gap: Option<f32>,
    script: &str,
) -> Result<()> {
    let (mut config, source) = GlideConfig::resolve(config_path, Path::new("."))?;
    match &source {
        Some(path) => info!("Using configuration from {}", path.display()),
        None => debug!("No configuration file, using defaults"),
    }

    if let Some(width) = card_width {
        config.strip.card_width = width;
    }
    if let Some(gap) = gap {
        config.strip.gap = gap;
    }
    let testimonials = match items {
        Some(count) => Testimonial::placeholders(count),
        None => config.testimonials(),
    };
    config.validate().context("Invalid simulation settings")?;

    let steps = parse_script(script)?;
    if testimonials.is_empty() {
        warn!("No items to show; every step will be a no-op");
    }

    let mut sim = Simulation::new(
        Strip::new(testimonials),
        config.strip.layout(),
        config.carousel,
    );
    let _scheduler = GlobalSchedulerGuard::install(sim.scheduler_handle())
        .context("Failed to install the animation scheduler")?;
    debug!(installed = is_scheduler_installed(), "animation scheduler");

    info!(
        "Simulating {} items ({} slots, step {}px)",
        sim.carousel().strip().len(),
        sim.carousel().strip().slot_count(),
        config.strip.card_width + config.strip.gap
    );
    report(&sim, "mount");

    for step in steps {
        match step {
            Step::Next => sim.carousel_mut().next(),
            Step::Prev => sim.carousel_mut().previous(),
            Step::Drag(dx) => sim.drag(dx),
            Step::Wait(ms) => sim.run_for(ms),
            Step::Resize(width) => sim.resize(width),
        }
        report(&sim, &step.to_string());
    }

    if !sim.settle() {
        warn!("Carousel did not come to rest");
    }
    report(&sim, "settled");

    Ok(())
}

fn report(sim: &Simulation<Testimonial>, label: &str) {
    let name = sim
        .carousel()
        .current_item()
        .map(|t| t.name.as_str())
        .unwrap_or("-");
    info!(
        "[{:>6}ms] {:<12} {} ({})",
        sim.now_ms(),
        label,
        sim.snapshot(),
        name
    );
}

fn cmd_config() -> Result<()> {
    let text = GlideConfig::default().to_toml()?;
    println!("{}", text);
    Ok(())
}

fn cmd_check(file: &Path) -> Result<()> {
    let config = GlideConfig::load(file)?;
    info!(
        "{} is valid: {} items, card {}px + gap {}px",
        file.display(),
        config.testimonials().len(),
        config.strip.card_width,
        config.strip.gap
    );
    Ok(())
}
