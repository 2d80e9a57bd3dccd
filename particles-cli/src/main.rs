use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use particles_core::{build_simulation, SimConfig};
use std::path::{Path, PathBuf};

mod viewer;

#[derive(Parser)]
#[command(name = "particles")]
#[command(about = "Interactive 2D particle simulator", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window and run the simulation interactively
    View {
        /// JSON configuration file (watched for changes)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Seed for particle generation
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Run the simulation without a window and print statistics
    Run {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        seed: Option<u64>,
        /// Number of ticks to simulate
        #[arg(short, long, default_value_t = 600)]
        ticks: u64,
        /// Print statistics every N ticks
        #[arg(long)]
        report_every: Option<u64>,
    },
    /// Print the default configuration as JSON
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::View { config, seed } => viewer::run(config, seed),
        Commands::Run {
            config,
            seed,
            ticks,
            report_every,
        } => run_headless(config.as_deref(), seed, ticks, report_every),
        Commands::Config => {
            println!("{}", SimConfig::default().to_json_pretty()?);
            Ok(())
        }
    }
}

/// Load the configuration from `path` (or defaults) and apply a seed override
pub(crate) fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<SimConfig> {
    let mut config = match path {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

fn run_headless(
    path: Option<&Path>,
    seed: Option<u64>,
    ticks: u64,
    report_every: Option<u64>,
) -> Result<()> {
    let config = load_config(path, seed)?;
    let (mut sim, diagnostics) = build_simulation(config)?;
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }

    println!("{}", sim.stats());
    let mut contacts = 0usize;
    for _ in 0..ticks {
        contacts += sim.step(None);
        if let Some(every) = report_every.filter(|n| *n > 0) {
            if sim.tick() % every == 0 {
                println!("{}", sim.stats());
            }
        }
    }
    println!("{}", sim.stats());
    println!("contacts resolved: {}", contacts);

    Ok(())
}
