//! CLI entry point for the `myco` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use mycelium_paths::cli::commands;
use mycelium_paths::{MycoError, NetworkConfig};

#[derive(Parser)]
#[command(
    name = "myco",
    about = "Mycelium network path analysis: DFS, BFS and Dijkstra over random fungal networks"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// TOML file with network settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cells (overrides config)
    #[arg(long)]
    nodes: Option<usize>,

    /// Connection probability 0.0-1.0 (overrides config)
    #[arg(long)]
    probability: Option<f64>,

    /// RNG seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Generate edges without weights (DFS/BFS only; `paths` rejects it)
    #[arg(long)]
    unweighted: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print degree statistics and the cell type distribution
    Analyze,
    /// Find a path with DFS and a fewest-hops path with BFS
    Search {
        /// Start node ID (default: first node)
        #[arg(long)]
        start: Option<u64>,
        /// Target node ID (default: last node)
        #[arg(long)]
        target: Option<u64>,
    },
    /// Compute weighted shortest paths between all pairs of cells
    Paths {
        /// Source node ID for the reported pair (default: first node)
        #[arg(long)]
        source: Option<u64>,
        /// Target node ID for the reported pair (default: last node)
        #[arg(long)]
        target: Option<u64>,
        /// How many of the cheapest paths to list
        #[arg(long, default_value = "3")]
        top: usize,
    },
}

fn load_config(cli: &Cli) -> Result<NetworkConfig, MycoError> {
    let mut config = match &cli.config {
        Some(path) => NetworkConfig::load(path)?,
        None => NetworkConfig::default(),
    };
    if let Some(nodes) = cli.nodes {
        config.nodes = nodes;
    }
    if let Some(p) = cli.probability {
        config.connection_probability = p;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.unweighted {
        config.weighted = false;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = load_config(&cli).and_then(|config| match cli.command {
        Commands::Analyze => commands::cmd_analyze(&config, json),
        Commands::Search { start, target } => commands::cmd_search(&config, start, target, json),
        Commands::Paths {
            source,
            target,
            top,
        } => commands::cmd_paths(&config, source, target, top, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            MycoError::Io(_) => 1,
            MycoError::Config(_) => 2,
            MycoError::NodeNotFound(_)
            | MycoError::SelfEdge(_)
            | MycoError::InvalidProbability(_)
            | MycoError::InvalidWeightRange { .. } => 4,
            MycoError::MissingWeight { .. } | MycoError::InvalidWeight { .. } => 5,
        };
        process::exit(code);
    }
}
