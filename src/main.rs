#![forbid(unsafe_code)]
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use serde::Deserialize;
use tsp_tabu::instance::{InstanceSpec, TspInstance};
use tsp_tabu::tabu::TabuConfig;

#[derive(Debug, Parser)]
#[command(version)]
/// Solve a symmetric TSP instance with Tabu Search
struct App {
    #[command(flatten)]
    verbose: Verbosity,

    /// YAML instance file; the built-in five-city sample is used when omitted
    file: Option<PathBuf>,

    /// Maximum number of iterations
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Iterations a used swap stays tabu
    #[arg(long)]
    tenure: Option<usize>,

    /// Never let a tabu swap through, even for a new best tour
    #[arg(long)]
    no_aspiration: bool,

    /// Seed for the initial tour
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock limit in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Evaluate neighbors on the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

/// Instance file layout: an edge list plus optional search settings.
#[derive(Debug, Deserialize)]
struct InputFile {
    edges: Vec<(String, String, f64)>,
    #[serde(default)]
    config: TabuConfig,
}

fn load(path: &Path) -> Result<(TspInstance, TabuConfig)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let file: InputFile = serde_yaml::from_str(&content)
        .with_context(|| format!("could not parse {}", path.display()))?;
    let instance = TspInstance::try_from(InstanceSpec { edges: file.edges })
        .with_context(|| format!("invalid instance in {}", path.display()))?;
    Ok((instance, file.config))
}

fn main() -> Result<()> {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    let (instance, mut config) = match &args.file {
        Some(path) => load(path)?,
        None => (TspInstance::sample(), TabuConfig::default()),
    };

    if let Some(n) = args.max_iterations {
        config.max_iterations = n;
    }
    if let Some(t) = args.tenure {
        config.tabu_tenure = t;
    }
    if args.no_aspiration {
        config.aspiration = false;
    }
    if let Some(s) = args.seed {
        config.seed = Some(s);
    }
    if let Some(ms) = args.time_limit_ms {
        config.time_limit = Some(Duration::from_millis(ms));
    }
    if args.parallel {
        config.parallel = true;
    }

    info!("solving {} cities", instance.len());
    let result = instance.solve(&config).context("search failed")?;

    let mut route = instance.route(&result.best);
    if let Some(&start) = route.first() {
        route.push(start);
    }
    println!("Route: {}", route.join(" → "));
    println!("Total distance: {}", result.best_length);
    println!(
        "Iterations: {} ({}), best found at iteration {}",
        result.iterations, result.termination, result.best_iteration
    );

    Ok(())
}
