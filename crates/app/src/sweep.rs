use std::path::PathBuf;

use clap::Parser;
use graph_perf::config::{EXECUTABLE, PLAIN_DATA_DIR, REORDERED_DATA_DIR};
use graph_perf::prelude::*;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

mod cli;

fn main() {
    let args = Args::parse();
    cli::init_logging(&args.verbose);

    cli::exit_on_error(run(&args));
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = Catalog::standard();
    if args.with_synthetic {
        catalog.extend(Catalog::synthetic().iter().cloned());
    }
    if !args.datasets.is_empty() {
        catalog.retain(|d| args.datasets.iter().any(|name| name == d.name()));
    }

    let config = args.sweep_config();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "Sweeping {} datasets with {}",
        catalog.len(),
        config.executable.display()
    );

    if args.dry_run {
        Sweep::new(&config, DryRunLauncher::stdout(), rng).run(&catalog)?;
    } else {
        Sweep::new(&config, ProcessLauncher, rng).run(&catalog)?;
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Runs a benchmark executable over all datasets with plain and reordered vertex ids")]
struct Args {
    /// Benchmark executable
    #[arg(long, default_value = EXECUTABLE)]
    executable: PathBuf,

    /// Directory containing the original graphs
    #[arg(long, default_value = PLAIN_DATA_DIR)]
    plain_root: PathBuf,

    /// Directory containing the reordered graphs and permutation files
    #[arg(long, default_value = REORDERED_DATA_DIR)]
    reordered_root: PathBuf,

    /// Directory the per-condition log directories are created in
    #[arg(short, long, default_value = ".")]
    output_root: PathBuf,

    /// Number of runs, and source vertices, per invocation
    #[arg(short = 'n', long, default_value_t = 10)]
    num_runs: usize,

    /// Device the benchmark runs on
    #[arg(long, default_value_t = 3)]
    device: u32,

    /// Only sweep the given datasets
    #[arg(short, long = "dataset", value_name = "NAME")]
    datasets: Vec<String>,

    /// Include the R-MAT generator datasets
    #[arg(long)]
    with_synthetic: bool,

    /// Seed for drawing source vertices
    #[arg(long)]
    seed: Option<u64>,

    /// Print the command lines instead of running them
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    verbose: cli::Verbose,
}

impl Args {
    fn sweep_config(&self) -> SweepConfig {
        let mut config = SweepConfig {
            executable: self.executable.clone(),
            output_root: self.output_root.clone(),
            ..SweepConfig::default()
        };
        config.plain.data_dir = self.plain_root.clone();
        config.reordered.data_dir = self.reordered_root.clone();
        config.run.num_runs = self.num_runs;
        config.run.device = self.device;
        config
    }
}
