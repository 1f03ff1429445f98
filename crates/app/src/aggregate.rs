use std::path::PathBuf;

use clap::Parser;
use graph_perf::prelude::*;
use graph_perf::scan::ADVANCE_TIME;

mod cli;

fn main() {
    let args = Args::parse();
    cli::init_logging(&args.verbose);

    cli::exit_on_error(run(&args));
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let timings = Aggregator::new(args.trials)
        .with_scanner(Scanner::new(&args.marker))
        .aggregate(&args.root)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&timings)?);
        return Ok(());
    }

    for (dataset, matrices) in &timings {
        for direction in Direction::ALL {
            let matrix = matrices.get(direction);
            let (rows, columns) = matrix.shape();
            println!("{dataset} {direction} ({rows}x{columns})");
            print!("{matrix}");
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Collects timings from benchmark logs into per-dataset matrices")]
struct Args {
    /// Directory containing one sub-directory of logs per dataset
    root: PathBuf,

    /// Number of trials, i.e. rows of each matrix
    #[arg(short, long, default_value_t = 3)]
    trials: usize,

    /// Text identifying the timing lines
    #[arg(short, long, default_value = ADVANCE_TIME)]
    marker: String,

    /// Print the matrices as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: cli::Verbose,
}
