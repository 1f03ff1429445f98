use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::catalog::GraphSource;
use crate::config::{Condition, Direction, SweepConfig};

/// A single run of the benchmark executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    executable: PathBuf,
    args: Vec<String>,
    sources: Vec<usize>,
    output_dir: PathBuf,
    log_path: PathBuf,
}

impl Invocation {
    /// Assembles the command line for one dataset, condition and direction.
    ///
    /// Arguments are ordered as graph source, shared run options,
    /// direction, tag, output directory and source vertices.
    pub fn new(
        config: &SweepConfig,
        condition: &Condition,
        dataset: &str,
        graph: &GraphSource,
        direction: Direction,
        sources: Vec<usize>,
    ) -> Self {
        let output_dir = condition.output_dir(&config.output_root, dataset);
        let log_path = condition.log_path(&config.output_root, dataset, direction);

        let mut args = graph.to_args();
        args.extend(config.run.to_args());
        args.push(format!("--undirected={}", direction.is_undirected()));
        args.push(format!("--tag={}", condition.tag));
        args.push(format!("--jsondir={}", output_dir.display()));
        args.push(format!("--src={}", sources.iter().join(",")));

        Self {
            executable: config.executable.clone(),
            args,
            sources,
            output_dir,
            log_path,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Source vertices of the traversals, one per run.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Directory the executable writes its JSON reports to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File that receives the console output.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Renders the invocation as a shell command line, including the
    /// redirection of its output into the log file.
    pub fn command_line(&self) -> String {
        format!(
            "{} {} > {}",
            self.executable.display(),
            self.args.iter().join(" "),
            self.log_path.display()
        )
    }
}
