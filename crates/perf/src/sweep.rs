use std::io::ErrorKind;
use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;

use crate::catalog::{Catalog, Dataset};
use crate::config::{Direction, SweepConfig};
use crate::invocation::Invocation;
use crate::launcher::Launcher;
use crate::permutation::Permutation;
use crate::Error;

/// Runs the benchmark executable for every dataset of a catalog.
///
/// For each dataset with a permutation file the sweep issues four
/// invocations, one per direction and vertex ordering. The plain run of a
/// direction receives randomly drawn vertex indices as traversal sources,
/// the reordered run receives the permuted values at the same indices.
/// Invocations are strictly sequential.
pub struct Sweep<'a, L, R> {
    config: &'a SweepConfig,
    launcher: L,
    rng: R,
}

/// Counters of a finished sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    pub datasets: usize,
    pub skipped: usize,
    pub invocations: usize,
}

impl<'a, L, R> Sweep<'a, L, R>
where
    L: Launcher,
    R: Rng,
{
    pub fn new(config: &'a SweepConfig, launcher: L, rng: R) -> Self {
        Self {
            config,
            launcher,
            rng,
        }
    }

    pub fn run(&mut self, catalog: &Catalog) -> Result<SweepSummary, Error> {
        let start = Instant::now();
        let mut summary = SweepSummary::default();

        for dataset in catalog {
            let invocations = self.run_dataset(dataset)?;
            if invocations == 0 {
                summary.skipped += 1;
            } else {
                summary.datasets += 1;
                summary.invocations += invocations;
            }
        }

        info!(
            "Swept {} datasets ({} skipped) with {} invocations in {:.2?}",
            summary.datasets,
            summary.skipped,
            summary.invocations,
            start.elapsed()
        );

        Ok(summary)
    }

    /// Runs all invocations of a single dataset and returns their number.
    pub fn run_dataset(&mut self, dataset: &Dataset) -> Result<usize, Error> {
        let config = self.config;
        let permutation_path = dataset.permutation_path(&config.reordered.data_dir);

        let permutation = match Permutation::from_path(&permutation_path) {
            Ok(permutation) => permutation,
            Err(Error::File { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!(
                    "Skipping {}, no permutation at {}",
                    dataset.name(),
                    permutation_path.display()
                );
                return Ok(0);
            }
            Err(e) => return Err(e),
        };

        let plain_graph = dataset.graph_source(&config.plain.data_dir);
        let reordered_graph = dataset.graph_source(&config.reordered.data_dir);

        let mut invocations = 0;

        for direction in Direction::ALL {
            let indices = match permutation.sample_indices(&mut self.rng, config.run.num_runs) {
                Some(indices) => indices,
                None => {
                    warn!(
                        "Skipping {}, permutation at {} is empty",
                        dataset.name(),
                        permutation_path.display()
                    );
                    return Ok(invocations);
                }
            };
            let permuted = permutation.map(&indices);

            let plain = Invocation::new(
                config,
                &config.plain,
                dataset.name(),
                &plain_graph,
                direction,
                indices,
            );
            let reordered = Invocation::new(
                config,
                &config.reordered,
                dataset.name(),
                &reordered_graph,
                direction,
                permuted,
            );

            self.launcher.launch(&plain)?;
            self.launcher.launch(&reordered)?;
            invocations += 2;
        }

        Ok(invocations)
    }

    pub fn into_launcher(self) -> L {
        self.launcher
    }
}
