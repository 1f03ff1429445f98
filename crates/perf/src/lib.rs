//! Benchmark sweeps over an external graph traversal executable and
//! aggregation of the timing logs it produces.
//!
//! The crate covers two independent steps that are run one after the other:
//!
//! 1. A [sweep](crate::sweep::Sweep) runs the benchmark executable for every
//!    dataset of a [catalog](crate::catalog::Catalog), once per direction and
//!    once per vertex ordering. The plain run reads the graph as published,
//!    the reordered run reads a pre-permuted copy of the same graph. Console
//!    output of every run is written to its own log file.
//! 2. An [aggregation](crate::aggregate::Aggregator) walks the resulting log
//!    tree, extracts every timing line and reshapes the values into one
//!    [matrix](crate::matrix::SampleMatrix) per dataset and direction with a
//!    row per trial.
//!
//! # Source vertices
//!
//! Every dataset of a sweep comes with a permutation file where line `i`
//! holds the original vertex index for reordered index `i`. The sweep draws
//! random indices from that table and hands them to the plain run, while the
//! reordered run receives the permuted values at the same indices:
//!
//! ```
//! use graph_perf::prelude::*;
//!
//! let permutation = Permutation::new(vec![5, 2, 8, 1]);
//! let indices = vec![0, 3];
//!
//! assert_eq!(permutation.map(&indices), vec![5, 1]);
//! ```
//!
//! # Reshaping timings
//!
//! The timing values of a log file are reshaped into a matrix with a fixed
//! number of rows. The column count is inferred from the number of samples:
//!
//! ```
//! use graph_perf::prelude::*;
//!
//! let matrix = SampleMatrix::reshape(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6], 3)?;
//! assert_eq!(matrix.shape(), (3, 2));
//! assert_eq!(matrix.row(1), &[0.3, 0.4]);
//!
//! assert!(SampleMatrix::reshape(vec![0.1; 7], 3).is_err());
//! # Ok::<(), graph_perf::Error>(())
//! ```

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod invocation;
pub mod launcher;
pub mod matrix;
pub mod permutation;
pub mod prelude;
pub mod scan;
pub mod sweep;

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error while writing output")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("error while accessing {path:?}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error while walking the result directory")]
    Walk {
        #[from]
        source: walkdir::Error,
    },
    #[error("invalid vertex index in permutation file {path:?} at line {line}")]
    InvalidPermutation { path: PathBuf, line: usize },
    #[error("failed to launch {executable:?}")]
    Launch {
        executable: PathBuf,
        source: std::io::Error,
    },
    #[error("no timing value in {path:?} at line {line}")]
    MissingTiming { path: PathBuf, line: usize },
    #[error("cannot reshape {samples} samples into {rows} rows")]
    Reshape { samples: usize, rows: usize },
    #[error("no log file matching '{suffix}' in {dir:?}")]
    MissingLog { dir: PathBuf, suffix: &'static str },
    #[error("multiple log files matching '{suffix}' in {dir:?}: {candidates:?}")]
    AmbiguousLog {
        dir: PathBuf,
        suffix: &'static str,
        candidates: Vec<PathBuf>,
    },
    #[error("dataset '{name}' found in both {first:?} and {second:?}")]
    DuplicateDataset {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl Error {
    pub(crate) fn file(path: &Path, source: std::io::Error) -> Self {
        Error::File {
            path: path.to_path_buf(),
            source,
        }
    }
}
