pub use crate::aggregate::Aggregator;
pub use crate::aggregate::DatasetTimings;
pub use crate::aggregate::Timings;

pub use crate::catalog::Catalog;
pub use crate::catalog::Dataset;
pub use crate::catalog::GraphSource;

pub use crate::config::Condition;
pub use crate::config::Direction;
pub use crate::config::RunConfig;
pub use crate::config::SweepConfig;

pub use crate::invocation::Invocation;

pub use crate::launcher::DryRunLauncher;
pub use crate::launcher::Launcher;
pub use crate::launcher::ProcessLauncher;

pub use crate::matrix::SampleMatrix;

pub use crate::permutation::Permutation;

pub use crate::scan::Scanner;

pub use crate::sweep::Sweep;
pub use crate::sweep::SweepSummary;

pub use crate::Error;
