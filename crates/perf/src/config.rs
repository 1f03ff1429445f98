use std::fmt;
use std::path::{Path, PathBuf};

use itertools::Itertools;

pub const EXECUTABLE: &str = "../../../build/bin/sssp";

pub const PLAIN_DATA_DIR: &str = "/nfs/mario-2TB/gunrock_dataset/large";
pub const REORDERED_DATA_DIR: &str = "/nfs/mario-26TB/jwapman/large-rcm-perm";

pub const PLAIN_TAG: &str = "no-rcm";
pub const REORDERED_TAG: &str = "rcm";

pub const PLAIN_EVAL_DIR: &str = "NORCM_SSSP";
pub const REORDERED_EVAL_DIR: &str = "RCM_SSSP";

/// Whether the benchmark treats the input graph as directed or undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Undirected,
    Directed,
}

impl Direction {
    /// Sweep order.
    pub const ALL: [Direction; 2] = [Direction::Undirected, Direction::Directed];

    pub fn marker(self) -> &'static str {
        match self {
            Direction::Undirected => "UDIR",
            Direction::Directed => "DIR",
        }
    }

    /// The part of a log file name that identifies its direction,
    /// e.g. `.UDIR.txt`.
    pub fn log_suffix(self) -> &'static str {
        match self {
            Direction::Undirected => ".UDIR.txt",
            Direction::Directed => ".DIR.txt",
        }
    }

    pub fn is_undirected(self) -> bool {
        matches!(self, Direction::Undirected)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Options passed unchanged to every benchmark invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub num_runs: usize,
    pub validation: String,
    pub device: u32,
    pub size_t_64bit: bool,
    pub vertex_t_64bit: bool,
    pub mark_pred: Vec<bool>,
    pub advance_modes: Vec<String>,
    pub remove_self_loops: bool,
    pub remove_duplicate_edges: bool,
    pub read_from_binary: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_runs: 10,
            validation: "each".to_string(),
            device: 3,
            size_t_64bit: false,
            vertex_t_64bit: false,
            mark_pred: vec![false, true],
            advance_modes: vec!["LB_CULL".to_string(), "LB".to_string(), "TWC".to_string()],
            remove_self_loops: false,
            remove_duplicate_edges: false,
            read_from_binary: false,
        }
    }
}

impl RunConfig {
    pub fn to_args(&self) -> Vec<String> {
        vec![
            format!("--num-runs={}", self.num_runs),
            format!("--validation={}", self.validation),
            format!("--device={}", self.device),
            format!("--64bit-SizeT={}", self.size_t_64bit),
            format!("--64bit-VertexT={}", self.vertex_t_64bit),
            format!("--mark-pred={}", self.mark_pred.iter().join(",")),
            format!("--advance-mode={}", self.advance_modes.iter().join(",")),
            format!("--remove-self-loops={}", self.remove_self_loops),
            format!("--remove-duplicate-edges={}", self.remove_duplicate_edges),
            format!("--read-from-binary={}", self.read_from_binary),
        ]
    }
}

/// One of the two vertex orderings compared by a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Value of the `--tag` option.
    pub tag: String,
    /// Directory containing one sub-directory per dataset.
    pub data_dir: PathBuf,
    /// Name of the directory the logs of this condition are written to.
    pub eval_dir: String,
}

impl Condition {
    pub fn plain() -> Self {
        Self {
            tag: PLAIN_TAG.to_string(),
            data_dir: PathBuf::from(PLAIN_DATA_DIR),
            eval_dir: PLAIN_EVAL_DIR.to_string(),
        }
    }

    pub fn reordered() -> Self {
        Self {
            tag: REORDERED_TAG.to_string(),
            data_dir: PathBuf::from(REORDERED_DATA_DIR),
            eval_dir: REORDERED_EVAL_DIR.to_string(),
        }
    }

    /// `<output_root>/<eval_dir>/<dataset>`
    pub fn output_dir(&self, output_root: &Path, dataset: &str) -> PathBuf {
        output_root.join(&self.eval_dir).join(dataset)
    }

    /// `<output_root>/<eval_dir>/<dataset>/<dataset>.<MARK>.txt`
    pub fn log_path(&self, output_root: &Path, dataset: &str, direction: Direction) -> PathBuf {
        self.output_dir(output_root, dataset)
            .join(format!("{dataset}.{}.txt", direction.marker()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub executable: PathBuf,
    pub plain: Condition,
    pub reordered: Condition,
    pub output_root: PathBuf,
    pub run: RunConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(EXECUTABLE),
            plain: Condition::plain(),
            reordered: Condition::reordered(),
            output_root: PathBuf::from("."),
            run: RunConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_config_args() {
        assert_eq!(
            RunConfig::default().to_args(),
            vec![
                "--num-runs=10",
                "--validation=each",
                "--device=3",
                "--64bit-SizeT=false",
                "--64bit-VertexT=false",
                "--mark-pred=false,true",
                "--advance-mode=LB_CULL,LB,TWC",
                "--remove-self-loops=false",
                "--remove-duplicate-edges=false",
                "--read-from-binary=false",
            ]
        );
    }

    #[test]
    fn log_paths_per_condition() {
        let root = Path::new("out");

        assert_eq!(
            Condition::plain().log_path(root, "ak2010", Direction::Directed),
            PathBuf::from("out/NORCM_SSSP/ak2010/ak2010.DIR.txt")
        );
        assert_eq!(
            Condition::reordered().log_path(root, "ak2010", Direction::Undirected),
            PathBuf::from("out/RCM_SSSP/ak2010/ak2010.UDIR.txt")
        );
    }

    #[test]
    fn directed_suffix_is_not_part_of_undirected_suffix() {
        assert!(!"ak2010.UDIR.txt".contains(Direction::Directed.log_suffix()));
        assert!("ak2010.UDIR.txt".contains(Direction::Undirected.log_suffix()));
    }
}
