use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::Direction;
use crate::matrix::SampleMatrix;
use crate::scan::Scanner;
use crate::Error;

/// Timing matrices of a dataset, one per direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetTimings {
    #[serde(rename = "UDIR")]
    pub undirected: SampleMatrix,
    #[serde(rename = "DIR")]
    pub directed: SampleMatrix,
}

impl DatasetTimings {
    pub fn get(&self, direction: Direction) -> &SampleMatrix {
        match direction {
            Direction::Undirected => &self.undirected,
            Direction::Directed => &self.directed,
        }
    }
}

/// Aggregated timings keyed by dataset name.
pub type Timings = BTreeMap<String, DatasetTimings>;

/// Collects the timing logs of a sweep into per-dataset matrices.
///
/// Every directory without sub-directories is a dataset directory named
/// after its dataset. It must contain exactly one log per direction, i.e.
/// one file whose name contains `.UDIR.txt` and one whose name contains
/// `.DIR.txt`.
#[derive(Debug, Clone)]
pub struct Aggregator {
    trials: usize,
    scanner: Scanner,
}

/// A directory of the result tree and the files directly inside it.
struct Directory {
    path: PathBuf,
    files: Vec<PathBuf>,
    is_leaf: bool,
}

impl Aggregator {
    /// `trials` is the row count of every matrix.
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            scanner: Scanner::default(),
        }
    }

    pub fn with_scanner(self, scanner: Scanner) -> Self {
        Self { scanner, ..self }
    }

    pub fn aggregate<P: AsRef<Path>>(&self, root: P) -> Result<Timings, Error> {
        let start = Instant::now();
        let root = root.as_ref();

        let mut timings = Timings::new();
        let mut origins = BTreeMap::new();

        for dir in directories(root)?.iter().filter(|d| d.is_leaf) {
            self.read_dataset(dir, &mut timings, &mut origins)?;
        }

        info!(
            "Aggregated {} datasets from {} in {:.2?}",
            timings.len(),
            root.display(),
            start.elapsed()
        );

        Ok(timings)
    }

    /// Reads and reshapes a single log file.
    pub fn read_log<P: AsRef<Path>>(&self, path: P) -> Result<SampleMatrix, Error> {
        let values = self.scanner.scan_file(path)?;
        SampleMatrix::reshape(values, self.trials)
    }

    fn read_dataset(
        &self,
        dir: &Directory,
        timings: &mut Timings,
        origins: &mut BTreeMap<String, PathBuf>,
    ) -> Result<(), Error> {
        let path = dir.path.as_path();

        let udir = find_log(path, &dir.files, Direction::Undirected)?
            .ok_or_else(|| missing_log(path, Direction::Undirected))?;
        let dir_log = find_log(path, &dir.files, Direction::Directed)?
            .ok_or_else(|| missing_log(path, Direction::Directed))?;

        let name = dataset_name(path);
        if let Some(first) = origins.get(&name) {
            return Err(Error::DuplicateDataset {
                name,
                first: first.clone(),
                second: path.to_path_buf(),
            });
        }

        let dataset = DatasetTimings {
            undirected: self.read_log(udir)?,
            directed: self.read_log(dir_log)?,
        };

        debug!(
            "{name}: UDIR {:?}, DIR {:?}",
            dataset.undirected.shape(),
            dataset.directed.shape()
        );

        origins.insert(name.clone(), path.to_path_buf());
        timings.insert(name, dataset);

        Ok(())
    }
}

/// Walks the tree below `root` depth-first, in file name order.
fn directories(root: &Path) -> Result<Vec<Directory>, Error> {
    let mut dirs: Vec<Directory> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let parent = match entry.depth() {
            0 => None,
            _ => entry.path().parent().and_then(|p| index.get(p).copied()),
        };

        if entry.file_type().is_dir() {
            if let Some(parent) = parent {
                dirs[parent].is_leaf = false;
            }
            index.insert(entry.path().to_path_buf(), dirs.len());
            dirs.push(Directory {
                path: entry.into_path(),
                files: Vec::new(),
                is_leaf: true,
            });
        } else if let Some(parent) = parent {
            dirs[parent].files.push(entry.into_path());
        }
    }

    Ok(dirs)
}

fn find_log<'a>(
    dir: &Path,
    files: &'a [PathBuf],
    direction: Direction,
) -> Result<Option<&'a PathBuf>, Error> {
    let suffix = direction.log_suffix();
    let candidates = files
        .iter()
        .filter(|file| {
            file.file_name()
                .map_or(false, |name| name.to_string_lossy().contains(suffix))
        })
        .collect::<Vec<_>>();

    match candidates.as_slice() {
        [] => Ok(None),
        [log] => Ok(Some(*log)),
        _ => Err(Error::AmbiguousLog {
            dir: dir.to_path_buf(),
            suffix,
            candidates: candidates.iter().map(|&path| path.clone()).collect(),
        }),
    }
}

fn missing_log(dir: &Path, direction: Direction) -> Error {
    Error::MissingLog {
        dir: dir.to_path_buf(),
        suffix: direction.log_suffix(),
    }
}

fn dataset_name(dir: &Path) -> String {
    dir.file_name()
        .unwrap_or(dir.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_log(path: &Path, timings: &[f64]) {
        let mut content = String::from("Loading graph ...\n");
        for (i, t) in timings.iter().enumerate() {
            content.push_str(&format!("Run {i}\n  Advance Time: {t:.4} ms\n"));
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_log_names_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let ds = dir.path().join("ds");
        fs::create_dir(&ds).unwrap();
        write_log(&ds.join("ds.UDIR.txt"), &[1.0, 2.0, 3.0]);

        let err = Aggregator::new(3).aggregate(dir.path()).unwrap_err();

        match err {
            Error::MissingLog { dir, suffix } => {
                assert_eq!(dir, ds);
                assert_eq!(suffix, ".DIR.txt");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ambiguous_logs_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let ds = dir.path().join("ds");
        fs::create_dir(&ds).unwrap();
        write_log(&ds.join("ds.UDIR.txt"), &[1.0]);
        write_log(&ds.join("ds.DIR.txt"), &[1.0]);
        write_log(&ds.join("ds-rerun.DIR.txt"), &[1.0]);

        let err = Aggregator::new(1).aggregate(dir.path()).unwrap_err();

        match err {
            Error::AmbiguousLog {
                suffix, candidates, ..
            } => {
                assert_eq!(suffix, ".DIR.txt");
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn leaf_without_logs_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("ds");
        fs::create_dir_all(&empty).unwrap();
        fs::write(empty.join("notes.txt"), "Advance Time: 1.0").unwrap();

        let err = Aggregator::new(3).aggregate(dir.path()).unwrap_err();

        match err {
            Error::MissingLog { dir, suffix } => {
                assert_eq!(dir, empty);
                assert_eq!(suffix, ".UDIR.txt");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn read_log_reshapes_with_trials() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("ds.DIR.txt");
        write_log(&log, &[0.5, 1.5, 2.5, 3.5, 4.5, 5.5]);

        let matrix = Aggregator::new(2).read_log(&log).unwrap();

        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.row(1), &[3.5, 4.5, 5.5]);
    }
}
