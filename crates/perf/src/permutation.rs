use std::path::Path;

use atoi::FromRadix10Checked;
use log::debug;
use rand::Rng;

use crate::Error;

/// Maps reordered vertex indices to original vertex indices.
///
/// Entry `i` holds the original index of the vertex at position `i` in the
/// reordered graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    table: Vec<usize>,
}

impl Permutation {
    pub fn new(table: Vec<usize>) -> Self {
        Self { table }
    }

    /// Reads a permutation file with one unsigned integer per line.
    ///
    /// Blank lines are ignored.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::file(path, e))?;

        let table = content
            .lines()
            .enumerate()
            .map(|(n, line)| (n + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(n, line)| match usize::from_radix_10_checked(line.as_bytes()) {
                (Some(value), used) if used == line.len() => Ok(value),
                _ => Err(Error::InvalidPermutation {
                    path: path.to_path_buf(),
                    line: n,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Read {} entries from {}", table.len(), path.display());

        Ok(Self { table })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    /// Draws `count` indices uniformly from `0..len`, with replacement.
    ///
    /// Returns `None` if the table is empty.
    pub fn sample_indices<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Option<Vec<usize>> {
        if self.table.is_empty() {
            return None;
        }

        Some((0..count).map(|_| rng.gen_range(0..self.table.len())).collect())
    }

    /// Returns the permuted value at each of the given indices.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn map(&self, indices: &[usize]) -> Vec<usize> {
        indices.iter().map(|&i| self.table[i]).collect()
    }
}
