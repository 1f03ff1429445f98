use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use regex::bytes::Regex;

use crate::Error;

/// Marker of the lines holding per-iteration advance timings.
pub const ADVANCE_TIME: &str = "Advance Time";

/// Extracts timing values from benchmark logs.
///
/// A line is considered a timing line if it contains the marker. The first
/// decimal number on such a line is its value. Lines are matched as raw
/// bytes, so progress output that is not valid UTF-8 does not matter.
#[derive(Debug, Clone)]
pub struct Scanner {
    marker: Regex,
    value: Regex,
}

impl Scanner {
    pub fn new(marker: impl AsRef<str>) -> Self {
        Self {
            marker: Regex::new(&regex::escape(marker.as_ref())).expect("escaped marker"),
            value: Regex::new(r"[0-9]+\.[0-9]+").expect("valid timing pattern"),
        }
    }

    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<f64>, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file(path, e))?;
        let values = self.scan(BufReader::new(file), path)?;

        debug!("Read {} timings from {}", values.len(), path.display());

        Ok(values)
    }

    /// Collects the values of all timing lines in input order.
    ///
    /// `origin` names the input in errors.
    pub fn scan<R: BufRead>(&self, reader: R, origin: &Path) -> Result<Vec<f64>, Error> {
        let mut values = Vec::new();

        for (n, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| Error::file(origin, e))?;
            if !self.marker.is_match(&line) {
                continue;
            }

            let value = self
                .value
                .find(&line)
                .and_then(|m| fast_float2::parse::<f64, _>(m.as_bytes()).ok())
                .ok_or_else(|| Error::MissingTiming {
                    path: origin.to_path_buf(),
                    line: n + 1,
                })?;

            values.push(value);
        }

        Ok(values)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ADVANCE_TIME)
    }
}
