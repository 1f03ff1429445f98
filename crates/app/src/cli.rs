use std::error::Error;
use std::fmt::Write;

use log::LevelFilter;

/// Verbosity flags shared by all binaries.
#[derive(Debug, clap::Args)]
pub(crate) struct Verbose {
    /// Increase logging verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true, conflicts_with = "verbose")]
    quiet: u8,
}

impl Verbose {
    pub(crate) fn level(&self) -> LevelFilter {
        match i16::from(self.verbose) - i16::from(self.quiet) {
            i16::MIN..=-3 => LevelFilter::Off,
            -2 => LevelFilter::Error,
            -1 => LevelFilter::Warn,
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Sets up `env_logger` at the requested level. `RUST_LOG` takes precedence.
pub(crate) fn init_logging(verbose: &Verbose) {
    env_logger::Builder::new()
        .filter_level(verbose.level())
        .parse_default_env()
        .init();
}

/// Renders an error and its chain of sources for the terminal.
pub(crate) fn report(err: &dyn Error) -> String {
    let mut out = format!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, "\n  Caused by: {cause}");
        source = cause.source();
    }
    out
}

/// Prints the error of a failed run and exits with status 1.
pub(crate) fn exit_on_error(result: Result<(), Box<dyn Error>>) {
    if let Err(err) = result {
        eprintln!("{}", report(err.as_ref()));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn report_includes_path_and_cause() {
        let err = graph_perf::Error::File {
            path: PathBuf::from("results/ds/ds.DIR.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };

        assert_eq!(
            report(&err),
            "Error: error while accessing \"results/ds/ds.DIR.txt\"\n  Caused by: permission denied"
        );
    }

    #[test]
    fn report_without_source() {
        let err = graph_perf::Error::Reshape {
            samples: 7,
            rows: 3,
        };

        assert!(report(&err).starts_with("Error: "));
        assert!(!report(&err).contains("Caused by"));
    }
}
