use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use log::{info, warn};

use crate::invocation::Invocation;
use crate::Error;

/// Executes benchmark invocations.
///
/// Implementations must not return before the invocation has finished.
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation) -> Result<(), Error>;
}

/// Runs the executable as a child process and waits for it to exit.
///
/// Standard output is copied into the invocation's log file, replacing any
/// previous content. The log is only replaced once the child has started.
/// Standard error is inherited. The exit status of the child is reported
/// but does not stop the sweep.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<(), Error> {
        let log_path = invocation.log_path();

        create_dir(invocation.output_dir())?;
        if let Some(parent) = log_path.parent() {
            create_dir(parent)?;
        }

        info!("{}", invocation.command_line());

        let start = Instant::now();
        let mut child = Command::new(invocation.executable())
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::Launch {
                executable: invocation.executable().to_path_buf(),
                source,
            })?;

        let copied = match File::create(log_path) {
            Ok(mut log) => match child.stdout.take() {
                Some(mut stdout) => io::copy(&mut stdout, &mut log).map(|_| ()),
                None => Ok(()),
            },
            Err(e) => {
                let _ = child.kill();
                Err(e)
            }
        };

        let status = child.wait().map_err(|e| Error::file(log_path, e))?;
        copied.map_err(|e| Error::file(log_path, e))?;

        if status.success() {
            info!("Finished in {:.2?}", start.elapsed());
        } else {
            warn!(
                "{} exited with {status} after {:.2?}, see {}",
                invocation.executable().display(),
                start.elapsed(),
                log_path.display()
            );
        }

        Ok(())
    }
}

fn create_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path).map_err(|e| Error::file(path, e))
}

/// Writes every command line instead of executing it.
pub struct DryRunLauncher<W> {
    out: W,
}

impl<W: Write> DryRunLauncher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl DryRunLauncher<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Launcher for DryRunLauncher<W> {
    fn launch(&mut self, invocation: &Invocation) -> Result<(), Error> {
        writeln!(self.out, "{}", invocation.command_line())?;
        Ok(())
    }
}
