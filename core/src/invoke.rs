use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use serde::Serialize;

/// Options forwarded to hyperfine on every invocation.
///
/// Defaults: no intermediate shell, microsecond units, basic
/// (non-interactive) output style, one warmup run.
#[derive(Debug, Clone, Serialize)]
pub struct HyperfineOptions {
    pub warmup: u32,
    pub time_unit: String,
    pub style: String,
}

impl Default for HyperfineOptions {
    fn default() -> Self {
        Self {
            warmup: 1,
            time_unit: "microsecond".to_string(),
            style: "basic".to_string(),
        }
    }
}

impl HyperfineOptions {
    /// Builds the full hyperfine argv for one batch of resolved commands.
    pub fn argv(&self, commands: &[String]) -> Vec<String> {
        let mut args = vec![
            "-N".to_string(),
            "--time-unit".to_string(),
            self.time_unit.clone(),
            "--style".to_string(),
            self.style.clone(),
            "--warmup".to_string(),
            self.warmup.to_string(),
        ];
        args.extend(commands.iter().cloned());
        args
    }
}

/// Seam between the orchestration loop and the operating system, so tests can
/// record invocations instead of spawning real processes.
pub trait Invoker {
    /// Probes whether the timing utility responds to a version query.
    fn probe(&mut self) -> Result<bool>;

    /// Runs hyperfine with `args`, using `dir` as the working directory and
    /// inheriting stdout/stderr. Blocks until the child exits.
    fn run(&mut self, dir: &Path, args: &[String]) -> Result<()>;
}

/// The real thing: spawns `hyperfine` found on the search path.
#[derive(Debug, Default)]
pub struct SystemInvoker;

const HYPERFINE: &str = "hyperfine";

impl Invoker for SystemInvoker {
    fn probe(&mut self) -> Result<bool> {
        let status = Command::new(HYPERFINE)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => Ok(status.success()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err).context("failed to spawn hyperfine for version probe"),
        }
    }

    fn run(&mut self, dir: &Path, args: &[String]) -> Result<()> {
        tracing::debug!("spawning hyperfine in {:?} with {} args", dir, args.len());
        let status = Command::new(HYPERFINE)
            .args(args)
            .current_dir(dir)
            .status()
            .with_context(|| format!("failed to spawn hyperfine in {}", dir.display()))?;
        if !status.success() {
            // Best effort only: the report (or error) already went to the
            // inherited streams, so the run continues with the next case.
            tracing::warn!("hyperfine exited with {} in {:?}", status, dir);
        }
        Ok(())
    }
}
