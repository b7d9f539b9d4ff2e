use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::case::{BenchmarkCase, Size};
use crate::invoke::{HyperfineOptions, Invoker};
use crate::template;

/// One fully substituted hyperfine invocation, ready to spawn.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedInvocation {
    pub label: String,
    pub size: Option<Size>,
    pub project_dir: PathBuf,
    pub commands: Vec<String>,
}

/// Outcome of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    /// The version probe failed; nothing was invoked.
    HyperfineUnavailable,
}

/// Sequential driver: resolves the case table and feeds one blocking
/// hyperfine invocation at a time through the [`Invoker`] seam.
pub struct Orchestrator {
    cases: Vec<BenchmarkCase>,
    root: PathBuf,
    foro: String,
    sizes: Vec<Size>,
    options: HyperfineOptions,
}

impl Orchestrator {
    pub fn new(cases: Vec<BenchmarkCase>, root: impl Into<PathBuf>, foro: impl Into<String>) -> Self {
        Self {
            cases,
            root: root.into(),
            foro: foro.into(),
            sizes: Size::ALL.to_vec(),
            options: HyperfineOptions::default(),
        }
    }

    pub fn with_sizes(mut self, sizes: Vec<Size>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_options(mut self, options: HyperfineOptions) -> Self {
        self.options = options;
        self
    }

    /// Expands the case table into the ordered list of invocations: one per
    /// (case, size) pair, or a single one for cases without a `{size}` token.
    pub fn plan(&self) -> Vec<ResolvedInvocation> {
        let mut out = Vec::new();
        for case in &self.cases {
            if case.is_sized() {
                for &size in &self.sizes {
                    out.push(self.resolve_one(case, Some(size)));
                }
            } else {
                out.push(self.resolve_one(case, None));
            }
        }
        out
    }

    fn resolve_one(&self, case: &BenchmarkCase, size: Option<Size>) -> ResolvedInvocation {
        let size_tag = size.map(Size::as_str).unwrap_or_default();
        ResolvedInvocation {
            label: case.label.clone(),
            size,
            project_dir: self.root.join(&case.project_dir),
            commands: case
                .templates
                .iter()
                .map(|t| template::resolve(t, &self.foro, size_tag))
                .collect(),
        }
    }

    /// Probes the timing utility, then runs every planned invocation in table
    /// order, announcing each on stdout. Returns without invoking anything
    /// when the probe fails.
    pub fn run(&self, invoker: &mut dyn Invoker) -> Result<RunStatus> {
        if !invoker.probe()? {
            return Ok(RunStatus::HyperfineUnavailable);
        }

        println!("Running benchmarks...");

        for inv in self.plan() {
            announce(&inv);
            let args = self.options.argv(&inv.commands);
            invoker.run(&inv.project_dir, &args)?;
        }

        Ok(RunStatus::Completed)
    }
}

fn announce(inv: &ResolvedInvocation) {
    match inv.size {
        Some(size) => println!("\n\n\nRunning benchmark for {} + {}...\n", inv.label, size),
        None => println!("\n\n\nRunning benchmark for {}...\n", inv.label),
    }
}

/// Prints the resolved plan without spawning anything.
pub fn print_plan(plan: &[ResolvedInvocation], root: &Path) {
    println!("Benchmark plan (root: {}):", root.display());
    for inv in plan {
        match inv.size {
            Some(size) => println!("\n[{} + {}] in {}", inv.label, size, inv.project_dir.display()),
            None => println!("\n[{}] in {}", inv.label, inv.project_dir.display()),
        }
        for cmd in &inv.commands {
            println!("  {}", cmd);
        }
    }
}
