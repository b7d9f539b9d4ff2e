use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::template;

/// Size tag substituted for `{size}` in command templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Small, Size::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Large => "large",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named group of command templates timed against each other inside a
/// single fixture project directory.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkCase {
    pub label: String,
    /// Relative to the benchmark root; becomes the child's working directory.
    pub project_dir: PathBuf,
    pub templates: Vec<String>,
}

impl BenchmarkCase {
    pub fn new<L, P>(label: L, project_dir: P, templates: &[&str]) -> Self
    where
        L: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            label: label.into(),
            project_dir: project_dir.into(),
            templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Cases without a `{size}` token are invoked once rather than once per size.
    pub fn is_sized(&self) -> bool {
        self.templates.iter().any(|t| template::mentions_size(t))
    }
}

static DEFAULT_CASES: Lazy<Vec<BenchmarkCase>> = Lazy::new(|| {
    vec![
        BenchmarkCase::new(
            "biome",
            "biome-test",
            &[
                "npx biome format --write ./src/{size}.tsx",
                "./node_modules/@biomejs/cli-linux-x64-musl/biome format --write ./src/{size}.tsx",
                "{foro} format ./src/{size}.tsx",
            ],
        ),
        BenchmarkCase::new(
            "ruff format",
            "ruff-test",
            &[
                "ruff format ./src/ruff_test/{size}.py",
                "{foro} format ./src/ruff_test/{size}.py",
            ],
        ),
        BenchmarkCase::new(
            "clang-format",
            "clang-format-test",
            &["clang-format ./{size}.cpp", "{foro} format ./{size}.cpp"],
        ),
    ]
});

/// The built-in competitor table, in invocation order.
pub fn default_cases() -> &'static [BenchmarkCase] {
    &DEFAULT_CASES
}
