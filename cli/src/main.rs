use std::path::{Path, PathBuf};
use std::sync::Once;

use clap::{Parser, ValueEnum};
use foro_bench_core::{
    HyperfineOptions, Orchestrator, Size, SystemInvoker, default_cases,
    orchestrator::{RunStatus, print_plan},
};


static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "foro_bench_core=info,foro_bench_cli=info";

#[derive(Debug, Parser)]
#[command(
    name = "foro-bench",
    author,
    version,
    about = "Benchmark foro against biome, ruff and clang-format via hyperfine",
    long_about = None
)]
struct CliArgs {
    /// Command or path of the foro build under test
    #[arg(value_name = "FORO", default_value = "foro")]
    foro: String,

    /// Directory containing the fixture projects (biome-test, ruff-test, ...)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Restrict the fixture size sweep
    #[arg(long, value_enum, default_value = "all")]
    size: SizeArg,

    /// Warmup runs forwarded to hyperfine
    #[arg(long, default_value_t = 1)]
    warmup: u32,

    /// Time unit forwarded to hyperfine
    #[arg(long, value_name = "UNIT", default_value = "microsecond")]
    time_unit: String,

    /// Output style forwarded to hyperfine
    #[arg(long, value_name = "STYLE", default_value = "basic")]
    style: String,

    /// Print the resolved plan without spawning anything
    #[arg(long)]
    dry_run: bool,

    /// With --dry-run, emit the plan as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SizeArg {
    Small,
    Large,
    All,
}

impl SizeArg {
    fn sizes(self) -> Vec<Size> {
        match self {
            SizeArg::Small => vec![Size::Small],
            SizeArg::Large => vec![Size::Large],
            SizeArg::All => Size::ALL.to_vec(),
        }
    }
}

fn maybe_init_tracing() {
    if std::env::var_os("FORO_BENCH_TRACE").is_none() {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter = std::env::var("RUST_LOG")
            .ok()
            .and_then(|expr| EnvFilter::try_new(expr).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_TRACE_FILTER));

        // Stderr, so hyperfine's report on stdout stays clean.
        let _ = fmt().with_writer(std::io::stderr).with_env_filter(filter).try_init();
    });
}

/// A bare command name is substituted as-is; anything that looks like a path
/// (the other runner variant passed a relative build path) is resolved to an
/// absolute one so it survives the per-case working-directory changes.
fn resolve_foro(raw: &str) -> String {
    let looks_like_path = raw.contains('/') || raw.contains(std::path::MAIN_SEPARATOR);
    if !looks_like_path {
        return raw.to_string();
    }
    match std::fs::canonicalize(raw) {
        Ok(abs) => abs.display().to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Prefers a `benchmark/` directory next to the invocation, falling back to
/// the current directory so the binary also works from inside the fixture root.
fn default_root() -> PathBuf {
    let conventional = Path::new("benchmark");
    if conventional.is_dir() {
        conventional.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let args = CliArgs::parse();

    let root = args.root.clone().unwrap_or_else(default_root);
    let orchestrator = Orchestrator::new(default_cases().to_vec(), root.clone(), resolve_foro(&args.foro))
        .with_sizes(args.size.sizes())
        .with_options(HyperfineOptions {
            warmup: args.warmup,
            time_unit: args.time_unit.clone(),
            style: args.style.clone(),
        });

    if args.dry_run {
        let plan = orchestrator.plan();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            print_plan(&plan, &root);
        }
        return Ok(());
    }

    match orchestrator.run(&mut SystemInvoker)? {
        RunStatus::Completed => Ok(()),
        RunStatus::HyperfineUnavailable => {
            eprintln!("hyperfine is not installed. Please install it before running this benchmark.");
            std::process::exit(1);
        }
    }
}
