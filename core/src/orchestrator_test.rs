mod tests {
    use std::path::{Path, PathBuf};

    use anyhow::Result;

    use crate::case::{BenchmarkCase, Size, default_cases};
    use crate::invoke::{HyperfineOptions, Invoker};
    use crate::orchestrator::{Orchestrator, RunStatus};
    use crate::template;

    /// Records invocations instead of spawning processes.
    struct RecordingInvoker {
        available: bool,
        probes: usize,
        calls: Vec<(PathBuf, Vec<String>)>,
    }

    impl RecordingInvoker {
        fn new(available: bool) -> Self {
            Self {
                available,
                probes: 0,
                calls: Vec::new(),
            }
        }
    }

    impl Invoker for RecordingInvoker {
        fn probe(&mut self) -> Result<bool> {
            self.probes += 1;
            Ok(self.available)
        }

        fn run(&mut self, dir: &Path, args: &[String]) -> Result<()> {
            self.calls.push((dir.to_path_buf(), args.to_vec()));
            Ok(())
        }
    }

    fn echo_case() -> BenchmarkCase {
        BenchmarkCase::new("echo-test", "/tmp", &["echo {foro} {size}"])
    }

    #[test]
    fn failed_probe_invokes_nothing() {
        let orch = Orchestrator::new(default_cases().to_vec(), ".", "foro");
        let mut inv = RecordingInvoker::new(false);
        let status = orch.run(&mut inv).expect("run should not error");
        assert_eq!(status, RunStatus::HyperfineUnavailable);
        assert_eq!(inv.probes, 1);
        assert!(inv.calls.is_empty());
    }

    #[test]
    fn one_invocation_per_case_and_size_in_table_order() {
        let orch = Orchestrator::new(default_cases().to_vec(), "bench-root", "foro");
        let mut inv = RecordingInvoker::new(true);
        let status = orch.run(&mut inv).expect("run should not error");
        assert_eq!(status, RunStatus::Completed);

        // 3 cases x 2 sizes
        assert_eq!(inv.calls.len(), 6);
        let dirs: Vec<_> = inv.calls.iter().map(|(d, _)| d.clone()).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("bench-root/biome-test"),
                PathBuf::from("bench-root/biome-test"),
                PathBuf::from("bench-root/ruff-test"),
                PathBuf::from("bench-root/ruff-test"),
                PathBuf::from("bench-root/clang-format-test"),
                PathBuf::from("bench-root/clang-format-test"),
            ]
        );
    }

    #[test]
    fn resolved_commands_carry_no_placeholders() {
        let orch = Orchestrator::new(default_cases().to_vec(), ".", "./target/release/foro");
        for inv in orch.plan() {
            for cmd in &inv.commands {
                assert!(!template::has_unresolved(cmd), "unresolved token in {cmd:?}");
            }
        }
    }

    #[test]
    fn echo_case_resolves_to_expected_command() {
        let orch = Orchestrator::new(vec![echo_case()], "", "X").with_sizes(vec![Size::Small]);
        let plan = orch.plan();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].commands, vec!["echo X small".to_string()]);
        assert_eq!(plan[0].project_dir, PathBuf::from("/tmp"));
    }

    #[test]
    fn unsized_case_runs_once() {
        let sized = echo_case();
        let fixed = BenchmarkCase::new("fixed", "fixed-dir", &["fmt ./only.py", "{foro} format ./only.py"]);
        assert!(sized.is_sized());
        assert!(!fixed.is_sized());

        let orch = Orchestrator::new(vec![sized, fixed], ".", "foro");
        let mut inv = RecordingInvoker::new(true);
        orch.run(&mut inv).expect("run should not error");
        // 2 for the sized case, 1 for the unsized one
        assert_eq!(inv.calls.len(), 3);
        let last = &inv.calls[2].1;
        assert!(last.contains(&"fmt ./only.py".to_string()));
        assert!(last.contains(&"foro format ./only.py".to_string()));
    }

    #[test]
    fn hyperfine_argv_carries_options_then_commands() {
        let opts = HyperfineOptions {
            warmup: 3,
            time_unit: "millisecond".to_string(),
            style: "full".to_string(),
        };
        let args = opts.argv(&["a".to_string(), "b".to_string()]);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        assert_eq!(
            args,
            vec![
                "-N",
                "--time-unit",
                "millisecond",
                "--style",
                "full",
                "--warmup",
                "3",
                "a",
                "b",
            ]
        );
    }

    #[test]
    fn default_hyperfine_options() {
        let opts = HyperfineOptions::default();
        assert_eq!(opts.warmup, 1);
        assert_eq!(opts.time_unit, "microsecond");
        assert_eq!(opts.style, "basic");
    }

    #[test]
    fn probe_error_propagates() {
        struct FailingProbe;
        impl Invoker for FailingProbe {
            fn probe(&mut self) -> Result<bool> {
                anyhow::bail!("probe exploded")
            }
            fn run(&mut self, _dir: &Path, _args: &[String]) -> Result<()> {
                unreachable!("run must not be reached after a probe error")
            }
        }

        let orch = Orchestrator::new(vec![echo_case()], ".", "foro");
        let err = orch.run(&mut FailingProbe).unwrap_err();
        assert!(err.to_string().contains("probe exploded"));
    }
}
