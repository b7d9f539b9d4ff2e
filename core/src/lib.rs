pub mod case;
pub mod invoke;
pub mod orchestrator;
pub mod template;

#[cfg(test)]
mod orchestrator_test;

pub use case::{BenchmarkCase, Size, default_cases};
pub use invoke::{HyperfineOptions, Invoker, SystemInvoker};
pub use orchestrator::Orchestrator;
