//! Command Line Interface (CLI) layer for shpcrs.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `inspect` and `scan`
//! subcommands. Console output here is part of the CLI contract; diagnostics
//! go through `tracing` when `--log` is set.
//!
//! If you are embedding shpcrs into another application, prefer using
//! the high-level `shpcrs::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
