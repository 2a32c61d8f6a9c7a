//! # stablematch-cli
//!
//! Driver for the `stablematch` binary. Parses arguments into a
//! [`RunConfig`](stablematch_types::RunConfig), installs the log subscriber,
//! and dispatches to one of three modes:
//!
//! - **match**: compute the hospital-optimal matching for one input file
//! - **verify**: check a stored matching against its instance
//! - **both**: match and verify every input file in a folder
//!
//! The library half exists so the modes can be driven in tests with captured
//! console output.

pub mod args;
pub mod logging;
pub mod report;
pub mod runner;

pub use args::{Command, USAGE, parse_args};
pub use report::RunReport;
pub use runner::{Console, RunStatus, run};
