//! Command-line parsing into a [`RunConfig`].

use std::path::PathBuf;

use stablematch_types::{LogFormat, Result, RunConfig, RunMode, StablematchError};

/// Usage text printed for `--help` and on bad invocations.
pub const USAGE: &str = "\
Usage:
  stablematch match <folder>             Match the single .in file in a folder
  stablematch match <path/to/file.in>    Match one input file
  stablematch verify <folder>            Verify verify.out against verify.in
  stablematch both <folder>              Match and verify every .in file

Options:
  --json        Print a JSON run report instead of the human-readable output
  --log-json    Emit log events as JSON (filter with RUST_LOG, default: warn)
  -h, --help    Show this message
";

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
}

/// Parse the arguments that follow the program name.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut positional: Vec<&str> = Vec::new();
    let mut json_report = false;
    let mut log_format = LogFormat::Text;

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--json" => json_report = true,
            "--log-json" => log_format = LogFormat::Json,
            flag if flag.starts_with("--") => {
                return Err(StablematchError::Configuration(format!(
                    "Unknown option {flag}"
                )));
            }
            value => positional.push(value),
        }
    }

    let [mode, path] = positional.as_slice() else {
        return Err(StablematchError::Configuration(format!(
            "Expected a mode and a path, got {} argument(s)",
            positional.len()
        )));
    };

    let mut config = RunConfig::new(mode.parse::<RunMode>()?, PathBuf::from(path));
    config.json_report = json_report;
    config.log_format = log_format;
    Ok(Command::Run(config))
}
