//! Run configuration for the stablematch driver.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{StablematchError, constants};

/// What the driver does with its target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Compute a matching for one `.in` file and write the `.out` file.
    Match,
    /// Verify `verify.out` against `verify.in`.
    Verify,
    /// Match then verify every `.in` file in a folder.
    Both,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Verify => write!(f, "verify"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl FromStr for RunMode {
    type Err = StablematchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match" => Ok(Self::Match),
            "verify" => Ok(Self::Verify),
            "both" => Ok(Self::Both),
            other => Err(StablematchError::Configuration(format!(
                "Mode must be 'match', 'verify', or 'both', got {other:?}"
            ))),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Complete configuration of a single driver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Selected mode.
    pub mode: RunMode,
    /// Folder, or a single `.in` file in match mode.
    pub path: PathBuf,
    /// Extension identifying preference input files.
    pub input_extension: String,
    /// Extension given to written matching files.
    pub output_extension: String,
    /// Input file name used by verify mode.
    pub verify_input: String,
    /// Matching file name used by verify mode.
    pub verify_output: String,
    /// Emit a JSON run report on stdout for every processed input.
    pub json_report: bool,
    /// Log event format.
    pub log_format: LogFormat,
}

impl RunConfig {
    /// Configuration with default file conventions.
    #[must_use]
    pub fn new(mode: RunMode, path: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            path: path.into(),
            input_extension: constants::INPUT_EXTENSION.to_string(),
            output_extension: constants::OUTPUT_EXTENSION.to_string(),
            verify_input: constants::VERIFY_INPUT_FILE.to_string(),
            verify_output: constants::VERIFY_OUTPUT_FILE.to_string(),
            json_report: false,
            log_format: LogFormat::default(),
        }
    }
}
