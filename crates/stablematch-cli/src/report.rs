//! Console output: matching listing, diagnostics, verdicts, JSON reports.

use std::io::Write;

use serde::Serialize;
use stablematch_types::{Matching, Result, RunMode, Verdict, constants};

/// Machine-readable summary of one processed input (`--json`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub mode: RunMode,
    /// Input file the report is about.
    pub input: String,
    pub n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposals: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
    /// Hex SHA-256 matching root.
    pub matching_root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

impl RunReport {
    /// Write the report as a single JSON line.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Matching listing, one `hospital student` line per pair.
pub fn write_matching_listing<W: Write>(out: &mut W, matching: &Matching) -> Result<()> {
    writeln!(out, "\nFinal Matching (Hospital Student):")?;
    for pair in matching {
        writeln!(out, "{} {}", pair.hospital, pair.student)?;
    }
    Ok(())
}

/// Proposal count and matcher wall time.
pub fn write_diagnostics<W: Write>(err: &mut W, proposals: u64, elapsed_secs: f64) -> Result<()> {
    writeln!(err, "\nNumber of proposals: {proposals}")?;
    writeln!(
        err,
        "Matching runtime: {elapsed_secs:.prec$} seconds",
        prec = constants::RUNTIME_PRECISION
    )?;
    Ok(())
}

/// Verification banner and verdict line.
pub fn write_verdict<W: Write>(out: &mut W, verdict: &Verdict) -> Result<()> {
    writeln!(out, "\nVerifying matching stability...")?;
    match verdict {
        Verdict::Stable => writeln!(out, "{verdict}")?,
        Verdict::Unstable { .. } => writeln!(out, "\n{verdict}\n")?,
    }
    Ok(())
}
