//! Mode dispatch: match, verify, or match-then-verify.
//!
//! ## Flow per input
//!
//! ```text
//! read_input() -> match_instance() -> write_matching() -> verify_matching()
//!                  (timed)             (.out next to .in)   (both mode only)
//! ```
//!
//! Console output goes through a [`Console`] so tests can capture it.
//! Processing stops at the first error or unstable matching.

use std::{
    io::{self, Stderr, Stdout, Write},
    path::Path,
    time::Instant,
};

use stablematch_core::{
    compute_instance_root, compute_matching_root, match_instance, root_hex, verify_matching,
};
use stablematch_io::{
    find_input_files, output_path_for, read_input, read_matching, resolve_match_target,
    write_matching,
};
use stablematch_types::{
    BlockingPair, Instance, MatchOutcome, Result, RunConfig, RunMode, StablematchError, Verdict,
    constants,
};

use crate::report::{RunReport, write_diagnostics, write_matching_listing, write_verdict};

/// Destination of console output.
pub struct Console<O, E> {
    pub out: O,
    pub err: E,
}

impl Console<Stdout, Stderr> {
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

/// How a run ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every processed matching was computed (and, if verified, stable).
    Success,
    /// A verified matching has a blocking pair.
    Unstable(BlockingPair),
}

impl RunStatus {
    /// Process exit code: 0 on success, 1 on instability.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Unstable(_) => 1,
        }
    }
}

/// Execute the configured mode.
pub fn run<O: Write, E: Write>(
    config: &RunConfig,
    console: &mut Console<O, E>,
) -> Result<RunStatus> {
    tracing::debug!(mode = %config.mode, path = %config.path.display(), "Run started");
    match config.mode {
        RunMode::Match => run_match(config, console),
        RunMode::Verify => run_verify(config, console),
        RunMode::Both => run_both(config, console),
    }
}

fn run_match<O: Write, E: Write>(
    config: &RunConfig,
    console: &mut Console<O, E>,
) -> Result<RunStatus> {
    let input = resolve_match_target(&config.path, &config.input_extension)?;
    let instance = read_input(&input)?;
    let (outcome, elapsed) = timed_match(&instance, &input)?;

    if !config.json_report {
        write_matching_listing(&mut console.out, &outcome.matching)?;
    }

    let output = output_path_for(&input, &config.output_extension);
    write_matching(&output, &outcome.matching)?;

    if config.json_report {
        report(config, &input, &instance, &outcome, elapsed, &output, None)
            .write_json(&mut console.out)?;
    } else {
        writeln!(console.out, "\nMatching results written to {}", output.display())?;
    }
    write_diagnostics(&mut console.err, outcome.proposals, elapsed)?;
    Ok(RunStatus::Success)
}

fn run_verify<O: Write, E: Write>(
    config: &RunConfig,
    console: &mut Console<O, E>,
) -> Result<RunStatus> {
    let folder = require_folder(&config.path)?;
    let input = folder.join(&config.verify_input);
    let output = folder.join(&config.verify_output);
    for required in [&input, &output] {
        if !required.exists() {
            return Err(StablematchError::Configuration(format!(
                "{} not found in folder",
                file_name(required)
            )));
        }
    }

    let instance = read_input(&input)?;
    let matching = read_matching(&output)?;
    if instance.n != matching.n {
        return Err(StablematchError::SizeMismatch {
            input: instance.n,
            output: matching.n,
        });
    }

    let verdict = verify_matching(&instance, &matching)?;
    tracing::info!(
        input = %input.display(),
        n = instance.n,
        stable = verdict.is_stable(),
        "Verification complete"
    );

    if config.json_report {
        RunReport {
            mode: config.mode,
            input: input.display().to_string(),
            n: instance.n,
            proposals: None,
            elapsed_secs: None,
            matching_root: root_hex(&compute_matching_root(&matching)),
            output: Some(output.display().to_string()),
            verdict: Some(verdict),
        }
        .write_json(&mut console.out)?;
    } else {
        write_verdict(&mut console.out, &verdict)?;
    }
    Ok(status_of(verdict))
}

fn run_both<O: Write, E: Write>(
    config: &RunConfig,
    console: &mut Console<O, E>,
) -> Result<RunStatus> {
    let folder = require_folder(&config.path)?;
    let inputs = find_input_files(folder, &config.input_extension)?;
    if inputs.is_empty() {
        return Err(StablematchError::Configuration(format!(
            "No .{} files found in folder",
            config.input_extension
        )));
    }

    for (i, input) in inputs.iter().enumerate() {
        if !config.json_report {
            if i > 0 {
                writeln!(console.out, "\n{}", "=".repeat(constants::SEPARATOR_WIDTH))?;
            }
            writeln!(console.out, "--- {} ---", file_name(input))?;
        }

        let status = run_both_single(config, console, input)?;
        if status != RunStatus::Success {
            return Ok(status);
        }
    }
    Ok(RunStatus::Success)
}

fn run_both_single<O: Write, E: Write>(
    config: &RunConfig,
    console: &mut Console<O, E>,
    input: &Path,
) -> Result<RunStatus> {
    let instance = read_input(input)?;
    let (outcome, elapsed) = timed_match(&instance, input)?;

    if !config.json_report {
        write_matching_listing(&mut console.out, &outcome.matching)?;
    }
    write_diagnostics(&mut console.err, outcome.proposals, elapsed)?;

    let output = output_path_for(input, &config.output_extension);
    write_matching(&output, &outcome.matching)?;

    let verdict = verify_matching(&instance, &outcome.matching)?;
    if config.json_report {
        report(config, input, &instance, &outcome, elapsed, &output, Some(verdict))
            .write_json(&mut console.out)?;
    } else {
        writeln!(console.out, "\nMatching results written to {}", output.display())?;
        write_verdict(&mut console.out, &verdict)?;
    }
    Ok(status_of(verdict))
}

/// Run the matcher and measure its wall time in seconds.
fn timed_match(instance: &Instance, input: &Path) -> Result<(MatchOutcome, f64)> {
    let start = Instant::now();
    let outcome = match_instance(instance)?;
    let elapsed = start.elapsed().as_secs_f64();

    tracing::info!(
        input = %input.display(),
        n = instance.n,
        proposals = outcome.proposals,
        elapsed_secs = elapsed,
        input_hash = %root_hex(&compute_instance_root(instance)),
        matching_root = %root_hex(&compute_matching_root(&outcome.matching)),
        "Matching computed"
    );
    Ok((outcome, elapsed))
}

fn report(
    config: &RunConfig,
    input: &Path,
    instance: &Instance,
    outcome: &MatchOutcome,
    elapsed: f64,
    output: &Path,
    verdict: Option<Verdict>,
) -> RunReport {
    RunReport {
        mode: config.mode,
        input: input.display().to_string(),
        n: instance.n,
        proposals: Some(outcome.proposals),
        elapsed_secs: Some(elapsed),
        matching_root: root_hex(&compute_matching_root(&outcome.matching)),
        output: Some(output.display().to_string()),
        verdict,
    }
}

fn require_folder(path: &Path) -> Result<&Path> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(StablematchError::Configuration(format!(
            "Folder '{}' does not exist",
            path.display()
        )))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
}

fn status_of(verdict: Verdict) -> RunStatus {
    match verdict {
        Verdict::Stable => RunStatus::Success,
        Verdict::Unstable { witness } => RunStatus::Unstable(witness),
    }
}
