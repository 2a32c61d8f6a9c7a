//! Error types for stablematch.
//!
//! All errors use the `SM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input file / preference table errors
//! - 2xx: Matching file errors
//! - 3xx: Verification pre-check errors
//! - 4xx: Matcher invariant errors
//! - 9xx: General / I/O / configuration errors
//!
//! An unstable matching is **not** an error: it is reported through
//! [`crate::Verdict::Unstable`] and callers decide whether it is fatal.

use thiserror::Error;

use crate::{HospitalId, Side, StudentId};

/// Central error enum for all stablematch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StablematchError {
    // =================================================================
    // Input Errors (1xx)
    // =================================================================
    /// The input file has no non-blank lines.
    #[error("SM_ERR_100: Invalid input file: File is empty")]
    EmptyInput,

    /// The first line is not an integer.
    #[error("SM_ERR_101: Invalid input file: First line should be an integer, got {token:?}")]
    SizeNotInteger { token: String },

    /// `n` is zero or negative.
    #[error("SM_ERR_102: Invalid input file: Cannot calculate matching for n={n}")]
    NonPositiveSize { n: i64 },

    /// The number of preference lines is not `2n`.
    #[error("SM_ERR_103: Invalid input file: Expected {expected} lines after first line, got {actual}")]
    WrongLineCount { expected: usize, actual: usize },

    /// A preference list does not rank exactly `n` agents.
    #[error("SM_ERR_104: Invalid input file: {side} {agent} ranks {actual} agents, expected {expected}")]
    WrongListLength {
        side: Side,
        agent: usize,
        expected: usize,
        actual: usize,
    },

    /// A preference token is not an integer.
    #[error("SM_ERR_105: Invalid input file: Preferences must be integers, {side} {agent} has {token:?}")]
    PreferenceNotInteger {
        side: Side,
        agent: usize,
        token: String,
    },

    /// A preference value lies outside `1..=n`.
    #[error("SM_ERR_106: Invalid input file: {side} {agent} ranks {value}, out of range 1..{n}")]
    PreferenceOutOfRange {
        side: Side,
        agent: usize,
        value: i64,
        n: usize,
    },

    /// A preference list ranks the same agent twice.
    #[error("SM_ERR_107: Invalid input file: {side} {agent} ranks {value} more than once")]
    DuplicatePreference { side: Side, agent: usize, value: usize },

    /// The preference table itself has the wrong number of lists.
    #[error("SM_ERR_108: Invalid preference table: {side} table has {actual} lists, expected {expected}")]
    WrongTableSize {
        side: Side,
        expected: usize,
        actual: usize,
    },

    // =================================================================
    // Matching File Errors (2xx)
    // =================================================================
    /// The matching file has no non-blank lines.
    #[error("SM_ERR_200: Invalid output file: File is empty")]
    EmptyMatchingFile,

    /// The first line of the matching file is not a positive integer.
    #[error("SM_ERR_201: Invalid output file: First line should be a positive integer, got {token:?}")]
    InvalidMatchingSize { token: String },

    /// The matching file does not hold exactly `n` pair lines.
    #[error("SM_ERR_202: Invalid output file: Expected exactly {expected} matching pairs, got {actual}")]
    WrongPairCount { expected: usize, actual: usize },

    /// A pair line is not two integers.
    #[error("SM_ERR_203: Invalid output file: Line {line} is not a `hospital student` pair: {content:?}")]
    MalformedPair { line: usize, content: String },

    /// A pair references an agent outside `1..=n`.
    #[error("SM_ERR_204: Invalid output file: {side} {value} is out of range 1..{n}")]
    PairOutOfRange { side: Side, value: i64, n: usize },

    /// A hospital appears on more than one line.
    #[error("SM_ERR_205: Invalid output file: Hospital {0} appears more than once")]
    DuplicateHospital(HospitalId),

    /// A student is matched more than once.
    #[error("SM_ERR_206: Invalid output file: Student {0} is matched more than once")]
    DuplicateStudent(StudentId),

    /// Input and matching files disagree on `n`.
    #[error("SM_ERR_207: Mismatch in number of participants: input has {input}, output has {output}")]
    SizeMismatch { input: usize, output: usize },

    // =================================================================
    // Verification Errors (3xx)
    // =================================================================
    /// Not every participant is matched.
    #[error("SM_ERR_300: Incomplete matching: expected {expected} pairs, got {actual}")]
    IncompleteMatching { expected: usize, actual: usize },

    /// The matching is not a bijection over `1..=n`.
    #[error("SM_ERR_301: Not a valid bijection: {reason}")]
    NotABijection { reason: String },

    // =================================================================
    // Matcher Errors (4xx)
    // =================================================================
    /// A cheaply checked precondition of the matcher does not hold.
    #[error("SM_ERR_400: Matcher invariant violated: {reason}")]
    InvariantViolation { reason: String },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SM_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration or usage error.
    #[error("SM_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error (missing file, unreadable directory, ...).
    #[error("SM_ERR_903: I/O error: {0}")]
    Io(String),
}

impl StablematchError {
    /// `true` for errors raised while reading or validating an input file.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::SizeNotInteger { .. }
                | Self::NonPositiveSize { .. }
                | Self::WrongLineCount { .. }
                | Self::WrongListLength { .. }
                | Self::PreferenceNotInteger { .. }
                | Self::PreferenceOutOfRange { .. }
                | Self::DuplicatePreference { .. }
                | Self::WrongTableSize { .. }
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, StablematchError>;

// Conversion from std::io::Error
impl From<std::io::Error> for StablematchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StablematchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
