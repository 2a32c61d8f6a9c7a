//! Results produced by the matcher and the verifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{HospitalId, Matching, StudentId};

/// Output of the deferred-acceptance matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The hospital-optimal stable matching.
    pub matching: Matching,
    /// Number of proposals made, including rejected ones. Diagnostic only.
    pub proposals: u64,
}

/// A hospital and student who both prefer each other over their current
/// partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BlockingPair {
    pub hospital: HospitalId,
    pub student: StudentId,
}

impl BlockingPair {
    #[must_use]
    pub fn new(hospital: HospitalId, student: StudentId) -> Self {
        Self { hospital, student }
    }
}

impl fmt::Display for BlockingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hospital {} and Student {}", self.hospital, self.student)
    }
}

/// Stability verdict for a complete, bijective matching.
///
/// Instability is a reported outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// No blocking pair exists.
    Stable,
    /// The first blocking pair found in scan order.
    Unstable { witness: BlockingPair },
}

impl Verdict {
    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }

    /// The witnessing blocking pair, if unstable.
    #[must_use]
    pub fn witness(&self) -> Option<BlockingPair> {
        match self {
            Self::Stable => None,
            Self::Unstable { witness } => Some(*witness),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "VALID STABLE"),
            Self::Unstable { witness } => {
                write!(f, "UNSTABLE: {witness} are a blocking pair")
            }
        }
    }
}
