//! Agent identifiers used throughout stablematch.
//!
//! Hospitals and students share the integer range `1..=n` but live in
//! distinct namespaces, so each side gets its own newtype. Ids are
//! 1-indexed everywhere they cross a crate boundary; [`AgentId::index`]
//! converts to the 0-based slot used by internal tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Common behaviour of [`HospitalId`] and [`StudentId`].
pub trait AgentId: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// The side this id belongs to.
    const SIDE: Side;

    /// Wrap a raw 1-indexed id.
    fn from_raw(raw: usize) -> Self;

    /// The raw 1-indexed id.
    fn get(self) -> usize;

    /// Build the id for a 0-based table slot.
    #[must_use]
    fn from_index(index: usize) -> Self {
        Self::from_raw(index + 1)
    }

    /// 0-based slot, or `None` for the invalid id `0`.
    #[must_use]
    fn index(self) -> Option<usize> {
        self.get().checked_sub(1)
    }

    /// `true` if this id lies in `1..=n`.
    #[must_use]
    fn in_range(self, n: usize) -> bool {
        (1..=n).contains(&self.get())
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which group of agents a preference list or id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    Hospital,
    Student,
}

impl Side {
    /// The opposite group.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Hospital => Self::Student,
            Self::Student => Self::Hospital,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hospital => write!(f, "Hospital"),
            Self::Student => write!(f, "Student"),
        }
    }
}

// ---------------------------------------------------------------------------
// HospitalId
// ---------------------------------------------------------------------------

/// 1-indexed hospital identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HospitalId(pub usize);

impl AgentId for HospitalId {
    const SIDE: Side = Side::Hospital;

    fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for HospitalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// StudentId
// ---------------------------------------------------------------------------

/// 1-indexed student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub usize);

impl AgentId for StudentId {
    const SIDE: Side = Side::Student;

    fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
