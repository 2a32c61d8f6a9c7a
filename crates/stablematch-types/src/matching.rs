//! Matching model: the hospital → student assignment.
//!
//! A [`Matching`] is a list of [`Pair`]s kept sorted by hospital id. It is
//! not validated on construction. Externally supplied matchings may be
//! incomplete or contain repeated agents; the verifier rejects those with
//! a typed error instead of trusting the shape.

use serde::{Deserialize, Serialize};

use crate::{HospitalId, StudentId};

/// A single hospital–student assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Pair {
    pub hospital: HospitalId,
    pub student: StudentId,
}

impl Pair {
    #[must_use]
    pub fn new(hospital: HospitalId, student: StudentId) -> Self {
        Self { hospital, student }
    }
}

/// Assignment of hospitals to students for an instance of size `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matching {
    /// Number of agents on each side of the instance this matching is for.
    pub n: usize,
    /// Pairs ordered by hospital id (stable for repeated hospitals).
    pairs: Vec<Pair>,
}

impl Matching {
    /// Build a matching, ordering the pairs by hospital id.
    #[must_use]
    pub fn new(n: usize, mut pairs: Vec<Pair>) -> Self {
        pairs.sort_by_key(|p| p.hospital);
        Self { n, pairs }
    }

    /// Build a matching from raw 1-indexed `(hospital, student)` tuples.
    #[must_use]
    pub fn from_raw(n: usize, pairs: &[(usize, usize)]) -> Self {
        Self::new(
            n,
            pairs
                .iter()
                .map(|&(h, s)| Pair::new(HospitalId(h), StudentId(s)))
                .collect(),
        )
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `true` when every hospital has a pair. Does not check bijectivity.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pairs.len() == self.n
    }

    /// Pairs in ascending hospital order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Student assigned to `hospital`, if any (first pair wins).
    #[must_use]
    pub fn student_of(&self, hospital: HospitalId) -> Option<StudentId> {
        let idx = self.pairs.partition_point(|p| p.hospital < hospital);
        self.pairs
            .get(idx)
            .filter(|p| p.hospital == hospital)
            .map(|p| p.student)
    }

    /// Hospital assigned to `student`, if any (first pair wins).
    #[must_use]
    pub fn hospital_of(&self, student: StudentId) -> Option<HospitalId> {
        self.pairs
            .iter()
            .find(|p| p.student == student)
            .map(|p| p.hospital)
    }
}

impl<'a> IntoIterator for &'a Matching {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
