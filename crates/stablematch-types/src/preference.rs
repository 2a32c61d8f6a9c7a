//! Preference tables and the [`Instance`] they form.
//!
//! A [`PreferenceTable<A>`] holds one ranking per agent of the *owning*
//! side; each ranking lists agents of the other side (`A`), most preferred
//! first. Hospitals rank students ([`HospitalPreferences`]) and students
//! rank hospitals ([`StudentPreferences`]).
//!
//! Tables built here are not validated. The input validator in
//! `stablematch-io` checks the permutation property before an
//! [`Instance`] reaches the matcher or verifier.

use serde::{Deserialize, Serialize};

use crate::{AgentId, HospitalId, Side, StudentId};

/// One strict ranking per agent of the owning side.
///
/// `lists[i]` belongs to the agent with 1-indexed id `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceTable<A> {
    lists: Vec<Vec<A>>,
}

/// Hospitals' rankings of students.
pub type HospitalPreferences = PreferenceTable<StudentId>;

/// Students' rankings of hospitals.
pub type StudentPreferences = PreferenceTable<HospitalId>;

impl<A: AgentId> PreferenceTable<A> {
    #[must_use]
    pub fn new(lists: Vec<Vec<A>>) -> Self {
        Self { lists }
    }

    /// Build a table from raw 1-indexed integers.
    #[must_use]
    pub fn from_raw(lists: Vec<Vec<usize>>) -> Self {
        Self {
            lists: lists
                .into_iter()
                .map(|list| list.into_iter().map(A::from_raw).collect())
                .collect(),
        }
    }

    /// The side whose agents own these rankings.
    #[must_use]
    pub fn owner(&self) -> Side {
        A::SIDE.other()
    }

    /// Number of rankings (agents on the owning side).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Ranking of the agent at 0-based slot `index`.
    #[must_use]
    pub fn list(&self, index: usize) -> Option<&[A]> {
        self.lists.get(index).map(Vec::as_slice)
    }

    /// All rankings in agent-id order.
    #[must_use]
    pub fn lists(&self) -> &[Vec<A>] {
        &self.lists
    }

    /// Iterate `(slot, ranking)` in agent-id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[A])> {
        self.lists.iter().enumerate().map(|(i, l)| (i, l.as_slice()))
    }
}

// ---------------------------------------------------------------------------
// Instance
// ---------------------------------------------------------------------------

/// A complete two-sided problem: `n` hospitals, `n` students, and both
/// preference tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instance {
    /// Number of agents on each side.
    pub n: usize,
    /// Hospital `i + 1` ranks students as `hospitals.lists()[i]`.
    pub hospitals: HospitalPreferences,
    /// Student `i + 1` ranks hospitals as `students.lists()[i]`.
    pub students: StudentPreferences,
}

impl Instance {
    #[must_use]
    pub fn new(n: usize, hospitals: HospitalPreferences, students: StudentPreferences) -> Self {
        Self {
            n,
            hospitals,
            students,
        }
    }

    /// Build an instance from raw 1-indexed integer lists.
    #[must_use]
    pub fn from_raw(n: usize, hospitals: Vec<Vec<usize>>, students: Vec<Vec<usize>>) -> Self {
        Self::new(
            n,
            PreferenceTable::from_raw(hospitals),
            PreferenceTable::from_raw(students),
        )
    }

    /// Ranking of hospital `h`, most preferred student first.
    #[must_use]
    pub fn hospital_list(&self, h: HospitalId) -> Option<&[StudentId]> {
        self.hospitals.list(h.index()?)
    }

    /// Ranking of student `s`, most preferred hospital first.
    #[must_use]
    pub fn student_list(&self, s: StudentId) -> Option<&[HospitalId]> {
        self.students.list(s.index()?)
    }

    /// Random instance with every list an independent uniform permutation.
    #[cfg(feature = "test-helpers")]
    pub fn random<R: rand::Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        use rand::seq::SliceRandom;

        let table = |rng: &mut R| -> Vec<Vec<usize>> {
            (0..n)
                .map(|_| {
                    let mut list: Vec<usize> = (1..=n).collect();
                    list.shuffle(rng);
                    list
                })
                .collect()
        };
        let hospitals = table(&mut *rng);
        let students = table(&mut *rng);
        Self::from_raw(n, hospitals, students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Instance {
        Instance::from_raw(
            3,
            vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
            vec![vec![1, 2, 3], vec![2, 1, 3], vec![1, 2, 3]],
        )
    }

    #[test]
    fn owner_side() {
        let inst = three();
        assert_eq!(inst.hospitals.owner(), Side::Hospital);
        assert_eq!(inst.students.owner(), Side::Student);
    }

    #[test]
    fn list_lookup_is_one_indexed() {
        let inst = three();
        assert_eq!(
            inst.hospital_list(HospitalId(1)).unwrap(),
            &[StudentId(2), StudentId(1), StudentId(3)]
        );
        assert_eq!(
            inst.student_list(StudentId(2)).unwrap()[0],
            HospitalId(2)
        );
        assert!(inst.hospital_list(HospitalId(0)).is_none());
        assert!(inst.hospital_list(HospitalId(4)).is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let inst = three();
        let json = serde_json::to_string(&inst).unwrap();
        assert!(json.contains("[[2,1,3],[1,2,3],[1,2,3]]"), "Got: {json}");
        let back: Instance = serde_json::from_str(&json).unwrap();
        assert_eq!(inst, back);
    }
}
