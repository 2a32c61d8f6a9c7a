//! Pure deterministic deferred-acceptance matcher.
//!
//! Hospitals propose, students hold on to the best offer seen so far:
//!
//! ```text
//! match_instance(Instance) -> MatchOutcome { matching, proposals }
//! ```
//!
//! ## Proposal order
//!
//! Free hospitals wait in a FIFO queue seeded with every hospital in
//! ascending id order. The order only affects the sequence of proposals;
//! the resulting matching is the unique hospital-optimal stable matching
//! regardless of how free hospitals are scheduled.

use std::collections::VecDeque;

use stablematch_types::{
    AgentId, HospitalId, HospitalPreferences, Instance, MatchOutcome, Matching, Pair, Result,
    Side, StablematchError, StudentId, StudentPreferences,
};

use crate::rank::{RankIndex, agent_slot, check_permutations};

/// Run hospital-proposing deferred acceptance on a complete instance.
pub fn match_instance(instance: &Instance) -> Result<MatchOutcome> {
    gale_shapley(instance.n, &instance.hospitals, &instance.students)
}

/// Hospital-proposing deferred acceptance.
///
/// ## Algorithm
///
/// 1. Build the students' rank index for O(1) comparisons
/// 2. Dequeue a free hospital; it proposes to the next student on its list
/// 3. A free student accepts; a held student keeps the better of the two
/// 4. The rejected hospital re-enters the queue unless its list is exhausted
/// 5. Stop when no free hospital is left
///
/// Every proposal is counted, including the ones rejected immediately, so
/// `proposals <= n * n`.
///
/// ## Errors
///
/// Fails fast, before any proposal is made, if `n == 0` or either table is
/// not `n` permutations of `1..=n` (wrong shape, out-of-range id, repeated id).
pub fn gale_shapley(
    n: usize,
    hospitals: &HospitalPreferences,
    students: &StudentPreferences,
) -> Result<MatchOutcome> {
    if n == 0 {
        return Err(StablematchError::InvariantViolation {
            reason: "instance size must be at least 1".to_string(),
        });
    }
    check_permutations(n, hospitals)?;
    let student_rank = RankIndex::build(n, students)?;

    // Slots are 0-based; ids are converted back when emitting pairs.
    let mut hospital_match: Vec<Option<usize>> = vec![None; n];
    let mut student_match: Vec<Option<usize>> = vec![None; n];
    let mut next_proposal: Vec<usize> = vec![0; n];
    let mut free: VecDeque<usize> = (0..n).collect();
    let mut proposals: u64 = 0;

    while let Some(h) = free.pop_front() {
        let Some(&student) = hospitals.lists()[h].get(next_proposal[h]) else {
            tracing::warn!(
                hospital = h + 1,
                "Hospital exhausted its preference list and stays unmatched"
            );
            continue;
        };
        next_proposal[h] += 1;
        proposals += 1;

        let s = agent_slot(student, n, Side::Hospital, h)?;

        match student_match[s] {
            None => {
                hospital_match[h] = Some(s);
                student_match[s] = Some(h);
            }
            Some(current) => {
                if student_rank.rank_at(s, h) < student_rank.rank_at(s, current) {
                    hospital_match[h] = Some(s);
                    student_match[s] = Some(h);
                    hospital_match[current] = None;
                    tracing::trace!(
                        student = s + 1,
                        accepted = h + 1,
                        displaced = current + 1,
                        "Student traded up"
                    );
                    if next_proposal[current] < n {
                        free.push_back(current);
                    }
                } else if next_proposal[h] < n {
                    free.push_back(h);
                }
            }
        }
    }

    let pairs: Vec<Pair> = hospital_match
        .iter()
        .enumerate()
        .filter_map(|(h, s)| {
            s.map(|s| Pair::new(HospitalId::from_index(h), StudentId::from_index(s)))
        })
        .collect();

    tracing::debug!(
        n,
        proposals,
        matched = pairs.len(),
        "Deferred acceptance complete"
    );

    Ok(MatchOutcome {
        matching: Matching::new(n, pairs),
        proposals,
    })
}

#[cfg(test)]
mod tests {
    use stablematch_types::*;

    use super::*;

    fn three() -> Instance {
        Instance::from_raw(
            3,
            vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
            vec![vec![1, 2, 3], vec![2, 1, 3], vec![1, 2, 3]],
        )
    }

    fn raw_pairs(m: &Matching) -> Vec<(usize, usize)> {
        m.iter().map(|p| (p.hospital.0, p.student.0)).collect()
    }

    #[test]
    fn three_agent_fixed_point() {
        let outcome = match_instance(&three()).unwrap();
        assert_eq!(raw_pairs(&outcome.matching), vec![(1, 2), (2, 1), (3, 3)]);
        // H1->S2, H2->S1, H3->S1 (rejected), H3->S2 (rejected), H3->S3
        assert_eq!(outcome.proposals, 5);
        assert!(outcome.matching.is_complete());
    }

    #[test]
    fn single_agent() {
        let inst = Instance::from_raw(1, vec![vec![1]], vec![vec![1]]);
        let outcome = match_instance(&inst).unwrap();
        assert_eq!(raw_pairs(&outcome.matching), vec![(1, 1)]);
        assert_eq!(outcome.proposals, 1);
    }

    #[test]
    fn identical_lists_worst_case() {
        // Everyone agrees on the ranking: hospital k is rejected k-1 times.
        let n = 4;
        let list: Vec<usize> = (1..=n).collect();
        let inst = Instance::from_raw(n, vec![list.clone(); n], vec![list; n]);
        let outcome = match_instance(&inst).unwrap();
        assert_eq!(
            raw_pairs(&outcome.matching),
            vec![(1, 1), (2, 2), (3, 3), (4, 4)]
        );
        assert_eq!(outcome.proposals, 10);
    }

    #[test]
    fn displaced_hospital_moves_on() {
        // S1 prefers H2; H1 is displaced and takes S2.
        let inst = Instance::from_raw(
            2,
            vec![vec![1, 2], vec![1, 2]],
            vec![vec![2, 1], vec![1, 2]],
        );
        let outcome = match_instance(&inst).unwrap();
        assert_eq!(raw_pairs(&outcome.matching), vec![(1, 2), (2, 1)]);
        assert_eq!(outcome.proposals, 3);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let inst = three();
        let a = match_instance(&inst).unwrap();
        let b = match_instance(&inst).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_size_fails_fast() {
        let inst = Instance::from_raw(0, vec![], vec![]);
        let err = match_instance(&inst).unwrap_err();
        assert!(matches!(err, StablematchError::InvariantViolation { .. }));
    }

    #[test]
    fn short_hospital_list_fails_fast() {
        let inst = Instance::from_raw(2, vec![vec![1, 2], vec![1]], vec![vec![1, 2], vec![1, 2]]);
        let err = match_instance(&inst).unwrap_err();
        assert_eq!(
            err,
            StablematchError::WrongListLength {
                side: Side::Hospital,
                agent: 2,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn out_of_range_hospital_entry_fails() {
        let inst = Instance::from_raw(2, vec![vec![5, 1], vec![1, 2]], vec![vec![1, 2], vec![1, 2]]);
        let err = match_instance(&inst).unwrap_err();
        assert!(matches!(
            err,
            StablematchError::PreferenceOutOfRange {
                side: Side::Hospital,
                agent: 1,
                value: 5,
                n: 2,
            }
        ));
    }

    #[test]
    fn duplicate_hospital_entry_fails() {
        let inst = Instance::from_raw(2, vec![vec![1, 1], vec![1, 2]], vec![vec![2, 1], vec![1, 2]]);
        let err = match_instance(&inst).unwrap_err();
        assert_eq!(
            err,
            StablematchError::DuplicatePreference {
                side: Side::Hospital,
                agent: 1,
                value: 1,
            }
        );
    }

    #[test]
    fn out_of_range_tail_entry_fails() {
        // Hospital 1 is accepted by student 1 before it would reach 9.
        let inst = Instance::from_raw(2, vec![vec![1, 9], vec![2, 1]], vec![vec![1, 2], vec![1, 2]]);
        let err = match_instance(&inst).unwrap_err();
        assert!(matches!(
            err,
            StablematchError::PreferenceOutOfRange {
                side: Side::Hospital,
                agent: 1,
                value: 9,
                n: 2,
            }
        ));
    }

    #[test]
    fn duplicate_student_entry_fails() {
        let inst = Instance::from_raw(2, vec![vec![1, 2], vec![1, 2]], vec![vec![2, 2], vec![1, 2]]);
        let err = match_instance(&inst).unwrap_err();
        assert!(matches!(
            err,
            StablematchError::DuplicatePreference {
                side: Side::Student,
                ..
            }
        ));
    }

    #[test]
    fn gale_shapley_matches_instance_wrapper() {
        let inst = three();
        let direct = gale_shapley(inst.n, &inst.hospitals, &inst.students).unwrap();
        assert_eq!(direct, match_instance(&inst).unwrap());
    }
}
