//! Stability verifier: exhaustive blocking-pair search.
//!
//! Works on any matching, computed or loaded from a file. The checks run
//! in a fixed order:
//!
//! 1. **Completeness**: exactly `n` pairs, otherwise `SM_ERR_300`
//! 2. **Bijection**: every id in range, no hospital or student repeated,
//!    otherwise `SM_ERR_301`
//! 3. **Stability**: blocking-pair scan, reported as a [`Verdict`]
//!
//! ## Scan order
//!
//! Hospitals are visited in ascending id order. For hospital `h` matched
//! to `s`, every student `s'` that `h` ranks above `s` is examined in `h`'s
//! list order; `s'` blocks with `h` if `h` appears in `s'`'s list before
//! `s'`'s current hospital. [`verify_matching`] stops at the first such
//! pair, so the reported witness is fully determined by this order.

use std::ops::ControlFlow;

use stablematch_types::{
    AgentId, BlockingPair, HospitalId, Instance, Matching, Result, Side, StablematchError,
    StudentId, Verdict,
};

use crate::rank::{agent_slot, check_permutations};

/// Decide whether `matching` is a complete, stable matching for `instance`.
///
/// Returns `Ok(Verdict::Unstable { .. })` with the first blocking pair in
/// scan order. Incomplete or non-bijective matchings are errors.
pub fn verify_matching(instance: &Instance, matching: &Matching) -> Result<Verdict> {
    let assignment = Assignment::build(instance, matching)?;

    let mut verdict = Verdict::Stable;
    scan_blocking_pairs(instance, &assignment, |witness| {
        verdict = Verdict::Unstable { witness };
        ControlFlow::Break(())
    })?;

    match verdict {
        Verdict::Stable => tracing::debug!(n = instance.n, "Matching is stable"),
        Verdict::Unstable { witness } => tracing::warn!(
            hospital = witness.hospital.0,
            student = witness.student.0,
            "Blocking pair found"
        ),
    }
    Ok(verdict)
}

/// Every blocking pair of `matching`, in scan order.
///
/// The first element, if any, is the witness [`verify_matching`] reports.
pub fn blocking_pairs(instance: &Instance, matching: &Matching) -> Result<Vec<BlockingPair>> {
    let assignment = Assignment::build(instance, matching)?;

    let mut found = Vec::new();
    scan_blocking_pairs(instance, &assignment, |pair| {
        found.push(pair);
        ControlFlow::Continue(())
    })?;

    tracing::debug!(
        n = instance.n,
        blocking = found.len(),
        "Blocking pair enumeration complete"
    );
    Ok(found)
}

/// Inverse lookup tables of a complete bijective matching, 0-based.
#[derive(Debug)]
struct Assignment {
    hospital_to_student: Vec<usize>,
    student_to_hospital: Vec<usize>,
}

impl Assignment {
    fn build(instance: &Instance, matching: &Matching) -> Result<Self> {
        let n = instance.n;
        if matching.n != n {
            return Err(StablematchError::SizeMismatch {
                input: n,
                output: matching.n,
            });
        }
        if matching.len() != n {
            return Err(StablematchError::IncompleteMatching {
                expected: n,
                actual: matching.len(),
            });
        }
        check_permutations(n, &instance.hospitals)?;
        check_permutations(n, &instance.students)?;

        let mut hospital_to_student: Vec<Option<usize>> = vec![None; n];
        let mut student_to_hospital: Vec<Option<usize>> = vec![None; n];
        for pair in matching {
            let h = bijection_slot(pair.hospital, n)?;
            let s = bijection_slot(pair.student, n)?;
            if hospital_to_student[h].is_some() {
                return Err(StablematchError::NotABijection {
                    reason: format!("hospital {} is matched more than once", pair.hospital),
                });
            }
            if student_to_hospital[s].is_some() {
                return Err(StablematchError::NotABijection {
                    reason: format!("student {} is matched more than once", pair.student),
                });
            }
            hospital_to_student[h] = Some(s);
            student_to_hospital[s] = Some(h);
        }

        // n distinct in-range hospitals over n slots: every slot is filled.
        Ok(Self {
            hospital_to_student: fill(hospital_to_student, Side::Hospital)?,
            student_to_hospital: fill(student_to_hospital, Side::Student)?,
        })
    }
}

fn bijection_slot<A: AgentId>(agent: A, n: usize) -> Result<usize> {
    match agent.index() {
        Some(slot) if slot < n => Ok(slot),
        _ => Err(StablematchError::NotABijection {
            reason: format!("{} {agent} is out of range 1..{n}", A::SIDE),
        }),
    }
}

fn fill(slots: Vec<Option<usize>>, side: Side) -> Result<Vec<usize>> {
    slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            slot.ok_or_else(|| StablematchError::NotABijection {
                reason: format!("{side} {} is unmatched", i + 1),
            })
        })
        .collect()
}

/// Walk the blocking pairs of a bijective matching in scan order.
fn scan_blocking_pairs<F>(instance: &Instance, assignment: &Assignment, mut visit: F) -> Result<()>
where
    F: FnMut(BlockingPair) -> ControlFlow<()>,
{
    let n = instance.n;
    for (h, list) in instance.hospitals.iter() {
        let current = assignment.hospital_to_student[h];

        for &candidate in list {
            let s = agent_slot(candidate, n, Side::Hospital, h)?;
            // Everything from the current partner onward is less preferred.
            if s == current {
                break;
            }

            let rival = assignment.student_to_hospital[s];
            for &pref in &instance.students.lists()[s] {
                let p = agent_slot(pref, n, Side::Student, s)?;
                if p == rival {
                    break;
                }
                if p == h {
                    let pair = BlockingPair::new(HospitalId::from_index(h), StudentId::from_index(s));
                    if visit(pair).is_break() {
                        return Ok(());
                    }
                    break;
                }
            }
        }
    }
    Ok(())
}
