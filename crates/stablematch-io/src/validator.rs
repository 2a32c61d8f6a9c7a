//! Preference validator: hard gate in front of the matcher and verifier.
//!
//! Every instance that enters the core goes through [`validate_instance`],
//! whether it was parsed from a file or built in code. It enforces the
//! permutation invariant the core assumes:
//!
//! - both tables hold exactly `n` lists
//! - every list ranks exactly `n` agents
//! - every ranked id lies in `1..=n`
//! - no list ranks the same agent twice
//!
//! The first defect found is returned; nothing is coerced or repaired.

use stablematch_types::{AgentId, Instance, PreferenceTable, Result, StablematchError};

/// Validate both preference tables of `instance`.
pub fn validate_instance(instance: &Instance) -> Result<()> {
    if instance.n == 0 {
        return Err(StablematchError::NonPositiveSize { n: 0 });
    }
    validate_table(instance.n, &instance.hospitals)?;
    validate_table(instance.n, &instance.students)?;

    tracing::debug!(n = instance.n, "Preference tables validated");
    Ok(())
}

/// Validate that `table` is `n` permutations of `1..=n`.
pub fn validate_table<A: AgentId>(n: usize, table: &PreferenceTable<A>) -> Result<()> {
    let side = table.owner();
    if table.len() != n {
        return Err(StablematchError::WrongTableSize {
            side,
            expected: n,
            actual: table.len(),
        });
    }

    let mut seen = vec![false; n];
    for (i, list) in table.iter() {
        if list.len() != n {
            return Err(StablematchError::WrongListLength {
                side,
                agent: i + 1,
                expected: n,
                actual: list.len(),
            });
        }

        seen.fill(false);
        for &agent in list {
            let Some(slot) = agent.index().filter(|&slot| slot < n) else {
                return Err(StablematchError::PreferenceOutOfRange {
                    side,
                    agent: i + 1,
                    value: i64::try_from(agent.get()).unwrap_or(i64::MAX),
                    n,
                });
            };
            if seen[slot] {
                return Err(StablematchError::DuplicatePreference {
                    side,
                    agent: i + 1,
                    value: agent.get(),
                });
            }
            seen[slot] = true;
        }
    }
    Ok(())
}
