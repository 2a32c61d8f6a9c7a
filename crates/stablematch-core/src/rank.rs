//! Rank index: O(1) "who does this agent prefer" lookups.
//!
//! For an owner at slot `i` and an opposite-side agent `a`, the index
//! stores the position of `a` in the owner's preference list
//! (0 = most preferred). Built once per matcher invocation from a
//! [`PreferenceTable`] and never mutated afterwards.
//!
//! The builder rejects tables that are not `n` permutations of `1..=n`.
//! The same check is shared with the matcher (hospital table) and the
//! verifier (both tables) through `check_permutations`.

use std::marker::PhantomData;

use stablematch_types::{AgentId, PreferenceTable, Result, Side, StablematchError};

/// Placeholder for a slot not yet filled during construction.
const UNRANKED: usize = usize::MAX;

/// Flattened `n × n` table of preference positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankIndex<A> {
    n: usize,
    ranks: Vec<usize>,
    _agent: PhantomData<A>,
}

impl<A: AgentId> RankIndex<A> {
    /// Build the index, rejecting tables that are not `n` permutations of `1..=n`.
    pub fn build(n: usize, table: &PreferenceTable<A>) -> Result<Self> {
        check_table_shape(n, table)?;

        let owner = table.owner();
        let mut ranks = vec![UNRANKED; n * n];
        for (i, list) in table.iter() {
            let row = &mut ranks[i * n..(i + 1) * n];
            for (position, &agent) in list.iter().enumerate() {
                let slot = agent_slot(agent, n, owner, i)?;
                if row[slot] != UNRANKED {
                    return Err(StablematchError::DuplicatePreference {
                        side: owner,
                        agent: i + 1,
                        value: agent.get(),
                    });
                }
                row[slot] = position;
            }
        }

        Ok(Self {
            n,
            ranks,
            _agent: PhantomData,
        })
    }

    /// Number of agents per side.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Position of `other` in the list of the owner at slot `owner`.
    #[must_use]
    pub fn rank(&self, owner: usize, other: A) -> Option<usize> {
        if owner >= self.n || !other.in_range(self.n) {
            return None;
        }
        let slot = other.index()?;
        Some(self.rank_at(owner, slot))
    }

    /// `Some(true)` if the owner at slot `owner` strictly prefers `a` to `b`.
    #[must_use]
    pub fn prefers(&self, owner: usize, a: A, b: A) -> Option<bool> {
        Some(self.rank(owner, a)? < self.rank(owner, b)?)
    }

    /// Rank lookup by 0-based slots. Both slots must be `< n`.
    pub(crate) fn rank_at(&self, owner: usize, other: usize) -> usize {
        self.ranks[owner * self.n + other]
    }
}

/// Check that `table` holds exactly `n` lists of exactly `n` entries.
fn check_table_shape<A: AgentId>(n: usize, table: &PreferenceTable<A>) -> Result<()> {
    let owner = table.owner();
    if table.len() != n {
        return Err(StablematchError::WrongTableSize {
            side: owner,
            expected: n,
            actual: table.len(),
        });
    }
    for (i, list) in table.iter() {
        if list.len() != n {
            return Err(StablematchError::WrongListLength {
                side: owner,
                agent: i + 1,
                expected: n,
                actual: list.len(),
            });
        }
    }
    Ok(())
}

/// Check that `table` holds `n` permutations of `1..=n`.
pub(crate) fn check_permutations<A: AgentId>(n: usize, table: &PreferenceTable<A>) -> Result<()> {
    check_table_shape(n, table)?;

    let owner = table.owner();
    let mut seen = vec![false; n];
    for (i, list) in table.iter() {
        seen.fill(false);
        for &agent in list {
            let slot = agent_slot(agent, n, owner, i)?;
            if seen[slot] {
                return Err(StablematchError::DuplicatePreference {
                    side: owner,
                    agent: i + 1,
                    value: agent.get(),
                });
            }
            seen[slot] = true;
        }
    }
    Ok(())
}

/// 0-based slot of `agent`, or a range error naming the list it came from.
pub(crate) fn agent_slot<A: AgentId>(
    agent: A,
    n: usize,
    owner: Side,
    owner_index: usize,
) -> Result<usize> {
    match agent.index() {
        Some(slot) if slot < n => Ok(slot),
        _ => Err(StablematchError::PreferenceOutOfRange {
            side: owner,
            agent: owner_index + 1,
            value: i64::try_from(agent.get()).unwrap_or(i64::MAX),
            n,
        }),
    }
}
