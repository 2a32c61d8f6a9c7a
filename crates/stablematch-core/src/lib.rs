//! # stablematch-core
//!
//! **Pure deterministic stable matching for stablematch.**
//!
//! The core is the compute plane: it takes a validated [`Instance`] and
//! either produces the hospital-optimal stable matching or checks a given
//! matching for blocking pairs. It has:
//!
//! - **Zero side effects**: no file access, no printing, no global state
//! - **Deterministic output**: same input -> same matching, proposal count and root
//! - **Fail-fast checks**: malformed tables surface as typed errors, never panics
//!
//! [`Instance`]: stablematch_types::Instance

pub mod determinism;
pub mod matcher;
pub mod rank;
pub mod verifier;

pub use determinism::{
    compute_instance_root, compute_matching_root, root_hex, verify_matching_root,
};
pub use matcher::{gale_shapley, match_instance};
pub use rank::RankIndex;
pub use verifier::{blocking_pairs, verify_matching};
