//! # stablematch-types
//!
//! Shared types, errors, and configuration for **stablematch**.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`HospitalId`], [`StudentId`], the [`AgentId`] trait, [`Side`]
//! - **Preferences**: [`PreferenceTable`], [`HospitalPreferences`], [`StudentPreferences`], [`Instance`]
//! - **Matching model**: [`Matching`], [`Pair`]
//! - **Outcomes**: [`MatchOutcome`], [`Verdict`], [`BlockingPair`]
//! - **Configuration**: [`RunConfig`], [`RunMode`], [`LogFormat`]
//! - **Errors**: [`StablematchError`] with `SM_ERR_` prefix codes
//! - **Constants**: file conventions and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod matching;
pub mod outcome;
pub mod preference;

// Re-export all primary types at crate root for ergonomic imports:
//   use stablematch_types::{Instance, Matching, Verdict, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use matching::*;
pub use outcome::*;
pub use preference::*;

// Constants are accessed via `stablematch_types::constants::FOO`
// (not re-exported to avoid name collisions).
