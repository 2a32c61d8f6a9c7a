//! # stablematch-io
//!
//! **Ingress and egress for stablematch**: everything that touches files
//! before or after the core runs.
//!
//! ## Architecture
//!
//! The I/O layer sits between the CLI and the core:
//! 1. **reader**: parses preference input text into an [`Instance`]
//! 2. **validator**: hard gate, every table must be `n` permutations of `1..=n`
//! 3. **matching_file**: renders and parses the `n` + pairs matching layout
//! 4. **discovery**: locates `.in` files and derives `.out` paths
//!
//! ## Data Flow
//!
//! ```text
//! file -> parse_input() -> validate_instance() -> Instance -> core
//! core -> Matching -> format_matching() -> file -> parse_matching() -> core
//! ```
//!
//! Nothing malformed reaches the core: every defect is a typed
//! `StablematchError`.
//!
//! [`Instance`]: stablematch_types::Instance

pub mod discovery;
pub mod matching_file;
pub mod reader;
pub mod validator;

pub use discovery::{find_input_files, output_path_for, resolve_match_target};
pub use matching_file::{format_matching, parse_matching, read_matching, write_matching};
pub use reader::{parse_input, read_input};
pub use validator::{validate_instance, validate_table};
