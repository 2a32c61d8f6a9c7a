//! Determinism digests for matchings and instances.
//!
//! Two runs on the same instance must produce the same matching. The
//! `matching_root` is a SHA-256 commitment over the ordered pairs that lets
//! drivers and tests compare results without diffing full payloads.

use sha2::{Digest, Sha256};
use stablematch_types::{Instance, Matching};

/// Compute the matching root hash.
///
/// Commits to `n`, the number of pairs, and every `(hospital, student)`
/// pair in ascending hospital order.
#[must_use]
pub fn compute_matching_root(matching: &Matching) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"stablematch:matching_root:v1:");
    hasher.update((matching.n as u64).to_le_bytes());
    hasher.update((matching.len() as u64).to_le_bytes());

    for pair in matching {
        hasher.update((pair.hospital.0 as u64).to_le_bytes());
        hasher.update((pair.student.0 as u64).to_le_bytes());
    }

    hasher.finalize().into()
}

/// Verify that a matching hashes to the expected root.
#[must_use]
pub fn verify_matching_root(matching: &Matching, expected_root: &[u8; 32]) -> bool {
    compute_matching_root(matching) == *expected_root
}

/// Compute the input hash of an instance (both tables, row by row).
#[must_use]
pub fn compute_instance_root(instance: &Instance) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"stablematch:instance_root:v1:");
    hasher.update((instance.n as u64).to_le_bytes());

    for list in instance.hospitals.lists() {
        hasher.update((list.len() as u64).to_le_bytes());
        for student in list {
            hasher.update((student.0 as u64).to_le_bytes());
        }
    }
    for list in instance.students.lists() {
        hasher.update((list.len() as u64).to_le_bytes());
        for hospital in list {
            hasher.update((hospital.0 as u64).to_le_bytes());
        }
    }

    hasher.finalize().into()
}

/// Hex form of a root, as written to logs and reports.
#[must_use]
pub fn root_hex(root: &[u8; 32]) -> String {
    hex::encode(root)
}
