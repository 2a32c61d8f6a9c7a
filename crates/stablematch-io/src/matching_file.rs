//! Matching file reader and writer.
//!
//! ## Format
//!
//! ```text
//! n
//! 1 <student of hospital 1>
//! ...
//! n <student of hospital n>
//! ```
//!
//! Pairs are written in ascending hospital order with no newline after the
//! last line. The reader accepts the same layout, ignoring blank lines, and
//! rejects anything that is not a bijection over `1..=n`.

use std::path::Path;

use stablematch_types::{
    AgentId, HospitalId, Matching, Pair, Result, Side, StablematchError, StudentId,
};

use crate::reader::content_lines;

/// Render a matching in the on-disk layout.
#[must_use]
pub fn format_matching(matching: &Matching) -> String {
    std::iter::once(matching.n.to_string())
        .chain(matching.iter().map(|p| format!("{} {}", p.hospital, p.student)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a matching file.
pub fn write_matching(path: impl AsRef<Path>, matching: &Matching) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, format_matching(matching))?;
    tracing::debug!(path = %path.display(), pairs = matching.len(), "Matching file written");
    Ok(())
}

/// Read and check a matching file.
pub fn read_matching(path: impl AsRef<Path>) -> Result<Matching> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let matching = parse_matching(&text)?;
    tracing::debug!(path = %path.display(), n = matching.n, "Matching file loaded");
    Ok(matching)
}

/// Parse matching text, enforcing range and uniqueness of every id.
pub fn parse_matching(text: &str) -> Result<Matching> {
    let lines = content_lines(text);
    let Some((first, rest)) = lines.split_first() else {
        return Err(StablematchError::EmptyMatchingFile);
    };

    let n = first
        .parse::<i64>()
        .ok()
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| StablematchError::InvalidMatchingSize {
            token: (*first).to_string(),
        })?;

    if rest.len() != n {
        return Err(StablematchError::WrongPairCount {
            expected: n,
            actual: rest.len(),
        });
    }

    let mut hospital_seen = vec![false; n];
    let mut student_seen = vec![false; n];
    let mut pairs = Vec::with_capacity(n);

    // Line numbers count non-blank lines, the size line being line 1.
    for (i, line) in rest.iter().enumerate() {
        let malformed = || StablematchError::MalformedPair {
            line: i + 2,
            content: (*line).to_string(),
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [h, s] = tokens.as_slice() else {
            return Err(malformed());
        };
        let h: i64 = h.parse().map_err(|_| malformed())?;
        let s: i64 = s.parse().map_err(|_| malformed())?;

        let h_slot = pair_slot(h, n, Side::Hospital)?;
        let s_slot = pair_slot(s, n, Side::Student)?;
        let hospital = HospitalId::from_index(h_slot);
        let student = StudentId::from_index(s_slot);

        if hospital_seen[h_slot] {
            return Err(StablematchError::DuplicateHospital(hospital));
        }
        if student_seen[s_slot] {
            return Err(StablematchError::DuplicateStudent(student));
        }
        hospital_seen[h_slot] = true;
        student_seen[s_slot] = true;
        pairs.push(Pair::new(hospital, student));
    }

    Ok(Matching::new(n, pairs))
}

fn pair_slot(value: i64, n: usize, side: Side) -> Result<usize> {
    match usize::try_from(value) {
        Ok(raw) if (1..=n).contains(&raw) => Ok(raw - 1),
        _ => Err(StablematchError::PairOutOfRange { side, value, n }),
    }
}
