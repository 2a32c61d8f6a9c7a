//! Preference input reader.
//!
//! ## Format
//!
//! ```text
//! n
//! <hospital 1: n student ids>
//! ...
//! <hospital n>
//! <student 1: n hospital ids>
//! ...
//! <student n>
//! ```
//!
//! Blank lines are ignored and surrounding whitespace is trimmed. The
//! parsed instance is passed through [`validate_instance`] before it is
//! returned, so callers always receive full permutations.

use std::path::Path;

use stablematch_types::{
    AgentId, Instance, PreferenceTable, Result, Side, StablematchError,
};

use crate::validator::validate_instance;

/// Read and validate an input file.
pub fn read_input(path: impl AsRef<Path>) -> Result<Instance> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let instance = parse_input(&text)?;
    tracing::debug!(path = %path.display(), n = instance.n, "Input file loaded");
    Ok(instance)
}

/// Parse and validate input text.
pub fn parse_input(text: &str) -> Result<Instance> {
    let lines = content_lines(text);
    let Some((first, rest)) = lines.split_first() else {
        return Err(StablematchError::EmptyInput);
    };

    let n = parse_size(first)?;
    let expected = n
        .checked_mul(2)
        .ok_or_else(|| StablematchError::SizeNotInteger {
            token: (*first).to_string(),
        })?;
    if rest.len() != expected {
        return Err(StablematchError::WrongLineCount {
            expected,
            actual: rest.len(),
        });
    }

    let (hospital_lines, student_lines) = rest.split_at(n);
    let instance = Instance::new(
        n,
        parse_table(hospital_lines, n)?,
        parse_table(student_lines, n)?,
    );
    validate_instance(&instance)?;
    Ok(instance)
}

/// Non-blank lines, trimmed.
pub(crate) fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn parse_size(token: &str) -> Result<usize> {
    let n: i64 = token
        .parse()
        .map_err(|_| StablematchError::SizeNotInteger {
            token: token.to_string(),
        })?;
    if n <= 0 {
        return Err(StablematchError::NonPositiveSize { n });
    }
    usize::try_from(n).map_err(|_| StablematchError::SizeNotInteger {
        token: token.to_string(),
    })
}

fn parse_table<A: AgentId>(lines: &[&str], n: usize) -> Result<PreferenceTable<A>> {
    let side = A::SIDE.other();
    let lists = lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_list(line, n, side, i + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(PreferenceTable::new(lists))
}

fn parse_list<A: AgentId>(line: &str, n: usize, side: Side, agent: usize) -> Result<Vec<A>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != n {
        return Err(StablematchError::WrongListLength {
            side,
            agent,
            expected: n,
            actual: tokens.len(),
        });
    }

    tokens
        .into_iter()
        .map(|token| {
            let value: i64 = token
                .parse()
                .map_err(|_| StablematchError::PreferenceNotInteger {
                    side,
                    agent,
                    token: token.to_string(),
                })?;
            match usize::try_from(value) {
                Ok(raw) if (1..=n).contains(&raw) => Ok(A::from_raw(raw)),
                _ => Err(StablematchError::PreferenceOutOfRange {
                    side,
                    agent,
                    value,
                    n,
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use stablematch_types::*;

    use super::*;

    const THREE: &str = "3\n2 1 3\n1 2 3\n1 2 3\n1 2 3\n2 1 3\n1 2 3\n";

    #[test]
    fn parses_valid_input() {
        let inst = parse_input(THREE).unwrap();
        assert_eq!(inst.n, 3);
        assert_eq!(
            inst.hospital_list(HospitalId(1)).unwrap(),
            &[StudentId(2), StudentId(1), StudentId(3)]
        );
        assert_eq!(
            inst.student_list(StudentId(2)).unwrap(),
            &[HospitalId(2), HospitalId(1), HospitalId(3)]
        );
    }

    #[test]
    fn blank_lines_and_padding_are_ignored() {
        let text = "\n  3  \n\n2 1 3\n1 2 3\n  1 2 3\n\n1 2 3\n2 1 3\n1 2 3\n\n";
        assert_eq!(parse_input(text).unwrap(), parse_input(THREE).unwrap());
    }

    #[test]
    fn empty_file() {
        assert_eq!(parse_input("").unwrap_err(), StablematchError::EmptyInput);
        assert_eq!(parse_input("  \n\n").unwrap_err(), StablematchError::EmptyInput);
    }

    #[test]
    fn size_must_be_positive_integer() {
        assert!(matches!(
            parse_input("three\n").unwrap_err(),
            StablematchError::SizeNotInteger { .. }
        ));
        assert_eq!(
            parse_input("0\n").unwrap_err(),
            StablematchError::NonPositiveSize { n: 0 }
        );
        assert_eq!(
            parse_input("-2\n1\n").unwrap_err(),
            StablematchError::NonPositiveSize { n: -2 }
        );
    }

    #[test]
    fn wrong_line_count() {
        assert_eq!(
            parse_input("2\n1 2\n2 1\n1 2\n").unwrap_err(),
            StablematchError::WrongLineCount {
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn short_student_list() {
        assert_eq!(
            parse_input("2\n1 2\n2 1\n1 2\n1\n").unwrap_err(),
            StablematchError::WrongListLength {
                side: Side::Student,
                agent: 2,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn non_integer_preference() {
        assert_eq!(
            parse_input("2\n1 x\n2 1\n1 2\n1 2\n").unwrap_err(),
            StablematchError::PreferenceNotInteger {
                side: Side::Hospital,
                agent: 1,
                token: "x".to_string(),
            }
        );
    }

    #[test]
    fn out_of_range_preference() {
        assert_eq!(
            parse_input("2\n1 2\n2 1\n1 2\n-1 2\n").unwrap_err(),
            StablematchError::PreferenceOutOfRange {
                side: Side::Student,
                agent: 2,
                value: -1,
                n: 2,
            }
        );
    }

    #[test]
    fn duplicate_preference() {
        assert_eq!(
            parse_input("2\n1 1\n2 1\n1 2\n1 2\n").unwrap_err(),
            StablematchError::DuplicatePreference {
                side: Side::Hospital,
                agent: 1,
                value: 1,
            }
        );
    }

    #[test]
    fn single_agent() {
        let inst = parse_input("1\n1\n1").unwrap();
        assert_eq!(inst.n, 1);
    }
}
