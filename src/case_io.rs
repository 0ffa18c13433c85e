use crate::engine::Verdict;
use crate::error::SpliceError;
use crate::genotype::{Genotype, GenotypeSet};
use serde::Serialize;
use std::io::{BufRead, Write};

/// Marker emitted when no genotype sequence reaches a fit state.
pub const IMPOSSIBLE: &str = "IMPOSSIBLE";

/// One case's answer, numbered from 1 in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub case: usize,
    pub answer: String,
}

impl CaseResult {
    pub fn new(case: usize, verdict: Verdict) -> Self {
        let answer = match verdict {
            Verdict::Fused(fused) => fused,
            Verdict::Impossible => IMPOSSIBLE.to_string(),
        };
        CaseResult { case, answer }
    }
}

/// Read every case from a line-oriented stream: a line holding the genotype
/// count, then that many two-token records, repeated until end of input.
/// Blank lines between cases are tolerated.
pub fn read_cases<R: BufRead>(reader: R) -> Result<Vec<GenotypeSet>, SpliceError> {
    let mut lines = reader.lines();
    let mut cases = Vec::new();
    while let Some(line) = lines.next() {
        let line = line?;
        let header = line.trim();
        if header.is_empty() {
            continue;
        }
        let count: usize = header.parse().map_err(|_| {
            SpliceError::Malformed(format!("expected a genotype count, got {:?}", header))
        })?;
        let mut genotypes = Vec::with_capacity(count);
        for _ in 0..count {
            let record = lines
                .next()
                .ok_or_else(|| SpliceError::Malformed("truncated case".to_string()))??;
            genotypes.push(Genotype::parse(&record)?);
        }
        cases.push(GenotypeSet::new(genotypes));
    }
    Ok(cases)
}

/// `Case N: answer`, one line per case.
pub fn write_results<W: Write>(mut out: W, results: &[CaseResult]) -> Result<(), SpliceError> {
    for result in results {
        writeln!(out, "Case {}: {}", result.case, result.answer)?;
    }
    Ok(())
}

/// One JSON object per line.
pub fn write_results_json<W: Write>(
    mut out: W,
    results: &[CaseResult],
) -> Result<(), SpliceError> {
    for result in results {
        let line = serde_json::to_string(result)
            .map_err(|e| SpliceError::Other(format!("serializing result: {}", e)))?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_single_case() {
        let input = "3\nefgh efgh\nd cd\nabc ab\n";
        let cases = read_cases(input.as_bytes()).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].len(), 3);
    }

    #[test]
    fn test_read_multiple_cases() {
        let input = "1\na a\n2\nb bb\ncc c\n";
        let cases = read_cases(input.as_bytes()).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].len(), 1);
        assert_eq!(cases[1].len(), 2);
    }

    #[test]
    fn test_read_tolerates_blank_lines_between_cases() {
        let input = "1\na a\n\n\n1\nb b\n";
        let cases = read_cases(input.as_bytes()).unwrap();
        assert_eq!(cases.len(), 2);
    }

    #[test]
    fn test_read_rejects_bad_count() {
        let err = read_cases("two\na a\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SpliceError::Malformed(_)));
    }

    #[test]
    fn test_read_rejects_truncated_case() {
        let err = read_cases("3\na a\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SpliceError::Malformed(_)));
    }

    #[test]
    fn test_read_rejects_malformed_record() {
        let err = read_cases("1\nonly_one_token\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SpliceError::Malformed(_)));
    }

    #[test]
    fn test_case_result_from_verdicts() {
        let fused = CaseResult::new(1, Verdict::Fused("abcd".to_string()));
        assert_eq!(fused.answer, "abcd");
        let impossible = CaseResult::new(2, Verdict::Impossible);
        assert_eq!(impossible.answer, IMPOSSIBLE);
    }

    #[test]
    fn test_write_plain_results() {
        let results = vec![
            CaseResult::new(1, Verdict::Fused("abcd".to_string())),
            CaseResult::new(2, Verdict::Impossible),
        ];
        let mut out = Vec::new();
        write_results(&mut out, &results).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Case 1: abcd\nCase 2: IMPOSSIBLE\n"
        );
    }

    #[test]
    fn test_write_json_results() {
        let results = vec![CaseResult::new(1, Verdict::Fused("abcd".to_string()))];
        let mut out = Vec::new();
        write_results_json(&mut out, &results).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"case\":1,\"answer\":\"abcd\"}\n"
        );
    }
}
