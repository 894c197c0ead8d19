use serde::Serialize;
use thiserror::Error;

/// One species observation: a name and how many individuals were counted.
///
/// Duplicate names are deliberately kept as independent records; the indices
/// treat every record as its own group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub count: u64,
}

impl Record {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Record {
            name: name.into(),
            count,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("no species records to analyze")]
    EmptyDataset,
    #[error("all species counts are zero; diversity indices are undefined")]
    ZeroTotal,
}

/// The three diversity metrics plus the total they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversityIndices {
    pub shannon: f64,
    pub simpson: f64,
    pub richness: usize,
    pub total: u64,
}

pub fn total_count(records: &[Record]) -> u64 {
    records.iter().map(|r| r.count).sum()
}

/// Shannon diversity index: H = -sum(p * ln(p)).
///
/// Terms with p == 0 contribute nothing; the guard keeps a zero-count record
/// from ever reaching `ln(0)`.
pub fn shannon_index(records: &[Record], total: u64) -> f64 {
    let total = total as f64;
    records
        .iter()
        .map(|r| r.count as f64 / total)
        .filter(|&p| p > 0.0)
        .map(|p| -(p * p.ln()))
        .sum()
}

/// Simpson diversity index: D = sum(p^2), the probability that two randomly
/// drawn individuals belong to the same group.
pub fn simpson_index(records: &[Record], total: u64) -> f64 {
    let total = total as f64;
    records
        .iter()
        .map(|r| r.count as f64 / total)
        .map(|p| p * p)
        .sum()
}

/// Species richness: the number of records. Duplicate names count separately.
pub fn richness(records: &[Record]) -> usize {
    records.len()
}

/// Compute all three indices, rejecting the degenerate inputs for which they
/// are mathematically undefined instead of producing NaN.
pub fn compute_indices(records: &[Record]) -> Result<DiversityIndices, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let total = total_count(records);
    if total == 0 {
        return Err(StatsError::ZeroTotal);
    }

    Ok(DiversityIndices {
        shannon: shannon_index(records, total),
        simpson: simpson_index(records, total),
        richness: richness(records),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn records(data: &[(&str, u64)]) -> Vec<Record> {
        data.iter().map(|&(n, c)| Record::new(n, c)).collect()
    }

    #[test]
    fn two_equal_groups() {
        let recs = records(&[("A", 1), ("A", 1)]);
        let indices = compute_indices(&recs).unwrap();
        assert!((indices.shannon - 2.0_f64.ln()).abs() < EPSILON);
        assert!((indices.simpson - 0.5).abs() < EPSILON);
        assert_eq!(indices.richness, 2);
        assert_eq!(indices.total, 2);
    }

    #[test]
    fn single_group_has_no_diversity() {
        let recs = records(&[("A", 100)]);
        let indices = compute_indices(&recs).unwrap();
        assert_eq!(indices.shannon, 0.0);
        assert!((indices.simpson - 1.0).abs() < EPSILON);
        assert_eq!(indices.richness, 1);
    }

    #[test]
    fn zero_count_record_contributes_nothing() {
        let recs = records(&[("A", 0), ("B", 5)]);
        let indices = compute_indices(&recs).unwrap();
        assert_eq!(indices.shannon, 0.0);
        assert!((indices.simpson - 1.0).abs() < EPSILON);
        assert_eq!(indices.richness, 2);
        assert!(indices.shannon.is_finite());
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert_eq!(compute_indices(&[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn all_zero_counts_are_an_error() {
        let recs = records(&[("A", 0), ("B", 0)]);
        assert_eq!(compute_indices(&recs), Err(StatsError::ZeroTotal));
    }

    #[test]
    fn duplicate_names_are_independent_records() {
        let recs = records(&[("A", 2), ("A", 2), ("B", 4)]);
        let indices = compute_indices(&recs).unwrap();
        assert_eq!(indices.richness, 3);
        // Three groups of p = 1/4, 1/4, 1/2.
        assert!((indices.simpson - 0.375).abs() < EPSILON);
    }

    #[test]
    fn invariants_hold_for_uneven_input() {
        let recs = records(&[("A", 7), ("B", 1), ("C", 3), ("D", 19)]);
        let indices = compute_indices(&recs).unwrap();
        assert!(indices.shannon >= 0.0);
        assert!((0.0..=1.0).contains(&indices.simpson));
    }

    #[test]
    fn computation_is_idempotent() {
        let recs = records(&[("A", 3), ("B", 8), ("C", 2)]);
        let first = compute_indices(&recs).unwrap();
        let second = compute_indices(&recs).unwrap();
        assert_eq!(first, second);
    }
}
