//! Descriptive statistics over record attributes
//!
//! All functions are pure and reject empty input with `StatsError::EmptyInput`
//! instead of dividing by zero or indexing past the end.

use std::collections::BTreeMap;

use super::types::{StatsError, StatsResult};
use crate::catalog::ComicRecord;

/// Summarize the attribute selected by `field` across `records`
pub fn compute_stats<F>(records: &[ComicRecord], field: F) -> Result<StatsResult, StatsError>
where
    F: Fn(&ComicRecord) -> u32,
{
    let values: Vec<u32> = records.iter().map(field).collect();
    summarize(&values)
}

/// Summarize an already extracted list of values
pub fn summarize(values: &[u32]) -> Result<StatsResult, StatsError> {
    Ok(StatsResult {
        total: values.len(),
        average: mean(values)?,
        median: median(values)?,
        modes: modes(values)?,
    })
}

pub fn mean(values: &[u32]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Ok(sum as f64 / values.len() as f64)
}

/// Middle value, or the mean of the two middle values for even counts
pub fn median(values: &[u32]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(f64::from(sorted[mid]))
    } else {
        Ok((f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0)
    }
}

/// All values sharing the highest frequency, in ascending order
pub fn modes(values: &[u32]) -> Result<Vec<u32>, StatsError> {
    let mut frequency: BTreeMap<u32, usize> = BTreeMap::new();
    for &v in values {
        *frequency.entry(v).or_insert(0) += 1;
    }

    let max_freq = frequency
        .values()
        .copied()
        .max()
        .ok_or(StatsError::EmptyInput)?;

    Ok(frequency
        .into_iter()
        .filter(|&(_, count)| count == max_freq)
        .map(|(value, _)| value)
        .collect())
}
