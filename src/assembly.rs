// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::str::FromStr;

use itertools::Itertools;

use crate::errors::FastaStatError;
use crate::metrics::{
    gc_percentage, sequence_length, summarize, total_gc, total_length, GcCase, RecordSummary,
};
use crate::seq::record::RecordSet;

/// What `rank_metric()` reports about the pivot contig.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankMode {
    /// The pivot's length (N-value, eg N50).
    Length,
    /// The pivot's 1-based rank among contigs sorted by decreasing length (L-value, eg L50).
    Index,
}

impl FromStr for RankMode {
    type Err = FastaStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "length" => Ok(RankMode::Length),
            "l" | "f" | "index" => Ok(RankMode::Index),
            _ => Err(FastaStatError::InvalidArgument(format!(
                "Unknown statistic mode '{}', expected N or L (or F)",
                s
            ))),
        }
    }
}

/// N/L statistic at `percentile` (in (0, 100]).
///
/// Contig lengths are sorted in decreasing order (stable, so equal lengths keep file order)
/// and accumulated; the first contig whose running sum reaches `percentile`% of the total is
/// the pivot. Depending on `mode`, its length or its 1-based rank is returned.
pub fn rank_metric(
    records: &RecordSet,
    percentile: f64,
    mode: RankMode,
) -> Result<usize, FastaStatError> {
    if records.is_empty() {
        return Err(FastaStatError::InvalidArgument(String::from(
            "Cannot compute N/L values of an empty record set",
        )));
    }
    // NaN fails both comparisons, hence the negated form.
    if !(percentile > 0.0 && percentile <= 100.0) {
        return Err(FastaStatError::InvalidArgument(format!(
            "Percentile {} is outside (0, 100]",
            percentile
        )));
    }

    let lengths: Vec<usize> = records
        .sequences()
        .map(sequence_length)
        .sorted_by(|a, b| b.cmp(a))
        .collect();
    let total: usize = lengths.iter().sum();
    let threshold = total as f64 * (percentile / 100.0);

    let mut running = 0usize;
    for (rank, len) in lengths.iter().enumerate() {
        running += len;
        if running as f64 >= threshold {
            return Ok(match mode {
                RankMode::Length => *len,
                RankMode::Index => rank + 1,
            });
        }
    }
    // Only reachable through float rounding at percentile 100; the last contig is the pivot.
    Ok(match mode {
        RankMode::Length => *lengths.last().unwrap_or(&0),
        RankMode::Index => lengths.len(),
    })
}

pub fn n_value(records: &RecordSet, percentile: f64) -> Result<usize, FastaStatError> {
    rank_metric(records, percentile, RankMode::Length)
}

pub fn l_value(records: &RecordSet, percentile: f64) -> Result<usize, FastaStatError> {
    rank_metric(records, percentile, RankMode::Index)
}

/// Snapshot of one file's statistics, computed on demand and never updated.
#[derive(Clone, Debug, PartialEq)]
pub struct AssemblyReport {
    pub total_length: usize,
    pub total_gc: usize,
    pub gc_percentage: f64,
    pub n50: usize,
    pub n90: usize,
    pub l50: usize,
    pub records: Vec<RecordSummary>,
}

impl AssemblyReport {
    pub fn compute(records: &RecordSet, gc_case: GcCase) -> Result<Self, FastaStatError> {
        let total_length = total_length(records);
        let total_gc = total_gc(records, gc_case);
        Ok(AssemblyReport {
            total_length,
            total_gc,
            gc_percentage: gc_percentage(total_gc, total_length)?,
            n50: n_value(records, 50.0)?,
            n90: n_value(records, 90.0)?,
            l50: l_value(records, 50.0)?,
            records: summarize(records, gc_case),
        })
    }
}
