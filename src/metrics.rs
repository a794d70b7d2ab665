// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

// Composition metrics over single sequences and whole record sets.

use crate::errors::FastaStatError;
use crate::seq::record::RecordSet;

/// Which residues count towards GC content.
///
/// Only uppercase `G` and `C` are counted by default, so soft-masked (lowercase) regions do
/// not contribute. `CaseInsensitive` has to be asked for explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GcCase {
    #[default]
    UppercaseOnly,
    CaseInsensitive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSummary {
    pub header: String,
    pub length: usize,
    pub gc: usize,
}

pub fn sequence_length(seq: &str) -> usize {
    seq.chars().count()
}

pub fn gc_count(seq: &str, case: GcCase) -> usize {
    match case {
        GcCase::UppercaseOnly => seq.chars().filter(|c| matches!(c, 'G' | 'C')).count(),
        GcCase::CaseInsensitive => seq
            .chars()
            .filter(|c| matches!(c, 'G' | 'C' | 'g' | 'c'))
            .count(),
    }
}

pub fn total_length(records: &RecordSet) -> usize {
    records.sequences().map(sequence_length).sum()
}

pub fn total_gc(records: &RecordSet, case: GcCase) -> usize {
    records.sequences().map(|s| gc_count(s, case)).sum()
}

pub fn gc_percentage(gc: usize, length: usize) -> Result<f64, FastaStatError> {
    if length == 0 {
        return Err(FastaStatError::DivisionByZero);
    }
    Ok((gc as f64 / length as f64) * 100.0)
}

pub fn summarize(records: &RecordSet, case: GcCase) -> Vec<RecordSummary> {
    records
        .iter()
        .map(|r| RecordSummary {
            header: r.header.clone(),
            length: sequence_length(&r.sequence),
            gc: gc_count(&r.sequence, case),
        })
        .collect()
}
