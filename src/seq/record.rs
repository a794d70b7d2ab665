// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::collections::HashMap;

use log::debug;

// A record for sequences: the full header line (marker and description included) and the
// concatenated residues.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

/// Identifier -> record mapping that remembers where each identifier was first seen.
///
/// Inserting an identifier that is already present replaces its sequence but keeps its
/// position, so reports iterate in first-seen order while the content is last-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<SeqRecord>,
    index: HashMap<String, usize>,
}

impl RecordSet {
    pub fn new() -> Self {
        RecordSet::default()
    }

    pub fn insert(&mut self, header: String, sequence: String) {
        match self.index.get(&header) {
            Some(&idx) => {
                debug!("Duplicate identifier '{}': later sequence replaces earlier", header);
                self.records[idx].sequence = sequence;
            }
            None => {
                self.index.insert(header.clone(), self.records.len());
                self.records.push(SeqRecord { header, sequence });
            }
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.index
            .get(header)
            .map(|&idx| self.records[idx].sequence.as_str())
    }

    pub fn contains(&self, header: &str) -> bool {
        self.index.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeqRecord> {
        self.records.iter()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.header.as_str())
    }

    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.sequence.as_str())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a SeqRecord;
    type IntoIter = std::slice::Iter<'a, SeqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<H: Into<String>, S: Into<String>> FromIterator<(H, S)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (H, S)>>(iter: I) -> Self {
        let mut set = RecordSet::new();
        for (hdr, seq) in iter {
            set.insert(hdr.into(), seq.into());
        }
        set
    }
}
