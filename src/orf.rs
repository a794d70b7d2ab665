// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use crate::errors::FastaStatError;
use crate::seq::fasta::is_header;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrfEntry {
    pub header: String,
    pub length: i64,
}

fn coord_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+-[0-9]+").expect("valid coordinate regex"))
}

fn parse_coord(s: &str, header: &str) -> Result<i64, FastaStatError> {
    s.parse::<i64>().map_err(|e| {
        FastaStatError::MalformedInput(format!("Bad coordinate '{}' in {}: {}", s, header, e))
    })
}

/// Length of the first `start-end` pair in `header`, as `end - start`.
///
/// Coordinates are not treated as end-inclusive: `10-50` is 40, not 41.
pub fn orf_length(header: &str) -> Result<i64, FastaStatError> {
    let span = coord_regex().find(header).ok_or_else(|| {
        FastaStatError::MalformedInput(format!("No start-end coordinates in header {}", header))
    })?;
    // The regex guarantees exactly one dash.
    let (start, end) = span.as_str().split_once('-').unwrap_or((span.as_str(), ""));
    Ok(parse_coord(end, header)? - parse_coord(start, header)?)
}

/// Ranks the header lines of `reader` by decreasing ORF length.
///
/// Non-header lines are ignored. A repeated header keeps its first position and its last
/// length; equal lengths keep input order. One header without coordinates fails the lot.
pub fn rank_orfs<R: BufRead>(reader: R) -> Result<Vec<OrfEntry>, FastaStatError> {
    let mut entries: Vec<OrfEntry> = Vec::new();
    let mut hdr2idx: HashMap<String, usize> = HashMap::new();

    for line in reader.lines() {
        let l = line?;
        if !is_header(&l) {
            continue;
        }
        let header = l.trim();
        let length = orf_length(header)?;
        match hdr2idx.get(header) {
            Some(&idx) => entries[idx].length = length,
            None => {
                hdr2idx.insert(header.to_string(), entries.len());
                entries.push(OrfEntry {
                    header: header.to_string(),
                    length,
                });
            }
        }
    }

    Ok(entries
        .into_iter()
        .sorted_by(|a, b| b.length.cmp(&a.length))
        .collect())
}

pub fn rank_orfs_file<P: AsRef<Path>>(path: P) -> Result<Vec<OrfEntry>, FastaStatError> {
    let file = File::open(path)?;
    rank_orfs(BufReader::new(file))
}
