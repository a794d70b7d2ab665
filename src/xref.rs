// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

// Pulls the sequences of selected headers (usually the top-ranked ORFs) out of a second
// FastA file, eg a genome the ORFs were predicted on.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;

use crate::errors::FastaStatError;
use crate::seq::fasta::is_header;
use crate::seq::record::RecordSet;

// Eg ">scaffold_1693:3657-8985(-)"
const COORD_HEADER_PATTERN: &str = r">+[a-z]+_[0-9]+:+[0-9]+-[0-9]+\(+[+-]+\)";

fn coord_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COORD_HEADER_PATTERN).expect("valid header regex"))
}

/// Returns the coordinate-annotated header (`>name_N:start-end(strand)`) embedded in `line`.
pub fn extract_header(line: &str) -> Result<&str, FastaStatError> {
    coord_header_regex()
        .find(line)
        .map(|m| m.as_str())
        .ok_or_else(|| {
            FastaStatError::MalformedInput(format!(
                "No coordinate header (name_N:start-end(strand)) in line '{}'",
                line
            ))
        })
}

/// Extracts one header from each of the first `n` lines of `reader`.
pub fn headers_from_lines<R: BufRead>(reader: R, n: usize) -> Result<Vec<String>, FastaStatError> {
    let mut headers = Vec::new();
    for line in reader.lines().take(n) {
        let l = line?;
        headers.push(extract_header(l.trim())?.to_string());
    }
    Ok(headers)
}

pub fn headers_from_file<P: AsRef<Path>>(path: P, n: usize) -> Result<Vec<String>, FastaStatError> {
    let file = File::open(path)?;
    headers_from_lines(BufReader::new(file), n)
}

// Collection state for one requested header.
#[derive(Default)]
struct Matcher {
    collecting: bool,
    sequence: String,
    found: Option<String>,
}

impl Matcher {
    fn feed(&mut self, header: &str, line: &str) {
        if line.contains(header) {
            self.collecting = true;
            return;
        }
        if !self.collecting {
            return;
        }
        if is_header(line) {
            self.found = Some(std::mem::take(&mut self.sequence));
            self.collecting = false;
        } else {
            self.sequence.push_str(line);
        }
    }

    fn finish(mut self) -> Option<String> {
        if self.collecting {
            self.found = Some(self.sequence);
        }
        self.found
    }
}

/// Maps each of `headers` to the sequence that follows it in `reader`.
///
/// A line containing a requested header (as a substring) opens collection, following
/// non-header lines are concatenated and the next header line closes it. When a header
/// occurs more than once the last occurrence wins. Headers that never occur are simply
/// absent from the result, which is ordered as `headers`.
pub fn cross_reference<R: BufRead>(
    headers: &[String],
    reader: R,
) -> Result<RecordSet, FastaStatError> {
    let mut matchers: Vec<Matcher> = headers.iter().map(|_| Matcher::default()).collect();

    for line in reader.lines() {
        let l = line?;
        let trimmed = l.trim_end();
        for (hdr, matcher) in headers.iter().zip(matchers.iter_mut()) {
            matcher.feed(hdr, trimmed);
        }
    }

    let mut result = RecordSet::new();
    for (hdr, matcher) in headers.iter().zip(matchers) {
        match matcher.finish() {
            Some(seq) => {
                debug!("Found {} ({} residues)", hdr, seq.len());
                result.insert(hdr.clone(), seq);
            }
            None => info!("Header {} not found", hdr),
        }
    }
    Ok(result)
}

pub fn cross_reference_file<P: AsRef<Path>>(
    headers: &[String],
    path: P,
) -> Result<RecordSet, FastaStatError> {
    let file = File::open(path)?;
    cross_reference(headers, BufReader::new(file))
}
