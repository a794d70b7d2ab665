// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::errors::FastaStatError;
use crate::seq::record::RecordSet;

pub const HEADER_MARKER: char = '>';

pub fn is_header(line: &str) -> bool {
    line.starts_with(HEADER_MARKER)
}

/// Reads FastA records from any buffered source.
///
/// Headers are kept verbatim (marker included). Lines seen before the first header are
/// dropped once that header shows up; if no header ever shows up, they end up under the
/// empty identifier, so an empty input gives `{"": ""}`.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<RecordSet, FastaStatError> {
    let mut result = RecordSet::new();
    let mut header = String::new();
    let mut sequence = String::new();
    let mut seen_header = false;

    for line in reader.lines() {
        let l = line?;
        let trimmed = l.trim_end();
        if is_header(trimmed) {
            if seen_header {
                result.insert(
                    std::mem::take(&mut header),
                    std::mem::take(&mut sequence),
                );
            } else {
                if !sequence.is_empty() {
                    warn!(
                        "Dropping {} residues found before the first header",
                        sequence.len()
                    );
                }
                sequence.clear();
                seen_header = true;
            }
            header.push_str(trimmed);
        } else {
            // append line to current record's sequence
            sequence.push_str(trimmed);
        }
    }
    result.insert(header, sequence);
    Ok(result)
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<RecordSet, FastaStatError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = read_fasta(BufReader::new(file))?;
    info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fasta_file_single() {
        let records = read_fasta_file("data/single.fa").expect("Test file not found");
        assert_eq!(records.len(), 1);
        assert_eq!(records.get(">seqA"), Some("ACGTACGT"));
    }

    #[test]
    fn test_read_fasta_file_wrapped() {
        let records = read_fasta_file("data/wrapped.fa").expect("Test file not found");
        let hdrs: Vec<&str> = records.headers().collect();
        assert_eq!(hdrs, vec![">contig_1 len=12", ">contig_2", ">contig_3"]);
        assert_eq!(records.get(">contig_1 len=12"), Some("GGCCATATGCAA"));
        assert_eq!(records.get(">contig_2"), Some("acgtNNGC"));
        // blank line inside a record contributes nothing
        assert_eq!(records.get(">contig_3"), Some("TTTT"));
    }

    #[test]
    fn test_empty_input_gives_empty_keyed_record() {
        let records = read_fasta("".as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.get(""), Some(""));
    }

    #[test]
    fn test_blank_lines_only() {
        let records = read_fasta("\n\n   \n".as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.get(""), Some(""));
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let records = read_fasta("NNNN\n>a\nAC\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.get(">a"), Some("AC"));
        assert!(!records.contains(""));
    }

    #[test]
    fn test_no_header_at_all() {
        let records = read_fasta("ACGT\nGG\n".as_bytes()).unwrap();
        assert_eq!(records.get(""), Some("ACGTGG"));
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let records = read_fasta(">a\nAAA\n>b\nC\n>a\nGGG\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.get(">a"), Some("GGG"));
        assert_eq!(records.headers().next(), Some(">a"));
    }

    #[test]
    fn test_header_without_sequence() {
        let records = read_fasta(">a\n>b\nTT\n".as_bytes()).unwrap();
        assert_eq!(records.get(">a"), Some(""));
        assert_eq!(records.get(">b"), Some("TT"));
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        let records = read_fasta(">a desc  \r\nAC \r\nGT\r\n".as_bytes()).unwrap();
        assert_eq!(records.get(">a desc"), Some("ACGT"));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let first = read_fasta_file("data/wrapped.fa").unwrap();
        let second = read_fasta_file("data/wrapped.fa").unwrap();
        assert_eq!(first, second);
    }
}
