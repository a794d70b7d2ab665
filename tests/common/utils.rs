// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::path::{Path, PathBuf};

use tempfile::TempDir;

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("writing test file");
    path
}

// Five contigs of lengths 100, 90, 80, 70 and 60 (N50 = 80, L50 = 3), with 10 G's each.
#[allow(dead_code)]
pub fn assembly_fasta() -> String {
    let mut out = String::new();
    for (i, len) in [100usize, 90, 80, 70, 60].iter().enumerate() {
        out.push_str(&format!(">contig_{}\n", i + 1));
        let seq = format!("{}{}", "G".repeat(10), "A".repeat(len - 10));
        // wrap at 60 columns, like most assemblers do
        for chunk in seq.as_bytes().chunks(60) {
            out.push_str(std::str::from_utf8(chunk).expect("ascii"));
            out.push('\n');
        }
    }
    out
}

#[allow(dead_code)]
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("creating temp dir")
}

#[allow(dead_code)]
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("reading output")
}
