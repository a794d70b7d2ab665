// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::StatsConfig;
use crate::errors::FastaStatError;
use crate::seq::fasta::read_fasta_file;
use crate::seq::record::RecordSet;

/// Parsed input files, in the order they were given on the command line.
///
/// Built by `collect_inputs()` and handed to whatever writes the report; nothing else
/// holds on to the parsed records.
#[derive(Debug, Default)]
pub struct InputAccumulator {
    files: Vec<(String, RecordSet)>,
}

impl InputAccumulator {
    pub fn new() -> Self {
        InputAccumulator::default()
    }

    // A file given twice is re-read and replaces its earlier entry in place.
    pub fn add(&mut self, name: String, records: RecordSet) {
        match self.files.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = records,
            None => self.files.push((name, records)),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordSet)> {
        self.files.iter().map(|(name, recs)| (name.as_str(), recs))
    }
}

fn has_fasta_extension(path: &Path, config: &StatsConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| config.is_fasta_extension(ext))
        .unwrap_or(false)
}

// All FastA files directly inside `dir`, sorted by name.
fn fasta_files_in_dir(dir: &Path, config: &StatsConfig) -> Result<Vec<PathBuf>, FastaStatError> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let mut files = Vec::new();
    for ext in &config.fasta_extensions {
        let pattern = format!("{}/*.{}", escaped, glob::Pattern::escape(ext));
        let paths = glob::glob_with(&pattern, options).map_err(|e| {
            FastaStatError::InvalidArgument(format!("Bad glob pattern {}: {}", pattern, e))
        })?;
        for entry in paths {
            files.push(entry.map_err(|e| FastaStatError::Io(e.into()))?);
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Resolves one command-line input into the FastA files it stands for: the file itself if
/// it has a FastA extension, or the FastA files of a directory.
pub fn expand_input(arg: &Path, config: &StatsConfig) -> Result<Vec<PathBuf>, FastaStatError> {
    if has_fasta_extension(arg, config) {
        return Ok(vec![arg.to_path_buf()]);
    }
    if arg.is_dir() {
        let files = fasta_files_in_dir(arg, config)?;
        if !files.is_empty() {
            debug!("{} FastA files in {}", files.len(), arg.display());
            return Ok(files);
        }
    }
    Err(FastaStatError::InvalidArgument(format!(
        "{} is neither a FastA file (*.{}) nor a directory containing any. Try --help.",
        arg.display(),
        config.fasta_extensions.join(", *.")
    )))
}

pub fn collect_inputs(
    args: &[PathBuf],
    config: &StatsConfig,
) -> Result<InputAccumulator, FastaStatError> {
    if args.is_empty() {
        return Err(FastaStatError::InvalidArgument(String::from(
            "At least one FastA file or directory is required. Try --help.",
        )));
    }
    let mut acc = InputAccumulator::new();
    for arg in args {
        for path in expand_input(arg, config)? {
            let records = read_fasta_file(&path)?;
            acc.add(path.display().to_string(), records);
        }
    }
    info!("Collected {} input files", acc.len());
    Ok(acc)
}
