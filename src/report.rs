// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

// Plain-text outputs. Field names and order are relied upon by downstream scrapers, so
// keep them stable.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::assembly::AssemblyReport;
use crate::errors::FastaStatError;
use crate::orf::OrfEntry;
use crate::seq::record::RecordSet;

pub const DEFAULT_OUTPUT_EXTENSION: &str = ".txt";

fn extension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.+[a-zA-Z0-9]+").expect("valid extension regex"))
}

/// Appends `.txt` to names whose last component has nothing looking like an extension.
pub fn resolve_output_name(name: &str) -> String {
    let file_name = Path::new(name)
        .file_name()
        .map(|f| f.to_string_lossy())
        .unwrap_or_default();
    if extension_regex().is_match(&file_name) {
        name.to_string()
    } else {
        format!("{}{}", name, DEFAULT_OUTPUT_EXTENSION)
    }
}

/// Opens `path` for writing, refusing to touch an existing file.
pub fn create_output(path: &Path) -> Result<File, FastaStatError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => FastaStatError::OutputAlreadyExists(path.to_path_buf()),
            _ => FastaStatError::Io(e),
        })
}

// Shortest round-trip form, written the way Python's repr() does: integral values keep a
// ".0" (50.0, not 50), and magnitudes below 1e-4 or from 1e16 up use an exponent of at
// least two digits (5e-05, 1e+16).
pub fn format_float(x: f64) -> String {
    let magnitude = x.abs();
    if x.is_finite() && x != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", x);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(d) => ('-', d),
            None => ('+', exponent),
        };
        format!("{}e{}{:0>2}", mantissa, sign, digits)
    } else if x.is_finite() && x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

pub fn write_assembly_report<W: Write>(
    out: &mut W,
    filename: &str,
    report: &AssemblyReport,
) -> io::Result<()> {
    writeln!(out, "File: {}", filename)?;
    writeln!(out, "Total Contig Length: {}", report.total_length)?;
    writeln!(out, "Total GC Content: {}", report.total_gc)?;
    writeln!(out, "GC percentage: {}%", format_float(report.gc_percentage))?;
    writeln!(out, "N50: {}", report.n50)?;
    writeln!(out, "N90: {}", report.n90)?;
    writeln!(out, "L50: {}", report.l50)?;
    for rec in &report.records {
        writeln!(out, "\tHeader: {}", rec.header)?;
        writeln!(out, "\t\tLength: {}", rec.length)?;
        writeln!(out, "\t\tGC Content: {}", rec.gc)?;
    }
    Ok(())
}

pub fn write_cross_reference<W: Write>(out: &mut W, found: &RecordSet) -> io::Result<()> {
    for rec in found {
        writeln!(out, "{}", rec.header)?;
        writeln!(out, "{}", rec.sequence)?;
    }
    Ok(())
}

pub fn write_orf_ranking<W: Write>(out: &mut W, ranked: &[OrfEntry]) -> io::Result<()> {
    for entry in ranked {
        writeln!(out, "{} Length: {}", entry.header, entry.length)?;
    }
    Ok(())
}
