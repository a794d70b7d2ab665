// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

mod common;

use crate::common::utils;

use approx::assert_relative_eq;

use fastastat::{
    assembly::{l_value, n_value, AssemblyReport},
    config::StatsConfig,
    errors::FastaStatError,
    metrics::GcCase,
    metrics_command,
    seq::fasta,
};

#[test]
fn assembly_file_statistics() {
    let dir = utils::scratch_dir();
    let path = utils::write_file(dir.path(), "asm.fa", &utils::assembly_fasta());
    let records = fasta::read_fasta_file(&path).expect("read");

    assert_eq!(records.len(), 5);
    assert_eq!(n_value(&records, 50.0).unwrap(), 80);
    assert_eq!(l_value(&records, 50.0).unwrap(), 3);

    let report = AssemblyReport::compute(&records, GcCase::UppercaseOnly).unwrap();
    assert_eq!(report.total_length, 400);
    assert_eq!(report.total_gc, 50);
    assert_relative_eq!(report.gc_percentage, 12.5);
    assert_eq!(report.n90, 60);
}

#[test]
fn metrics_report_for_directory() {
    let dir = utils::scratch_dir();
    let fasta_dir = dir.path().join("fastas");
    std::fs::create_dir(&fasta_dir).unwrap();
    utils::write_file(&fasta_dir, "b.fa", ">y\nGGCC\n");
    utils::write_file(&fasta_dir, "a.fa", ">x\nACGTACGT\n");
    utils::write_file(&fasta_dir, "notes.txt", "not a fasta file\n");

    let output = dir.path().join("report");
    let written = metrics_command(
        &[fasta_dir.clone()],
        output.to_str().unwrap(),
        GcCase::UppercaseOnly,
        &StatsConfig::default(),
    )
    .expect("metrics");

    assert_eq!(written, dir.path().join("report.txt"));
    let text = utils::read(&written);
    let a_name = fasta_dir.join("a.fa").display().to_string();
    let b_name = fasta_dir.join("b.fa").display().to_string();
    let expected = format!(
        "File: {}\nTotal Contig Length: 8\nTotal GC Content: 4\nGC percentage: 50.0%\n\
         N50: 8\nN90: 8\nL50: 1\n\tHeader: >x\n\t\tLength: 8\n\t\tGC Content: 4\n\
         File: {}\nTotal Contig Length: 4\nTotal GC Content: 4\nGC percentage: 100.0%\n\
         N50: 4\nN90: 4\nL50: 1\n\tHeader: >y\n\t\tLength: 4\n\t\tGC Content: 4\n",
        a_name, b_name
    );
    assert_eq!(text, expected);
}

#[test]
fn metrics_refuses_existing_output() {
    let dir = utils::scratch_dir();
    let input = utils::write_file(dir.path(), "one.fa", ">x\nACGT\n");
    let output = utils::write_file(dir.path(), "taken.txt", "keep me\n");

    let result = metrics_command(
        &[input],
        output.to_str().unwrap(),
        GcCase::UppercaseOnly,
        &StatsConfig::default(),
    );
    assert!(matches!(result, Err(FastaStatError::OutputAlreadyExists(_))));
    assert_eq!(utils::read(&output), "keep me\n");
}

#[test]
fn metrics_empty_file_leaves_no_output() {
    let dir = utils::scratch_dir();
    let good = utils::write_file(dir.path(), "good.fa", ">x\nACGT\n");
    let empty = utils::write_file(dir.path(), "empty.fa", "");
    let output = dir.path().join("out.txt");

    let result = metrics_command(
        &[good, empty],
        output.to_str().unwrap(),
        GcCase::UppercaseOnly,
        &StatsConfig::default(),
    );
    assert!(matches!(result, Err(FastaStatError::DivisionByZero)));
    assert!(!output.exists());
}

#[test]
fn case_insensitive_gc_is_opt_in() {
    let dir = utils::scratch_dir();
    let path = utils::write_file(dir.path(), "soft.fa", ">m\nggccAATT\n");
    let records = fasta::read_fasta_file(&path).unwrap();

    let strict = AssemblyReport::compute(&records, GcCase::UppercaseOnly).unwrap();
    assert_eq!(strict.total_gc, 0);
    let relaxed = AssemblyReport::compute(&records, GcCase::CaseInsensitive).unwrap();
    assert_eq!(relaxed.total_gc, 4);
    assert_relative_eq!(relaxed.gc_percentage, 50.0);
}
