// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};

use clap::{Parser, Subcommand};

use crate::assembly::AssemblyReport;
use crate::config::{find_config, StatsConfig};
use crate::errors::FastaStatError;
use crate::inputs::collect_inputs;
use crate::metrics::GcCase;
use crate::orf::rank_orfs_file;
use crate::report::{
    create_output, resolve_output_name, write_assembly_report, write_cross_reference,
    write_orf_ranking,
};
use crate::xref::{cross_reference_file, headers_from_file};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Length, GC content and N50/N90/L50 report for FastA files and directories
    Metrics {
        /// FastA files, or directories whose FastA files are all read
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Report file (must not exist yet; ".txt" is added if there is no extension)
        #[arg(short, long)]
        output: String,

        /// Count lowercase g/c towards GC content too
        #[arg(long = "case-insensitive-gc")]
        case_insensitive_gc: bool,
    },

    /// Extract the sequences of the first N headers of an ORF listing from a genome file
    Extract {
        /// Number of lines of the listing to use
        count: usize,

        /// ORF listing, one `>name_N:start-end(strand)` header per line
        orf_list: PathBuf,

        /// FastA file to extract the sequences from
        genome: PathBuf,

        /// Output file (must not exist yet)
        output: PathBuf,
    },

    /// Rank the ORF headers of a FastA file by decreasing length
    RankOrfs {
        /// FastA file with `start-end` coordinates in its headers
        file: PathBuf,

        /// Output file [default: "<FILE> sorted orfs.txt"]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// A broken config file is reported but never stops an analysis.
fn load_config() -> StatsConfig {
    match find_config() {
        Some(path) => match StatsConfig::from_file(&path) {
            Ok(cfg) => {
                info!("Using configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("Error reading {}: {}; using defaults", path.display(), e);
                StatsConfig::default()
            }
        },
        None => StatsConfig::default(),
    }
}

/// Writes one assembly report per input file into `output`.
///
/// Every input is parsed and every report computed before the output file is created, so a
/// failure leaves nothing behind.
pub fn metrics_command(
    inputs: &[PathBuf],
    output: &str,
    gc_case: GcCase,
    config: &StatsConfig,
) -> Result<PathBuf, FastaStatError> {
    let accumulator = collect_inputs(inputs, config)?;
    let reports = accumulator
        .iter()
        .map(|(name, records)| AssemblyReport::compute(records, gc_case).map(|r| (name, r)))
        .collect::<Result<Vec<_>, _>>()?;

    let out_path = PathBuf::from(resolve_output_name(output));
    let mut out = BufWriter::new(create_output(&out_path)?);
    for (name, report) in &reports {
        write_assembly_report(&mut out, name, report)?;
    }
    out.flush()?;
    info!("Wrote {} reports to {}", reports.len(), out_path.display());
    Ok(out_path)
}

pub fn extract_command(
    count: usize,
    orf_list: &Path,
    genome: &Path,
    output: &Path,
) -> Result<(), FastaStatError> {
    let headers = headers_from_file(orf_list, count)?;
    let found = cross_reference_file(&headers, genome)?;
    let mut out = BufWriter::new(create_output(output)?);
    write_cross_reference(&mut out, &found)?;
    out.flush()?;
    info!(
        "Extracted {} of {} requested sequences to {}",
        found.len(),
        headers.len(),
        output.display()
    );
    Ok(())
}

pub fn default_orf_output(file: &Path) -> PathBuf {
    PathBuf::from(format!("{} sorted orfs.txt", file.display()))
}

pub fn rank_orfs_command(file: &Path, output: Option<&Path>) -> Result<PathBuf, FastaStatError> {
    let ranked = rank_orfs_file(file)?;
    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_orf_output(file));
    let mut out = BufWriter::new(create_output(&out_path)?);
    write_orf_ranking(&mut out, &ranked)?;
    out.flush()?;
    info!("Ranked {} ORFs into {}", ranked.len(), out_path.display());
    Ok(out_path)
}

pub fn run() -> Result<(), FastaStatError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = load_config();

    match cli.command {
        Command::Metrics {
            inputs,
            output,
            case_insensitive_gc,
        } => {
            let gc_case = if case_insensitive_gc {
                GcCase::CaseInsensitive
            } else {
                config.gc.case
            };
            metrics_command(&inputs, &output, gc_case, &config)?;
        }
        Command::Extract {
            count,
            orf_list,
            genome,
            output,
        } => extract_command(count, &orf_list, &genome, &output)?,
        Command::RankOrfs { file, output } => {
            rank_orfs_command(&file, output.as_deref())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_metrics() {
        let cli =
            Cli::try_parse_from(["fastastat", "metrics", "a.fa", "dir", "-o", "out"]).unwrap();
        match cli.command {
            Command::Metrics {
                inputs,
                output,
                case_insensitive_gc,
            } => {
                assert_eq!(inputs, vec![PathBuf::from("a.fa"), PathBuf::from("dir")]);
                assert_eq!(output, "out");
                assert!(!case_insensitive_gc);
            }
            _ => panic!("expected metrics subcommand"),
        }
    }

    #[test]
    fn test_cli_metrics_requires_output() {
        assert!(Cli::try_parse_from(["fastastat", "metrics", "a.fa"]).is_err());
        assert!(Cli::try_parse_from(["fastastat", "metrics", "-o", "out"]).is_err());
        assert!(Cli::try_parse_from(["fastastat"]).is_err());
    }

    #[test]
    fn test_default_orf_output() {
        assert_eq!(
            default_orf_output(Path::new("orfs.fa")),
            PathBuf::from("orfs.fa sorted orfs.txt")
        );
    }
}
