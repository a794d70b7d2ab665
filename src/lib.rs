// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

pub mod assembly;
pub mod config;
pub mod errors;
pub mod inputs;
pub mod metrics;
pub mod orf;
pub mod report;
mod runner;
pub mod seq;
pub mod xref;

pub use crate::runner::{extract_command, metrics_command, rank_orfs_command};

use crate::errors::FastaStatError;

pub fn run() -> Result<(), FastaStatError> {
    runner::run()
}
