// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum FastaStatError {
    Io(io::Error),
    MalformedInput(String),
    DivisionByZero,
    InvalidArgument(String),
    OutputAlreadyExists(PathBuf),
    Config(String),
}

// These allow conversion to FastaStatError, so that '?' works on I/O and JSON results.

impl From<io::Error> for FastaStatError {
    fn from(e: io::Error) -> Self {
        FastaStatError::Io(e)
    }
}

impl From<serde_json::Error> for FastaStatError {
    fn from(e: serde_json::Error) -> Self {
        FastaStatError::Config(e.to_string())
    }
}

impl fmt::Display for FastaStatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastaStatError::Io(e) => write!(f, "I/O error: {}", e),
            FastaStatError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            FastaStatError::DivisionByZero => {
                write!(f, "Division by zero: GC percentage of a zero-length sequence set")
            }
            FastaStatError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            FastaStatError::OutputAlreadyExists(path) => write!(
                f,
                "Output file {} already exists; choose another name",
                path.display()
            ),
            FastaStatError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for FastaStatError {}
