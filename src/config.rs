// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

// Optional user configuration, read from a JSON file named `.fastastatconfig`:
//
// { "gc": { "case_insensitive": false }, "fasta_extensions": ["fa"] }
//
// Every key is optional; missing or ill-typed values fall back to the defaults.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::FastaStatError;
use crate::metrics::GcCase;

pub const CONFIG_FILE_NAME: &str = ".fastastatconfig";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcConfig {
    pub case: GcCase,
}

impl Default for GcConfig {
    fn default() -> Self {
        GcConfig {
            case: GcCase::UppercaseOnly,
        }
    }
}

impl GcConfig {
    pub fn from_value(value: &Value) -> Self {
        let case_insensitive = value
            .get("gc")
            .and_then(|gc| gc.get("case_insensitive"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        GcConfig {
            case: if case_insensitive {
                GcCase::CaseInsensitive
            } else {
                GcCase::UppercaseOnly
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsConfig {
    pub gc: GcConfig,
    pub fasta_extensions: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            gc: GcConfig::default(),
            fasta_extensions: vec![String::from("fa")],
        }
    }
}

impl StatsConfig {
    pub fn from_value(value: &Value) -> Self {
        let fasta_extensions = value
            .get("fasta_extensions")
            .and_then(Value::as_array)
            .map(|exts| {
                exts.iter()
                    .filter_map(Value::as_str)
                    .map(|ext| ext.trim_start_matches('.').to_string())
                    .filter(|ext| !ext.is_empty())
                    .collect::<Vec<String>>()
            })
            .filter(|exts| !exts.is_empty())
            .unwrap_or_else(|| StatsConfig::default().fasta_extensions);
        StatsConfig {
            gc: GcConfig::from_value(value),
            fasta_extensions,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, FastaStatError> {
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        Ok(StatsConfig::from_value(&value))
    }

    pub fn is_fasta_extension(&self, ext: &str) -> bool {
        self.fasta_extensions.iter().any(|e| e == ext)
    }
}

pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
