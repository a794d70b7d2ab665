// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

pub mod fasta;
pub mod record;
