// SPDX-License-Identifier: MIT
// Copyright (c) 2026 fastastat contributors

use std::process::ExitCode;

fn main() -> ExitCode {
    match fastastat::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
