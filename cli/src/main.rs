// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Reflektor CLI Entry Point
//!
//! The binary entry point for Reflektor.
//!
//! This module bootstraps the process and isolates the command-line layer
//! from the core library logic.
//!
//! ## Responsibilities
//!
//! 1.  **Global State Setup**: Initializes the `tracing` subscriber and the
//!     terminal output modes (verbosity, quiet mode, banner).
//! 2.  **Configuration Mapping**: Converts raw command-line arguments
//!     (parsed via `clap`) into the internal `Config` struct used by the
//!     core libraries.
//! 3.  **Error Boundary**: Any error propagated up from the reflector is
//!     caught here, logged to the error stream, and converted into a
//!     non-zero `ExitCode`.

mod commands;
mod terminal;

use std::process::ExitCode;

use reflektor_common::{config::Config, error};

use crate::{
    commands::{CommandLine, reflect},
    terminal::{logging, print::Print},
};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init(commands.verbosity, commands.quiet);

    let cfg = Config::from(&commands);

    let _ = Print::init(&cfg);
    Print::banner();

    let exit_code = match reflect::reflect(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e}");
            ExitCode::FAILURE
        }
    };

    Print::end_of_program();

    exit_code
}
