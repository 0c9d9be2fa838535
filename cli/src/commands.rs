// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The single source of truth for user input. The execution logic lives in
//! the submodules; the definition of arguments, flags and help text is
//! centralized here. The `From<&CommandLine> for Config` implementation
//! decouples the external interface (CLI flags) from the internal
//! application state, so the core libraries stay agnostic of the user
//! interface layer.

pub mod reflect;

use clap::{ArgAction, Parser};
use reflektor_common::config::{self, Config};

#[derive(Parser)]
#[command(name = "reflektor")]
#[command(about = "UDP packet reflector for link and jumbo-frame verification.")]
pub struct CommandLine {
    /// Address the received packets are rebroadcast to
    #[arg(value_name = "DEST_ADDR", default_value = config::DEFAULT_DEST_ADDR)]
    pub dest_addr: String,

    /// UDP port to listen on
    #[arg(value_name = "LISTEN_PORT", default_value_t = config::DEFAULT_LISTEN_PORT)]
    pub listen_port: u16,

    /// Keep logs but hide the ASCII banner
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Reduce visual density (-q: per-packet report lines only)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase logging detail (-v: interface diagnostics)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            dest_addr: cmd.dest_addr.clone(),
            listen_port: cmd.listen_port,
            broadcast_port: config::DEFAULT_BROADCAST_PORT,
            quiet: cmd.quiet,
            no_banner: cmd.no_banner,
        }
    }
}
