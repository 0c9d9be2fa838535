// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::sync::OnceLock;

use anyhow::bail;
use colored::*;
use reflektor_common::config::Config;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

static PRINT: OnceLock<Print> = OnceLock::new();

/// Emits one line through the raw passthrough target, bypassing the log
/// decoration entirely.
#[macro_export]
macro_rules! rprint {
    () => {
        $crate::rprint!("");
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: "reflektor::print",
            raw_msg = %format_args!($($arg)*)
        );
    };
}

/// Process-wide terminal presentation state. Initialized once from the
/// configuration; every decorated line consults it before printing.
pub struct Print {
    no_banner: bool,
    q_level: u8,
}

impl Print {
    fn new(cfg: &Config) -> Self {
        Self {
            no_banner: cfg.no_banner,
            q_level: cfg.quiet,
        }
    }

    pub fn init(cfg: &Config) -> anyhow::Result<()> {
        let term = Self::new(cfg);
        if PRINT.set(term).is_err() {
            bail!("terminal has already been initialized")
        }
        Ok(())
    }

    fn get() -> &'static Self {
        PRINT.get().expect("terminal has not been initialized")
    }

    pub fn banner() {
        let p = Self::get();
        if p.no_banner || p.q_level > 0 {
            return;
        }

        let text_content: String = format!("⟦ REFLEKTOR v{} ⟧", env!("CARGO_PKG_VERSION"));
        let text_width: usize = text_content.chars().count();
        let text: ColoredString = text_content.bright_green().bold();
        let sep: ColoredString = "═"
            .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
            .bright_black();

        rprint!("{}{}{}", sep, text, sep);
    }

    pub fn header(msg: &str) {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }

        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = formatted.chars().count();

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: ColoredString = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().bright_green(),
            "─".repeat(right)
        )
        .bright_black();

        rprint!("{}", line);
    }

    /// Renders the effective configuration as an aligned key/value block.
    pub fn summary(cfg: &Config) {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }
        aligned_line("Destination", format!("{}:{}", cfg.dest_addr, cfg.broadcast_port));
        aligned_line("Listen port", cfg.listen_port.to_string());
    }

    pub fn end_of_program() {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }
        rprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    }
}

pub fn aligned_line<V: std::fmt::Display>(key: &str, value: V) {
    let key_width: usize = "Destination".len();
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    rprint!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.to_string().color(colors::TEXT_DEFAULT)
    );
}
