// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Wrappers around the `tracing` crate. All crates log through these
//! macros rather than calling tracing directly, so the backend and the
//! formatting conventions stay in one place.

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        tracing::info!(status = "info", $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        tracing::info!(status = "success", $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        tracing::debug!(status = "debug", $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        tracing::error!(status = "error", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        tracing::warn!(status = "warn", $($arg)+)
    };
}

/// Emits one undecorated line, bypassing the log prefix entirely.
///
/// The per-packet `<length> <count>` report goes through here: the CLI
/// formatter recognizes the target and prints the message verbatim.
#[macro_export]
macro_rules! report {
    ($($arg:tt)+) => {
        tracing::info!(
            target: "reflektor::report",
            raw_msg = %format_args!($($arg)+)
        )
    };
}
