// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::io;

use reflektor_common::utils::ip::AddrFamily;
use thiserror::Error;

/// Errors of the networking layer.
#[derive(Debug, Error)]
pub enum NetError {
    /// The host name could not be resolved at all.
    #[error("cannot resolve '{host}'")]
    Unresolvable { host: String },

    /// Resolution succeeded, but produced no address of the requested family.
    #[error("no {family:?} address found for '{host}'")]
    NoMatchingAddress { family: AddrFamily, host: String },

    /// An operation was attempted on a socket that is not open.
    #[error("socket is not open")]
    NotOpen,

    /// `send` was called on a socket without a resolved target.
    #[error("socket has no send target")]
    NoTarget,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
