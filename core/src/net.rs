// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

pub mod error;
pub mod readiness;
pub mod resolve;
pub mod socket;

pub use error::{NetError, Result};
pub use socket::{SocketState, UdpSocket};
