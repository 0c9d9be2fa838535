// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::Context;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag;

use reflektor_common::{config::Config, debug, interface, warn};
use reflektor_core::reflector;

use crate::terminal::print::Print;

/// Runs the reflector until SIGINT or SIGTERM.
pub fn reflect(cfg: &Config) -> anyhow::Result<()> {
    Print::header("packet reflector");
    Print::summary(cfg);
    interface_diagnostics();

    let stop = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        flag::register(signal, Arc::clone(&stop))
            .with_context(|| format!("failed to install handler for signal {signal}"))?;
    }

    reflector::run(cfg, &stop)?;
    Ok(())
}

/// Lists the interfaces a broadcast could actually leave through. Shown
/// at `-v`; a warning is always raised when there are none, since the
/// reflected packets would then go nowhere.
fn interface_diagnostics() {
    let candidates = interface::broadcast_interfaces();
    if candidates.is_empty() {
        warn!("no broadcast-capable interface is up; reflected packets will not reach the link");
        return;
    }

    for iface in &candidates {
        let addrs = iface
            .ips
            .iter()
            .map(|net| net.ip().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        debug!(verbosity = 1u64, "broadcast-capable: {} ({addrs})", iface.name);
    }
    debug!(
        verbosity = 1u64,
        "jumbo frames require the interface MTU to be raised beyond the usual 1500"
    );
}
