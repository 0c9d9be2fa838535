// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! The receive-count-rebroadcast loop.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;

use reflektor_common::config::Config;
use reflektor_common::utils::ip::AddrFamily;
use reflektor_common::{info, report, success, warn};

use crate::net::UdpSocket;

/// Size of the receive buffer. Large enough for any UDP payload that
/// survives the wire, fragmented or not.
pub const RECV_BUFFER_SIZE: usize = 64 * 1024;

/// How long one readiness wait may block before the stop flag is
/// checked again.
const STOP_POLL_INTERVAL_MS: i32 = 250;

/// A fully wired reflector: the bound listening socket plus the
/// broadcast sender, ready to loop.
///
/// Opening is split from running so a caller can bind port 0 and read
/// the actual port back through [`local_addr`] before the loop starts.
///
/// [`local_addr`]: Reflector::local_addr
pub struct Reflector {
    server: UdpSocket,
    broadcaster: UdpSocket,
}

impl Reflector {
    /// Binds the listening socket and opens the broadcast sender.
    /// Failure of either is fatal to the caller.
    pub fn open(cfg: &Config) -> anyhow::Result<Self> {
        let mut server = UdpSocket::new();
        server
            .open_server(cfg.listen_port, "", AddrFamily::Unspec)
            .with_context(|| format!("failed to bind UDP port {}", cfg.listen_port))?;

        let mut broadcaster = UdpSocket::new();
        broadcaster
            .open_broadcaster(cfg.broadcast_port, &cfg.dest_addr, AddrFamily::V4)
            .with_context(|| format!("failed to open broadcast sender for {}", cfg.dest_addr))?;

        Ok(Self { server, broadcaster })
    }

    /// The address the listening socket is actually bound to.
    pub fn local_addr(&self) -> crate::net::Result<SocketAddr> {
        self.server.local_addr()
    }

    /// Runs until `stop` is raised.
    ///
    /// Every received datagram is counted, reported as one
    /// `<length> <count>` line, and retransmitted byte-for-byte to the
    /// configured destination. Per-packet receive and send failures are
    /// logged and skipped, never fatal, so a transient network hiccup
    /// does not take the process down.
    ///
    /// Returns the number of packets handled.
    pub fn run(self, stop: &AtomicBool) -> anyhow::Result<u64> {
        success!("reflector ready on {}", self.local_addr().context("listening socket")?);

        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        let mut count: u64 = 0;

        while !stop.load(Ordering::Relaxed) {
            match self.server.wait_for_data(STOP_POLL_INTERVAL_MS) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => return Err(e).context("readiness wait failed"),
            }

            let len = match self.server.receive(&mut buf, false) {
                Ok((len, _)) => len,
                Err(e) => {
                    warn!("receive failed: {e}");
                    continue;
                }
            };

            count += 1;
            report!("{} {}", len, count);

            if let Err(e) = self.broadcaster.send(&buf[..len]) {
                warn!("rebroadcast of packet {count} failed: {e}");
            }
        }

        info!("stopped after {count} packet(s)");
        Ok(count)
    }
}

/// Opens the sockets and runs the loop in one step.
pub fn run(cfg: &Config, stop: &AtomicBool) -> anyhow::Result<u64> {
    Reflector::open(cfg)?.run(stop)
}
