// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::net::UdpSocket;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use reflektor_common::config::Config;
use reflektor_core::reflector::{self, Reflector};

/// A reflector running on a background thread, wired entirely over
/// loopback: the broadcast destination is substituted with a unicast
/// `127.0.0.1` target pointing at a scratch receiver socket.
struct Harness {
    listen_port: u16,
    receiver: UdpSocket,
    stop: Arc<AtomicBool>,
    handle: JoinHandle<anyhow::Result<u64>>,
}

impl Harness {
    fn spawn() -> Self {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        // Port 0 lets the OS pick; the bound port is read back before
        // the loop thread starts, so no port can be lost to a race.
        let cfg = Config {
            dest_addr: "127.0.0.1".to_string(),
            listen_port: 0,
            broadcast_port: receiver.local_addr().unwrap().port(),
            quiet: 1,
            no_banner: true,
        };

        let reflector = Reflector::open(&cfg).unwrap();
        let listen_port = reflector.local_addr().unwrap().port();

        let stop = Arc::new(AtomicBool::new(false));
        let loop_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || reflector.run(&loop_stop));

        Self {
            listen_port,
            receiver,
            stop,
            handle,
        }
    }

    fn sender(&self) -> UdpSocket {
        let sender = UdpSocket::bind("127.0.0.1:0").unwrap();
        sender
            .connect(("127.0.0.1", self.listen_port))
            .unwrap();
        sender
    }

    /// Signals the loop and waits for it, returning the packet count.
    fn finish(self) -> u64 {
        self.stop.store(true, Ordering::Relaxed);
        self.handle.join().unwrap().unwrap()
    }
}

#[test]
fn ephemeral_listen_port_is_discoverable_before_running() {
    let cfg = Config {
        dest_addr: "127.0.0.1".to_string(),
        listen_port: 0,
        ..Config::default()
    };

    let reflector = Reflector::open(&cfg).unwrap();
    assert_ne!(reflector.local_addr().unwrap().port(), 0);
}

#[test]
fn round_trip_reflects_identical_bytes() {
    let harness = Harness::spawn();
    let sender = harness.sender();

    let payload = b"jumbo-please";
    assert_eq!(payload.len(), 12);
    sender.send(payload).unwrap();

    let mut buf = [0u8; 64];
    let len = harness.receiver.recv(&mut buf).unwrap();
    assert_eq!(len, payload.len());
    assert_eq!(&buf[..len], payload);

    assert_eq!(harness.finish(), 1);
}

#[test]
fn empty_then_large_datagrams_keep_order_and_count() {
    let harness = Harness::spawn();
    let sender = harness.sender();

    sender.send(b"").unwrap();
    sender.send(&[0x5a; 1400]).unwrap();

    let mut buf = [0u8; 2048];
    let first = harness.receiver.recv(&mut buf).unwrap();
    assert_eq!(first, 0);

    let second = harness.receiver.recv(&mut buf).unwrap();
    assert_eq!(second, 1400);
    assert!(buf[..second].iter().all(|&b| b == 0x5a));

    assert_eq!(harness.finish(), 2);
}

#[test]
fn payload_survives_multiple_cycles() {
    let harness = Harness::spawn();
    let sender = harness.sender();

    for i in 0..5u8 {
        let payload = vec![i; (i as usize + 1) * 10];
        sender.send(&payload).unwrap();

        let mut buf = [0u8; 128];
        let len = harness.receiver.recv(&mut buf).unwrap();
        assert_eq!(len, payload.len());
        assert_eq!(&buf[..len], &payload[..]);
    }

    assert_eq!(harness.finish(), 5);
}

#[test]
fn cancellation_stops_an_idle_loop() {
    let harness = Harness::spawn();
    assert_eq!(harness.finish(), 0);
}

#[test]
fn occupied_listen_port_is_fatal() {
    let blocker = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = blocker.local_addr().unwrap().port();

    let cfg = Config {
        dest_addr: "127.0.0.1".to_string(),
        listen_port: port,
        ..Config::default()
    };

    let stop = AtomicBool::new(false);
    let result = reflector::run(&cfg, &stop);
    assert!(result.is_err());
}
