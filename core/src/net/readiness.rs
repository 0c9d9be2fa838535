// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Multiplexed readiness waiting over raw descriptors.

use std::os::fd::RawFd;

/// Upper bound on how many descriptors one wait can cover. Descriptors
/// beyond this count are ignored.
pub const MAX_WAIT_FDS: usize = 4;

/// Blocks until at least one of the given descriptors is readable or the
/// timeout elapses. `timeout_ms == -1` waits without bound.
///
/// Returns a bitmask with bit *i* set when the *i*-th supplied descriptor
/// is readable. Negative descriptors keep their slot (and therefore their
/// bit position) but are never polled; `poll(2)` skips negative `pollfd`
/// entries. Timeout and error both yield 0.
pub fn wait_for_read(timeout_ms: i32, fds: &[RawFd]) -> u8 {
    let mut pollfds: Vec<libc::pollfd> = fds
        .iter()
        .take(MAX_WAIT_FDS)
        .map(|&fd| libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        })
        .collect();

    if pollfds.is_empty() {
        return 0;
    }

    // SAFETY: `pollfds` is a live, properly initialized array of exactly
    // `pollfds.len()` entries for the duration of the call.
    let ready = unsafe {
        libc::poll(
            pollfds.as_mut_ptr(),
            pollfds.len() as libc::nfds_t,
            timeout_ms,
        )
    };

    if ready < 1 {
        return 0;
    }

    let mut mask = 0u8;
    for (i, entry) in pollfds.iter().enumerate() {
        if entry.fd >= 0 && (entry.revents & libc::POLLIN) != 0 {
            mask |= 1 << i;
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::UdpSocket;
    use std::os::fd::AsRawFd;
    use std::time::{Duration, Instant};

    fn loopback_pair() -> (UdpSocket, UdpSocket) {
        let a = UdpSocket::bind("127.0.0.1:0").unwrap();
        let b = UdpSocket::bind("127.0.0.1:0").unwrap();
        (a, b)
    }

    fn make_readable(socket: &UdpSocket) {
        let addr = socket.local_addr().unwrap();
        let tx = UdpSocket::bind("127.0.0.1:0").unwrap();
        tx.send_to(b"x", addr).unwrap();
        // The datagram lands in the receive queue almost instantly on
        // loopback; the poll timeout below absorbs scheduling delay.
    }

    #[test]
    fn idle_descriptor_times_out_with_zero() {
        let (a, _b) = loopback_pair();
        let mask = wait_for_read(50, &[a.as_raw_fd()]);
        assert_eq!(mask, 0);
    }

    #[test]
    fn readable_descriptor_sets_its_bit() {
        let (a, b) = loopback_pair();
        make_readable(&b);

        let mask = wait_for_read(2000, &[a.as_raw_fd(), b.as_raw_fd()]);
        assert_eq!(mask, 0b10);
    }

    #[test]
    fn negative_descriptors_hold_their_slot() {
        let (a, b) = loopback_pair();
        make_readable(&b);

        let mask = wait_for_read(2000, &[-1, a.as_raw_fd(), -1, b.as_raw_fd()]);
        assert_eq!(mask, 0b1000);
    }

    #[test]
    fn all_negative_descriptors_time_out() {
        let start = Instant::now();
        let mask = wait_for_read(50, &[-1, -1]);
        assert_eq!(mask, 0);
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn empty_descriptor_list_returns_zero() {
        assert_eq!(wait_for_read(0, &[]), 0);
    }

    #[test]
    fn multiple_readable_descriptors_combine() {
        let (a, b) = loopback_pair();
        make_readable(&a);
        make_readable(&b);

        // Give loopback delivery a moment so both queues are non-empty
        // before the single poll below.
        std::thread::sleep(Duration::from_millis(100));

        let mask = wait_for_read(2000, &[a.as_raw_fd(), b.as_raw_fd()]);
        assert_eq!(mask, 0b11);
    }

    #[test]
    fn descriptors_beyond_the_limit_are_ignored() {
        let (a, b) = loopback_pair();
        let (c, d) = loopback_pair();
        let (e, _) = loopback_pair();
        make_readable(&e);

        let fds = [
            a.as_raw_fd(),
            b.as_raw_fd(),
            c.as_raw_fd(),
            d.as_raw_fd(),
            e.as_raw_fd(),
        ];
        assert_eq!(wait_for_read(50, &fds), 0);
    }
}
