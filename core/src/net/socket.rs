// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! The UDP endpoint abstraction.
//!
//! A [`UdpSocket`] is opened as a bound receiver, a plain sender, or a
//! broadcast sender, and owns its descriptor exclusively. Every public
//! operation is guarded by an explicit state machine, so using a
//! never-opened or already-closed socket is a typed error instead of a
//! syscall on a stale descriptor.

use std::fmt;
use std::io;
use std::mem::MaybeUninit;
use std::net::SocketAddr;
use std::os::fd::{AsRawFd, RawFd};

use reflektor_common::utils::ip::AddrFamily;
use socket2::{Domain, Protocol, SockAddr, Socket, Type};

use super::error::{NetError, Result};
use super::{readiness, resolve};

/// Lifecycle of a [`UdpSocket`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SocketState {
    /// No descriptor has ever been opened.
    #[default]
    Unopened,
    /// A descriptor is open; send/receive/wait are permitted.
    Open,
    /// The descriptor has been released.
    Closed,
}

impl fmt::Display for SocketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocketState::Unopened => write!(f, "Unopened"),
            SocketState::Open => write!(f, "Open"),
            SocketState::Closed => write!(f, "Closed"),
        }
    }
}

/// A UDP endpoint holding one datagram descriptor and the resolved
/// address it was opened against (the bind address for a server, the
/// destination for a sender).
#[derive(Debug, Default)]
pub struct UdpSocket {
    state: SocketState,
    inner: Option<Socket>,
    target: Option<SocketAddr>,
}

impl UdpSocket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SocketState {
        self.state
    }

    /// The resolved target (or bind) address, once open.
    pub fn target(&self) -> Option<SocketAddr> {
        self.target
    }

    /// Opens a receiving socket bound to `port`. An empty `bind_to`
    /// accepts on every interface. Any previously held descriptor is
    /// released first.
    pub fn open_server(&mut self, port: u16, bind_to: &str, family: AddrFamily) -> Result<()> {
        self.close();

        let addr = resolve::resolve_local(port, bind_to, family)?;
        let socket = Self::datagram_socket(addr)?;
        socket.bind(&SockAddr::from(addr))?;

        self.install(socket, addr);
        Ok(())
    }

    /// Opens a sending socket targeting `host:port`. The socket is not
    /// connected; the resolved destination is stored for [`send`].
    ///
    /// [`send`]: UdpSocket::send
    pub fn open_sender(&mut self, port: u16, host: &str, family: AddrFamily) -> Result<()> {
        self.close();

        let addr = resolve::resolve_remote(host, port, family)?;
        let socket = Self::datagram_socket(addr)?;

        self.install(socket, addr);
        Ok(())
    }

    /// Opens a sending socket as [`open_sender`] does, then enables
    /// broadcast transmission on it. A failure of the broadcast enable
    /// closes the socket again.
    ///
    /// [`open_sender`]: UdpSocket::open_sender
    pub fn open_broadcaster(&mut self, port: u16, host: &str, family: AddrFamily) -> Result<()> {
        self.open_sender(port, host, family)?;

        let socket = self.open_socket()?;
        if let Err(e) = socket.set_broadcast(true) {
            self.close();
            return Err(e.into());
        }

        Ok(())
    }

    /// Transmits `bytes` as one datagram to the stored target.
    pub fn send(&self, bytes: &[u8]) -> Result<usize> {
        let socket = self.open_socket()?;
        let target = self.target.ok_or(NetError::NoTarget)?;

        Ok(socket.send_to(bytes, &SockAddr::from(target))?)
    }

    /// Blocks until one datagram arrives and copies up to `buf.len()`
    /// bytes of it into `buf`. When the payload leaves room, the byte
    /// directly after it is set to zero as a convenience for callers
    /// treating the payload as text. With `capture_peer`, the sender's
    /// numeric IP text is returned alongside the payload length.
    ///
    /// An empty datagram is a legitimate `Ok((0, _))`; OS-level receive
    /// failures surface as errors.
    pub fn receive(&self, buf: &mut [u8], capture_peer: bool) -> Result<(usize, Option<String>)> {
        let socket = self.open_socket()?;

        // SAFETY: `MaybeUninit<u8>` is layout-compatible with `u8` and
        // `recv_from` only ever writes into the buffer; the initialized
        // contents of `buf` are not read through the cast.
        let uninit = unsafe { &mut *(buf as *mut [u8] as *mut [MaybeUninit<u8>]) };
        let (len, peer) = socket.recv_from(uninit)?;

        if len < buf.len() {
            buf[len] = 0;
        }

        let source = if capture_peer {
            Some(
                peer.as_socket()
                    .map(|addr| resolve::address_to_text(&addr))
                    .unwrap_or_default(),
            )
        } else {
            None
        };

        Ok((len, source))
    }

    /// Waits until this socket's descriptor is readable or `timeout_ms`
    /// elapses (`-1` waits without bound).
    pub fn wait_for_data(&self, timeout_ms: i32) -> Result<bool> {
        let socket = self.open_socket()?;
        Ok(readiness::wait_for_read(timeout_ms, &[socket.as_raw_fd()]) != 0)
    }

    /// The address the descriptor is actually bound to. Useful when the
    /// socket was opened on port 0 and the OS picked the port.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        let socket = self.open_socket()?;
        socket
            .local_addr()?
            .as_socket()
            .ok_or_else(|| NetError::Io(io::Error::other("local address is not an inet address")))
    }

    /// The raw descriptor while the socket is open.
    pub fn raw_fd(&self) -> Option<RawFd> {
        match self.state {
            SocketState::Open => self.inner.as_ref().map(|s| s.as_raw_fd()),
            _ => None,
        }
    }

    /// Releases the descriptor, if any, and marks the socket closed.
    /// Calling this again, or on a never-opened socket, is a no-op.
    pub fn close(&mut self) {
        self.inner = None;
        if self.state == SocketState::Open {
            self.state = SocketState::Closed;
        }
    }

    fn datagram_socket(addr: SocketAddr) -> Result<Socket> {
        Ok(Socket::new(
            Domain::for_address(addr),
            Type::DGRAM,
            Some(Protocol::UDP),
        )?)
    }

    fn install(&mut self, socket: Socket, target: SocketAddr) {
        self.inner = Some(socket);
        self.target = Some(target);
        self.state = SocketState::Open;
    }

    fn open_socket(&self) -> Result<&Socket> {
        match self.state {
            SocketState::Open => self.inner.as_ref().ok_or(NetError::NotOpen),
            _ => Err(NetError::NotOpen),
        }
    }
}
