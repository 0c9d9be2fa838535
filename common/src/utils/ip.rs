// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Raw IP address value types.
//!
//! These carry the address bytes exactly as they come out of interface
//! lookup, with the rendering the counterpart tooling expects. Note that
//! [`Ipv6Octets`] deliberately does *not* render the conventional
//! compressed colon-hex-group form: it prints all sixteen octets as
//! two-digit hex, colon separated, matching the on-link debug output of
//! the RDMA tooling this reflector is paired with.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address family selector for resolution and interface lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddrFamily {
    /// Either family is acceptable.
    #[default]
    Unspec,
    V4,
    V6,
}

impl AddrFamily {
    pub fn matches(&self, addr: &IpAddr) -> bool {
        match self {
            AddrFamily::Unspec => true,
            AddrFamily::V4 => addr.is_ipv4(),
            AddrFamily::V6 => addr.is_ipv6(),
        }
    }
}

/// A raw IPv4 address, 4 octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ipv4Octets(pub [u8; 4]);

impl Ipv4Octets {
    /// Resets the address to all-zero.
    pub fn clear(&mut self) {
        self.0 = [0; 4];
    }
}

impl fmt::Display for Ipv4Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<Ipv4Addr> for Ipv4Octets {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Ipv4Octets> for Ipv4Addr {
    fn from(octets: Ipv4Octets) -> Self {
        Ipv4Addr::from(octets.0)
    }
}

/// A raw IPv6 address, 16 octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ipv6Octets(pub [u8; 16]);

impl Ipv6Octets {
    /// Resets the address to all-zero.
    pub fn clear(&mut self) {
        self.0 = [0; 16];
    }

    /// Stores an IPv4 address in the first 4 octets, zeroing the rest.
    pub fn from_ipv4(v4: Ipv4Octets) -> Self {
        let mut octets = [0u8; 16];
        octets[..4].copy_from_slice(&v4.0);
        Self(octets)
    }

    /// If the last 12 octets are all zero this value carries an embedded
    /// IPv4 address, and the embedded address is returned.
    pub fn embedded_ipv4(&self) -> Option<Ipv4Octets> {
        if self.0[4..].iter().any(|&b| b != 0) {
            return None;
        }
        let mut v4 = [0u8; 4];
        v4.copy_from_slice(&self.0[..4]);
        Some(Ipv4Octets(v4))
    }
}

impl fmt::Display for Ipv6Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{octet:02x}")?;
        }
        Ok(())
    }
}

impl From<Ipv6Addr> for Ipv6Octets {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Ipv6Octets> for Ipv6Addr {
    fn from(octets: Ipv6Octets) -> Self {
        Ipv6Addr::from(octets.0)
    }
}

/// Address bytes tagged by family.
///
/// Extraction from a generic address always goes through this enum; the
/// family tag decides which payload is present, never a reinterpretation
/// of raw memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpOctets {
    V4(Ipv4Octets),
    V6(Ipv6Octets),
}

impl IpOctets {
    pub fn family(&self) -> AddrFamily {
        match self {
            IpOctets::V4(_) => AddrFamily::V4,
            IpOctets::V6(_) => AddrFamily::V6,
        }
    }
}

impl From<IpAddr> for IpOctets {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => IpOctets::V4(v4.into()),
            IpAddr::V6(v6) => IpOctets::V6(v6.into()),
        }
    }
}

impl fmt::Display for IpOctets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpOctets::V4(v4) => v4.fmt(f),
            IpOctets::V6(v6) => v6.fmt(f),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
