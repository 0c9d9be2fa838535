// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Address resolution.
//!
//! Everything here returns flat [`SocketAddr`] values; the pointer-bearing
//! OS structures behind `getaddrinfo` never escape the standard library,
//! so there is nothing to free and no partially-filled result a caller
//! could misuse. Failures are typed errors, never sentinel values.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs};

use reflektor_common::utils::ip::AddrFamily;

use super::error::{NetError, Result};

/// Resolves an address suitable for binding a listening socket.
///
/// An empty `bind_to` selects the wildcard address of the requested
/// family, i.e. the socket will accept datagrams on every interface.
/// `Unspec` falls back to the IPv4 wildcard.
pub fn resolve_local(port: u16, bind_to: &str, family: AddrFamily) -> Result<SocketAddr> {
    if bind_to.is_empty() {
        let ip = match family {
            AddrFamily::V6 => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
            _ => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        return Ok(SocketAddr::new(ip, port));
    }

    resolve_remote(bind_to, port, family)
}

/// Resolves a host name or numeric address for sending or binding.
///
/// The first resolved address matching `family` wins.
pub fn resolve_remote(host: &str, port: u16, family: AddrFamily) -> Result<SocketAddr> {
    let mut candidates = (host, port)
        .to_socket_addrs()
        .map_err(|_| NetError::Unresolvable {
            host: host.to_string(),
        })?;

    candidates
        .find(|addr| family.matches(&addr.ip()))
        .ok_or_else(|| NetError::NoMatchingAddress {
            family,
            host: host.to_string(),
        })
}

/// Renders the IP portion of an address as numeric text: no port, no
/// reverse lookup, and no zone-index suffix (the scope id of a
/// link-local IPv6 address is held separately and never printed).
pub fn address_to_text(addr: &SocketAddr) -> String {
    addr.ip().to_string()
}
