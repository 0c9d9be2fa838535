// Copyright (c) 2026 Reflektor Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Network interface lookup.
//!
//! The reflector only ever needs two things from the interface table:
//! the raw address of a specific, exactly-named interface, and the set
//! of interfaces that could plausibly carry the rebroadcast traffic.

use pnet::datalink::{self, NetworkInterface};

use crate::utils::ip::{AddrFamily, IpOctets};

/// Returns the raw address bytes of the interface whose name matches
/// `name` exactly and which carries an address of the requested family.
/// The first matching address wins; `None` if no interface qualifies.
pub fn find_interface_address(name: &str, family: AddrFamily) -> Option<IpOctets> {
    find_in(&datalink::interfaces(), name, family)
}

/// Interfaces that are up, broadcast-capable and not loopback, i.e. the
/// candidates for actually delivering a subnet broadcast.
pub fn broadcast_interfaces() -> Vec<NetworkInterface> {
    datalink::interfaces()
        .into_iter()
        .filter(is_broadcast_candidate)
        .collect()
}

fn find_in(interfaces: &[NetworkInterface], name: &str, family: AddrFamily) -> Option<IpOctets> {
    let interface = interfaces.iter().find(|intf| intf.name == name)?;

    interface
        .ips
        .iter()
        .map(|net| net.ip())
        .find(|ip| family.matches(ip))
        .map(IpOctets::from)
}

fn is_broadcast_candidate(intf: &NetworkInterface) -> bool {
    intf.is_up() && intf.is_broadcast() && !intf.is_loopback() && !intf.ips.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::ipnetwork::IpNetwork;

    const IFF_UP: u32 = 1;
    const IFF_BROADCAST: u32 = 1 << 1;
    const IFF_LOOPBACK: u32 = 1 << 3;

    fn mock_interface(name: &str, ips: Vec<IpNetwork>, flags: u32) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: String::new(),
            index: 0,
            mac: None,
            ips,
            flags,
        }
    }

    fn dual_stack() -> Vec<IpNetwork> {
        vec![
            IpNetwork::V4("192.168.7.2/24".parse().unwrap()),
            IpNetwork::V6("fe80::1/64".parse().unwrap()),
        ]
    }

    #[test]
    fn finds_address_by_exact_name() {
        let interfaces = vec![
            mock_interface("eth0", dual_stack(), IFF_UP | IFF_BROADCAST),
            mock_interface("eth1", vec![], IFF_UP | IFF_BROADCAST),
        ];

        let found = find_in(&interfaces, "eth0", AddrFamily::V4).unwrap();
        assert_eq!(found.to_string(), "192.168.7.2");
    }

    #[test]
    fn name_must_match_exactly() {
        let interfaces = vec![mock_interface("eth0", dual_stack(), IFF_UP)];
        assert!(find_in(&interfaces, "eth", AddrFamily::V4).is_none());
        assert!(find_in(&interfaces, "eth00", AddrFamily::V4).is_none());
    }

    #[test]
    fn family_filters_addresses() {
        let interfaces = vec![mock_interface("eth0", dual_stack(), IFF_UP)];

        let v6 = find_in(&interfaces, "eth0", AddrFamily::V6).unwrap();
        assert_eq!(v6.family(), AddrFamily::V6);

        // Unspec takes whatever comes first.
        let any = find_in(&interfaces, "eth0", AddrFamily::Unspec).unwrap();
        assert_eq!(any.family(), AddrFamily::V4);
    }

    #[test]
    fn missing_family_yields_none() {
        let v4_only = vec![IpNetwork::V4("10.0.0.5/8".parse().unwrap())];
        let interfaces = vec![mock_interface("eth0", v4_only, IFF_UP)];
        assert!(find_in(&interfaces, "eth0", AddrFamily::V6).is_none());
    }

    #[test]
    fn loopback_is_not_a_broadcast_candidate() {
        let lo = mock_interface(
            "lo",
            vec![IpNetwork::V4("127.0.0.1/8".parse().unwrap())],
            IFF_UP | IFF_BROADCAST | IFF_LOOPBACK,
        );
        assert!(!is_broadcast_candidate(&lo));
    }

    #[test]
    fn down_or_non_broadcast_interfaces_are_skipped() {
        let down = mock_interface("eth0", dual_stack(), IFF_BROADCAST);
        let p2p = mock_interface("tun0", dual_stack(), IFF_UP);
        let good = mock_interface("eth1", dual_stack(), IFF_UP | IFF_BROADCAST);

        assert!(!is_broadcast_candidate(&down));
        assert!(!is_broadcast_candidate(&p2p));
        assert!(is_broadcast_candidate(&good));
    }

    #[test]
    fn find_interface_address_absent_name() {
        assert!(find_interface_address("definitely-not-a-real-iface0", AddrFamily::Unspec).is_none());
    }
}
