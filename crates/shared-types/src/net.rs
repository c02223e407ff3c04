//! # Network Addresses
//!
//! Peer address entries as stored in the address book and handed out as
//! bootstrap seeds.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Service bit advertising a full node that serves blocks.
pub const NODE_NETWORK: u64 = 1;

/// A known peer address with the time it was last seen.
///
/// Addresses are kept in 16-byte form; IPv4 peers use the IPv4-mapped
/// (`::ffff:a.b.c.d`) representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerAddress {
    /// 16-byte address.
    pub ip: Ipv6Addr,
    /// TCP port.
    pub port: u16,
    /// Advertised service bits.
    pub services: u64,
    /// Unix time the peer was last seen.
    pub last_seen: u64,
}

impl PeerAddress {
    /// Full-node address from raw 16-byte form.
    pub fn new(addr: [u8; 16], port: u16, last_seen: u64) -> Self {
        Self {
            ip: Ipv6Addr::from(addr),
            port,
            services: NODE_NETWORK,
            last_seen,
        }
    }

    /// The address as a socket address, unwrapping IPv4-mapped form.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        };
        SocketAddr::new(ip, self.port)
    }

    /// Whether the address is IPv4-mapped.
    pub fn is_ipv4(&self) -> bool {
        self.ip.to_ipv4_mapped().is_some()
    }
}
