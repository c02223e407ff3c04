//! # Bootstrap Seeds
//!
//! Compact seed records compiled into the binary, and their conversion into
//! address book entries.
//!
//! Converted seeds get a last-seen time between one and two weeks in the
//! past. The node contacts one or two of them, learns fresher addresses from
//! their peers, and the seeds then sink to the bottom of the address book.

use shared_types::PeerAddress;

use crate::ports::{RandomSource, TimeSource};

/// Seconds in one week.
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// A compiled-in seed: 16-byte address (IPv4-mapped or IPv6) and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    /// Address in 16-byte form.
    pub addr: [u8; 16],
    /// TCP port.
    pub port: u16,
}

impl SeedSpec6 {
    /// Seed for an IPv4 address, stored IPv4-mapped.
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let mut addr = [0u8; 16];
        addr[10] = 0xff;
        addr[11] = 0xff;
        addr[12] = octets[0];
        addr[13] = octets[1];
        addr[14] = octets[2];
        addr[15] = octets[3];
        Self { addr, port }
    }
}

/// A DNS seed: display name and host to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsSeed {
    /// Operator name.
    pub name: String,
    /// Host name.
    pub host: String,
}

/// Fixed seeds for the production network.
pub const MAIN_SEEDS: &[SeedSpec6] = &[];

/// Fixed seeds for the public test network.
pub const TESTNET_SEEDS: &[SeedSpec6] = &[];

/// Convert compact seed records into address entries with stale timestamps.
///
/// Each entry's last-seen time is `now - (rand_below(ONE_WEEK) + ONE_WEEK)`.
/// One entropy draw per record; an empty input reads neither source.
pub fn convert_seeds(
    seeds: &[SeedSpec6],
    clock: &dyn TimeSource,
    rng: &dyn RandomSource,
) -> Vec<PeerAddress> {
    if seeds.is_empty() {
        return Vec::new();
    }

    let now = clock.now();
    seeds
        .iter()
        .map(|seed| {
            let age = rng.rand_below(ONE_WEEK) + ONE_WEEK;
            PeerAddress::new(seed.addr, seed.port, now.saturating_sub(age))
        })
        .collect()
}
