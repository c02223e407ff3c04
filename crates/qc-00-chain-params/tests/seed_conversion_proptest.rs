//! Property tests for seed conversion.

use proptest::prelude::*;
use qc_00_chain_params::adapters::{FixedTimeSource, SeededRandomSource};
use qc_00_chain_params::domain::{convert_seeds, ONE_WEEK};
use qc_00_chain_params::SeedSpec6;

fn seed_strategy() -> impl Strategy<Value = SeedSpec6> {
    (any::<[u8; 16]>(), any::<u16>()).prop_map(|(addr, port)| SeedSpec6 { addr, port })
}

proptest! {
    #[test]
    fn timestamps_fall_between_one_and_two_weeks_ago(
        seeds in proptest::collection::vec(seed_strategy(), 0..64),
        now in (2 * ONE_WEEK)..u64::from(u32::MAX),
        rng_seed in any::<u64>(),
    ) {
        let out = convert_seeds(&seeds, &FixedTimeSource(now), &SeededRandomSource::new(rng_seed));
        prop_assert_eq!(out.len(), seeds.len());
        for entry in &out {
            prop_assert!(entry.last_seen >= now - 2 * ONE_WEEK);
            prop_assert!(entry.last_seen <= now - ONE_WEEK);
        }
    }

    #[test]
    fn order_and_endpoints_preserved(seeds in proptest::collection::vec(seed_strategy(), 0..32)) {
        let clock = FixedTimeSource(1_700_000_000);
        let out = convert_seeds(&seeds, &clock, &SeededRandomSource::new(1));
        for (seed, entry) in seeds.iter().zip(&out) {
            prop_assert_eq!(entry.ip.octets(), seed.addr);
            prop_assert_eq!(entry.port, seed.port);
        }
    }
}
