//! # Parameter Registry
//!
//! Owns the three parameter sets and the reference to the active one.
//!
//! The active reference lives in an [`ArcSwap`], so a re-selection is a
//! single atomic pointer store and readers always see a complete set.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, info};

use crate::adapters::{SystemTimeSource, ThreadRngSource};
use crate::domain::{
    build_all, network_from_flags, overrides_for, ChainParams, ChainParamsError, Network,
    Result,
};
use crate::ports::{ParamsProvider, RandomSource, TimeSource};

/// Holds every network's parameters and tracks which one is active.
///
/// Starts with [`Network::Main`] active.
#[derive(Debug)]
pub struct ParamsRegistry {
    main: Arc<ChainParams>,
    testnet: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    active: ArcSwap<ChainParams>,
}

impl ParamsRegistry {
    /// Build all networks using the given clock and entropy for seed timestamps.
    ///
    /// Any error here is a broken build; see [`ChainParamsError::is_fatal`].
    pub fn new(clock: &dyn TimeSource, rng: &dyn RandomSource) -> Result<Self> {
        Self::from_params(build_all(clock, rng)?)
    }

    /// Build all networks with the system clock and thread RNG.
    pub fn with_system_sources() -> Result<Self> {
        Self::new(&SystemTimeSource::new(), &ThreadRngSource)
    }

    /// Assemble a registry from prebuilt sets, given in `Network::ALL` order.
    ///
    /// Checks that each set sits in its own slot, passes validation, and
    /// that no two networks share a message start.
    pub fn from_params(sets: [ChainParams; 3]) -> Result<Self> {
        for (expected, params) in Network::ALL.iter().zip(sets.iter()) {
            if params.network() != *expected {
                return Err(ChainParamsError::NetworkSlotMismatch {
                    expected: *expected,
                    found: params.network(),
                });
            }
            params.validate()?;
        }

        for (i, a) in sets.iter().enumerate() {
            for b in &sets[i + 1..] {
                if a.message_start() == b.message_start() {
                    return Err(ChainParamsError::DuplicateMessageStart {
                        first: a.network(),
                        second: b.network(),
                        magic: hex::encode(a.message_start()),
                    });
                }
            }
        }

        let [main, testnet, regtest] = sets;
        log_overrides(&main, &testnet);
        log_overrides(&testnet, &regtest);

        let main = Arc::new(main);
        Ok(Self {
            active: ArcSwap::new(Arc::clone(&main)),
            main,
            testnet: Arc::new(testnet),
            regtest: Arc::new(regtest),
        })
    }

    /// Parameters for `network`, regardless of which is active.
    pub fn params(&self, network: Network) -> Arc<ChainParams> {
        Arc::clone(self.slot(network))
    }

    fn slot(&self, network: Network) -> &Arc<ChainParams> {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
        }
    }
}

impl ParamsProvider for ParamsRegistry {
    fn active_params(&self) -> Arc<ChainParams> {
        self.active.load_full()
    }

    fn active_network(&self) -> Network {
        self.active.load().network()
    }

    fn select_network(&self, network: Network) {
        self.active.store(Arc::clone(self.slot(network)));
        info!(%network, "Selected chain parameters");
    }

    fn select_from_flags(&self, testnet: bool, regtest: bool) -> Result<Network> {
        let network = network_from_flags(testnet, regtest)?;
        self.select_network(network);
        Ok(network)
    }
}

fn log_overrides(parent: &ChainParams, child: &ChainParams) {
    let changed = parent.field_diff(child);
    let allowed = overrides_for(child.network());
    let undocumented: Vec<_> = changed.iter().filter(|f| !allowed.contains(*f)).collect();
    debug!(
        parent = %parent.network(),
        child = %child.network(),
        ?changed,
        ?undocumented,
        "Derived parameter overrides"
    );
}
