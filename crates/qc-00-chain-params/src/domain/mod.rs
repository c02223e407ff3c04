//! # Domain Layer
//!
//! Pure parameter construction: genesis blocks, seed conversion, the three
//! network definitions and the override tables that relate them.

pub mod chains;
pub mod error;
pub mod genesis;
pub mod network;
pub mod params;
pub mod seeds;

pub use chains::{build_all, main_params, regtest_params, testnet_params};
pub use error::{ChainParamsError, ConsensusConstant, Result};
pub use genesis::{assemble_genesis, build_genesis, coinbase_script, Genesis, GenesisSpec};
pub use network::{network_from_flags, Base58Prefixes, Base58Type, ConsensusPhase, Network};
pub use params::{overrides_for, ChainParams, ParamField, REGTEST_OVERRIDES, TESTNET_OVERRIDES};
pub use seeds::{convert_seeds, DnsSeed, SeedSpec6, ONE_WEEK};
