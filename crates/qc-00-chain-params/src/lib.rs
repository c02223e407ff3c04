//! # Chain Parameters Subsystem
//!
//! **Subsystem ID:** 0
//!
//! Compiled-in consensus parameters for the three operating modes of the
//! node (production, public test, local regression test) and the single
//! active selection every other subsystem reads.
//!
//! ## Architecture
//!
//! - **Domain Layer:** genesis construction and self-check, seed
//!   conversion, value-based derivation of the three networks
//! - **Ports Layer:** `ParamsProvider` (inbound), `TimeSource` and
//!   `RandomSource` (outbound)
//! - **Adapters Layer:** system/fixed clocks, thread/fixed/seeded entropy
//! - **Service Layer:** `ParamsRegistry` and the process-wide context
//!
//! ## Example
//!
//! ```rust
//! use qc_00_chain_params::{Network, ParamsProvider, ParamsRegistry};
//!
//! let registry = ParamsRegistry::with_system_sources().unwrap();
//! assert_eq!(registry.active_network(), Network::Main);
//!
//! registry.select_from_flags(false, true).unwrap();
//! assert_eq!(registry.active_params().default_port(), 5444);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{
    network_from_flags, Base58Type, ChainParams, ChainParamsError, ConsensusConstant,
    ConsensusPhase, GenesisSpec, Network, ParamField, Result, SeedSpec6,
};
pub use ports::{ParamsProvider, RandomSource, TimeSource};
pub use service::{active_params, global, init_global, ParamsRegistry};
