//! # Shared Types Crate
//!
//! Chain primitives shared by every subsystem: hashes, transactions, block
//! headers, scripts, the consensus encoding that feeds their hashes, merkle
//! trees, compact difficulty bits and peer addresses.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: hashing and serialization rules live here
//!   and nowhere else.
//! - **Pure Values**: no I/O, no global state; every routine is deterministic.

pub mod compact;
pub mod encoding;
pub mod entities;
pub mod errors;
pub mod hashing;
pub mod merkle;
pub mod net;
pub mod script;

pub use compact::{from_compact, limit_from_shift, to_compact};
pub use encoding::Encodable;
pub use entities::*;
pub use errors::*;
pub use merkle::{build_merkle_tree, merkle_root};
pub use net::{PeerAddress, NODE_NETWORK};
pub use script::Script;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;
