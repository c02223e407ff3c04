//! # Ports Layer
//!
//! - `inbound`: what the subsystem offers (`ParamsProvider`)
//! - `outbound`: what it needs from the host (clock, entropy)

pub mod inbound;
pub mod outbound;

pub use inbound::ParamsProvider;
pub use outbound::{RandomSource, TimeSource};
