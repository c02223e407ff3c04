//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod random;
pub mod time;

pub use random::{FixedRandomSource, SeededRandomSource, ThreadRngSource};
pub use time::{FixedTimeSource, SystemTimeSource};
