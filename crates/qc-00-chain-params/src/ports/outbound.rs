//! # Driven Ports (Outbound Dependencies)
//!
//! Host services the subsystem depends on. Both are injected so seed
//! conversion stays deterministic under test.

/// Wall clock in Unix seconds.
pub trait TimeSource: Send + Sync {
    /// Current Unix time in seconds.
    fn now(&self) -> u64;
}

/// Uniform entropy source.
pub trait RandomSource: Send + Sync {
    /// A value drawn uniformly from `[0, max)`. Returns 0 when `max` is 0.
    fn rand_below(&self, max: u64) -> u64;
}
