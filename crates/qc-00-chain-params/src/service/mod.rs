//! # Service Layer
//!
//! The registry holding all three parameter sets and the process-wide
//! context that exposes one of them.

pub mod global;
pub mod registry;

pub use global::{active_params, global, init_global};
pub use registry::ParamsRegistry;
