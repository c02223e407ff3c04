//! # Process-Wide Context
//!
//! One registry per process, installed once during startup and read by
//! every subsystem afterwards. Tests that need isolation construct their own
//! [`ParamsRegistry`] instead.

use std::sync::{Arc, OnceLock};

use crate::domain::{ChainParams, ChainParamsError, Result};
use crate::ports::ParamsProvider;

use super::registry::ParamsRegistry;

static REGISTRY: OnceLock<ParamsRegistry> = OnceLock::new();

/// Install the process-wide registry.
///
/// Fails with [`ChainParamsError::AlreadyInitialized`] on a second call.
pub fn init_global(registry: ParamsRegistry) -> Result<&'static ParamsRegistry> {
    REGISTRY
        .set(registry)
        .map_err(|_| ChainParamsError::AlreadyInitialized)?;
    global()
}

/// The process-wide registry.
pub fn global() -> Result<&'static ParamsRegistry> {
    REGISTRY.get().ok_or(ChainParamsError::NotInitialized)
}

/// Active parameters of the process-wide registry.
pub fn active_params() -> Result<Arc<ChainParams>> {
    Ok(global()?.active_params())
}
