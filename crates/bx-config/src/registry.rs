//! Process-wide configuration slot.
//!
//! Prefer passing a [`ConfigState`] (or `Arc<ConfigState>`) to the code that
//! needs it. This registry exists for call sites at the application boundary
//! that cannot be handed one.
//!
//! The slot moves one way, from empty to set. Only [`reset`] empties it
//! again, and that is meant for test isolation.

use std::sync::{Arc, PoisonError, RwLock};

use bx_common::{Error, Result};
use tracing::{debug, info};

use crate::loader::ConfigLoader;
use crate::source::ConfigSource;
use crate::state::ConfigState;

static SLOT: RwLock<Option<Arc<ConfigState>>> = RwLock::new(None);

/// Initialize the process configuration with a strict loader.
pub fn initialize(source: &dyn ConfigSource) -> Result<Arc<ConfigState>> {
    initialize_with(&ConfigLoader::strict(), source)
}

/// Initialize the process configuration with an explicit loader.
///
/// Fails with [`Error::AlreadyInitialized`] if a configuration is already
/// registered; the existing one is left untouched. The source is read with
/// no lock held, so a source may itself call [`current`]. The slot is
/// re-checked under the write lock before storing, so concurrent callers
/// see exactly one winner.
pub fn initialize_with(
    loader: &ConfigLoader,
    source: &dyn ConfigSource,
) -> Result<Arc<ConfigState>> {
    if is_initialized() {
        return Err(Error::AlreadyInitialized);
    }

    let state = Arc::new(loader.load(source)?);

    {
        let mut slot = SLOT.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        *slot = Some(Arc::clone(&state));
    }

    info!(
        software_type = %state.software_type(),
        build_type = %state.build_type(),
        expiry = %state.expiry_date_text(),
        "build configuration initialized"
    );
    Ok(state)
}

/// The registered configuration, if initialization has succeeded.
pub fn current() -> Option<Arc<ConfigState>> {
    SLOT.read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone)
}

/// True once a configuration is registered.
pub fn is_initialized() -> bool {
    current().is_some()
}

/// Empty the slot, returning what was there.
pub fn reset() -> Option<Arc<ConfigState>> {
    let previous = SLOT.write().unwrap_or_else(PoisonError::into_inner).take();
    debug!(was_initialized = previous.is_some(), "build configuration reset");
    previous
}
