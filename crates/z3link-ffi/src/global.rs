//! Process-wide default library slot.
//!
//! Most programs load exactly one Z3 library; the default slot lets call
//! sites share it without threading an `Arc` everywhere. The slot is
//! write-once in practice (first writer wins in
//! [`default_or_load`]) but can be replaced or cleared explicitly.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::Z3Lib;
use crate::error::LoadError;

static DEFAULT_LIBRARY: RwLock<Option<Arc<Z3Lib>>> = RwLock::new(None);

/// Installs `library` as the process default, returning the previous one.
pub fn set_default(library: Arc<Z3Lib>) -> Option<Arc<Z3Lib>> {
    DEFAULT_LIBRARY.write().replace(library)
}

/// Removes and returns the current default.
pub fn take_default() -> Option<Arc<Z3Lib>> {
    DEFAULT_LIBRARY.write().take()
}

/// The current default, if any.
pub fn get_default() -> Option<Arc<Z3Lib>> {
    DEFAULT_LIBRARY.read().clone()
}

/// The current default, loading one via discovery when the slot is
/// empty. If two threads race the load, the first writer wins and the
/// loser's library is dropped.
pub fn default_or_load() -> Result<Arc<Z3Lib>, LoadError> {
    if let Some(library) = get_default() {
        return Ok(library);
    }
    let loaded = Arc::new(Z3Lib::load_auto()?);
    let mut slot = DEFAULT_LIBRARY.write();
    Ok(slot.get_or_insert_with(|| loaded).clone())
}
