//! Native module handles and the symbol resolution seam.

use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::trace;

use crate::error::LoadError;

/// An erased native entry point. Non-null by construction; cast to the
/// statically-known signature at dispatch time.
pub type RawFn = unsafe extern "C" fn();

/// Anything symbols can be resolved from.
///
/// The real implementation is [`SharedModule`]; tests substitute a table
/// of fake entry points. Implementors must keep every resolved address
/// valid for as long as they are alive.
pub trait SymbolSource {
    /// Resolves `name`, or `None` if the module does not export it.
    fn resolve(&self, name: &str) -> Option<RawFn>;
}

/// A loaded native shared library and the path it came from.
///
/// The library stays mapped until this value is dropped; every address
/// resolved from it is invalidated by the unload.
pub struct SharedModule {
    lib: Library,
    path: PathBuf,
}

impl SharedModule {
    /// Loads the shared library at `path` via the platform loader. Bare
    /// file names are resolved through the loader's own search path.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let lib = unsafe { Library::new(path) }.map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(path = %path.display(), "opened native module");
        Ok(Self {
            lib,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SymbolSource for SharedModule {
    fn resolve(&self, name: &str) -> Option<RawFn> {
        // libloading appends the trailing NUL itself when missing.
        let symbol = unsafe { self.lib.get::<RawFn>(name.as_bytes()) }.ok()?;
        Some(*symbol)
    }
}

impl std::fmt::Debug for SharedModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedModule")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
