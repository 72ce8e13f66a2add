//! The typed call surface over a loaded Z3 library.
//!
//! One file per API category, mirroring the section layout of the
//! catalogue. Raw wrappers forward native values unmodified; a handful
//! of manual wrappers beside them reinterpret tri-state/enum returns and
//! marshal `&str` arguments.

mod context;
mod diagnostics;
mod errors;
mod exprs;
mod model;
mod quantifiers;
mod simplify;
mod solver;
mod sorts;
mod strings;
mod substitution;

use std::path::{Path, PathBuf};

use tracing::debug;
use z3link_core::{catalog, discovery};

use crate::error::LoadError;
use crate::module::{SharedModule, SymbolSource};
use crate::table::SymbolTable;

/// A loaded Z3 library with its resolved symbol table.
///
/// Construction resolves the whole catalogue up front; afterwards the
/// value is read-only and freely shareable across threads. Dropping it
/// unloads the module and invalidates every handle obtained through it.
pub struct Z3Lib {
    table: SymbolTable,
    path: PathBuf,
    // Keeps the entry points in `table` valid; dropped last.
    _module: Box<dyn SymbolSource + Send + Sync>,
}

impl Z3Lib {
    /// Loads the Z3 library at `path` and resolves the catalogue.
    ///
    /// Paths with a directory component must exist; bare file names are
    /// handed to the platform loader, which applies its own search path.
    /// Any failure tears the module down again; no partial binding is
    /// produced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let has_dir = path.parent().is_some_and(|p| !p.as_os_str().is_empty());
        if has_dir && !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::from_module(SharedModule::open(path)?)
    }

    /// Tries every discovery candidate in order, returning the first
    /// library that loads with all required symbols present. The error
    /// lists every failed attempt.
    pub fn load_auto() -> Result<Self, LoadError> {
        let searched = discovery::search_paths();
        let mut attempts = Vec::new();

        for candidate in &searched {
            let has_dir = candidate
                .parent()
                .is_some_and(|p| !p.as_os_str().is_empty());
            if has_dir && !candidate.exists() {
                continue;
            }
            match Self::load(candidate) {
                Ok(lib) => return Ok(lib),
                Err(err) => attempts.push((candidate.clone(), err.to_string())),
            }
        }

        Err(LoadError::Discovery { searched, attempts })
    }

    /// Builds the binding over an already-opened module.
    pub fn from_module(module: SharedModule) -> Result<Self, LoadError> {
        let label = module.path().to_path_buf();
        Self::from_source(module, label)
    }

    /// Builds the binding over an externally supplied symbol source.
    ///
    /// The source must keep every resolved entry point valid for the
    /// lifetime of the returned value; `label` stands in for a library
    /// path in diagnostics.
    pub fn from_source<S>(source: S, label: impl Into<PathBuf>) -> Result<Self, LoadError>
    where
        S: SymbolSource + Send + Sync + 'static,
    {
        let table = SymbolTable::load(catalog::CATALOG, &source)?;
        let path = label.into();
        debug!(
            path = %path.display(),
            resolved = table.resolved_count(),
            unavailable = table.unavailable_count(),
            "Z3 binding ready"
        );
        Ok(Self {
            table,
            path,
            _module: Box::new(source),
        })
    }

    /// The path (or label) the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Availability query for optional entry points; check before
    /// dispatching through a symbol catalogued as optional.
    pub fn is_available(&self, name: &str) -> bool {
        self.table.is_available(name)
    }

    /// The frozen symbol table.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }
}

impl std::fmt::Debug for Z3Lib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Z3Lib")
            .field("path", &self.path)
            .field("resolved", &self.table.resolved_count())
            .field("unavailable", &self.table.unavailable_count())
            .finish()
    }
}
