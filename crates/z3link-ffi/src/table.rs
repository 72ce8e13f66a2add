//! The resolved symbol table: name-to-address mapping, built once and
//! frozen.

use std::collections::HashMap;

use tracing::{debug, trace, warn};
use z3link_core::catalog::{Category, Policy};

use crate::error::{LoadError, SymbolError};
use crate::module::{RawFn, SymbolSource};

/// Mapping from catalogued symbol name to resolved entry point.
///
/// Populated exactly once by [`load`](Self::load) and never mutated
/// afterwards; concurrent reads need no locking. A `None` entry records a
/// registered optional symbol the module does not export, so that a later
/// dispatch attempt can be told apart from a name that was never
/// catalogued at all.
#[derive(Debug)]
pub struct SymbolTable {
    entries: HashMap<&'static str, Option<RawFn>>,
}

impl SymbolTable {
    /// Resolves every catalogue entry against `source`.
    ///
    /// A missing required symbol fails the whole load, naming the symbol
    /// and its category; no partial table is produced. Missing optional
    /// symbols are recorded as unavailable and the load continues.
    pub fn load(catalog: &[Category], source: &dyn SymbolSource) -> Result<Self, LoadError> {
        let capacity = catalog.iter().map(|c| c.symbols.len()).sum();
        let mut entries = HashMap::with_capacity(capacity);

        for category in catalog {
            for spec in category.symbols {
                match source.resolve(spec.name) {
                    Some(addr) => {
                        entries.insert(spec.name, Some(addr));
                    }
                    None => match spec.policy {
                        Policy::Required => {
                            return Err(LoadError::MissingRequired {
                                symbol: spec.name,
                                category: category.name,
                            });
                        }
                        Policy::Optional => {
                            warn!(
                                symbol = spec.name,
                                category = category.name,
                                "optional Z3 entry point absent in this build"
                            );
                            entries.insert(spec.name, None);
                        }
                    },
                }
            }
            trace!(category = category.name, "category resolved");
        }

        let table = Self { entries };
        debug!(
            resolved = table.resolved_count(),
            unavailable = table.unavailable_count(),
            "Z3 symbol table loaded"
        );
        Ok(table)
    }

    /// The resolved address for a previously loaded symbol.
    pub fn address(&self, name: &str) -> Result<RawFn, SymbolError> {
        match self.entries.get(name) {
            None => Err(SymbolError::NotLoaded {
                name: name.to_owned(),
            }),
            Some(None) => Err(SymbolError::Unavailable {
                name: name.to_owned(),
            }),
            Some(Some(addr)) => Ok(*addr),
        }
    }

    /// True when `name` was catalogued and resolved to an address.
    pub fn is_available(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Some(_)))
    }

    /// Number of entries that resolved to an address.
    pub fn resolved_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_some()).count()
    }

    /// Number of registered-but-absent optional entries.
    pub fn unavailable_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_none()).count()
    }

    /// Total registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
