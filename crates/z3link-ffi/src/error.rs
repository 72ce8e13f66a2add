//! Error taxonomy for the binding layer.
//!
//! Every failure here is either fatal at load time or surfaced
//! synchronously to the immediate caller; nothing is retried. Errors
//! raised by Z3 itself travel out-of-band through the error-code and
//! error-message queries on the loaded library and are not translated.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a usable binding from a native module.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An explicitly named library path does not exist.
    #[error("Z3 library not found at {path}")]
    NotFound { path: PathBuf },

    /// The platform loader rejected the module.
    #[error("failed to load Z3 library {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// A mandatory entry point is absent. The library is incompatible and
    /// no partial binding is produced.
    #[error("Z3 library is missing required entry point `{symbol}` (category `{category}`)")]
    MissingRequired {
        symbol: &'static str,
        category: &'static str,
    },

    /// Automatic discovery exhausted every candidate path.
    #[error("{}", discovery_message(.searched, .attempts))]
    Discovery {
        /// Every candidate considered, in order.
        searched: Vec<PathBuf>,
        /// Candidates that existed (or were bare names) but failed to
        /// load, with the failure text.
        attempts: Vec<(PathBuf, String)>,
    },
}

fn discovery_message(searched: &[PathBuf], attempts: &[(PathBuf, String)]) -> String {
    let mut msg = format!(
        "could not automatically locate a Z3 library; searched {} paths",
        searched.len()
    );
    if !attempts.is_empty() {
        msg.push_str("; load attempts:");
        for (path, reason) in attempts {
            msg.push_str(&format!("\n  {}: {reason}", path.display()));
        }
    }
    msg.push_str(
        "\nensure Z3 is installed, or point Z3LINK_LIBRARY at the library, \
         or load an explicit path",
    );
    msg
}

/// Failure to dispatch through a catalogued entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// The name was never registered in the catalogue. This is a
    /// programming error in the binding (catalogue/dispatch mismatch),
    /// not a property of the loaded library.
    #[error("Z3 entry point `{name}` is not in the symbol catalogue")]
    NotLoaded { name: String },

    /// The name is catalogued as optional and the loaded library does
    /// not export it.
    #[error("Z3 entry point `{name}` is not available in the loaded library")]
    Unavailable { name: String },
}

/// Failure to marshal a Rust string across the native boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StringError {
    /// C strings are NUL-terminated; an interior NUL cannot be encoded.
    #[error("interior NUL byte at position {position} cannot cross the native boundary")]
    InteriorNul { position: usize },
}

/// Combined failure for convenience wrappers that marshal strings before
/// dispatching.
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    #[error(transparent)]
    String(#[from] StringError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_names_symbol_and_category() {
        let err = LoadError::MissingRequired {
            symbol: "Z3_mk_config",
            category: "context",
        };
        let msg = err.to_string();
        assert!(msg.contains("Z3_mk_config"));
        assert!(msg.contains("context"));
    }

    #[test]
    fn test_symbol_error_variants_are_distinct() {
        let not_loaded = SymbolError::NotLoaded {
            name: "Z3_whatever".into(),
        };
        let unavailable = SymbolError::Unavailable {
            name: "Z3_whatever".into(),
        };
        assert_ne!(not_loaded, unavailable);
        assert!(not_loaded.to_string().contains("catalogue"));
        assert!(unavailable.to_string().contains("not available"));
    }

    #[test]
    fn test_discovery_message_lists_attempts() {
        let err = LoadError::Discovery {
            searched: vec![PathBuf::from("libz3.so"), PathBuf::from("/usr/lib/libz3.so")],
            attempts: vec![(PathBuf::from("libz3.so"), "no such file".into())],
        };
        let msg = err.to_string();
        assert!(msg.contains("searched 2 paths"));
        assert!(msg.contains("libz3.so: no such file"));
        assert!(msg.contains("Z3LINK_LIBRARY"));
    }
}
