//! Platform search paths for locating the Z3 shared library.
//!
//! Pure path computation: this module decides *where to look*, in order.
//! Existence checks and the actual loading live in `z3link-ffi`.
//!
//! The `Z3LINK_LIBRARY` environment variable, when set, names an exact
//! library path and is tried before any platform default. Bare file names
//! (no directory component) are legitimate candidates: they are handed to
//! the platform loader, which applies its own search path.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming an exact Z3 library path, checked first.
pub const LIBRARY_ENV: &str = "Z3LINK_LIBRARY";

/// Ordered candidate paths for the current platform, honoring the
/// [`LIBRARY_ENV`] override.
pub fn search_paths() -> Vec<PathBuf> {
    search_paths_with(env::var_os(LIBRARY_ENV))
}

/// Same as [`search_paths`], with the env override passed in explicitly.
pub fn search_paths_with(override_path: Option<OsString>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = override_path {
        paths.push(PathBuf::from(path));
    }
    paths.extend(platform_paths());
    paths
}

#[cfg(target_os = "windows")]
fn platform_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("libz3.dll"), PathBuf::from("z3.dll")];
    for root in ["ProgramFiles", "ProgramFiles(x86)"]
        .iter()
        .filter_map(|key| env::var_os(key))
    {
        let bin = PathBuf::from(root).join("Z3").join("bin");
        paths.push(bin.join("libz3.dll"));
        paths.push(bin.join("z3.dll"));
    }
    paths
}

#[cfg(target_os = "macos")]
fn platform_paths() -> Vec<PathBuf> {
    [
        "libz3.dylib",
        "z3.dylib",
        // Apple Silicon Homebrew, then Intel Homebrew.
        "/opt/homebrew/opt/z3/lib/libz3.dylib",
        "/usr/local/opt/z3/lib/libz3.dylib",
        "/opt/homebrew/lib/libz3.dylib",
        "/usr/local/lib/libz3.dylib",
        "/usr/lib/libz3.dylib",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(target_os = "linux")]
fn platform_paths() -> Vec<PathBuf> {
    [
        "libz3.so",
        "z3.so",
        // Debian/Ubuntu multiarch.
        "/usr/lib/x86_64-linux-gnu/libz3.so",
        "/usr/lib/libz3.so",
        "/usr/lib64/libz3.so",
        "/usr/local/lib/libz3.so",
        "/opt/z3/lib/libz3.so",
        "/snap/z3/current/lib/libz3.so",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn platform_paths() -> Vec<PathBuf> {
    ["libz3.so", "libz3.dylib", "libz3.dll"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_comes_first() {
        let paths = search_paths_with(Some(OsString::from("/tmp/custom/libz3.so")));
        assert_eq!(paths[0], PathBuf::from("/tmp/custom/libz3.so"));
        assert!(paths.len() > 1);
    }

    #[test]
    fn test_no_override_starts_with_bare_name() {
        let paths = search_paths_with(None);
        let first = paths.first().expect("platform list is never empty");
        // A bare file name so the platform loader applies its own search.
        assert!(first.parent().is_some_and(|p| p.as_os_str().is_empty()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_candidates_are_shared_objects() {
        for path in search_paths_with(None) {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            assert!(name.ends_with(".so"), "unexpected candidate {name}");
        }
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_macos_candidates_are_dylibs() {
        for path in search_paths_with(None) {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            assert!(name.ends_with(".dylib"), "unexpected candidate {name}");
        }
    }

    #[test]
    fn test_candidates_unique() {
        let paths = search_paths_with(None);
        let mut unique = paths.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), paths.len());
    }
}
