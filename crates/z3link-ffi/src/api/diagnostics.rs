//! Version and build information.

use libc::{c_char, c_uint};

use super::Z3Lib;
use crate::error::SymbolError;

impl Z3Lib {
    native_fn! {
        fn get_version_raw["Z3_get_version"](
            major: *mut c_uint,
            minor: *mut c_uint,
            build: *mut c_uint,
            revision: *mut c_uint,
        );

        /// Native-owned full version string, including build metadata.
        fn get_full_version["Z3_get_full_version"]() -> *const c_char;
    }

    /// The loaded library's version as `(major, minor, build, revision)`.
    pub fn version(&self) -> Result<(u32, u32, u32, u32), SymbolError> {
        let (mut major, mut minor, mut build, mut revision) = (0, 0, 0, 0);
        unsafe { self.get_version_raw(&mut major, &mut minor, &mut build, &mut revision) }?;
        Ok((major, minor, build, revision))
    }
}
