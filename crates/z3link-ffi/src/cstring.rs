//! Scoped ownership of C string buffers crossing the native boundary.

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;

use crate::error::StringError;

/// A NUL-terminated native copy of a Rust string, owned for the duration
/// of a native call.
///
/// The buffer is allocated eagerly at construction and freed exactly
/// once: either explicitly through [`release`](Self::release) or
/// automatically on drop. After release the wrapper holds a null
/// sentinel and further releases are no-ops.
///
/// The wrapped address must never be retained by native code beyond the
/// lifetime of this value; callers must ensure any native call using it
/// completes before the value goes out of scope. The type is move-only
/// and, holding a raw pointer, neither `Send` nor `Sync`.
#[derive(Debug)]
pub struct ScopedCString {
    ptr: *mut c_char,
}

impl ScopedCString {
    /// Allocates a native copy of `text` plus terminator.
    ///
    /// Interior NUL bytes cannot be represented in a C string and are
    /// rejected.
    pub fn new(text: &str) -> Result<Self, StringError> {
        let owned = CString::new(text).map_err(|err| StringError::InteriorNul {
            position: err.nul_position(),
        })?;
        Ok(Self {
            ptr: owned.into_raw(),
        })
    }

    /// The buffer address, for passing into a synchronous native call.
    /// Null once released.
    pub fn as_ptr(&self) -> *const c_char {
        self.ptr
    }

    /// True once the buffer has been freed.
    pub fn is_released(&self) -> bool {
        self.ptr.is_null()
    }

    /// Frees the buffer. Idempotent.
    pub fn release(&mut self) {
        if self.ptr.is_null() {
            return;
        }
        // Retake ownership; dropping the CString frees the allocation.
        drop(unsafe { CString::from_raw(self.ptr) });
        self.ptr = ptr::null_mut();
    }
}

impl Drop for ScopedCString {
    fn drop(&mut self) {
        self.release();
    }
}

/// Decodes a NUL-terminated string owned by the native library into an
/// owned `String`. Returns `None` for null.
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated buffer that
/// stays alive for the duration of this call.
pub unsafe fn owned_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let scoped = ScopedCString::new("hello").unwrap();
        let read_back = unsafe { CStr::from_ptr(scoped.as_ptr()) };
        assert_eq!(read_back.to_str().unwrap(), "hello");
        // Terminator present exactly where expected.
        assert_eq!(read_back.to_bytes_with_nul(), b"hello\0");
    }

    #[test]
    fn test_empty_string_is_non_null() {
        let scoped = ScopedCString::new("").unwrap();
        assert!(!scoped.as_ptr().is_null());
        let read_back = unsafe { CStr::from_ptr(scoped.as_ptr()) };
        assert_eq!(read_back.to_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_interior_nul_rejected() {
        let err = ScopedCString::new("ab\0cd").unwrap_err();
        assert_eq!(err, StringError::InteriorNul { position: 2 });
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut scoped = ScopedCString::new("once").unwrap();
        assert!(!scoped.is_released());
        scoped.release();
        assert!(scoped.is_released());
        assert!(scoped.as_ptr().is_null());
        // Second release must be a no-op, not a double free.
        scoped.release();
        assert!(scoped.is_released());
    }

    #[test]
    fn test_drop_after_explicit_release() {
        let mut scoped = ScopedCString::new("scoped").unwrap();
        scoped.release();
        drop(scoped);
    }

    #[test]
    fn test_non_ascii_round_trip() {
        let scoped = ScopedCString::new("tëst").unwrap();
        let read_back = unsafe { owned_string(scoped.as_ptr()) }.unwrap();
        assert_eq!(read_back, "tëst");
    }

    #[test]
    fn test_owned_string_null_is_none() {
        assert_eq!(unsafe { owned_string(std::ptr::null()) }, None);
    }
}
