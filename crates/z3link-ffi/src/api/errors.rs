//! Native-side error management.
//!
//! The binding does not interpret Z3's error semantics; it only exposes
//! the code/message queries and handler registration. A registered
//! handler keeps Z3's default abort-on-error behavior from killing the
//! process.

use libc::{c_char, c_int};

use super::Z3Lib;
use crate::error::SymbolError;
use crate::types::{ErrorCode, ErrorHandler, Z3Context};

impl Z3Lib {
    native_fn! {
        fn get_error_code_raw["Z3_get_error_code"](ctx: Z3Context) -> c_int;

        /// Native-owned description of an error code.
        fn get_error_msg["Z3_get_error_msg"](
            ctx: Z3Context,
            error_code: c_int,
        ) -> *const c_char;

        /// Registers an error callback; `None` restores Z3's default
        /// behavior. The callback is invoked on the thread of the
        /// failing call and must not unwind.
        fn set_error_handler["Z3_set_error_handler"](
            ctx: Z3Context,
            handler: Option<ErrorHandler>,
        );

        /// Manually flags an error on the context.
        fn set_error["Z3_set_error"](ctx: Z3Context, error_code: c_int);
    }

    /// The error code of the last operation on `ctx`, reinterpreted.
    pub unsafe fn get_error_code(&self, ctx: Z3Context) -> Result<ErrorCode, SymbolError> {
        Ok(ErrorCode::from_raw(unsafe {
            self.get_error_code_raw(ctx)
        }?))
    }
}
