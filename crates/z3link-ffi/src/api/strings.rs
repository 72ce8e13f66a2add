//! String-marshaling convenience wrappers.
//!
//! Each wrapper allocates [`ScopedCString`] buffers for its `&str`
//! arguments, dispatches the synchronous native call, and lets the
//! buffers release at scope exit. Returned C strings are owned by the
//! native library and copied out immediately.

use super::Z3Lib;
use crate::cstring::{self, ScopedCString};
use crate::error::{CallError, SymbolError};
use crate::types::{ErrorCode, Z3Ast, Z3Config, Z3Context, Z3Model, Z3Solver, Z3Sort, Z3Symbol};

impl Z3Lib {
    /// [`set_param_value`](Self::set_param_value) over Rust strings.
    pub unsafe fn set_param_value_str(
        &self,
        cfg: Z3Config,
        param_id: &str,
        param_value: &str,
    ) -> Result<(), CallError> {
        let param_id = ScopedCString::new(param_id)?;
        let param_value = ScopedCString::new(param_value)?;
        unsafe { self.set_param_value(cfg, param_id.as_ptr(), param_value.as_ptr()) }?;
        Ok(())
    }

    /// [`update_param_value`](Self::update_param_value) over Rust strings.
    pub unsafe fn update_param_value_str(
        &self,
        ctx: Z3Context,
        param_id: &str,
        param_value: &str,
    ) -> Result<(), CallError> {
        let param_id = ScopedCString::new(param_id)?;
        let param_value = ScopedCString::new(param_value)?;
        unsafe { self.update_param_value(ctx, param_id.as_ptr(), param_value.as_ptr()) }?;
        Ok(())
    }

    /// [`mk_string_symbol`](Self::mk_string_symbol) over a Rust string.
    pub unsafe fn mk_string_symbol_str(
        &self,
        ctx: Z3Context,
        name: &str,
    ) -> Result<Z3Symbol, CallError> {
        let name = ScopedCString::new(name)?;
        Ok(unsafe { self.mk_string_symbol(ctx, name.as_ptr()) }?)
    }

    /// [`mk_numeral`](Self::mk_numeral) over a Rust string.
    pub unsafe fn mk_numeral_str(
        &self,
        ctx: Z3Context,
        numeral: &str,
        sort: Z3Sort,
    ) -> Result<Z3Ast, CallError> {
        let numeral = ScopedCString::new(numeral)?;
        Ok(unsafe { self.mk_numeral(ctx, numeral.as_ptr(), sort) }?)
    }

    /// Owned copy of the model's textual rendering.
    pub unsafe fn model_to_string_owned(
        &self,
        ctx: Z3Context,
        model: Z3Model,
    ) -> Result<Option<String>, SymbolError> {
        let ptr = unsafe { self.model_to_string(ctx, model) }?;
        Ok(unsafe { cstring::owned_string(ptr) })
    }

    /// Owned copy of an AST's textual rendering.
    pub unsafe fn ast_to_string_owned(
        &self,
        ctx: Z3Context,
        ast: Z3Ast,
    ) -> Result<Option<String>, SymbolError> {
        let ptr = unsafe { self.ast_to_string(ctx, ast) }?;
        Ok(unsafe { cstring::owned_string(ptr) })
    }

    /// Owned copy of a numeral's decimal rendering.
    pub unsafe fn numeral_string_owned(
        &self,
        ctx: Z3Context,
        expr: Z3Ast,
    ) -> Result<Option<String>, SymbolError> {
        let ptr = unsafe { self.get_numeral_string(ctx, expr) }?;
        Ok(unsafe { cstring::owned_string(ptr) })
    }

    /// Owned copy of the solver's reason-unknown string.
    pub unsafe fn reason_unknown_owned(
        &self,
        ctx: Z3Context,
        solver: Z3Solver,
    ) -> Result<Option<String>, SymbolError> {
        let ptr = unsafe { self.solver_get_reason_unknown(ctx, solver) }?;
        Ok(unsafe { cstring::owned_string(ptr) })
    }

    /// Owned copy of the description of an error code.
    pub unsafe fn error_msg_owned(
        &self,
        ctx: Z3Context,
        code: ErrorCode,
    ) -> Result<Option<String>, SymbolError> {
        let ptr = unsafe { self.get_error_msg(ctx, code as i32) }?;
        Ok(unsafe { cstring::owned_string(ptr) })
    }

    /// Owned copy of the full version string.
    pub fn full_version_owned(&self) -> Result<Option<String>, SymbolError> {
        let ptr = unsafe { self.get_full_version() }?;
        Ok(unsafe { cstring::owned_string(ptr) })
    }
}
