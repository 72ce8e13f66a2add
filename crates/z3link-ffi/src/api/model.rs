//! Model inspection and value extraction.

use std::ptr;

use libc::{c_char, c_int};

use super::Z3Lib;
use crate::error::SymbolError;
use crate::types::{Lbool, SortKind, Z3Ast, Z3Context, Z3Model, Z3Sort};

impl Z3Lib {
    native_fn! {
        fn model_inc_ref["Z3_model_inc_ref"](ctx: Z3Context, model: Z3Model);

        fn model_dec_ref["Z3_model_dec_ref"](ctx: Z3Context, model: Z3Model);

        /// Evaluates `expr` under `model`, writing the result through
        /// `result`. Returns false when evaluation fails; see
        /// [`model_eval`](Self::model_eval) for the out-parameter-free
        /// form.
        fn model_eval_raw["Z3_model_eval"](
            ctx: Z3Context,
            model: Z3Model,
            expr: Z3Ast,
            model_completion: bool,
            result: *mut Z3Ast,
        ) -> bool;

        /// Native-owned textual rendering of the model.
        fn model_to_string["Z3_model_to_string"](ctx: Z3Context, model: Z3Model) -> *const c_char;

        /// Native-owned textual rendering of an AST.
        fn ast_to_string["Z3_ast_to_string"](ctx: Z3Context, ast: Z3Ast) -> *const c_char;

        /// Decimal rendering of a numeral AST, native-owned.
        fn get_numeral_string["Z3_get_numeral_string"](
            ctx: Z3Context,
            expr: Z3Ast,
        ) -> *const c_char;

        /// Machine-width numeral extraction; see
        /// [`get_numeral_int`](Self::get_numeral_int).
        fn get_numeral_int_raw["Z3_get_numeral_int"](
            ctx: Z3Context,
            expr: Z3Ast,
            value: *mut c_int,
        ) -> bool;

        fn get_bool_value_raw["Z3_get_bool_value"](ctx: Z3Context, expr: Z3Ast) -> c_int;

        fn is_numeral_ast["Z3_is_numeral_ast"](ctx: Z3Context, expr: Z3Ast) -> bool;

        fn get_sort["Z3_get_sort"](ctx: Z3Context, expr: Z3Ast) -> Z3Sort;

        fn get_sort_kind_raw["Z3_get_sort_kind"](ctx: Z3Context, sort: Z3Sort) -> c_int;
    }

    /// Evaluates `expr` under `model`, returning `None` when the native
    /// evaluation fails.
    pub unsafe fn model_eval(
        &self,
        ctx: Z3Context,
        model: Z3Model,
        expr: Z3Ast,
        model_completion: bool,
    ) -> Result<Option<Z3Ast>, SymbolError> {
        let mut result: Z3Ast = ptr::null_mut();
        let ok = unsafe { self.model_eval_raw(ctx, model, expr, model_completion, &mut result) }?;
        Ok((ok && !result.is_null()).then_some(result))
    }

    /// Extracts a numeral that fits a machine `i32`, or `None`.
    pub unsafe fn get_numeral_int(
        &self,
        ctx: Z3Context,
        expr: Z3Ast,
    ) -> Result<Option<i32>, SymbolError> {
        let mut value: c_int = 0;
        let ok = unsafe { self.get_numeral_int_raw(ctx, expr, &mut value) }?;
        Ok(ok.then_some(value))
    }

    /// Truth value of a boolean AST, `Undef` for non-literals.
    pub unsafe fn get_bool_value(
        &self,
        ctx: Z3Context,
        expr: Z3Ast,
    ) -> Result<Lbool, SymbolError> {
        Ok(Lbool::from_raw(unsafe {
            self.get_bool_value_raw(ctx, expr)
        }?))
    }

    /// The kind of a sort, reinterpreted from the raw enum value.
    pub unsafe fn get_sort_kind(
        &self,
        ctx: Z3Context,
        sort: Z3Sort,
    ) -> Result<SortKind, SymbolError> {
        Ok(SortKind::from_raw(unsafe {
            self.get_sort_kind_raw(ctx, sort)
        }?))
    }
}
