//! Standalone simplification entry points. All optional; check
//! availability before dispatching.

use libc::c_char;

use super::Z3Lib;
use crate::types::{Z3Ast, Z3Context, Z3ParamDescrs, Z3Params};

impl Z3Lib {
    native_fn! {
        /// Simplifies an AST with default parameters.
        fn simplify["Z3_simplify"](ctx: Z3Context, ast: Z3Ast) -> Z3Ast;

        /// Simplifies an AST under an explicit parameter set.
        fn simplify_ex["Z3_simplify_ex"](ctx: Z3Context, ast: Z3Ast, params: Z3Params) -> Z3Ast;

        /// Native-owned help text for the simplifier parameters.
        fn simplify_get_help["Z3_simplify_get_help"](ctx: Z3Context) -> *const c_char;

        fn simplify_get_param_descrs["Z3_simplify_get_param_descrs"](
            ctx: Z3Context,
        ) -> Z3ParamDescrs;
    }
}
