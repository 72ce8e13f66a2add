//! Term substitution and cross-context translation. All optional; check
//! availability before dispatching.

use libc::c_uint;

use super::Z3Lib;
use crate::types::{Z3Ast, Z3Context};

impl Z3Lib {
    native_fn! {
        /// Replaces occurrences of `from[i]` with `to[i]` in `ast`. The
        /// two runs must have length `num_exprs` and pair up by sort.
        fn substitute["Z3_substitute"](
            ctx: Z3Context,
            ast: Z3Ast,
            num_exprs: c_uint,
            from: *const Z3Ast,
            to: *const Z3Ast,
        ) -> Z3Ast;

        /// Substitutes de Bruijn bound variables 0..num_exprs by `to`.
        fn substitute_vars["Z3_substitute_vars"](
            ctx: Z3Context,
            ast: Z3Ast,
            num_exprs: c_uint,
            to: *const Z3Ast,
        ) -> Z3Ast;

        /// Copies an AST into another context.
        fn translate["Z3_translate"](
            ctx: Z3Context,
            ast: Z3Ast,
            target: Z3Context,
        ) -> Z3Ast;
    }
}
