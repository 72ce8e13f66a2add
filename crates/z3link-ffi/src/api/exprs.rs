//! Expression construction: symbols, constants, literals, boolean
//! connectives, arithmetic, comparisons.
//!
//! Variadic native constructors (`Z3_mk_and` and friends) take a count
//! plus a pointer to a contiguous run of AST handles; callers pass
//! `asts.len() as c_uint, asts.as_ptr()` over a slice that outlives the
//! call.

use libc::{c_char, c_uint};

use super::Z3Lib;
use crate::types::{Z3Ast, Z3Context, Z3Sort, Z3Symbol};

impl Z3Lib {
    native_fn! {
        /// Interns a symbol name for use in declarations.
        fn mk_string_symbol["Z3_mk_string_symbol"](
            ctx: Z3Context,
            name: *const c_char,
        ) -> Z3Symbol;

        /// Declares a constant of the given sort.
        fn mk_const["Z3_mk_const"](ctx: Z3Context, symbol: Z3Symbol, sort: Z3Sort) -> Z3Ast;

        fn mk_true["Z3_mk_true"](ctx: Z3Context) -> Z3Ast;

        fn mk_false["Z3_mk_false"](ctx: Z3Context) -> Z3Ast;

        fn mk_eq["Z3_mk_eq"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        fn mk_not["Z3_mk_not"](ctx: Z3Context, arg: Z3Ast) -> Z3Ast;

        fn mk_and["Z3_mk_and"](ctx: Z3Context, num_args: c_uint, args: *const Z3Ast) -> Z3Ast;

        fn mk_or["Z3_mk_or"](ctx: Z3Context, num_args: c_uint, args: *const Z3Ast) -> Z3Ast;

        fn mk_implies["Z3_mk_implies"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        fn mk_iff["Z3_mk_iff"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        fn mk_xor["Z3_mk_xor"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        /// If-then-else over any matching sorts.
        fn mk_ite["Z3_mk_ite"](
            ctx: Z3Context,
            condition: Z3Ast,
            then_expr: Z3Ast,
            else_expr: Z3Ast,
        ) -> Z3Ast;

        fn mk_add["Z3_mk_add"](ctx: Z3Context, num_args: c_uint, args: *const Z3Ast) -> Z3Ast;

        fn mk_sub["Z3_mk_sub"](ctx: Z3Context, num_args: c_uint, args: *const Z3Ast) -> Z3Ast;

        fn mk_mul["Z3_mk_mul"](ctx: Z3Context, num_args: c_uint, args: *const Z3Ast) -> Z3Ast;

        fn mk_div["Z3_mk_div"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        fn mk_mod["Z3_mk_mod"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        fn mk_unary_minus["Z3_mk_unary_minus"](ctx: Z3Context, arg: Z3Ast) -> Z3Ast;

        fn mk_lt["Z3_mk_lt"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        fn mk_le["Z3_mk_le"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        fn mk_gt["Z3_mk_gt"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        fn mk_ge["Z3_mk_ge"](ctx: Z3Context, left: Z3Ast, right: Z3Ast) -> Z3Ast;

        /// Parses a numeral literal in the given sort.
        fn mk_numeral["Z3_mk_numeral"](
            ctx: Z3Context,
            numeral: *const c_char,
            sort: Z3Sort,
        ) -> Z3Ast;
    }
}
