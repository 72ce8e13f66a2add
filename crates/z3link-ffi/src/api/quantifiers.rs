//! Quantifier and lambda construction.
//!
//! Every symbol in this category is optional: not all Z3 build variants
//! export the full quantifier surface. Check
//! [`is_available`](super::Z3Lib::is_available) before dispatching, or
//! handle [`SymbolError::Unavailable`](crate::error::SymbolError) at the
//! call site.

use libc::c_uint;

use super::Z3Lib;
use crate::types::{Z3Ast, Z3Context, Z3Pattern, Z3Sort, Z3Symbol};

impl Z3Lib {
    native_fn! {
        /// Universal quantifier over bound constants.
        fn mk_forall_const["Z3_mk_forall_const"](
            ctx: Z3Context,
            weight: c_uint,
            num_bound: c_uint,
            bound: *const Z3Ast,
            num_patterns: c_uint,
            patterns: *const Z3Pattern,
            body: Z3Ast,
        ) -> Z3Ast;

        /// Existential quantifier over bound constants.
        fn mk_exists_const["Z3_mk_exists_const"](
            ctx: Z3Context,
            weight: c_uint,
            num_bound: c_uint,
            bound: *const Z3Ast,
            num_patterns: c_uint,
            patterns: *const Z3Pattern,
            body: Z3Ast,
        ) -> Z3Ast;

        /// Generic quantifier; `is_forall` selects the flavor.
        fn mk_quantifier_const["Z3_mk_quantifier_const"](
            ctx: Z3Context,
            is_forall: bool,
            weight: c_uint,
            num_bound: c_uint,
            bound: *const Z3Ast,
            num_patterns: c_uint,
            patterns: *const Z3Pattern,
            body: Z3Ast,
        ) -> Z3Ast;

        /// Lambda abstraction over bound constants.
        fn mk_lambda_const["Z3_mk_lambda_const"](
            ctx: Z3Context,
            num_bound: c_uint,
            bound: *const Z3Ast,
            body: Z3Ast,
        ) -> Z3Ast;

        /// Old-style universal quantifier over sorts/symbols and de
        /// Bruijn bound variables.
        fn mk_forall["Z3_mk_forall"](
            ctx: Z3Context,
            weight: c_uint,
            num_patterns: c_uint,
            patterns: *const Z3Pattern,
            num_decls: c_uint,
            sorts: *const Z3Sort,
            decl_names: *const Z3Symbol,
            body: Z3Ast,
        ) -> Z3Ast;

        /// Old-style existential quantifier.
        fn mk_exists["Z3_mk_exists"](
            ctx: Z3Context,
            weight: c_uint,
            num_patterns: c_uint,
            patterns: *const Z3Pattern,
            num_decls: c_uint,
            sorts: *const Z3Sort,
            decl_names: *const Z3Symbol,
            body: Z3Ast,
        ) -> Z3Ast;

        /// Instantiation pattern from a non-empty term list.
        fn mk_pattern["Z3_mk_pattern"](
            ctx: Z3Context,
            num_patterns: c_uint,
            terms: *const Z3Ast,
        ) -> Z3Pattern;

        /// De Bruijn bound variable for old-style quantifier bodies.
        fn mk_bound["Z3_mk_bound"](ctx: Z3Context, index: c_uint, sort: Z3Sort) -> Z3Ast;
    }
}
