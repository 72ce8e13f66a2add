//! Configuration and context lifecycle, parameter updates, AST
//! reference counts.

use libc::c_char;

use super::Z3Lib;
use crate::types::{Z3Ast, Z3Config, Z3Context};

impl Z3Lib {
    native_fn! {
        /// Creates a configuration object for tuning context creation.
        fn mk_config["Z3_mk_config"]() -> Z3Config;

        /// Sets a configuration parameter before the context exists.
        fn set_param_value["Z3_set_param_value"](
            cfg: Z3Config,
            param_id: *const c_char,
            param_value: *const c_char,
        );

        fn del_config["Z3_del_config"](cfg: Z3Config);

        /// Creates a context with manual (reference-counted) AST
        /// lifetimes. Every AST obtained from it must be pinned with
        /// [`inc_ref`](Self::inc_ref) while in use.
        fn mk_context_rc["Z3_mk_context_rc"](cfg: Z3Config) -> Z3Context;

        /// Deletes the context. All handles scoped to it become stale.
        fn del_context["Z3_del_context"](ctx: Z3Context);

        /// Updates a mutable parameter on a live context.
        fn update_param_value["Z3_update_param_value"](
            ctx: Z3Context,
            param_id: *const c_char,
            param_value: *const c_char,
        );

        fn inc_ref["Z3_inc_ref"](ctx: Z3Context, ast: Z3Ast);

        fn dec_ref["Z3_dec_ref"](ctx: Z3Context, ast: Z3Ast);
    }
}
