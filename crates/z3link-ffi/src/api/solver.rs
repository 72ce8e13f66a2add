//! Solver lifecycle and the check/push/pop surface.

use libc::{c_char, c_int, c_uint};

use super::Z3Lib;
use crate::error::SymbolError;
use crate::types::{Lbool, Z3Ast, Z3Context, Z3Model, Z3Solver};

impl Z3Lib {
    native_fn! {
        /// Creates a general solver (tactic-selecting).
        fn mk_solver["Z3_mk_solver"](ctx: Z3Context) -> Z3Solver;

        /// Creates the plain incremental solver.
        fn mk_simple_solver["Z3_mk_simple_solver"](ctx: Z3Context) -> Z3Solver;

        fn solver_inc_ref["Z3_solver_inc_ref"](ctx: Z3Context, solver: Z3Solver);

        fn solver_dec_ref["Z3_solver_dec_ref"](ctx: Z3Context, solver: Z3Solver);

        fn solver_assert["Z3_solver_assert"](ctx: Z3Context, solver: Z3Solver, formula: Z3Ast);

        /// Raw tri-state check result; see [`solver_check`](Self::solver_check)
        /// for the reinterpreted form.
        fn solver_check_raw["Z3_solver_check"](ctx: Z3Context, solver: Z3Solver) -> c_int;

        fn solver_push["Z3_solver_push"](ctx: Z3Context, solver: Z3Solver);

        fn solver_pop["Z3_solver_pop"](ctx: Z3Context, solver: Z3Solver, num_scopes: c_uint);

        fn solver_reset["Z3_solver_reset"](ctx: Z3Context, solver: Z3Solver);

        /// The model from the last satisfiable check. Must be pinned with
        /// `model_inc_ref` before further native calls.
        fn solver_get_model["Z3_solver_get_model"](ctx: Z3Context, solver: Z3Solver) -> Z3Model;

        /// Native-owned explanation string for an `Undef` check result.
        fn solver_get_reason_unknown["Z3_solver_get_reason_unknown"](
            ctx: Z3Context,
            solver: Z3Solver,
        ) -> *const c_char;
    }

    /// Checks satisfiability of the asserted formulas, reinterpreting the
    /// raw tri-state result.
    pub unsafe fn solver_check(
        &self,
        ctx: Z3Context,
        solver: Z3Solver,
    ) -> Result<Lbool, SymbolError> {
        Ok(Lbool::from_raw(unsafe { self.solver_check_raw(ctx, solver) }?))
    }
}
