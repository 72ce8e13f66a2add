//! Symbol catalogue for the Z3 C API.
//!
//! A fixed, hand-maintained list of the native entry points the binding
//! dispatches through, partitioned by category following the section
//! layout of `z3_api.h`. The catalogue is the contract between this
//! binding and the native library's ABI: a Z3 build whose exported symbol
//! set differs from it will fail to load (required symbols) or degrade
//! per symbol (optional ones).
//!
//! Growth is additive: adding a binding for a new native function means
//! appending a [`SymbolSpec`] to the right category here and a matching
//! dispatch wrapper in `z3link-ffi`. Unrelated categories are never
//! touched.

/// Resolution policy for a single native entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Absence aborts the whole load. Core entry points the binding is
    /// unusable without.
    Required,
    /// Absence is tolerated at load time and surfaced only if a call is
    /// attempted. Entry points that exist only in some Z3 build variants.
    Optional,
}

/// A named native entry point together with its resolution policy.
#[derive(Debug, Clone, Copy)]
pub struct SymbolSpec {
    pub name: &'static str,
    pub policy: Policy,
}

/// One section of the Z3 C API surface.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub symbols: &'static [SymbolSpec],
}

const fn req(name: &'static str) -> SymbolSpec {
    SymbolSpec {
        name,
        policy: Policy::Required,
    }
}

const fn opt(name: &'static str) -> SymbolSpec {
    SymbolSpec {
        name,
        policy: Policy::Optional,
    }
}

/// Configuration and context lifecycle, parameter updates, AST refcounts.
pub const CONTEXT: Category = Category {
    name: "context",
    symbols: &[
        req("Z3_mk_config"),
        req("Z3_set_param_value"),
        req("Z3_del_config"),
        req("Z3_mk_context_rc"),
        req("Z3_del_context"),
        req("Z3_update_param_value"),
        req("Z3_inc_ref"),
        req("Z3_dec_ref"),
    ],
};

/// Built-in sort constructors.
pub const SORTS: Category = Category {
    name: "sorts",
    symbols: &[
        req("Z3_mk_bool_sort"),
        req("Z3_mk_int_sort"),
        req("Z3_mk_real_sort"),
    ],
};

/// Expression construction: constants, literals, connectives, arithmetic.
pub const EXPRESSIONS: Category = Category {
    name: "expressions",
    symbols: &[
        req("Z3_mk_string_symbol"),
        req("Z3_mk_const"),
        req("Z3_mk_true"),
        req("Z3_mk_false"),
        req("Z3_mk_eq"),
        req("Z3_mk_not"),
        req("Z3_mk_and"),
        req("Z3_mk_or"),
        req("Z3_mk_implies"),
        req("Z3_mk_iff"),
        req("Z3_mk_xor"),
        req("Z3_mk_ite"),
        req("Z3_mk_add"),
        req("Z3_mk_sub"),
        req("Z3_mk_mul"),
        req("Z3_mk_div"),
        req("Z3_mk_mod"),
        req("Z3_mk_unary_minus"),
        req("Z3_mk_lt"),
        req("Z3_mk_le"),
        req("Z3_mk_gt"),
        req("Z3_mk_ge"),
        req("Z3_mk_numeral"),
    ],
};

/// Solver lifecycle and the check/push/pop surface.
pub const SOLVER: Category = Category {
    name: "solver",
    symbols: &[
        req("Z3_mk_solver"),
        req("Z3_mk_simple_solver"),
        req("Z3_solver_inc_ref"),
        req("Z3_solver_dec_ref"),
        req("Z3_solver_assert"),
        req("Z3_solver_check"),
        req("Z3_solver_push"),
        req("Z3_solver_pop"),
        req("Z3_solver_reset"),
        req("Z3_solver_get_model"),
        req("Z3_solver_get_reason_unknown"),
    ],
};

/// Model inspection and value extraction.
pub const MODEL: Category = Category {
    name: "model",
    symbols: &[
        req("Z3_model_inc_ref"),
        req("Z3_model_dec_ref"),
        req("Z3_model_eval"),
        req("Z3_model_to_string"),
        req("Z3_ast_to_string"),
        req("Z3_get_numeral_string"),
        req("Z3_get_numeral_int"),
        req("Z3_get_bool_value"),
        req("Z3_is_numeral_ast"),
        req("Z3_get_sort"),
        req("Z3_get_sort_kind"),
    ],
};

/// Error code/message queries and handler registration.
pub const ERROR_HANDLING: Category = Category {
    name: "error_handling",
    symbols: &[
        req("Z3_get_error_code"),
        req("Z3_get_error_msg"),
        req("Z3_set_error_handler"),
        req("Z3_set_error"),
    ],
};

/// Version and build information.
pub const DIAGNOSTICS: Category = Category {
    name: "diagnostics",
    symbols: &[req("Z3_get_version"), req("Z3_get_full_version")],
};

/// Quantifier and lambda construction. Optional: not every Z3 build
/// variant exports the full quantifier surface.
pub const QUANTIFIERS: Category = Category {
    name: "quantifiers",
    symbols: &[
        opt("Z3_mk_forall_const"),
        opt("Z3_mk_exists_const"),
        opt("Z3_mk_quantifier_const"),
        opt("Z3_mk_lambda_const"),
        opt("Z3_mk_forall"),
        opt("Z3_mk_exists"),
        opt("Z3_mk_pattern"),
        opt("Z3_mk_bound"),
    ],
};

/// Standalone simplification entry points.
pub const SIMPLIFY: Category = Category {
    name: "simplify",
    symbols: &[
        opt("Z3_simplify"),
        opt("Z3_simplify_ex"),
        opt("Z3_simplify_get_help"),
        opt("Z3_simplify_get_param_descrs"),
    ],
};

/// Term substitution and cross-context translation.
pub const SUBSTITUTION: Category = Category {
    name: "substitution",
    symbols: &[
        opt("Z3_substitute"),
        opt("Z3_substitute_vars"),
        opt("Z3_translate"),
    ],
};

/// The full catalogue, in load order.
pub const CATALOG: &[Category] = &[
    CONTEXT,
    SORTS,
    EXPRESSIONS,
    SOLVER,
    MODEL,
    ERROR_HANDLING,
    DIAGNOSTICS,
    QUANTIFIERS,
    SIMPLIFY,
    SUBSTITUTION,
];

/// Looks up a symbol by name across the whole catalogue.
pub fn find(name: &str) -> Option<(&'static Category, &'static SymbolSpec)> {
    CATALOG.iter().find_map(|category| {
        category
            .symbols
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| (category, spec))
    })
}

/// Total number of catalogued symbols.
pub fn symbol_count() -> usize {
    CATALOG.iter().map(|c| c.symbols.len()).sum()
}

/// Number of catalogued symbols with the given policy.
pub fn count_with_policy(policy: Policy) -> usize {
    CATALOG
        .iter()
        .flat_map(|c| c.symbols)
        .filter(|s| s.policy == policy)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_names_unique_across_catalog() {
        let mut seen = BTreeSet::new();
        for category in CATALOG {
            for spec in category.symbols {
                assert!(
                    seen.insert(spec.name),
                    "duplicate catalogue entry: {}",
                    spec.name
                );
            }
        }
        assert_eq!(seen.len(), symbol_count());
    }

    #[test]
    fn test_category_names_unique() {
        let names: BTreeSet<_> = CATALOG.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_no_empty_categories() {
        for category in CATALOG {
            assert!(
                !category.symbols.is_empty(),
                "category {} has no symbols",
                category.name
            );
        }
    }

    #[test]
    fn test_find_required_symbol() {
        let (category, spec) = find("Z3_solver_check").expect("catalogued");
        assert_eq!(category.name, "solver");
        assert_eq!(spec.policy, Policy::Required);
    }

    #[test]
    fn test_find_optional_symbol() {
        let (category, spec) = find("Z3_mk_forall_const").expect("catalogued");
        assert_eq!(category.name, "quantifiers");
        assert_eq!(spec.policy, Policy::Optional);
    }

    #[test]
    fn test_find_unknown_symbol() {
        assert!(find("Z3_mk_flux_capacitor").is_none());
    }

    #[test]
    fn test_core_categories_are_fully_required() {
        for category in [CONTEXT, SORTS, EXPRESSIONS, SOLVER, MODEL, ERROR_HANDLING] {
            for spec in category.symbols {
                assert_eq!(
                    spec.policy,
                    Policy::Required,
                    "{} in {} should be required",
                    spec.name,
                    category.name
                );
            }
        }
    }

    #[test]
    fn test_build_variant_categories_are_optional() {
        for category in [QUANTIFIERS, SIMPLIFY, SUBSTITUTION] {
            for spec in category.symbols {
                assert_eq!(spec.policy, Policy::Optional);
            }
        }
    }

    #[test]
    fn test_policy_counts_partition_catalog() {
        assert_eq!(
            count_with_policy(Policy::Required) + count_with_policy(Policy::Optional),
            symbol_count()
        );
        assert!(count_with_policy(Policy::Required) > count_with_policy(Policy::Optional));
    }
}
