//! Handle and enum types for the Z3 C API surface.
//!
//! Handles are opaque pointers to zero-sized `#[repr(C)]` targets, the
//! shape a generated binding would produce. The binding never
//! dereferences them; they only round-trip between native calls.

use libc::c_int;

macro_rules! opaque_handle {
    ($(#[$meta:meta])* $target:ident => $alias:ident) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy)]
        pub struct $target {
            _private: [u8; 0],
        }

        pub type $alias = *mut $target;
    };
}

opaque_handle!(
    /// Configuration object consumed by context creation.
    ConfigTarget => Z3Config
);
opaque_handle!(
    /// A Z3 context. Every other handle is scoped to one of these.
    ContextTarget => Z3Context
);
opaque_handle!(
    /// An interned symbol name.
    SymbolTarget => Z3Symbol
);
opaque_handle!(
    /// A sort (type) term.
    SortTarget => Z3Sort
);
opaque_handle!(
    /// An AST node: expression, numeral, or quantifier body.
    AstTarget => Z3Ast
);
opaque_handle!(
    /// An incremental solver.
    SolverTarget => Z3Solver
);
opaque_handle!(
    /// A model produced by a satisfiable check.
    ModelTarget => Z3Model
);
opaque_handle!(
    /// A quantifier instantiation pattern.
    PatternTarget => Z3Pattern
);
opaque_handle!(
    /// A parameter set.
    ParamsTarget => Z3Params
);
opaque_handle!(
    /// Descriptions of the parameters a component accepts.
    ParamDescrsTarget => Z3ParamDescrs
);

/// Z3's three-valued truth result (`Z3_lbool`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Lbool {
    False = -1,
    Undef = 0,
    True = 1,
}

impl Lbool {
    /// Reinterprets the raw native value; anything out of range reads as
    /// `Undef`.
    pub const fn from_raw(raw: c_int) -> Self {
        match raw {
            -1 => Self::False,
            1 => Self::True,
            _ => Self::Undef,
        }
    }
}

/// Error codes reported by the native library (`Z3_error_code`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    /// Type-incorrect AST construction (sort mismatch).
    SortError = 1,
    IndexOutOfBounds = 2,
    InvalidArg = 3,
    ParserError = 4,
    NoParser = 5,
    InvalidPattern = 6,
    /// Allocation failure inside the native library.
    MemoutFail = 7,
    FileAccessError = 8,
    InternalFatal = 9,
    /// API call invalid in the current state.
    InvalidUsage = 10,
    /// Reference-count decrement on a deleted AST.
    DecRefError = 11,
    Exception = 12,
}

impl ErrorCode {
    /// Reinterprets the raw native value; unrecognized codes collapse to
    /// the generic `Exception`.
    pub const fn from_raw(raw: c_int) -> Self {
        match raw {
            0 => Self::Ok,
            1 => Self::SortError,
            2 => Self::IndexOutOfBounds,
            3 => Self::InvalidArg,
            4 => Self::ParserError,
            5 => Self::NoParser,
            6 => Self::InvalidPattern,
            7 => Self::MemoutFail,
            8 => Self::FileAccessError,
            9 => Self::InternalFatal,
            10 => Self::InvalidUsage,
            11 => Self::DecRefError,
            _ => Self::Exception,
        }
    }

    /// True when the code signals an actual failure.
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::Ok)
    }
}

/// Sort kinds reported by `Z3_get_sort_kind` (`Z3_sort_kind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SortKind {
    Uninterpreted = 0,
    Bool = 1,
    Int = 2,
    Real = 3,
    Bv = 4,
    Array = 5,
    Datatype = 6,
    Relation = 7,
    FiniteDomain = 8,
    FloatingPoint = 9,
    RoundingMode = 10,
    Seq = 11,
    Re = 12,
    Char = 13,
    Unknown = 1000,
}

impl SortKind {
    pub const fn from_raw(raw: c_int) -> Self {
        match raw {
            0 => Self::Uninterpreted,
            1 => Self::Bool,
            2 => Self::Int,
            3 => Self::Real,
            4 => Self::Bv,
            5 => Self::Array,
            6 => Self::Datatype,
            7 => Self::Relation,
            8 => Self::FiniteDomain,
            9 => Self::FloatingPoint,
            10 => Self::RoundingMode,
            11 => Self::Seq,
            12 => Self::Re,
            13 => Self::Char,
            _ => Self::Unknown,
        }
    }
}

/// Callback registered with `Z3_set_error_handler`. Invoked by the native
/// library on the thread of the failing call; must not unwind into Z3.
pub type ErrorHandler = unsafe extern "C" fn(ctx: Z3Context, code: c_int);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lbool_round_trip() {
        assert_eq!(Lbool::from_raw(-1), Lbool::False);
        assert_eq!(Lbool::from_raw(0), Lbool::Undef);
        assert_eq!(Lbool::from_raw(1), Lbool::True);
        assert_eq!(Lbool::from_raw(42), Lbool::Undef);
    }

    #[test]
    fn test_error_code_known_values() {
        assert_eq!(ErrorCode::from_raw(0), ErrorCode::Ok);
        assert_eq!(ErrorCode::from_raw(7), ErrorCode::MemoutFail);
        assert_eq!(ErrorCode::from_raw(11), ErrorCode::DecRefError);
        assert_eq!(ErrorCode::from_raw(999), ErrorCode::Exception);
        assert!(!ErrorCode::Ok.is_error());
        assert!(ErrorCode::SortError.is_error());
    }

    #[test]
    fn test_sort_kind_unknown_fallback() {
        assert_eq!(SortKind::from_raw(4), SortKind::Bv);
        assert_eq!(SortKind::from_raw(1000), SortKind::Unknown);
        assert_eq!(SortKind::from_raw(-5), SortKind::Unknown);
    }
}
