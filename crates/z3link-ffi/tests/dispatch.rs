//! Typed dispatch through the wrapper surface, exercised against fake
//! native entry points implemented in Rust.

use std::collections::HashMap;
use std::ffi::CStr;
use std::mem;

use libc::{c_char, c_int, c_uint};
use z3link_core::catalog;
use z3link_ffi::{
    ErrorCode, Lbool, RawFn, SymbolError, SymbolSource, Z3Ast, Z3Context, Z3Lib, Z3Solver,
    Z3Symbol,
};

// ---------------------------------------------------------------------------
// Fake native entry points
// ---------------------------------------------------------------------------

const TRUE_AST: usize = 0x51;

unsafe extern "C" fn fake_noop() {}

unsafe extern "C" fn fake_mk_true(_ctx: Z3Context) -> Z3Ast {
    TRUE_AST as Z3Ast
}

unsafe extern "C" fn fake_solver_check(_ctx: Z3Context, _solver: Z3Solver) -> c_int {
    1
}

unsafe extern "C" fn fake_get_error_code(_ctx: Z3Context) -> c_int {
    0
}

// Returns the argument's byte length as the handle, so the test can see
// the exact string that crossed the boundary.
unsafe extern "C" fn fake_mk_string_symbol(_ctx: Z3Context, name: *const c_char) -> Z3Symbol {
    let len = unsafe { CStr::from_ptr(name) }.to_bytes().len();
    len as Z3Symbol
}

unsafe extern "C" fn fake_get_version(
    major: *mut c_uint,
    minor: *mut c_uint,
    build: *mut c_uint,
    revision: *mut c_uint,
) {
    unsafe {
        *major = 4;
        *minor = 13;
        *build = 2;
        *revision = 0;
    }
}

macro_rules! erased {
    ($func:expr, $ty:ty) => {
        unsafe { mem::transmute::<$ty, RawFn>($func) }
    };
}

// ---------------------------------------------------------------------------
// Fake module
// ---------------------------------------------------------------------------

struct FakeModule {
    entries: HashMap<&'static str, RawFn>,
    export_quantifiers: bool,
}

impl FakeModule {
    fn new(export_quantifiers: bool) -> Self {
        let mut entries: HashMap<&'static str, RawFn> = HashMap::new();
        entries.insert(
            "Z3_mk_true",
            erased!(fake_mk_true, unsafe extern "C" fn(Z3Context) -> Z3Ast),
        );
        entries.insert(
            "Z3_solver_check",
            erased!(
                fake_solver_check,
                unsafe extern "C" fn(Z3Context, Z3Solver) -> c_int
            ),
        );
        entries.insert(
            "Z3_get_error_code",
            erased!(fake_get_error_code, unsafe extern "C" fn(Z3Context) -> c_int),
        );
        entries.insert(
            "Z3_mk_string_symbol",
            erased!(
                fake_mk_string_symbol,
                unsafe extern "C" fn(Z3Context, *const c_char) -> Z3Symbol
            ),
        );
        entries.insert(
            "Z3_get_version",
            erased!(
                fake_get_version,
                unsafe extern "C" fn(*mut c_uint, *mut c_uint, *mut c_uint, *mut c_uint)
            ),
        );
        Self {
            entries,
            export_quantifiers,
        }
    }
}

impl SymbolSource for FakeModule {
    fn resolve(&self, name: &str) -> Option<RawFn> {
        if let Some(addr) = self.entries.get(name) {
            return Some(*addr);
        }
        let (category, _) = catalog::find(name)?;
        if category.name == "quantifiers" && !self.export_quantifiers {
            return None;
        }
        // Everything else resolves to an inert stub so the load succeeds;
        // tests only ever dispatch through the typed fakes above.
        Some(fake_noop as RawFn)
    }
}

fn fake_ctx() -> Z3Context {
    0x1000 as Z3Context
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_wrapper_invokes_resolved_entry_point() {
    let lib = Z3Lib::from_source(FakeModule::new(true), "fake-z3").unwrap();
    let ast = unsafe { lib.mk_true(fake_ctx()) }.unwrap();
    assert_eq!(ast as usize, TRUE_AST);
}

#[test]
fn test_wrapper_reinterprets_tristate_return() {
    let lib = Z3Lib::from_source(FakeModule::new(true), "fake-z3").unwrap();
    let solver = 0x2000 as Z3Solver;
    let verdict = unsafe { lib.solver_check(fake_ctx(), solver) }.unwrap();
    assert_eq!(verdict, Lbool::True);
}

#[test]
fn test_wrapper_reinterprets_error_code() {
    let lib = Z3Lib::from_source(FakeModule::new(true), "fake-z3").unwrap();
    let code = unsafe { lib.get_error_code(fake_ctx()) }.unwrap();
    assert_eq!(code, ErrorCode::Ok);
}

#[test]
fn test_scoped_string_crosses_boundary_intact() {
    let lib = Z3Lib::from_source(FakeModule::new(true), "fake-z3").unwrap();
    // The fake returns strlen as the handle: "hello" must arrive with
    // exactly five bytes before the terminator.
    let symbol = unsafe { lib.mk_string_symbol_str(fake_ctx(), "hello") }.unwrap();
    assert_eq!(symbol as usize, 5);
}

#[test]
fn test_out_parameter_wrapper() {
    let lib = Z3Lib::from_source(FakeModule::new(true), "fake-z3").unwrap();
    assert_eq!(lib.version().unwrap(), (4, 13, 2, 0));
}

#[test]
fn test_optional_dispatch_fails_without_crashing() {
    let lib = Z3Lib::from_source(FakeModule::new(false), "fake-z3").unwrap();
    assert!(!lib.is_available("Z3_mk_pattern"));

    let err = unsafe { lib.mk_bound(fake_ctx(), 0, std::ptr::null_mut()) }.unwrap_err();
    assert_eq!(
        err,
        SymbolError::Unavailable {
            name: "Z3_mk_bound".into()
        }
    );
}

#[test]
fn test_optional_dispatch_succeeds_when_exported() {
    let lib = Z3Lib::from_source(FakeModule::new(true), "fake-z3").unwrap();
    assert!(lib.is_available("Z3_mk_pattern"));
}

#[test]
fn test_lib_is_shareable_across_threads() {
    let lib = std::sync::Arc::new(Z3Lib::from_source(FakeModule::new(true), "fake-z3").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lib = lib.clone();
            std::thread::spawn(move || {
                let ast = unsafe { lib.mk_true(fake_ctx()) }.unwrap();
                assert_eq!(ast as usize, TRUE_AST);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
