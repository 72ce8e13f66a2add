//! # z3link-core
//!
//! Pure-logic foundation of the z3link dynamic Z3 binding: the symbol
//! catalogue (which native entry points exist, grouped by API category,
//! and whether each is required or optional) and platform library
//! discovery (where a Z3 shared library is expected to live). No `unsafe`
//! code is permitted at the crate level; everything that touches a loaded
//! module lives in `z3link-ffi`.

#![deny(unsafe_code)]

pub mod catalog;
pub mod discovery;
