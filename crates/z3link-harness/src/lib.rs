//! # z3link-harness
//!
//! Diagnostic tooling around the z3link binding: audit a Z3 shared
//! library against the symbol catalogue and report per-category
//! availability. The `z3audit` binary is the command-line entry point.

#![forbid(unsafe_code)]

pub mod report;
