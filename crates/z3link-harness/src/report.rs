//! Availability reports over the symbol catalogue.

use serde::Serialize;
use z3link_core::catalog::{self, Policy};
use z3link_ffi::Z3Lib;

/// Full audit of a loaded library against the catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub library: String,
    pub resolved: usize,
    pub unavailable: usize,
    pub categories: Vec<CategoryReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub name: &'static str,
    pub resolved: usize,
    pub total: usize,
    pub symbols: Vec<SymbolReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SymbolReport {
    pub name: &'static str,
    pub policy: &'static str,
    pub available: bool,
}

fn policy_label(policy: Policy) -> &'static str {
    match policy {
        Policy::Required => "required",
        Policy::Optional => "optional",
    }
}

/// Audits a loaded library.
pub fn audit(lib: &Z3Lib) -> AuditReport {
    audit_with(&lib.path().display().to_string(), |name| {
        lib.is_available(name)
    })
}

/// Builds the report from an arbitrary availability predicate. The
/// binary uses [`audit`]; tests inject a predicate directly.
pub fn audit_with(library: &str, is_available: impl Fn(&str) -> bool) -> AuditReport {
    let categories: Vec<CategoryReport> = catalog::CATALOG
        .iter()
        .map(|category| {
            let symbols: Vec<SymbolReport> = category
                .symbols
                .iter()
                .map(|spec| SymbolReport {
                    name: spec.name,
                    policy: policy_label(spec.policy),
                    available: is_available(spec.name),
                })
                .collect();
            let resolved = symbols.iter().filter(|s| s.available).count();
            CategoryReport {
                name: category.name,
                resolved,
                total: symbols.len(),
                symbols,
            }
        })
        .collect();

    let resolved = categories.iter().map(|c| c.resolved).sum();
    let total: usize = categories.iter().map(|c| c.total).sum();
    AuditReport {
        library: library.to_owned(),
        resolved,
        unavailable: total - resolved,
        categories,
    }
}

/// Human-readable rendering.
pub fn render_text(report: &AuditReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Z3 library: {}\n", report.library));
    out.push_str(&format!(
        "entry points: {} resolved, {} unavailable\n\n",
        report.resolved, report.unavailable
    ));
    for category in &report.categories {
        out.push_str(&format!(
            "[{}] {}/{}\n",
            category.name, category.resolved, category.total
        ));
        for symbol in category.symbols.iter().filter(|s| !s.available) {
            out.push_str(&format!("  missing: {} ({})\n", symbol.name, symbol.policy));
        }
    }
    out
}
