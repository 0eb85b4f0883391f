//! Parallel cross-module reference scan.
//!
//! One Rayon task per foreign module. Workers only read immutable program
//! data and append into the ledger through per-record locks, so the scan
//! cannot fail and needs no ordering between workers; the parallel
//! iterator's implicit join is the sole barrier before reporting reads
//! the ledger.

use rayon::prelude::*;
use tracing::debug;

use crate::ledger::UsageLedger;
use crate::model::{Module, Program};

/// Scans every loaded module other than the target and records each
/// reference that resolves, by defining position, to a candidate.
///
/// References inside the target module itself never count toward usage;
/// the module boundary is what "external" means here.
///
/// With `verbose` set, every matched reference is logged with its file
/// and line at debug level - purely observational, no effect on results.
pub fn scan_foreign_modules(
    program: &Program,
    target_path: &str,
    ledger: &UsageLedger,
    verbose: bool,
) {
    let foreign: Vec<&Module> = program
        .modules()
        .filter(|m| m.path != target_path)
        .collect();

    foreign.into_par_iter().for_each(|module| {
        if verbose {
            debug!(module = %module.path, "scanning");
        }
        scan_module(module, target_path, ledger, verbose);
    });
}

/// Scans a single module's resolved references against the ledger.
fn scan_module(module: &Module, target_path: &str, ledger: &UsageLedger, verbose: bool) {
    for reference in &module.references {
        let symbol = &reference.symbol;
        if symbol.module_path != target_path {
            continue;
        }

        let matched = ledger.record(
            &symbol.position,
            reference.position.clone(),
            symbol.clone(),
        );
        if matched && verbose {
            debug!(
                name = %symbol.name,
                file = %reference.position.file,
                line = reference.position.line,
                "matched reference"
            );
        }
    }
}
