//! Program flow for the `restructure` binary.
//!
//! The binary takes no arguments: it resolves the relocation table against the
//! configured project root and runs a single pass.

use crate::config::RelocateConfig;
use crate::relocation_table::RELOCATIONS;
use crate::relocator::{RelocationReport, Relocator};

/// Runs the full relocation table against the configured project root.
///
/// Errors are flattened to their description for printing by `main`.
///
/// # Examples
///
/// ```no_run
/// use restructure::cli::run;
/// use restructure::config::RelocateConfig;
///
/// match run(&RelocateConfig::default()) {
///     Ok(report) => println!("{} files moved", report.moved_count()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run(config: &RelocateConfig) -> Result<RelocationReport, String> {
    Relocator::new(config.clone())
        .relocate(RELOCATIONS)
        .map_err(|e| e.to_string())
}
