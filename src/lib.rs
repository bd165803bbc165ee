//! restructure - move the flat `src/` sources into the nested category layout
//!
//! This library holds the static relocation table, the relocation pass that
//! walks it, and the console output the `restructure` binary produces.

pub mod cli;
pub mod config;
pub mod output;
pub mod relocation_table;
pub mod relocator;

pub use config::RelocateConfig;
pub use relocation_table::{RELOCATIONS, RelocationEntry};
pub use relocator::{EntryOutcome, RelocateError, RelocateResult, RelocationReport, Relocator};

pub use cli::run;
