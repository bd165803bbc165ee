//! Console output.
//!
//! Per-entry status lines are printed without styling so the console contract
//! (`Moved: <old> -> <new>` / `Skipped (not found): <old>`) stays byte-exact.
//! Fatal errors go to stderr with the red marker.

use colored::*;

/// Writes all console output for a run.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a per-entry status line to stdout.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use restructure::output::OutputFormatter;
    /// OutputFormatter::status("Skipped (not found): src/Input.cpp");
    /// ```
    pub fn status(line: &str) {
        println!("{}", line);
    }

    /// Prints an error message in red with an X mark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use restructure::output::OutputFormatter;
    /// OutputFormatter::error("Failed to move src/Input.cpp");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
