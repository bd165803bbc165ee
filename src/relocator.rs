//! Relocation of files from the flat layout into the nested layout.
//!
//! This module walks a relocation table in order, creating destination
//! directories as needed and moving each file whose source is present. Missing
//! sources are reported and skipped. The first filesystem failure aborts the pass.
use crate::config::RelocateConfig;
use crate::output::OutputFormatter;
use crate::relocation_table::RelocationEntry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The result of processing one relocation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The source existed and was moved to its destination.
    Moved(RelocationEntry),
    /// The source did not exist; nothing was touched.
    Skipped(RelocationEntry),
}

impl EntryOutcome {
    /// Returns the console line for this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use restructure::relocation_table::RelocationEntry;
    /// use restructure::relocator::EntryOutcome;
    ///
    /// let entry = RelocationEntry::new("src/IInput.cpp", "include/input/iinput.hpp");
    /// assert_eq!(
    ///     EntryOutcome::Moved(entry).status_line(),
    ///     "Moved: src/IInput.cpp -> include/input/iinput.hpp"
    /// );
    /// assert_eq!(
    ///     EntryOutcome::Skipped(entry).status_line(),
    ///     "Skipped (not found): src/IInput.cpp"
    /// );
    /// ```
    pub fn status_line(&self) -> String {
        match self {
            Self::Moved(entry) => format!("Moved: {} -> {}", entry.source, entry.destination),
            Self::Skipped(entry) => format!("Skipped (not found): {}", entry.source),
        }
    }
}

/// Outcomes of a completed relocation pass, in table order.
#[derive(Debug, Default)]
pub struct RelocationReport {
    outcomes: Vec<EntryOutcome>,
}

impl RelocationReport {
    fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, outcome: EntryOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    /// Number of entries whose file was moved.
    pub fn moved_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EntryOutcome::Moved(_)))
            .count()
    }

    /// Number of entries skipped because the source was missing.
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EntryOutcome::Skipped(_)))
            .count()
    }

    /// The console lines of this run, in order.
    pub fn status_lines(&self) -> Vec<String> {
        self.outcomes.iter().map(EntryOutcome::status_line).collect()
    }
}

/// Errors that abort a relocation pass.
#[derive(Debug)]
pub enum RelocateError {
    /// Failed to create a destination's parent directories.
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// Failed to move a file to its destination.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
}

impl std::fmt::Display for RelocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for RelocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreationFailed { source, .. } => Some(source),
            Self::FileMoveFailure { source_error, .. } => Some(source_error),
        }
    }
}

/// Result type for relocation operations.
pub type RelocateResult<T> = Result<T, RelocateError>;

/// Moves files according to a relocation table, relative to a project root.
pub struct Relocator {
    config: RelocateConfig,
}

impl Relocator {
    pub fn new(config: RelocateConfig) -> Self {
        Self { config }
    }

    /// Processes every entry in order, printing one status line per entry.
    ///
    /// Returns the report of all outcomes, or the first error. Files moved
    /// before an error stay where they were moved; later entries are not
    /// processed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use restructure::config::RelocateConfig;
    /// use restructure::relocation_table::RELOCATIONS;
    /// use restructure::relocator::Relocator;
    ///
    /// let relocator = Relocator::new(RelocateConfig::with_project_root("/path/to/project"));
    /// match relocator.relocate(RELOCATIONS) {
    ///     Ok(report) => println!("{} moved", report.moved_count()),
    ///     Err(e) => eprintln!("Relocation failed: {}", e),
    /// }
    /// ```
    pub fn relocate(&self, entries: &[RelocationEntry]) -> RelocateResult<RelocationReport> {
        let mut report = RelocationReport::new();

        for entry in entries {
            let outcome = self.relocate_entry(entry)?;
            OutputFormatter::status(&outcome.status_line());
            report.record(outcome);
        }

        Ok(report)
    }

    fn relocate_entry(&self, entry: &RelocationEntry) -> RelocateResult<EntryOutcome> {
        let source = self.config.resolve(entry.source);
        let destination = self.config.resolve(entry.destination);

        if !source.exists() {
            return Ok(EntryOutcome::Skipped(*entry));
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| RelocateError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        move_file(&source, &destination).map_err(|e| RelocateError::FileMoveFailure {
            source: source.clone(),
            destination: destination.clone(),
            source_error: e,
        })?;

        Ok(EntryOutcome::Moved(*entry))
    }
}

/// Moves `source` to `destination`.
///
/// Uses a rename; when source and destination sit on different filesystems the
/// file is copied and the source removed instead. Replacing an existing
/// destination follows the platform's rename semantics.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    finish_move(fs::rename(source, destination), source, destination)
}

/// Completes a move given the outcome of the initial rename.
fn finish_move(renamed: io::Result<()>, source: &Path, destination: &Path) -> io::Result<()> {
    match renamed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(source, destination)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}
