//! The static relocation table.
//!
//! Every file the restructuring touches is listed here literally, in the order
//! the moves are attempted. Nothing is derived at runtime so the migration can be
//! audited by reading this file. Each flat `src/` source appears exactly once.

use std::fmt;

/// A single file relocation, from one project-relative path to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelocationEntry {
    /// Project-relative path of the file before the move.
    pub source: &'static str,
    /// Project-relative path of the file after the move.
    pub destination: &'static str,
}

impl RelocationEntry {
    pub const fn new(source: &'static str, destination: &'static str) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl fmt::Display for RelocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// All relocations, in execution order.
pub const RELOCATIONS: &[RelocationEntry] = &[
    RelocationEntry::new("src/ICommand.cpp", "include/command/icommand.hpp"),
    RelocationEntry::new("src/ShowCommand.cpp", "include/command/show_command.hpp"),
    RelocationEntry::new("src/StopCommand.cpp", "include/command/stop_command.hpp"),
    RelocationEntry::new("src/IInput.cpp", "include/input/iinput.hpp"),
    RelocationEntry::new("src/ISignal.cpp", "include/signal/isignal.hpp"),
    RelocationEntry::new("src/CtrlF1Signal.cpp", "include/signal/ctrl_f1_signal.hpp"),
    RelocationEntry::new("src/IWindow.cpp", "include/window/iwindow.hpp"),
    RelocationEntry::new("src/WindowManager.cpp", "include/window/window_manager.hpp"),
    RelocationEntry::new("src/SignalManager.cpp", "include/window/signal_manager.hpp"),
    RelocationEntry::new("src/Input.cpp", "include/windows/input/input.hpp"),
    RelocationEntry::new("src/OverlayWindow.cpp", "include/windows/window/overlay_window.hpp"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(RELOCATIONS.len(), 11);
    }

    #[test]
    fn test_all_sources_are_flat_cpp_files() {
        for entry in RELOCATIONS {
            let name = entry
                .source
                .strip_prefix("src/")
                .expect("source should live under src/");
            assert!(!name.contains('/'), "source not flat: {}", entry.source);
            assert!(name.ends_with(".cpp"), "not a .cpp source: {}", entry.source);
        }
    }

    #[test]
    fn test_all_destinations_target_include_tree() {
        for entry in RELOCATIONS {
            assert!(
                entry.destination.starts_with("include/"),
                "unexpected destination: {}",
                entry
            );
        }
    }

    #[test]
    fn test_sources_are_unique() {
        let sources: HashSet<_> = RELOCATIONS.iter().map(|e| e.source).collect();
        assert_eq!(sources.len(), RELOCATIONS.len());
    }

    #[test]
    fn test_no_destination_collisions() {
        let destinations: HashSet<_> = RELOCATIONS.iter().map(|e| e.destination).collect();
        assert_eq!(destinations.len(), RELOCATIONS.len());
    }

    #[test]
    fn test_entry_display() {
        let entry = RelocationEntry::new("src/Input.cpp", "include/windows/input/input.hpp");
        assert_eq!(
            entry.to_string(),
            "src/Input.cpp -> include/windows/input/input.hpp"
        );
    }
}
