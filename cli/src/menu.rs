//! Menu selections and the commands they stand for.

use crate::error::{CliError, CliResult};

/// Title line printed above the options.
pub const TITLE: &str = "=== Smart Connection: Fiber Optic Network Optimization ===";

/// One entry per menu option, in display order.
pub const OPTIONS: [(&str, Command); 10] = [
    ("1", Command::Load),
    ("2", Command::Save),
    ("3", Command::AddVertex),
    ("4", Command::AddEdge),
    ("5", Command::RemoveVertex),
    ("6", Command::RemoveEdge),
    ("7", Command::ShowContents),
    ("8", Command::ShowAdjacency),
    ("9", Command::CheckConnectivity),
    ("0", Command::Quit),
];

/// Operations available from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Load,
    Save,
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    ShowContents,
    ShowAdjacency,
    CheckConnectivity,
    Quit,
}

impl Command {
    /// Map a raw menu selection to its command.
    pub fn from_selection(selection: &str) -> CliResult<Self> {
        let selection = selection.trim();
        OPTIONS
            .iter()
            .find(|(key, _)| *key == selection)
            .map(|(_, command)| *command)
            .ok_or_else(|| CliError::UnknownCommand(selection.to_string()))
    }

    /// Menu text for this command.
    pub fn description(self) -> &'static str {
        match self {
            Command::Load => "Load data from the graph file",
            Command::Save => "Save data to the graph file",
            Command::AddVertex => "Insert vertex",
            Command::AddEdge => "Insert edge",
            Command::RemoveVertex => "Remove vertex",
            Command::RemoveEdge => "Remove edge",
            Command::ShowContents => "Show file contents",
            Command::ShowAdjacency => "Show graph (adjacency list)",
            Command::CheckConnectivity => "Check connectivity and show Gr(G)",
            Command::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_option_round_trips() {
        for (key, command) in OPTIONS {
            assert_eq!(Command::from_selection(key).unwrap(), command);
        }
    }

    #[test]
    fn test_selection_is_trimmed() {
        assert_eq!(Command::from_selection(" 9 ").unwrap(), Command::CheckConnectivity);
    }

    #[test]
    fn test_unknown_selection() {
        assert!(matches!(
            Command::from_selection("42"),
            Err(CliError::UnknownCommand(s)) if s == "42"
        ));
        assert!(Command::from_selection("").is_err());
    }
}
