use crate::state::AppState;
use crate::ui::format_selection;

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the query with this text
    Query(String),
    Up,
    Down,
    Select,
    Clear,
    Quit,
    Unknown(String),
}

/// What the caller should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the menu
    Render,
    Print(String),
    Quit,
}

/// Parse a line of input; lines starting with ':' are commands, anything else is query text
/// Query text is kept verbatim, whitespace included
pub fn parse_command(line: &str) -> Command {
    let Some(command) = line.strip_prefix(':') else {
        return Command::Query(line.to_string());
    };

    match command.trim() {
        "up" | "k" => Command::Up,
        "down" | "j" => Command::Down,
        "select" | "s" => Command::Select,
        "clear" | "c" => Command::Clear,
        "quit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Apply a command to the application state
pub fn handle_command(state: &mut AppState, command: Command) -> Outcome {
    match command {
        Command::Query(text) => {
            state.set_query(text);
            Outcome::Render
        }
        Command::Up => {
            state.move_highlight(-1);
            Outcome::Render
        }
        Command::Down => {
            state.move_highlight(1);
            Outcome::Render
        }
        Command::Select => match state.selected() {
            Some(item) => Outcome::Print(format_selection(&item)),
            None => Outcome::Print("Nothing highlighted".to_string()),
        },
        Command::Clear => {
            state.set_query("");
            Outcome::Render
        }
        Command::Quit => Outcome::Quit,
        Command::Unknown(name) => {
            tracing::warn!(command = %name, "unknown command");
            Outcome::Print(format!("Unknown command ':{}'", name))
        }
    }
}
