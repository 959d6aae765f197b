//! Input parsing for the interactive `play` command.
//!
//! Parsing is lenient about whitespace and case, strict about
//! structure: a recognized keyword with malformed arguments is
//! reported as invalid rather than guessed at.

/// An action requested by one line of interactive input.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayAction {
    /// Place the active player's marker at (row, col)
    Move { row: usize, col: usize },
    /// Print the full state report
    State,
    /// Reset the board, keeping names and scores
    Reset,
    /// Rename a player by index
    Rename { index: usize, name: String },
}

/// Result of parsing one line of interactive input.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// A recognized action
    Action(PlayAction),
    /// User asked to leave the loop (`q` or `quit`)
    Quit,
    /// Unrecognized or malformed input, with a message for the user
    Invalid(String),
}

/// Parse one line of interactive input.
///
/// Accepted forms (case-insensitive keywords):
/// - `<row> <col>` or `move <row> <col>`
/// - `state` or `s`
/// - `reset`
/// - `rename <index> <name...>` (the name may contain spaces)
/// - `q` or `quit`
///
/// # Example
///
/// ```
/// use noughts_cli::validation::{parse_play_input, ParseResult, PlayAction};
///
/// assert_eq!(
///     parse_play_input("1 2"),
///     ParseResult::Action(PlayAction::Move { row: 1, col: 2 })
/// );
/// assert_eq!(parse_play_input("q"), ParseResult::Quit);
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParseResult::Invalid("Enter a command (row col, state, reset, rename, quit).".into());
    }

    let mut parts = trimmed.split_whitespace();
    let head = parts.next().unwrap_or_default();

    match head.to_ascii_lowercase().as_str() {
        "q" | "quit" => ParseResult::Quit,
        "s" | "state" => parse_state(parts),
        "reset" => ParseResult::Action(PlayAction::Reset),
        "rename" => parse_rename(parts),
        "move" => parse_coords(parts.next(), parts.next()),
        first => parse_coords(Some(first), parts.next()),
    }
}

fn parse_state<'a>(mut rest: impl Iterator<Item = &'a str>) -> ParseResult {
    match rest.next() {
        None => ParseResult::Action(PlayAction::State),
        Some(extra) => ParseResult::Invalid(format!("Unexpected argument: {}", extra)),
    }
}

fn parse_coords(row: Option<&str>, col: Option<&str>) -> ParseResult {
    let (Some(row), Some(col)) = (row, col) else {
        return ParseResult::Invalid("Expected two coordinates, e.g. `0 2`.".into());
    };
    match (row.parse::<usize>(), col.parse::<usize>()) {
        (Ok(row), Ok(col)) => ParseResult::Action(PlayAction::Move { row, col }),
        _ => ParseResult::Invalid(format!("Coordinates must be numbers, got `{} {}`.", row, col)),
    }
}

fn parse_rename<'a>(mut rest: impl Iterator<Item = &'a str>) -> ParseResult {
    let Some(index) = rest.next() else {
        return ParseResult::Invalid("Usage: rename <index> <name>".into());
    };
    let Ok(index) = index.parse::<usize>() else {
        return ParseResult::Invalid(format!("Player index must be 0 or 1, got `{}`.", index));
    };
    let name = rest.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return ParseResult::Invalid("Usage: rename <index> <name>".into());
    }
    ParseResult::Action(PlayAction::Rename { index, name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_coordinates_parse_as_move() {
        assert_eq!(
            parse_play_input("0 2"),
            ParseResult::Action(PlayAction::Move { row: 0, col: 2 })
        );
    }

    #[test]
    fn move_keyword_parses_too() {
        assert_eq!(
            parse_play_input("  MOVE 1 1 "),
            ParseResult::Action(PlayAction::Move { row: 1, col: 1 })
        );
    }

    #[test]
    fn quit_forms() {
        assert_eq!(parse_play_input("q"), ParseResult::Quit);
        assert_eq!(parse_play_input("quit"), ParseResult::Quit);
    }

    #[test]
    fn state_and_reset_keywords() {
        assert_eq!(parse_play_input("state"), ParseResult::Action(PlayAction::State));
        assert_eq!(parse_play_input("s"), ParseResult::Action(PlayAction::State));
        assert_eq!(parse_play_input("reset"), ParseResult::Action(PlayAction::Reset));
    }

    #[test]
    fn rename_keeps_spaces_in_names() {
        assert_eq!(
            parse_play_input("rename 1 Grace Hopper"),
            ParseResult::Action(PlayAction::Rename {
                index: 1,
                name: "Grace Hopper".into()
            })
        );
    }

    #[test]
    fn malformed_input_is_invalid_with_message() {
        assert!(matches!(parse_play_input(""), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("a b"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("rename x Ada"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("rename 0"), ParseResult::Invalid(_)));
    }
}
