use crate::board::{Move, MoveParseError, Piece};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move { mv: Move, promotion: Option<Piece> },
    Board,
    Moves,
    History,
    Resign,
    New,
    Depth(Option<u32>),
    Help,
    Quit,
    Unknown { input: String, error: MoveParseError },
}

/// Parse one line of input. Blank lines yield `None`; anything that is not
/// a keyword is read as a coordinate move.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let cmd = match first {
        "board" | "b" => Command::Board,
        "moves" | "m" => Command::Moves,
        "history" | "h" => Command::History,
        "resign" => Command::Resign,
        "new" => Command::New,
        "depth" => Command::Depth(parts.get(1).and_then(|v| v.parse::<u32>().ok())),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        text => match Move::parse_with_promotion(&text.to_ascii_lowercase()) {
            Ok((mv, promotion)) => Command::Move { mv, promotion },
            Err(error) => Command::Unknown {
                input: trimmed.to_string(),
                error,
            },
        },
    };

    Some(cmd)
}
