// Console command enum
#[derive(Debug, PartialEq)]
pub enum Command {
    Register,
    List,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Quit,
    Continue,
}

// Parse raw input line into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_uppercase();

    match cmd.as_str() {
        "REGISTER" | "R" => Command::Register,
        "LIST" | "L" => Command::List,
        "HELP" | "H" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
