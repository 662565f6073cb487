use crate::commands::parser::{Command, CommandResult, parse_command};
use crate::error::RegistryError;
use crate::registration::{RegistrationOutcome, Registrar};
use crate::user::UserRecord;

use log::{debug, info};
use std::io::{BufRead, Write};

const HELP_TEXT: &str = "Commands:\n  \
    REGISTER (R)  register a new user\n  \
    LIST (L)      list registered users\n  \
    HELP (H, ?)   show this help\n  \
    QUIT (Q)      exit\n";

// Run commands from input until QUIT or end of input
pub fn run_session<R: BufRead, W: Write>(
    registrar: &Registrar,
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<(), RegistryError> {
    writeln!(output, "User registry. Type HELP for commands.")?;

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = read_field(input)? else {
            debug!("Input closed, ending session");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = parse_command(&line);
        if handle_command(registrar, command, input, output)? == CommandResult::Quit {
            break;
        }
    }

    info!("Session finished");
    Ok(())
}

// Handle a single command
pub fn handle_command<R: BufRead, W: Write>(
    registrar: &Registrar,
    command: Command,
    input: &mut R,
    output: &mut W,
) -> Result<CommandResult, RegistryError> {
    match command {
        Command::Register => handle_cmd_register(registrar, input, output),
        Command::List => handle_cmd_list(registrar, output),
        Command::Help => handle_cmd_help(output),
        Command::Quit => handle_cmd_quit(output),
        Command::Unknown(cmd) => handle_cmd_unknown(&cmd, output),
    }
}

// Command handler for REGISTER
fn handle_cmd_register<R: BufRead, W: Write>(
    registrar: &Registrar,
    input: &mut R,
    output: &mut W,
) -> Result<CommandResult, RegistryError> {
    let mut values: [String; 4] = Default::default();
    for (label, value) in ["Full name", "Age", "Phone", "Email"]
        .into_iter()
        .zip(values.iter_mut())
    {
        write!(output, "{}: ", label)?;
        output.flush()?;
        match read_field(input)? {
            Some(line) => *value = line,
            None => {
                writeln!(output)?;
                return Ok(CommandResult::Quit);
            }
        }
    }

    let [full_name, age, phone, email] = values;
    let form = UserRecord::new(full_name, age, phone, email);

    match registrar.register(&form)? {
        outcome @ RegistrationOutcome::Registered(_) => writeln!(output, "{}", outcome)?,
        outcome => writeln!(output, "Error: {}", outcome)?,
    }
    Ok(CommandResult::Continue)
}

// Command handler for LIST
fn handle_cmd_list<W: Write>(
    registrar: &Registrar,
    output: &mut W,
) -> Result<CommandResult, RegistryError> {
    let users = registrar.users()?;
    if users.is_empty() {
        writeln!(output, "No users registered")?;
    }
    for (index, user) in users.iter().enumerate() {
        writeln!(
            output,
            "{}. {} | {} | {} | {}",
            index + 1,
            user.full_name,
            user.phone,
            user.email,
            user.age
        )?;
    }
    Ok(CommandResult::Continue)
}

// Command handler for HELP
fn handle_cmd_help<W: Write>(output: &mut W) -> Result<CommandResult, RegistryError> {
    write!(output, "{}", HELP_TEXT)?;
    Ok(CommandResult::Continue)
}

// Command handler for QUIT
fn handle_cmd_quit<W: Write>(output: &mut W) -> Result<CommandResult, RegistryError> {
    writeln!(output, "Goodbye")?;
    Ok(CommandResult::Quit)
}

fn handle_cmd_unknown<W: Write>(
    cmd: &str,
    output: &mut W,
) -> Result<CommandResult, RegistryError> {
    writeln!(output, "Unknown command: {}. Type HELP for commands.", cmd)?;
    Ok(CommandResult::Continue)
}

// Read one line without its line terminator; None at end of input
fn read_field<R: BufRead>(input: &mut R) -> Result<Option<String>, RegistryError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
