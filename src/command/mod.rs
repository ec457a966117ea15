//! User input parser.
//!
//! Turns an input line into a [`Input`]: a slash command, a bare conversation
//! number, or plain text for the current conversation.

use thiserror::Error;

/// A parsed slash command. Each variant corresponds to a `/command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Help,
    Name { name: String },
    Status,
    Clear,
    Exit,
    List,
    Switch,
    Public,
    Dm { nick: String, text: Option<String> },
    Reply { text: Option<String> },
    Join { channel: String, password: Option<String> },
    Leave,
    Pass { password: String },
    Transfer { nick: String },
    Channels,
    Online,
    Block { nick: Option<String> },
    Unblock { nick: String },
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(ParsedCommand),
    Number(i64),
    Text(String),
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: /{0}. Type /help for the list of commands")]
    Unknown(String),
    #[error("Usage: /{command} {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

/// Classify an input line.
pub fn parse_input(line: &str) -> Result<Input, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Input::Empty);
    }
    if trimmed.starts_with('/') {
        return parse_command(trimmed).map(Input::Command);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(Input::Number(n));
    }
    Ok(Input::Text(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Parse a `/command arg ...` string. Command names are case-insensitive.
pub fn parse_command(input: &str) -> Result<ParsedCommand, CommandError> {
    let input = input.trim();
    let body = input.strip_prefix('/').unwrap_or(input);
    let (cmd, rest) = split_word(body);
    let cmd = cmd.unwrap_or_default().to_lowercase();
    let (arg, tail) = rest.map(split_word).unwrap_or((None, None));

    match cmd.as_str() {
        "help" | "h" => Ok(ParsedCommand::Help),
        "name" | "nick" => {
            let name = arg.ok_or(CommandError::MissingArgument {
                command: "name",
                argument: "<name>",
            })?;
            Ok(ParsedCommand::Name {
                name: name.to_string(),
            })
        }
        "status" => Ok(ParsedCommand::Status),
        "clear" => Ok(ParsedCommand::Clear),
        "exit" | "quit" | "q" => Ok(ParsedCommand::Exit),
        "list" => Ok(ParsedCommand::List),
        "switch" => Ok(ParsedCommand::Switch),
        "public" => Ok(ParsedCommand::Public),
        "dm" | "msg" => {
            let nick = arg.ok_or(CommandError::MissingArgument {
                command: "dm",
                argument: "<name> [message]",
            })?;
            Ok(ParsedCommand::Dm {
                nick: strip_at(nick),
                text: tail.map(str::to_string),
            })
        }
        "reply" | "r" => Ok(ParsedCommand::Reply {
            text: rest.map(str::to_string),
        }),
        "j" | "join" => {
            let channel = arg.ok_or(CommandError::MissingArgument {
                command: "j",
                argument: "#channel [password]",
            })?;
            let channel = if channel.starts_with('#') {
                channel.to_string()
            } else {
                format!("#{}", channel)
            };
            Ok(ParsedCommand::Join {
                channel,
                password: tail.map(str::to_string),
            })
        }
        "leave" | "part" => Ok(ParsedCommand::Leave),
        "pass" => {
            let password = rest.ok_or(CommandError::MissingArgument {
                command: "pass",
                argument: "<password>",
            })?;
            Ok(ParsedCommand::Pass {
                password: password.to_string(),
            })
        }
        "transfer" => {
            let nick = arg.ok_or(CommandError::MissingArgument {
                command: "transfer",
                argument: "@user",
            })?;
            Ok(ParsedCommand::Transfer { nick: strip_at(nick) })
        }
        "channels" => Ok(ParsedCommand::Channels),
        "online" | "w" => Ok(ParsedCommand::Online),
        "block" => Ok(ParsedCommand::Block {
            nick: arg.map(strip_at),
        }),
        "unblock" => {
            let nick = arg.ok_or(CommandError::MissingArgument {
                command: "unblock",
                argument: "@user",
            })?;
            Ok(ParsedCommand::Unblock { nick: strip_at(nick) })
        }
        _ => Err(CommandError::Unknown(cmd)),
    }
}

/// Split off the first whitespace-delimited word. Both halves are trimmed and
/// empty halves become `None`.
fn split_word(s: &str) -> (Option<&str>, Option<&str>) {
    let s = s.trim();
    let (word, rest) = match s.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (s, ""),
    };
    let word = (!word.is_empty()).then_some(word);
    let rest = (!rest.is_empty()).then_some(rest);
    (word, rest)
}

fn strip_at(nick: &str) -> String {
    nick.trim_start_matches('@').to_string()
}
