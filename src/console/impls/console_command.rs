use std::convert::Infallible;
use std::str::FromStr;
use crate::console::enums::console_command::ConsoleCommand;

impl FromStr for ConsoleCommand {
    type Err = Infallible;

    fn from_str(line: &str) -> Result<Self, Self::Err>
    {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, "")
        };

        Ok(match (command, argument) {
            ("requests", "") => ConsoleCommand::Requests,
            ("files", "") => ConsoleCommand::Files,
            ("file", name) if !name.is_empty() => ConsoleCommand::File(name.to_string()),
            ("stats", "") => ConsoleCommand::Stats,
            ("help", "") => ConsoleCommand::Help,
            ("quit", "") | ("exit", "") => ConsoleCommand::Quit,
            _ => ConsoleCommand::Invalid(line.to_string())
        })
    }
}
