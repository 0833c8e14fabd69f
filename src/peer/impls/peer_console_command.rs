use std::convert::Infallible;
use std::str::FromStr;
use crate::peer::enums::peer_console_command::PeerConsoleCommand;

impl FromStr for PeerConsoleCommand {
    type Err = Infallible;

    fn from_str(line: &str) -> Result<Self, Self::Err>
    {
        let line = line.split_whitespace().collect::<Vec<&str>>().join(" ");
        Ok(match line.as_str() {
            "uploads" | "request logs" => PeerConsoleCommand::Uploads,
            "help" => PeerConsoleCommand::Help,
            "quit" | "exit" => PeerConsoleCommand::Quit,
            _ => PeerConsoleCommand::Invalid(line)
        })
    }
}
