#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Requests,
    Files,
    File(String),
    Stats,
    Help,
    Quit,
    Invalid(String),
}
