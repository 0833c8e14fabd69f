#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerConsoleCommand {
    Uploads,
    Help,
    Quit,
    Invalid(String),
}
