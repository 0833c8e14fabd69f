use std::fmt;
use crate::protocol::enums::action::Action;

impl Action {
    pub fn as_str(&self) -> &'static str
    {
        match self {
            Action::Share => "share",
            Action::Get => "get",
            Action::KeepAlive => "keep_alive",
        }
    }

    pub fn from_name(name: &str) -> Option<Action>
    {
        match name {
            "share" => Some(Action::Share),
            "get" => Some(Action::Get),
            "keep_alive" => Some(Action::KeepAlive),
            _ => None
        }
    }

    /// Fields this action reads besides `action`.
    pub fn fields(&self) -> &'static [&'static str]
    {
        match self {
            Action::Share => &["file_name", "peer"],
            Action::Get => &["file_name", "request_id"],
            Action::KeepAlive => &["peer"],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
