// Event kind value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Start,
    Menu,
    End,
}

#[derive(Debug, Error)]
#[error("unknown event kind '{0}'")]
pub struct ParseEventKindError(String);

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "start",
            EventKind::Menu => "menu",
            EventKind::End => "end",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = ParseEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(EventKind::Start),
            "menu" => Ok(EventKind::Menu),
            "end" => Ok(EventKind::End),
            other => Err(ParseEventKindError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_closed_set() {
        assert_eq!("start".parse::<EventKind>().expect("start"), EventKind::Start);
        assert_eq!("menu".parse::<EventKind>().expect("menu"), EventKind::Menu);
        assert_eq!("end".parse::<EventKind>().expect("end"), EventKind::End);
    }

    #[test]
    fn rejects_anything_else() {
        assert!("Start".parse::<EventKind>().is_err());
        assert!("hangup".parse::<EventKind>().is_err());
        assert!("".parse::<EventKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in [EventKind::Start, EventKind::Menu, EventKind::End] {
            assert_eq!(kind.to_string().parse::<EventKind>().expect("round trip"), kind);
        }
    }
}
