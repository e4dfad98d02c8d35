use crate::club;
use crate::config::TableIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a client asks the club for. Only these come from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Action {
    Arrive { client: String },
    Sit { client: String, table: TableIndex },
    Wait { client: String },
    Leave { client: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    NotOpenYet,
    YouShallNotPass,
    PlaceIsBusy,
    ClientUnknown,
    ICanWaitNoLonger,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Reason::NotOpenYet => "NotOpenYet",
            Reason::YouShallNotPass => "YouShallNotPass",
            Reason::PlaceIsBusy => "PlaceIsBusy",
            Reason::ClientUnknown => "ClientUnknown",
            Reason::ICanWaitNoLonger => "ICanWaitNoLonger!",
        };

        f.write_str(s)
    }
}

/// Everything that can appear in the day log: echoed actions and derived events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    Arrived { client: String },
    SatDown { client: String, table: TableIndex },
    Waiting { client: String },
    Left { client: String },
    Kicked { client: String },
    Seated { client: String, table: TableIndex },
    Rejected(Reason),
}

impl Event {
    pub fn code(&self) -> u32 {
        match self {
            Event::Arrived { .. } => 1,
            Event::SatDown { .. } => 2,
            Event::Waiting { .. } => 3,
            Event::Left { .. } => 4,
            Event::Kicked { .. } => 11,
            Event::Seated { .. } => 12,
            Event::Rejected(_) => 13,
        }
    }
}

impl From<Action> for Event {
    fn from(action: Action) -> Event {
        match action {
            Action::Arrive { client } => Event::Arrived { client },
            Action::Sit { client, table } => Event::SatDown { client, table },
            Action::Wait { client } => Event::Waiting { client },
            Action::Leave { client } => Event::Left { client },
        }
    }
}

impl Into<Option<Reason>> for Event {
    fn into(self) -> Option<Reason> {
        match self {
            Event::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

impl Into<club::Event> for Reason {
    fn into(self) -> club::Event {
        club::Event::Rejected(self)
    }
}

/// `<code> <fields>`, tables one-based
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.code())?;

        match self {
            Event::Arrived { client }
            | Event::Waiting { client }
            | Event::Left { client }
            | Event::Kicked { client } => write!(f, "{}", client),
            Event::SatDown { client, table } | Event::Seated { client, table } => {
                write!(f, "{} {}", client, table + 1)
            }
            Event::Rejected(reason) => write!(f, "{}", reason),
        }
    }
}
