// CallEvent entity
// One recorded fact about a call, immutable once stored

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::value_objects::EventKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallEvent {
    pub event_id: Uuid,
    pub call_id: String,
    pub kind: EventKind,
    pub timestamp: String,
    pub choice: Option<String>,
    pub caller_address: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl CallEvent {
    pub fn start(call_id: String, timestamp: String, caller_address: String) -> Self {
        Self::new(call_id, EventKind::Start, timestamp, None, Some(caller_address))
    }

    pub fn menu(call_id: String, timestamp: String, choice: String) -> Self {
        Self::new(call_id, EventKind::Menu, timestamp, Some(choice), None)
    }

    pub fn end(call_id: String, timestamp: String) -> Self {
        Self::new(call_id, EventKind::End, timestamp, None, None)
    }

    fn new(
        call_id: String,
        kind: EventKind,
        timestamp: String,
        choice: Option<String>,
        caller_address: Option<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            call_id,
            kind,
            timestamp,
            choice,
            caller_address,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }
}
