// CallTimeline entity
// Derived per-call report, constructed on demand and never persisted

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub timestamp: String,
    pub choice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallTimeline {
    pub call_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matriculation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub menus: Vec<MenuEntry>,
}

impl CallTimeline {
    pub fn empty(call_id: String) -> Self {
        Self {
            call_id,
            start: None,
            caller_address: None,
            matriculation_number: None,
            student_name: None,
            end: None,
            menus: Vec::new(),
        }
    }
}
