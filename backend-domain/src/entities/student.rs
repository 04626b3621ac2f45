// Student entity
// Identity reference record, maintained by an external collaborator

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub given_name: String,
    pub family_name: String,
    pub matriculation_number: String,
    pub caller_address: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}
