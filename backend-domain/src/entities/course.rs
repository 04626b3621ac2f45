// Course entity
// Course reference record, maintained by an external collaborator

use serde::{Deserialize, Serialize};

use crate::value_objects::Weekday;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub class_id: String,
    pub title: String,
    pub description: String,
    pub weekday: Weekday,
}
