use async_trait::async_trait;

use crate::entities::{CallEvent, Course, Student};
use crate::value_objects::EventKind;

// Implementations return events in recorded order (ascending receipt
// time); the timeline assembly relies on that.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert_event(&self, event: &CallEvent) -> anyhow::Result<()>;
    async fn events_for_call(
        &self,
        call_id: &str,
        kind: EventKind,
        limit: Option<usize>,
    ) -> anyhow::Result<Vec<CallEvent>>;
    async fn distinct_call_ids(&self) -> anyhow::Result<Vec<String>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    async fn find_students_by_caller_address(
        &self,
        address: &str,
    ) -> anyhow::Result<Vec<Student>>;
    async fn find_students_by_matriculation_number(
        &self,
        number: &str,
    ) -> anyhow::Result<Vec<Student>>;
    async fn find_courses_by_class_id(&self, class_id: &str) -> anyhow::Result<Vec<Course>>;
    async fn insert_student(&self, student: &Student) -> anyhow::Result<()>;
    async fn insert_course(&self, course: &Course) -> anyhow::Result<()>;
}
