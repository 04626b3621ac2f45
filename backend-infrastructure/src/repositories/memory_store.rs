use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::ports::{EventRepository, ReferenceRepository};
use backend_domain::{CallEvent, Course, EventKind, Student};

#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<Vec<CallEvent>>,
    students: RwLock<Vec<Student>>,
    courses: RwLock<Vec<Course>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn insert_event(&self, event: &CallEvent) -> Result<()> {
        self.events.write().await.push(event.clone());
        Ok(())
    }

    async fn events_for_call(
        &self,
        call_id: &str,
        kind: EventKind,
        limit: Option<usize>,
    ) -> Result<Vec<CallEvent>> {
        let mut matches: Vec<CallEvent> = self
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.call_id == call_id && event.kind == kind)
            .cloned()
            .collect();
        // Stable sort, so insertion order breaks receipt-time ties.
        matches.sort_by_key(|event| event.recorded_at);
        if let Some(limit) = limit {
            matches.truncate(limit);
        }
        Ok(matches)
    }

    async fn distinct_call_ids(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = Vec::new();
        for event in self.events.read().await.iter() {
            if !ids.contains(&event.call_id) {
                ids.push(event.call_id.clone());
            }
        }
        ids.sort();
        Ok(ids)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ReferenceRepository for MemoryStore {
    async fn find_students_by_caller_address(&self, address: &str) -> Result<Vec<Student>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .filter(|student| student.caller_address == address)
            .cloned()
            .collect())
    }

    async fn find_students_by_matriculation_number(&self, number: &str) -> Result<Vec<Student>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .filter(|student| student.matriculation_number == number)
            .cloned()
            .collect())
    }

    async fn find_courses_by_class_id(&self, class_id: &str) -> Result<Vec<Course>> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .filter(|course| course.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn insert_student(&self, student: &Student) -> Result<()> {
        self.students.write().await.push(student.clone());
        Ok(())
    }

    async fn insert_course(&self, course: &Course) -> Result<()> {
        self.courses.write().await.push(course.clone());
        Ok(())
    }
}
