// In-memory stores shared by the application layer tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::ports::{EventRepository, ReferenceRepository};
use backend_domain::{CallEvent, Course, EventKind, RuntimeConfig, Student, Weekday};

use crate::{AppState, Metrics};

pub fn sample_student() -> Student {
    Student {
        given_name: "Max".to_string(),
        family_name: "Mustermann".to_string(),
        matriculation_number: "123456".to_string(),
        caller_address: "0800111111".to_string(),
    }
}

pub fn sample_course() -> Course {
    Course {
        class_id: "MM14".to_string(),
        title: "Konzeption von Sprachdialogsystemen und Realisierung von Sprachportalen"
            .to_string(),
        description: "Vorlesung und Praktikum zu Sprachportalen".to_string(),
        weekday: Weekday::Monday,
    }
}

#[derive(Default)]
pub struct StubStore {
    pub events: RwLock<Vec<CallEvent>>,
    pub students: RwLock<Vec<Student>>,
    pub courses: RwLock<Vec<Course>>,
}

#[async_trait]
impl EventRepository for StubStore {
    async fn insert_event(&self, event: &CallEvent) -> anyhow::Result<()> {
        self.events.write().await.push(event.clone());
        Ok(())
    }

    async fn events_for_call(
        &self,
        call_id: &str,
        kind: EventKind,
        limit: Option<usize>,
    ) -> anyhow::Result<Vec<CallEvent>> {
        let mut matches: Vec<CallEvent> = self
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.call_id == call_id && event.kind == kind)
            .cloned()
            .collect();
        if let Some(limit) = limit {
            matches.truncate(limit);
        }
        Ok(matches)
    }

    async fn distinct_call_ids(&self) -> anyhow::Result<Vec<String>> {
        let mut ids: Vec<String> = Vec::new();
        for event in self.events.read().await.iter() {
            if !ids.contains(&event.call_id) {
                ids.push(event.call_id.clone());
            }
        }
        Ok(ids)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ReferenceRepository for StubStore {
    async fn find_students_by_caller_address(&self, address: &str) -> anyhow::Result<Vec<Student>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .filter(|student| student.caller_address == address)
            .cloned()
            .collect())
    }

    async fn find_students_by_matriculation_number(
        &self,
        number: &str,
    ) -> anyhow::Result<Vec<Student>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .filter(|student| student.matriculation_number == number)
            .cloned()
            .collect())
    }

    async fn find_courses_by_class_id(&self, class_id: &str) -> anyhow::Result<Vec<Course>> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .filter(|course| course.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn insert_student(&self, student: &Student) -> anyhow::Result<()> {
        self.students.write().await.push(student.clone());
        Ok(())
    }

    async fn insert_course(&self, course: &Course) -> anyhow::Result<()> {
        self.courses.write().await.push(course.clone());
        Ok(())
    }
}

pub struct FailingStore;

#[async_trait]
impl EventRepository for FailingStore {
    async fn insert_event(&self, _event: &CallEvent) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("store unavailable"))
    }

    async fn events_for_call(
        &self,
        _call_id: &str,
        _kind: EventKind,
        _limit: Option<usize>,
    ) -> anyhow::Result<Vec<CallEvent>> {
        Err(anyhow::anyhow!("store unavailable"))
    }

    async fn distinct_call_ids(&self) -> anyhow::Result<Vec<String>> {
        Err(anyhow::anyhow!("store unavailable"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("store unavailable"))
    }
}

#[async_trait]
impl ReferenceRepository for FailingStore {
    async fn find_students_by_caller_address(
        &self,
        _address: &str,
    ) -> anyhow::Result<Vec<Student>> {
        Err(anyhow::anyhow!("store unavailable"))
    }

    async fn find_students_by_matriculation_number(
        &self,
        _number: &str,
    ) -> anyhow::Result<Vec<Student>> {
        Err(anyhow::anyhow!("store unavailable"))
    }

    async fn find_courses_by_class_id(&self, _class_id: &str) -> anyhow::Result<Vec<Course>> {
        Err(anyhow::anyhow!("store unavailable"))
    }

    async fn insert_student(&self, _student: &Student) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("store unavailable"))
    }

    async fn insert_course(&self, _course: &Course) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("store unavailable"))
    }
}

fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        max_body_bytes: 65_536,
        request_timeout_seconds: 5,
    }
}

pub fn stub_state() -> (AppState, Arc<StubStore>) {
    let store = Arc::new(StubStore {
        events: RwLock::new(Vec::new()),
        students: RwLock::new(vec![sample_student()]),
        courses: RwLock::new(vec![sample_course()]),
    });
    let state = AppState {
        config: test_config(),
        event_repo: store.clone(),
        reference_repo: store.clone(),
        metrics: Arc::new(Metrics::default()),
    };
    (state, store)
}

pub fn failing_state() -> AppState {
    let store = Arc::new(FailingStore);
    AppState {
        config: test_config(),
        event_repo: store.clone(),
        reference_repo: store,
        metrics: Arc::new(Metrics::default()),
    }
}
