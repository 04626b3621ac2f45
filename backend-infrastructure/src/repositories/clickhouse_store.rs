use anyhow::Result;
use async_trait::async_trait;
use clickhouse::{Client, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use backend_domain::ports::{EventRepository, ReferenceRepository};
use backend_domain::{CallEvent, Course, EventKind, Student};

// Optional entity fields are stored as empty strings; the columns are
// non-nullable.
#[derive(Clone)]
pub struct ClickhouseStore {
    client: Client,
    database: String,
}

#[derive(Debug, Row, Serialize, Deserialize)]
struct CallEventRow {
    #[serde(with = "clickhouse::serde::uuid")]
    event_id: Uuid,
    call_id: String,
    kind: String,
    timestamp: String,
    choice: String,
    caller_address: String,
    #[serde(with = "clickhouse::serde::time::datetime64::millis")]
    recorded_at: OffsetDateTime,
}

#[derive(Debug, Row, Serialize, Deserialize)]
struct StudentRow {
    given_name: String,
    family_name: String,
    matriculation_number: String,
    caller_address: String,
}

#[derive(Debug, Row, Serialize, Deserialize)]
struct CourseRow {
    class_id: String,
    title: String,
    description: String,
    weekday: String,
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl CallEventRow {
    fn from_entity(event: &CallEvent) -> Self {
        Self {
            event_id: event.event_id,
            call_id: event.call_id.clone(),
            kind: event.kind.as_str().to_string(),
            timestamp: event.timestamp.clone(),
            choice: event.choice.clone().unwrap_or_default(),
            caller_address: event.caller_address.clone().unwrap_or_default(),
            recorded_at: event.recorded_at,
        }
    }

    fn into_entity(self) -> Result<CallEvent> {
        Ok(CallEvent {
            event_id: self.event_id,
            call_id: self.call_id,
            kind: self.kind.parse()?,
            timestamp: self.timestamp,
            choice: optional(self.choice),
            caller_address: optional(self.caller_address),
            recorded_at: self.recorded_at,
        })
    }
}

impl StudentRow {
    fn from_entity(student: &Student) -> Self {
        Self {
            given_name: student.given_name.clone(),
            family_name: student.family_name.clone(),
            matriculation_number: student.matriculation_number.clone(),
            caller_address: student.caller_address.clone(),
        }
    }

    fn into_entity(self) -> Student {
        Student {
            given_name: self.given_name,
            family_name: self.family_name,
            matriculation_number: self.matriculation_number,
            caller_address: self.caller_address,
        }
    }
}

impl CourseRow {
    fn from_entity(course: &Course) -> Self {
        Self {
            class_id: course.class_id.clone(),
            title: course.title.clone(),
            description: course.description.clone(),
            weekday: course.weekday.as_str().to_string(),
        }
    }

    fn into_entity(self) -> Result<Course> {
        Ok(Course {
            class_id: self.class_id,
            title: self.title,
            description: self.description,
            weekday: self.weekday.parse()?,
        })
    }
}

impl ClickhouseStore {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        let create_db = format!("CREATE DATABASE IF NOT EXISTS {}", self.database);
        self.client.query(&create_db).execute().await?;

        let create_events = r#"
CREATE TABLE IF NOT EXISTS call_events (
    event_id UUID,
    call_id String,
    kind LowCardinality(String),
    timestamp String,
    choice String,
    caller_address String,
    recorded_at DateTime64(3)
) ENGINE = MergeTree
ORDER BY (call_id, kind, recorded_at)
"#;
        self.client.query(create_events).execute().await?;

        let create_students = r#"
CREATE TABLE IF NOT EXISTS students (
    given_name String,
    family_name String,
    matriculation_number String,
    caller_address String
) ENGINE = MergeTree
ORDER BY matriculation_number
"#;
        self.client.query(create_students).execute().await?;

        let create_courses = r#"
CREATE TABLE IF NOT EXISTS courses (
    class_id String,
    title String,
    description String,
    weekday LowCardinality(String)
) ENGINE = MergeTree
ORDER BY class_id
"#;
        self.client.query(create_courses).execute().await?;
        Ok(())
    }
}

#[async_trait]
impl EventRepository for ClickhouseStore {
    async fn insert_event(&self, event: &CallEvent) -> Result<()> {
        let mut insert = self.client.insert("call_events")?;
        insert.write(&CallEventRow::from_entity(event)).await?;
        insert.end().await?;
        Ok(())
    }

    async fn events_for_call(
        &self,
        call_id: &str,
        kind: EventKind,
        limit: Option<usize>,
    ) -> Result<Vec<CallEvent>> {
        let mut query = String::from(
            "SELECT event_id, call_id, kind, timestamp, choice, caller_address, recorded_at \
             FROM call_events WHERE call_id = ? AND kind = ? ORDER BY recorded_at ASC",
        );
        if let Some(limit) = limit {
            query.push_str(&format!(" LIMIT {}", limit));
        }
        let rows = self
            .client
            .query(&query)
            .bind(call_id)
            .bind(kind.as_str())
            .fetch_all::<CallEventRow>()
            .await?;
        rows.into_iter().map(CallEventRow::into_entity).collect()
    }

    async fn distinct_call_ids(&self) -> Result<Vec<String>> {
        let ids = self
            .client
            .query("SELECT DISTINCT call_id FROM call_events ORDER BY call_id")
            .fetch_all::<String>()
            .await?;
        Ok(ids)
    }

    async fn ping(&self) -> Result<()> {
        let _: u8 = self.client.query("SELECT toUInt8(1)").fetch_one().await?;
        Ok(())
    }
}

#[async_trait]
impl ReferenceRepository for ClickhouseStore {
    async fn find_students_by_caller_address(&self, address: &str) -> Result<Vec<Student>> {
        let rows = self
            .client
            .query(
                "SELECT given_name, family_name, matriculation_number, caller_address \
                 FROM students WHERE caller_address = ?",
            )
            .bind(address)
            .fetch_all::<StudentRow>()
            .await?;
        Ok(rows.into_iter().map(StudentRow::into_entity).collect())
    }

    async fn find_students_by_matriculation_number(&self, number: &str) -> Result<Vec<Student>> {
        let rows = self
            .client
            .query(
                "SELECT given_name, family_name, matriculation_number, caller_address \
                 FROM students WHERE matriculation_number = ?",
            )
            .bind(number)
            .fetch_all::<StudentRow>()
            .await?;
        Ok(rows.into_iter().map(StudentRow::into_entity).collect())
    }

    async fn find_courses_by_class_id(&self, class_id: &str) -> Result<Vec<Course>> {
        let rows = self
            .client
            .query(
                "SELECT class_id, title, description, weekday \
                 FROM courses WHERE class_id = ?",
            )
            .bind(class_id)
            .fetch_all::<CourseRow>()
            .await?;
        rows.into_iter().map(CourseRow::into_entity).collect()
    }

    async fn insert_student(&self, student: &Student) -> Result<()> {
        let mut insert = self.client.insert("students")?;
        insert.write(&StudentRow::from_entity(student)).await?;
        insert.end().await?;
        Ok(())
    }

    async fn insert_course(&self, course: &Course) -> Result<()> {
        let mut insert = self.client.insert("courses")?;
        insert.write(&CourseRow::from_entity(course)).await?;
        insert.end().await?;
        Ok(())
    }
}
