use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use backend_application::queries::lookup_queries;
use backend_application::{AppError, AppState};
use backend_domain::{Course, CourseLookup, Student, StudentLookup};

// Not-found asymmetry kept from the deployed dialogs: an unknown
// matriculation number stays `ok` with an empty name, an unknown class
// id is `not_ok`.

#[derive(Debug, Serialize)]
pub struct StudentLookupResponse {
    status: String,
    name: String,
}

#[derive(Debug, Serialize)]
pub struct CourseLookupResponse {
    status: String,
    #[serde(rename = "classId")]
    class_id: String,
    #[serde(rename = "classTitle")]
    class_title: String,
    description: String,
}

fn student_response(outcome: Result<Option<Student>, AppError>) -> StudentLookupResponse {
    match outcome {
        Ok(resolved) => StudentLookupResponse {
            status: "ok".to_string(),
            name: resolved
                .map(|student| student.full_name())
                .unwrap_or_default(),
        },
        Err(_) => StudentLookupResponse {
            status: "not_ok".to_string(),
            name: String::new(),
        },
    }
}

fn course_response(outcome: Result<Option<Course>, AppError>) -> CourseLookupResponse {
    match outcome {
        Ok(Some(course)) => CourseLookupResponse {
            status: "ok".to_string(),
            class_id: course.class_id,
            class_title: course.title,
            description: course.description,
        },
        Ok(None) | Err(_) => CourseLookupResponse {
            status: "not_ok".to_string(),
            class_id: String::new(),
            class_title: String::new(),
            description: String::new(),
        },
    }
}

pub async fn lookup_matriculation_number(
    State(state): State<AppState>,
    lookup: Option<Query<StudentLookup>>,
) -> Json<StudentLookupResponse> {
    let lookup = lookup.map(|Query(lookup)| lookup).unwrap_or_default();
    let outcome = lookup_queries::student_by_matriculation_number(&state, lookup).await;
    Json(student_response(outcome))
}

pub async fn lookup_class(
    State(state): State<AppState>,
    lookup: Option<Query<CourseLookup>>,
) -> Json<CourseLookupResponse> {
    let lookup = lookup.map(|Query(lookup)| lookup).unwrap_or_default();
    let outcome = lookup_queries::course_by_class_id(&state, lookup).await;
    Json(course_response(outcome))
}
