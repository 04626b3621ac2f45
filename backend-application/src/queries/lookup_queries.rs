use tracing::{debug, error};

use crate::AppError;
use crate::AppState;
use backend_domain::{Course, CourseLookup, Student, StudentLookup};

fn required(value: Option<String>, field: &str, state: &AppState) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            state.metrics.record_rejected_request();
            Err(AppError::BadRequest(format!("{} is required", field)))
        }
    }
}

pub async fn student_by_matriculation_number(
    state: &AppState,
    lookup: StudentLookup,
) -> Result<Option<Student>, AppError> {
    let call_id = required(lookup.call_id, "callId", state)?;
    let number = required(lookup.matriculation_number, "matrikelnummer", state)?;
    debug!("student lookup for call {}", call_id);

    let students = state
        .reference_repo
        .find_students_by_matriculation_number(&number)
        .await
        .map_err(|err| {
            error!("failed to look up matriculation number {}: {}", number, err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;
    Ok(students.into_iter().next())
}

pub async fn course_by_class_id(
    state: &AppState,
    lookup: CourseLookup,
) -> Result<Option<Course>, AppError> {
    let call_id = required(lookup.call_id, "callId", state)?;
    let class_id = required(lookup.class_id, "classId", state)?;
    debug!("course lookup for call {}", call_id);

    let courses = state
        .reference_repo
        .find_courses_by_class_id(&class_id)
        .await
        .map_err(|err| {
            error!("failed to look up class {}: {}", class_id, err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;
    Ok(courses.into_iter().next())
}
