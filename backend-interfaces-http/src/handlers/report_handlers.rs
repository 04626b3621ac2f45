use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use backend_application::commands::record_commands;
use backend_application::{AppError, AppState};
use backend_domain::{EndReport, MenuReport, StartReport, Student};

// The IVR reads the `status` flag and ignores the HTTP status code,
// so these endpoints always answer 200; an undecodable query string
// degrades to an empty report instead of axum's 400 rejection.

#[derive(Debug, Serialize)]
pub struct StartResponse {
    status: String,
    name: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: String,
}

fn start_response(outcome: Result<Option<Student>, AppError>) -> StartResponse {
    match outcome {
        Ok(resolved) => StartResponse {
            status: "ok".to_string(),
            name: resolved
                .map(|student| student.full_name())
                .unwrap_or_default(),
        },
        Err(_) => StartResponse {
            status: "not_ok".to_string(),
            name: String::new(),
        },
    }
}

fn status_response(outcome: Result<(), AppError>) -> StatusResponse {
    StatusResponse {
        status: match outcome {
            Ok(()) => "ok".to_string(),
            Err(_) => "not_ok".to_string(),
        },
    }
}

pub async fn report_start(
    State(state): State<AppState>,
    report: Option<Query<StartReport>>,
) -> Json<StartResponse> {
    let report = report.map(|Query(report)| report).unwrap_or_default();
    let outcome = record_commands::record_start(&state, report).await;
    Json(start_response(outcome))
}

pub async fn report_menu(
    State(state): State<AppState>,
    report: Option<Query<MenuReport>>,
) -> Json<StatusResponse> {
    let report = report.map(|Query(report)| report).unwrap_or_default();
    let outcome = record_commands::record_menu_choice(&state, report).await;
    Json(status_response(outcome))
}

pub async fn report_end(
    State(state): State<AppState>,
    report: Option<Query<EndReport>>,
) -> Json<StatusResponse> {
    let report = report.map(|Query(report)| report).unwrap_or_default();
    let outcome = record_commands::record_end(&state, report).await;
    Json(status_response(outcome))
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::*;

    fn student() -> Student {
        Student {
            given_name: "Max".to_string(),
            family_name: "Mustermann".to_string(),
            matriculation_number: "123456".to_string(),
            caller_address: "0800111111".to_string(),
        }
    }

    #[test]
    fn resolved_student_answers_ok_with_name() {
        let response = start_response(Ok(Some(student())));
        assert_eq!(response.status, "ok");
        assert_eq!(response.name, "Max Mustermann");
    }

    #[test]
    fn unknown_caller_answers_ok_with_empty_name() {
        let response = start_response(Ok(None));
        assert_eq!(response.status, "ok");
        assert_eq!(response.name, "");
    }

    #[test]
    fn missing_field_answers_not_ok() {
        let response = start_response(Err(AppError::BadRequest("ani is required".to_string())));
        assert_eq!(response.status, "not_ok");
        assert_eq!(response.name, "");
    }

    #[test]
    fn store_failure_answers_not_ok_not_an_error_document() {
        let response = status_response(Err(AppError::Internal(anyhow::anyhow!("down"))));
        assert_eq!(response.status, "not_ok");
    }

    #[test]
    fn menu_and_end_answer_bare_status() {
        let value = serde_json::to_value(status_response(Ok(()))).expect("serialize");
        assert_eq!(value, serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn start_payload_carries_exactly_status_and_name() {
        let value = serde_json::to_value(start_response(Ok(Some(student())))).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"status": "ok", "name": "Max Mustermann"})
        );
    }

    #[test]
    fn undecodable_query_degrades_to_an_empty_report() {
        // A duplicate key fails query extraction; the handler falls back
        // to the missing-field path instead of axum's 400 rejection.
        let uri: Uri = "/reports/start?callId=a&callId=b&timestamp=1&ani=2"
            .parse()
            .expect("uri");
        assert!(Query::<StartReport>::try_from_uri(&uri).is_err());

        let report = Query::<StartReport>::try_from_uri(&uri)
            .ok()
            .map(|Query(report)| report)
            .unwrap_or_default();
        assert!(report.call_id.is_none());
        assert!(report.timestamp.is_none());
        assert!(report.ani.is_none());
    }
}
