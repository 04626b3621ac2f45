use tracing::{debug, error};

use crate::AppError;
use crate::AppState;
use backend_domain::{CallEvent, EndReport, MenuReport, StartReport, Student};

fn required(value: Option<String>, field: &str, state: &AppState) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            state.metrics.record_rejected_request();
            Err(AppError::BadRequest(format!("{} is required", field)))
        }
    }
}

async fn append(state: &AppState, event: &CallEvent) -> Result<(), AppError> {
    if let Err(err) = state.event_repo.insert_event(event).await {
        error!(
            "failed to insert {} event for call {}: {}",
            event.kind, event.call_id, err
        );
        state.metrics.record_store_error();
        return Err(AppError::Internal(err));
    }
    state.metrics.record_event();
    debug!("recorded {} event for call {}", event.kind, event.call_id);
    Ok(())
}

pub async fn record_start(
    state: &AppState,
    report: StartReport,
) -> Result<Option<Student>, AppError> {
    let call_id = required(report.call_id, "callId", state)?;
    let timestamp = required(report.timestamp, "timestamp", state)?;
    let ani = required(report.ani, "ani", state)?;

    let event = CallEvent::start(call_id, timestamp, ani.clone());
    append(state, &event).await?;

    let students = state
        .reference_repo
        .find_students_by_caller_address(&ani)
        .await
        .map_err(|err| {
            error!("failed to resolve caller {}: {}", ani, err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;
    Ok(students.into_iter().next())
}

pub async fn record_menu_choice(state: &AppState, report: MenuReport) -> Result<(), AppError> {
    let call_id = required(report.call_id, "callId", state)?;
    let timestamp = required(report.timestamp, "timestamp", state)?;
    let choice = required(report.choice, "choice", state)?;

    let event = CallEvent::menu(call_id, timestamp, choice);
    append(state, &event).await
}

pub async fn record_end(state: &AppState, report: EndReport) -> Result<(), AppError> {
    let call_id = required(report.call_id, "callId", state)?;
    let timestamp = required(report.timestamp, "timestamp", state)?;

    let event = CallEvent::end(call_id, timestamp);
    append(state, &event).await
}

#[cfg(test)]
mod tests {
    use backend_domain::EventKind;

    use super::*;
    use crate::test_support::{failing_state, stub_state};

    fn start_report(call_id: &str, timestamp: &str, ani: &str) -> StartReport {
        StartReport {
            call_id: Some(call_id.to_string()),
            timestamp: Some(timestamp.to_string()),
            ani: Some(ani.to_string()),
        }
    }

    #[tokio::test]
    async fn start_report_is_recorded_and_caller_resolved() {
        let (state, store) = stub_state();

        let resolved = record_start(&state, start_report("c1", "t0", "0800111111"))
            .await
            .expect("record start");

        assert_eq!(
            resolved.map(|student| student.full_name()),
            Some("Max Mustermann".to_string())
        );
        let events = store.events.read().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Start);
        assert_eq!(events[0].caller_address.as_deref(), Some("0800111111"));
    }

    #[tokio::test]
    async fn unknown_caller_is_recorded_without_identity() {
        let (state, store) = stub_state();

        let resolved = record_start(&state, start_report("c1", "t0", "0555000000"))
            .await
            .expect("record start");

        assert!(resolved.is_none());
        assert_eq!(store.events.read().await.len(), 1);
    }

    #[tokio::test]
    async fn missing_field_rejects_without_store_mutation() {
        let (state, store) = stub_state();
        let report = StartReport {
            call_id: Some("c1".to_string()),
            timestamp: None,
            ani: Some("0800111111".to_string()),
        };

        let err = record_start(&state, report).await.expect_err("must reject");
        match err {
            AppError::BadRequest(message) => assert_eq!(message, "timestamp is required"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(store.events.read().await.is_empty());
    }

    #[tokio::test]
    async fn empty_field_counts_as_missing() {
        let (state, store) = stub_state();
        let report = MenuReport {
            call_id: Some("c1".to_string()),
            timestamp: Some("t1".to_string()),
            choice: Some(String::new()),
        };

        let err = record_menu_choice(&state, report)
            .await
            .expect_err("must reject");
        match err {
            AppError::BadRequest(message) => assert_eq!(message, "choice is required"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(store.events.read().await.is_empty());
    }

    #[tokio::test]
    async fn menu_and_end_reports_are_appended() {
        let (state, store) = stub_state();

        record_menu_choice(
            &state,
            MenuReport {
                call_id: Some("c1".to_string()),
                timestamp: Some("t1".to_string()),
                choice: Some("3".to_string()),
            },
        )
        .await
        .expect("record menu");
        record_end(
            &state,
            EndReport {
                call_id: Some("c1".to_string()),
                timestamp: Some("t2".to_string()),
            },
        )
        .await
        .expect("record end");

        let events = store.events.read().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Menu);
        assert_eq!(events[0].choice.as_deref(), Some("3"));
        assert_eq!(events[1].kind, EventKind::End);
        assert!(events[1].choice.is_none());
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_internal_error() {
        let state = failing_state();

        let err = record_end(
            &state,
            EndReport {
                call_id: Some("c1".to_string()),
                timestamp: Some("t2".to_string()),
            },
        )
        .await
        .expect_err("store is down");
        match err {
            AppError::Internal(_) => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
