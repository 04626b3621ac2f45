use futures_util::future::try_join_all;
use tracing::{debug, error};

use crate::AppError;
use crate::AppState;
use backend_domain::services::assembler;
use backend_domain::{CallEvent, CallTimeline, EventKind, Student};

async fn events(
    state: &AppState,
    call_id: &str,
    kind: EventKind,
    limit: Option<usize>,
) -> Result<Vec<CallEvent>, AppError> {
    state
        .event_repo
        .events_for_call(call_id, kind, limit)
        .await
        .map_err(|err| {
            error!("failed to fetch {} events for call {}: {}", kind, call_id, err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })
}

async fn resolve_student(state: &AppState, address: &str) -> Result<Option<Student>, AppError> {
    let students = state
        .reference_repo
        .find_students_by_caller_address(address)
        .await
        .map_err(|err| {
            error!("failed to resolve caller {}: {}", address, err);
            state.metrics.record_store_error();
            AppError::Internal(err)
        })?;
    Ok(students.into_iter().next())
}

// The student lookup needs the winning start's caller address, so these
// two run in sequence while the end and menu queries run alongside.
async fn start_with_student(
    state: &AppState,
    call_id: &str,
) -> Result<(Vec<CallEvent>, Option<Student>), AppError> {
    let starts = events(state, call_id, EventKind::Start, Some(1)).await?;
    let student = match assembler::resolved_caller_address(&starts) {
        Some(address) => resolve_student(state, address).await?,
        None => None,
    };
    Ok((starts, student))
}

// Start and end are fetched with a limit of one; the store returns
// recorded order, so the single row is the earliest-recorded winner.
pub async fn build_timeline(state: &AppState, call_id: &str) -> Result<CallTimeline, AppError> {
    let ((starts, student), ends, menus) = tokio::try_join!(
        start_with_student(state, call_id),
        events(state, call_id, EventKind::End, Some(1)),
        events(state, call_id, EventKind::Menu, None),
    )?;
    Ok(assembler::assemble_timeline(
        call_id,
        &starts,
        &ends,
        &menus,
        student.as_ref(),
    ))
}

// Fails as a whole if any sub-query fails; no partial report.
pub async fn build_all_timelines(state: &AppState) -> Result<Vec<CallTimeline>, AppError> {
    let call_ids = state.event_repo.distinct_call_ids().await.map_err(|err| {
        error!("failed to list call ids: {}", err);
        state.metrics.record_store_error();
        AppError::Internal(err)
    })?;

    let timelines = try_join_all(
        call_ids
            .iter()
            .map(|call_id| build_timeline(state, call_id)),
    )
    .await?;
    state.metrics.record_timelines_built(timelines.len());
    debug!("built {} timelines", timelines.len());
    Ok(timelines)
}
