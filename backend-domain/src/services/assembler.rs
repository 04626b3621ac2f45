// Timeline assembly
// Duplicate start/end events resolve to the earliest recorded_at (ties
// to the first returned); menu order is kept as stored.

use crate::entities::{CallEvent, CallTimeline, MenuEntry, Student};

pub fn earliest_recorded(events: &[CallEvent]) -> Option<&CallEvent> {
    events.iter().min_by_key(|event| event.recorded_at)
}

pub fn resolved_caller_address(starts: &[CallEvent]) -> Option<&str> {
    earliest_recorded(starts)?.caller_address.as_deref()
}

pub fn menu_entries(menus: &[CallEvent]) -> Vec<MenuEntry> {
    menus
        .iter()
        .map(|event| MenuEntry {
            timestamp: event.timestamp.clone(),
            choice: event.choice.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn assemble_timeline(
    call_id: &str,
    starts: &[CallEvent],
    ends: &[CallEvent],
    menus: &[CallEvent],
    student: Option<&Student>,
) -> CallTimeline {
    let mut timeline = CallTimeline::empty(call_id.to_string());

    if let Some(start) = earliest_recorded(starts) {
        timeline.start = Some(start.timestamp.clone());
        timeline.caller_address = start.caller_address.clone();
    }
    if let Some(student) = student {
        timeline.matriculation_number = Some(student.matriculation_number.clone());
        timeline.student_name = Some(student.full_name());
    }
    if let Some(end) = earliest_recorded(ends) {
        timeline.end = Some(end.timestamp.clone());
    }
    timeline.menus = menu_entries(menus);

    timeline
}
