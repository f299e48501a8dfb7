//! Create and update planning with overlap checks.

use std::collections::HashSet;

use almanac_calendar::calendar::overlap::conflicts_with;
use almanac_calendar::{ConflictSummary, Event};
use almanac_core::config::RecurrenceConfig;
use chrono::NaiveDate;

use crate::error::{ServiceError, ServiceResult};
use crate::event::recurrence::materialize;

/// Instances a create would persist and the stored events they collide with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlan {
    pub instances: Vec<Event>,
    pub conflicts: Vec<Event>,
}

/// The edited event and the stored events it would collide with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub event: Event,
    pub conflicts: Vec<Event>,
}

impl CreatePlan {
    /// `false` means the instances can be saved without asking the user.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<ConflictSummary> {
        self.conflicts.iter().map(ConflictSummary::from).collect()
    }
}

impl UpdatePlan {
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<ConflictSummary> {
        self.conflicts.iter().map(ConflictSummary::from).collect()
    }
}

/// ## Summary
/// Checks the form-level invariants of an event before it is planned.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` for a blank title or a start time
/// not before the end time, and a calendar error for an invalid repeat
/// interval on a recurring event.
pub fn validate_event(event: &Event) -> ServiceResult<()> {
    if event.title.trim().is_empty() {
        return Err(ServiceError::ValidationError("title is required".to_string()));
    }
    if event.start_time >= event.end_time {
        return Err(ServiceError::ValidationError(format!(
            "start time {} must be before end time {}",
            event.start_time.format("%H:%M"),
            event.end_time.format("%H:%M")
        )));
    }
    if event.is_recurring() {
        event.repeat.step()?;
    }
    Ok(())
}

/// ## Summary
/// Plans the creation of `candidate`, expanding it when it repeats and
/// checking every instance against `existing`.
///
/// Conflicts are listed once each, in the order they are first hit while
/// walking the instances.
///
/// ## Errors
/// Returns an error if the candidate fails validation or its rule cannot be
/// expanded.
#[tracing::instrument(skip(candidate, existing, config), fields(
    title = %candidate.title,
    date = %candidate.date,
    repeat = %candidate.repeat.kind,
    existing = existing.len()
))]
pub fn plan_create(
    candidate: &Event,
    existing: &[Event],
    requested_cutoff: Option<NaiveDate>,
    config: &RecurrenceConfig,
) -> ServiceResult<CreatePlan> {
    validate_event(candidate)?;

    let instances = materialize(candidate, requested_cutoff, config)?;
    let conflicts = collect_conflicts(&instances, existing);

    tracing::debug!(
        instances = instances.len(),
        conflicts = conflicts.len(),
        "Planned create"
    );

    Ok(CreatePlan {
        instances,
        conflicts,
    })
}

/// ## Summary
/// Plans an in-place edit of one stored event.
///
/// The event's prior version is matched by id and left out of the overlap
/// check, so an edit never conflicts with itself.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` if `updated` has no id or fails
/// validation, and `ServiceError::NotFound` if no event in `existing`
/// carries its id.
#[tracing::instrument(skip(updated, existing), fields(
    id = ?updated.id,
    date = %updated.date,
    existing = existing.len()
))]
pub fn plan_update(updated: &Event, existing: &[Event]) -> ServiceResult<UpdatePlan> {
    let Some(id) = &updated.id else {
        return Err(ServiceError::ValidationError(
            "event id is required to update".to_string(),
        ));
    };
    validate_event(updated)?;

    if !existing.iter().any(|event| event.same_id(updated)) {
        return Err(ServiceError::NotFound(format!("event {id}")));
    }

    let others: Vec<Event> = existing
        .iter()
        .filter(|event| !event.same_id(updated))
        .cloned()
        .collect();
    let conflicts = collect_conflicts(std::slice::from_ref(updated), &others);

    tracing::debug!(conflicts = conflicts.len(), "Planned update");

    Ok(UpdatePlan {
        event: updated.clone(),
        conflicts,
    })
}

/// Union of the conflicts of every candidate, first-seen order, no repeats.
pub(crate) fn collect_conflicts(candidates: &[Event], existing: &[Event]) -> Vec<Event> {
    let mut seen = HashSet::new();
    let mut conflicts = Vec::new();

    for candidate in candidates {
        for (index, other) in existing.iter().enumerate() {
            if conflicts_with(candidate, other) && seen.insert(index) {
                conflicts.push(other.clone());
            }
        }
    }

    conflicts
}
