//! Single-instance versus whole-series edits and deletes.
//!
//! Series membership is decided only by `repeat.id`, never by position.

use almanac_calendar::{Event, EventId, RepeatInfo};
use almanac_core::types::{Category, SeriesMembership};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::object::{collect_conflicts, validate_event};
use crate::error::{ServiceError, ServiceResult};

/// Which events an edit or delete of a recurring instance reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesScope {
    /// Only the chosen instance.
    Single,
    /// Every instance sharing the chosen instance's series id.
    All,
}

/// Field replacements applied by an edit. `None` keeps the current value.
///
/// Dates are not part of a patch: a series edit keeps each instance on its
/// own date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notification_time: Option<u32>,
}

impl EventPatch {
    pub fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            event.description.clone_from(description);
        }
        if let Some(location) = &self.location {
            event.location.clone_from(location);
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
        if let Some(notification_time) = self.notification_time {
            event.notification_time = notification_time;
        }
    }
}

/// Events rewritten by an edit and the untouched events they now collide with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesEdit {
    pub updated: Vec<Event>,
    pub conflicts: Vec<Event>,
}

fn find_target<'a>(target_id: &EventId, events: &'a [Event]) -> ServiceResult<&'a Event> {
    events
        .iter()
        .find(|event| event.id.as_ref() == Some(target_id))
        .ok_or_else(|| ServiceError::NotFound(format!("event {target_id}")))
}

fn scope_members<'a>(target: &'a Event, scope: SeriesScope, events: &'a [Event]) -> Vec<&'a Event> {
    match (scope, target.series_id()) {
        (SeriesScope::All, Some(series_id)) if target.is_recurring() => events
            .iter()
            .filter(|event| event.series_id() == Some(series_id))
            .collect(),
        _ => vec![target],
    }
}

/// ## Summary
/// Applies `patch` to the event `target_id` or to its whole series.
///
/// With `SeriesScope::Single` on a recurring instance, `membership` decides
/// whether the edited instance leaves the series (`Detach` clears its repeat
/// rule to `none`) or stays in it (`Linked`). With `SeriesScope::All` every
/// event sharing the target's series id is patched, each keeping its own id
/// and date. A non-recurring target is always edited alone.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no event carries `target_id`, and a
/// validation error if the patch leaves any event with an invalid time range.
#[tracing::instrument(skip(patch, events), fields(target = %target_id, existing = events.len()))]
pub fn edit_series(
    target_id: &EventId,
    patch: &EventPatch,
    scope: SeriesScope,
    events: &[Event],
    membership: SeriesMembership,
) -> ServiceResult<SeriesEdit> {
    let target = find_target(target_id, events)?;
    let members = scope_members(target, scope, events);

    let mut updated = Vec::with_capacity(members.len());
    for member in members {
        let mut event = member.clone();
        patch.apply(&mut event);
        if scope == SeriesScope::Single
            && membership == SeriesMembership::Detach
            && event.is_recurring()
        {
            event.repeat = RepeatInfo::none();
        }
        validate_event(&event)?;
        updated.push(event);
    }

    let others: Vec<Event> = events
        .iter()
        .filter(|event| !updated.iter().any(|edited| edited.same_id(event)))
        .cloned()
        .collect();
    let conflicts = collect_conflicts(&updated, &others);

    tracing::debug!(
        updated = updated.len(),
        conflicts = conflicts.len(),
        "Planned series edit"
    );

    Ok(SeriesEdit { updated, conflicts })
}

/// ## Summary
/// Returns the ids removed by deleting `target_id` alone or with its series.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no event carries `target_id`.
#[tracing::instrument(skip(events), fields(target = %target_id, existing = events.len()))]
pub fn delete_series(
    target_id: &EventId,
    scope: SeriesScope,
    events: &[Event],
) -> ServiceResult<Vec<EventId>> {
    let target = find_target(target_id, events)?;
    let removed: Vec<EventId> = scope_members(target, scope, events)
        .into_iter()
        .filter_map(|event| event.id.clone())
        .collect();

    tracing::debug!(removed = removed.len(), "Planned series delete");

    Ok(removed)
}
