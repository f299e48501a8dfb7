use crate::calendar::core::Event;

/// `true` when `candidate` and `other` share a date and their half-open time
/// ranges intersect.
#[must_use]
pub fn conflicts_with(candidate: &Event, other: &Event) -> bool {
    candidate.date == other.date && candidate.span().overlaps(&other.span())
}

/// ## Summary
/// Returns the events in `existing` whose time range intersects `candidate`'s.
///
/// Ranges are half-open, so an event ending exactly when the candidate starts
/// is not a conflict, and events on different dates never conflict. The
/// result keeps the order of `existing`.
///
/// No identity-based filtering happens here: when re-checking an edited
/// event, the caller removes its prior version from `existing` first.
#[must_use]
pub fn find_conflicts<'a>(candidate: &Event, existing: &'a [Event]) -> Vec<&'a Event> {
    let conflicts: Vec<&Event> = existing
        .iter()
        .filter(|other| conflicts_with(candidate, other))
        .collect();

    tracing::trace!(
        span = %candidate.span(),
        checked = existing.len(),
        conflicts = conflicts.len(),
        "Checked candidate for overlaps"
    );

    conflicts
}
