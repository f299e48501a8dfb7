//! Bridges settings to the expander: picks the hard cutoff for a series.

use almanac_calendar::Event;
use almanac_calendar::expand;
use almanac_core::config::RecurrenceConfig;
use chrono::NaiveDate;

use crate::error::ServiceResult;

/// ## Summary
/// Returns the hard cutoff for `anchor`: `requested` when given, capped by the
/// configured maximum end date, otherwise the configured horizon.
#[must_use]
pub fn cutoff_for(
    anchor: &Event,
    requested: Option<NaiveDate>,
    config: &RecurrenceConfig,
) -> NaiveDate {
    match requested {
        Some(requested) => config
            .max_end_date
            .map_or(requested, |cap| requested.min(cap)),
        None => config.cutoff_for(anchor.date),
    }
}

/// ## Summary
/// Expands `anchor` into the instances a create would persist.
///
/// ## Errors
/// Returns an error if the recurrence rule is invalid or the cutoff lies
/// past year 9999.
pub fn materialize(
    anchor: &Event,
    requested_cutoff: Option<NaiveDate>,
    config: &RecurrenceConfig,
) -> ServiceResult<Vec<Event>> {
    let cutoff = cutoff_for(anchor, requested_cutoff, config);
    tracing::trace!(anchor = %anchor.date, cutoff = %cutoff, "Materializing event");
    Ok(expand(anchor, cutoff)?)
}
