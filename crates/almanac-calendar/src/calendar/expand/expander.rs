use almanac_core::constants::MAX_CALENDAR_YEAR;
use almanac_core::types::RepeatType;
use chrono::{Datelike, NaiveDate};
use rrule::{Frequency, RRule, RRuleSet, Tz};

use crate::calendar::core::Event;
use crate::error::{CalendarError, CalendarResult};

/// Maps a repeat kind to its RFC 5545 frequency. `None` has no frequency.
#[must_use]
pub const fn frequency_for(kind: RepeatType) -> Option<Frequency> {
    match kind {
        RepeatType::None => None,
        RepeatType::Daily => Some(Frequency::Daily),
        RepeatType::Weekly => Some(Frequency::Weekly),
        RepeatType::Monthly => Some(Frequency::Monthly),
        RepeatType::Yearly => Some(Frequency::Yearly),
    }
}

/// ## Summary
/// Expands a recurring anchor event into its concrete instances.
///
/// Instances start at `anchor.date` and step forward by `repeat.interval`
/// units until the earlier of `repeat.end_date` and `hard_cutoff`; an
/// occurrence landing exactly on that bound is included. Each instance is a
/// copy of the anchor with only `date` replaced.
///
/// Monthly and yearly rules keep the anchor's day of month. Months (or
/// years) where that day does not exist are skipped, not clamped, so an
/// anchor on the 31st only produces instances in 31-day months and an anchor
/// on Feb 29 only in leap years.
///
/// A non-recurring anchor, or one already past its bound, yields `[anchor]`.
///
/// ## Errors
/// Returns `CalendarError::InvalidArgument` if the interval is not a positive
/// integer or the bound lies past year 9999, and `CalendarError::RecurrenceError` if the recurrence engine
/// rejects the rule.
pub fn expand(anchor: &Event, hard_cutoff: NaiveDate) -> CalendarResult<Vec<Event>> {
    Ok(expand_dates(anchor, hard_cutoff)?
        .into_iter()
        .map(|date| anchor.with_date(date))
        .collect())
}

/// ## Summary
/// Same as [`expand`] but returns only the occurrence dates.
///
/// ## Errors
/// See [`expand`].
pub fn expand_dates(anchor: &Event, hard_cutoff: NaiveDate) -> CalendarResult<Vec<NaiveDate>> {
    let Some(frequency) = frequency_for(anchor.repeat.kind) else {
        tracing::trace!(date = %anchor.date, "Anchor does not repeat");
        return Ok(vec![anchor.date]);
    };
    let step = anchor.repeat.step()?;
    let bound = anchor.repeat.bound(hard_cutoff);
    if bound.year() > MAX_CALENDAR_YEAR {
        return Err(CalendarError::InvalidArgument(format!(
            "expansion bound {bound} lies past year {MAX_CALENDAR_YEAR}"
        )));
    }

    tracing::trace!(
        anchor = %anchor.date,
        kind = %anchor.repeat.kind,
        interval = step,
        bound = %bound,
        "Expanding recurring event"
    );

    if anchor.date > bound {
        tracing::debug!(
            anchor = %anchor.date,
            bound = %bound,
            "Anchor lies past its bound, emitting the anchor alone"
        );
        return Ok(vec![anchor.date]);
    }

    let rrule_set = build_rrule_set(anchor, frequency, step, bound)?;

    let mut dates = Vec::new();
    for occurrence in &rrule_set {
        dates.push(occurrence.date_naive());
    }

    tracing::debug!(
        anchor = %anchor.date,
        occurrences = dates.len(),
        "Expanded recurring event"
    );

    Ok(dates)
}

/// Builds the rule set with DTSTART at the anchor's wall-clock start and
/// UNTIL at the same time of day on `bound`.
///
/// Wall-clock values are carried as UTC so no offset arithmetic applies.
fn build_rrule_set(
    anchor: &Event,
    frequency: Frequency,
    step: u16,
    bound: NaiveDate,
) -> CalendarResult<RRuleSet> {
    let dt_start = anchor
        .date
        .and_time(anchor.start_time)
        .and_utc()
        .with_timezone(&Tz::UTC);
    let until = bound
        .and_time(anchor.start_time)
        .and_utc()
        .with_timezone(&Tz::UTC);

    RRule::new(frequency)
        .interval(step)
        .until(until)
        .build(dt_start)
        .map_err(|err| CalendarError::RecurrenceError(err.to_string()))
}
