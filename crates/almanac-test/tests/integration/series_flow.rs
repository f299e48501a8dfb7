use almanac_core::types::SeriesMembership;
use almanac_test::EventStore;
use almanac_test::calendar::{Event, EventId};
use almanac_test::fixtures::RECURRING_EVENTS;
use almanac_test::service::event::service::{
    EventPatch, SeriesScope, delete_series, edit_series, plan_create,
};

use super::helpers::{date, meeting, recurrence_config, time};

/// Weekly Monday meeting, four weeks, seeded into an empty store.
fn weekly_mondays() -> (EventStore, Vec<EventId>) {
    let store = EventStore::seed(RECURRING_EVENTS, &recurrence_config()).expect("fixture seeds");
    let ids = store
        .events()
        .iter()
        .filter_map(|event| event.id.clone())
        .collect();
    (store, ids)
}

fn stored<'a>(store: &'a EventStore, id: &EventId) -> &'a Event {
    store.get(id).expect("event stored")
}

#[test_log::test]
fn recurring_series_single_and_all_edits_and_deletes() {
    let (mut store, ids) = weekly_mondays();
    assert_eq!(ids.len(), 4);
    let dates: Vec<_> = store.events().iter().map(|event| event.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2025, 11, 3),
            date(2025, 11, 10),
            date(2025, 11, 17),
            date(2025, 11, 24)
        ]
    );

    // Edit only the second instance.
    let single = EventPatch {
        title: Some("특별 회의".to_string()),
        ..EventPatch::default()
    };
    let edit = edit_series(
        &ids[1],
        &single,
        SeriesScope::Single,
        store.events(),
        SeriesMembership::Detach,
    )
    .expect("edit succeeds");
    store.save_edit(edit).expect("events stored");

    assert_eq!(stored(&store, &ids[1]).title, "특별 회의");
    assert!(!stored(&store, &ids[1]).is_recurring());
    for id in [&ids[0], &ids[2], &ids[3]] {
        assert_eq!(stored(&store, id).title, "주간 회의");
    }

    // Edit every instance still in the series.
    let all = EventPatch {
        location: Some("대회의실".to_string()),
        ..EventPatch::default()
    };
    let edit = edit_series(
        &ids[0],
        &all,
        SeriesScope::All,
        store.events(),
        SeriesMembership::Detach,
    )
    .expect("edit succeeds");
    assert_eq!(edit.updated.len(), 3);
    store.save_edit(edit).expect("events stored");

    for id in [&ids[0], &ids[2], &ids[3]] {
        assert_eq!(stored(&store, id).location, "대회의실");
    }
    assert_eq!(stored(&store, &ids[1]).location, "회의실 B");

    // Delete one instance.
    let removed = delete_series(&ids[2], SeriesScope::Single, store.events())
        .expect("delete succeeds");
    assert_eq!(store.remove(&removed), 1);
    assert_eq!(store.events().len(), 3);

    // Delete the rest of the series; the detached instance stays.
    let removed =
        delete_series(&ids[0], SeriesScope::All, store.events()).expect("delete succeeds");
    assert_eq!(store.remove(&removed), 2);
    assert_eq!(store.events().len(), 1);
    assert_eq!(store.events()[0].id.as_ref(), Some(&ids[1]));
}

#[test_log::test]
fn linked_single_edit_stays_reachable_from_series_edits() {
    let (mut store, ids) = weekly_mondays();

    let single = EventPatch {
        title: Some("특별 회의".to_string()),
        ..EventPatch::default()
    };
    let edit = edit_series(
        &ids[1],
        &single,
        SeriesScope::Single,
        store.events(),
        SeriesMembership::Linked,
    )
    .expect("edit succeeds");
    store.save_edit(edit).expect("events stored");
    assert!(stored(&store, &ids[1]).is_recurring());

    let removed =
        delete_series(&ids[3], SeriesScope::All, store.events()).expect("delete succeeds");
    assert_eq!(store.remove(&removed), 4);
    assert!(store.events().is_empty());
}

#[test_log::test]
fn moving_the_series_into_a_neighbour_reports_it() {
    let (mut store, ids) = weekly_mondays();
    let lunch = meeting("팀 점심", date(2025, 11, 17), (12, 0), (13, 0));
    let plan = plan_create(&lunch, store.events(), None, &recurrence_config())
        .expect("plan succeeds");
    assert!(!plan.has_conflicts());
    store.save_created(plan);

    let later = EventPatch {
        start_time: Some(time(12, 30)),
        end_time: Some(time(13, 30)),
        ..EventPatch::default()
    };
    let edit = edit_series(
        &ids[0],
        &later,
        SeriesScope::All,
        store.events(),
        SeriesMembership::Detach,
    )
    .expect("edit succeeds");

    assert_eq!(edit.updated.len(), 4);
    assert_eq!(edit.conflicts.len(), 1);
    assert_eq!(edit.conflicts[0].title, "팀 점심");
}
