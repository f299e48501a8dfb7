//! Almanac calendar core - integration test support.
//!
//! Provides an in-memory event store that plays the part of the persistence
//! layer: it mints ids, stamps series ids on new recurring instances, and
//! applies the plans produced by `almanac_service`.

pub use almanac_calendar as calendar;
pub use almanac_service as service;

use almanac_calendar::{Event, EventId, SeriesId};
use almanac_core::config::RecurrenceConfig;
use almanac_service::error::{ServiceError, ServiceResult};
use almanac_service::event::service::{CreatePlan, SeriesEdit, UpdatePlan, plan_create};
use serde::Deserialize;
use uuid::Uuid;

pub mod fixtures {
    //! Seed data in the shape the bulk-create endpoint accepts: event forms
    //! without ids, wrapped in `{ "events": [...] }`.

    /// One plain meeting.
    pub const SINGLE_EVENT: &str = r#"{
        "events": [
            {
                "title": "팀 회의",
                "date": "2025-11-20",
                "startTime": "09:00",
                "endTime": "10:00",
                "description": "주간 팀 미팅",
                "location": "회의실 A",
                "category": "업무",
                "repeat": { "type": "none", "interval": 0 },
                "notificationTime": 10
            }
        ]
    }"#;

    /// A weekly Monday meeting over four weeks.
    pub const RECURRING_EVENTS: &str = r#"{
        "events": [
            {
                "title": "주간 회의",
                "date": "2025-11-03",
                "startTime": "09:00",
                "endTime": "10:00",
                "description": "매주 월요일 회의",
                "location": "회의실 B",
                "category": "업무",
                "repeat": { "type": "weekly", "interval": 1, "endDate": "2025-11-24" },
                "notificationTime": 10
            }
        ]
    }"#;

    /// A morning and an afternoon meeting on 2025-11-15.
    pub const OVERLAPPING_EVENTS: &str = r#"{
        "events": [
            {
                "title": "회의 A",
                "date": "2025-11-15",
                "startTime": "10:00",
                "endTime": "11:00",
                "description": "기존 회의",
                "location": "회의실 A",
                "category": "업무",
                "repeat": { "type": "none", "interval": 0 },
                "notificationTime": 10
            },
            {
                "title": "회의 C",
                "date": "2025-11-15",
                "startTime": "14:00",
                "endTime": "15:00",
                "description": "오후 회의",
                "location": "회의실 C",
                "category": "업무",
                "repeat": { "type": "none", "interval": 0 },
                "notificationTime": 10
            }
        ]
    }"#;
}

#[derive(Debug, Deserialize)]
struct Fixture {
    events: Vec<Event>,
}

/// In-memory stand-in for the event store.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Seeds a store from a fixture, creating each event through
    /// [`plan_create`] so recurring forms are expanded and given ids.
    ///
    /// ## Errors
    /// Returns an error if the fixture does not parse or an event is rejected.
    pub fn seed(fixture: &str, config: &RecurrenceConfig) -> anyhow::Result<Self> {
        let fixture: Fixture = serde_json::from_str(fixture)?;
        let mut store = Self::new();
        for form in &fixture.events {
            let plan = plan_create(form, store.events(), None, config)?;
            store.save_created(plan);
        }
        tracing::debug!(events = store.events.len(), "Seeded event store");
        Ok(store)
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id.as_ref() == Some(id))
    }

    /// The first stored event titled `title`.
    #[must_use]
    pub fn titled(&self, title: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.title == title)
    }

    #[must_use]
    pub fn series(&self, id: &SeriesId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.series_id() == Some(id))
            .collect()
    }

    /// Persists the instances of a create plan, minting an id for each and one
    /// series id shared by all of them when they repeat.
    pub fn save_created(&mut self, plan: CreatePlan) -> Vec<EventId> {
        let series_id = plan
            .instances
            .first()
            .filter(|anchor| anchor.is_recurring() && anchor.series_id().is_none())
            .map(|_| Uuid::now_v7().to_string());

        let mut ids = Vec::with_capacity(plan.instances.len());
        for mut instance in plan.instances {
            let id = EventId::new(Uuid::new_v4().to_string());
            instance.id = Some(id.clone());
            if let Some(series_id) = &series_id {
                instance.repeat = instance.repeat.in_series(series_id.clone());
            }
            ids.push(id);
            self.events.push(instance);
        }

        tracing::debug!(saved = ids.len(), series = ?series_id, "Saved created events");
        ids
    }

    /// ## Summary
    /// Replaces the stored event carrying the plan's id.
    ///
    /// ## Errors
    /// Returns `ServiceError::NotFound` if the event is no longer stored.
    pub fn save_updated(&mut self, plan: UpdatePlan) -> ServiceResult<()> {
        self.replace(plan.event)
    }

    /// ## Summary
    /// Replaces every event rewritten by a series edit.
    ///
    /// ## Errors
    /// Returns `ServiceError::NotFound` if one of the events is no longer stored.
    pub fn save_edit(&mut self, edit: SeriesEdit) -> ServiceResult<()> {
        for event in edit.updated {
            self.replace(event)?;
        }
        Ok(())
    }

    /// Removes the events with the given ids and returns how many were dropped.
    pub fn remove(&mut self, ids: &[EventId]) -> usize {
        let before = self.events.len();
        self.events
            .retain(|event| event.id.as_ref().is_none_or(|id| !ids.contains(id)));
        before - self.events.len()
    }

    fn replace(&mut self, event: Event) -> ServiceResult<()> {
        let slot = self
            .events
            .iter_mut()
            .find(|stored| stored.same_id(&event))
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "event {}",
                    event.id.as_ref().map_or("<none>", EventId::as_str)
                ))
            })?;
        *slot = event;
        Ok(())
    }
}
