//! `expand` and `check` commands: JSON payload in, JSON document out.

use std::str::FromStr;

use almanac_calendar::{ConflictSummary, Event, find_conflicts};
use almanac_core::config::Settings;
use almanac_service::event::recurrence::materialize;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Expand,
    Check,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expand" => Ok(Self::Expand),
            "check" => Ok(Self::Check),
            other => Err(AppError::UsageError(format!("unknown command {other}"))),
        }
    }
}

/// Payload of `almanac expand`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandRequest {
    pub event: Event,
    /// Hard cutoff; the configured horizon applies when absent or empty.
    #[serde(default, with = "almanac_calendar::calendar::core::serde_opt_date")]
    pub cutoff: Option<NaiveDate>,
}

/// Payload of `almanac check`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub candidate: Event,
    #[serde(default)]
    pub existing: Vec<Event>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub conflicts: Vec<Event>,
    /// One confirmation line per conflict, e.g. `회의 A (2025-11-15 10:00-11:00)`.
    pub summaries: Vec<String>,
}

/// ## Summary
/// Expands the payload's event into its instances.
///
/// ## Errors
/// Returns an error if the recurrence rule is invalid.
pub fn expand(request: &ExpandRequest, settings: &Settings) -> AppResult<Vec<Event>> {
    Ok(materialize(
        &request.event,
        request.cutoff,
        &settings.recurrence,
    )?)
}

/// ## Summary
/// Lists the existing events the candidate collides with.
///
/// A stored copy of the candidate itself (same id) is left out, so editing an
/// event does not report it against its previous version.
#[must_use]
pub fn check(request: &CheckRequest) -> CheckResponse {
    let others: Vec<Event> = request
        .existing
        .iter()
        .filter(|event| !request.candidate.same_id(event))
        .cloned()
        .collect();

    let conflicts: Vec<Event> = find_conflicts(&request.candidate, &others)
        .into_iter()
        .cloned()
        .collect();
    let summaries = conflicts
        .iter()
        .map(|event| ConflictSummary::from(event).to_string())
        .collect();

    CheckResponse {
        conflicts,
        summaries,
    }
}

/// ## Summary
/// Runs `command` against a raw JSON payload and renders the result as JSON.
///
/// ## Errors
/// Returns `AppError::PayloadError` if the payload does not match the
/// command, or the command's own error.
#[tracing::instrument(skip(payload, settings), fields(bytes = payload.len()))]
pub fn run(command: Command, payload: &str, settings: &Settings) -> AppResult<String> {
    let output = match command {
        Command::Expand => {
            let request: ExpandRequest = serde_json::from_str(payload)?;
            let instances = expand(&request, settings)?;
            tracing::info!(instances = instances.len(), "Expanded event");
            serde_json::to_string_pretty(&instances)?
        }
        Command::Check => {
            let request: CheckRequest = serde_json::from_str(payload)?;
            let response = check(&request);
            tracing::info!(conflicts = response.conflicts.len(), "Checked event");
            serde_json::to_string_pretty(&response)?
        }
    };
    Ok(output)
}
