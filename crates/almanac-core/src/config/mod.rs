use anyhow::Result;
use chrono::{Days, NaiveDate};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_HORIZON_DAYS, ENV_PREFIX};
use crate::types::SeriesMembership;


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub recurrence: RecurrenceConfig,
    pub series: SeriesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceConfig {
    /// Days between an anchor date and the hard cutoff used when the caller
    /// supplies none.
    pub horizon_days: u32,
    /// Absolute cap applied on top of the horizon.
    pub max_end_date: Option<NaiveDate>,
}

impl RecurrenceConfig {
    /// ## Summary
    /// Returns the hard cutoff for a series anchored at `anchor`.
    ///
    /// The cutoff is `anchor + horizon_days`, lowered to `max_end_date` when
    /// that is earlier.
    #[must_use]
    pub fn cutoff_for(&self, anchor: NaiveDate) -> NaiveDate {
        let horizon = anchor
            .checked_add_days(Days::new(u64::from(self.horizon_days)))
            .unwrap_or(NaiveDate::MAX);

        match self.max_end_date {
            Some(cap) => horizon.min(cap),
            None => horizon,
        }
    }
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            max_end_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesConfig {
    pub membership: SeriesMembership,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder seeded with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("recurrence.horizon_days", i64::from(DEFAULT_HORIZON_DAYS))?
            .set_default("series.membership", "detach")?
            .set_default("logging.level", "debug")?)
    }

    /// ## Summary
    /// Loads configuration from `config.toml` and environment variables into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        horizon_days = settings.recurrence.horizon_days,
        membership = ?settings.series.membership,
        "Settings loaded"
    );
    Ok(settings)
}
