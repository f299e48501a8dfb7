/// Wire format for calendar dates (`2025-11-10`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for times of day (`09:30`).
pub const TIME_FORMAT: &str = "%H:%M";

/// Wire format for a date-time pair, used in log fields and summaries.
pub const DATE_TIME_FORMAT: &str = const_str::concat!(DATE_FORMAT, " ", TIME_FORMAT);

/// Default distance between an anchor date and its hard cutoff.
pub const DEFAULT_HORIZON_DAYS: u32 = 730;

/// Name of the optional settings file read from the working directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "ALMANAC";

/// Last year the four-digit `YYYY` wire format and the recurrence engine can carry.
pub const MAX_CALENDAR_YEAR: i32 = 9999;
