mod calendar_impl;
mod config;
mod error;
mod weekday;

pub use calendar_impl::{Calendar, CalendarBuilder, MaybeProvided};
pub use config::{CalendarConfig, ConfigKey};
pub use error::CalendarError;
pub use weekday::{parse_working_day, weekday_token, DAY_NAMES, DEFAULT_WORKING_DAYS};
