use chrono::{NaiveDate, Weekday};

use crate::timepoint::DateError;

// -----------------------------------------------------------------------------
// CalendarError
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Hash)]
pub enum CalendarError {
    #[error("Invalid working day name: {name}")]
    InvalidWorkingDay { name: String },
    #[error("Holidays cannot be extra working dates: {date}")]
    HolidayIsExtraWorkingDate { date: NaiveDate },
    #[error("Extra working dates cannot be on working days: {date} ({weekday})")]
    ExtraWorkingDateOnWorkingDay { date: NaiveDate, weekday: Weekday },
    #[error("{operation} from {date} runs out of the supported range of dates")]
    OutOfRange {
        operation: &'static str,
        date: NaiveDate,
    },
    #[error(transparent)]
    Date(#[from] DateError),
}
