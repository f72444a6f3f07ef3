mod datelike;
mod parser;

pub use datelike::{CalendarDate, DateError, DateLike};
pub use parser::{parse_date, DateParser};
