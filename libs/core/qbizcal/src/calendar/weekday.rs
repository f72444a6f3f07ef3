use chrono::Weekday;

use super::CalendarError;

/// Accepted weekday tokens. Names are matched on their first three letters, case-insensitively.
pub const DAY_NAMES: [(&str, Weekday); 7] = [
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
];

/// Working week used when none is given.
pub const DEFAULT_WORKING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Parse a weekday name such as `"Monday"`, `"mon"` or `"MONDAYS"`.
///
/// ```
/// use chrono::Weekday;
/// use qbizcal::calendar::parse_working_day;
///
/// assert_eq!(parse_working_day("Friday"), Ok(Weekday::Fri));
/// assert!(parse_working_day("Notaday").is_err());
/// ```
pub fn parse_working_day(name: &str) -> Result<Weekday, CalendarError> {
    let token = name
        .chars()
        .take(3)
        .flat_map(char::to_lowercase)
        .collect::<String>();
    DAY_NAMES
        .iter()
        .find(|(tok, _)| *tok == token)
        .map(|(_, wd)| *wd)
        .ok_or_else(|| CalendarError::InvalidWorkingDay {
            name: name.to_owned(),
        })
}

/// Three-letter token of the weekday, `"mon"` for Monday.
#[inline]
pub fn weekday_token(wd: Weekday) -> &'static str {
    DAY_NAMES[wd.num_days_from_monday() as usize].0
}
