use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{
    parse_working_day, weekday_token, CalendarConfig, CalendarError, DEFAULT_WORKING_DAYS,
};
use crate::timepoint::{CalendarDate, DateLike};

// -----------------------------------------------------------------------------
// _CalendarData
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct _CalendarData {
    /// Dates which are never business days. Sorted and deduplicated.
    holidays: Vec<NaiveDate>,

    /// Weekdays of the working week, in the given order.
    working_days: Vec<Weekday>,

    /// Business days on non-working weekdays. Sorted and deduplicated.
    extra_working_dates: Vec<NaiveDate>,

    /// `working_days` indexed by `Weekday::num_days_from_monday`.
    week_mask: [bool; 7],
}

//
// ctor
//
impl _CalendarData {
    fn new(
        mut holidays: Vec<NaiveDate>,
        working_days: Vec<Weekday>,
        mut extra_working_dates: Vec<NaiveDate>,
    ) -> Result<Self, CalendarError> {
        holidays.sort();
        holidays.dedup();
        extra_working_dates.sort();
        extra_working_dates.dedup();

        let mut week_mask = [false; 7];
        for wd in &working_days {
            week_mask[wd.num_days_from_monday() as usize] = true;
        }

        if let Some(&date) = holidays
            .iter()
            .find(|d| extra_working_dates.binary_search(d).is_ok())
        {
            return Err(CalendarError::HolidayIsExtraWorkingDate { date });
        }
        if let Some(&date) = extra_working_dates
            .iter()
            .find(|d| week_mask[d.weekday().num_days_from_monday() as usize])
        {
            return Err(CalendarError::ExtraWorkingDateOnWorkingDay {
                date,
                weekday: date.weekday(),
            });
        }

        Ok(Self {
            holidays,
            working_days,
            extra_working_dates,
            week_mask,
        })
    }
}

// -----------------------------------------------------------------------------
// Calendar
// -----------------------------------------------------------------------------
/// Business-day calendar
///
/// # Overview
/// A calendar is defined by three data.
/// - holidays: dates which are never business days
/// - working days: weekdays of the normal working week, Monday to Friday by default
/// - extra working dates: business days falling on a non-working weekday,
///   such as a Saturday worked in compensation for a bridge holiday
///
/// A date is a business day when it is not a holiday and
/// either its weekday is a working day or it is an extra working date.
///
/// ```
/// use chrono::NaiveDate;
/// use qbizcal::calendar::Calendar;
///
/// let ymd = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// let cal = Calendar::builder()
///     .with_holidays(["2013-01-01"])
///     .with_extra_working_dates(["Sunday 6th Jan, 2013"])
///     .build()
///     .unwrap();
///
/// assert!(!cal.is_business_day(ymd(2013, 1, 1)));  // holiday
/// assert!(cal.is_business_day(ymd(2013, 1, 2)));   // Wednesday
/// assert!(!cal.is_business_day(ymd(2013, 1, 5)));  // Saturday
/// assert!(cal.is_business_day(ymd(2013, 1, 6)));   // extra working date
///
/// assert_eq!(cal.add_business_days(ymd(2013, 1, 4), 2), Ok(ymd(2013, 1, 7)));
/// assert_eq!(cal.business_days_between(ymd(2012, 12, 31), ymd(2013, 1, 7)), 5);
/// ```
///
/// Construction validates the data and fails with [`CalendarError`] when
/// - a working day name is not a weekday
/// - a holiday is also an extra working date
/// - an extra working date falls on a working day
///
/// # Lightweight
/// The data is never modified after construction and calendars are cloned frequently.
/// So, the internal data is wrapped by immutable [`Arc`] and the object is lightweight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Calendar(Arc<_CalendarData>);

//
// ser/de
//
impl serde::Serialize for Calendar {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_config(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Calendar {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Calendar, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let config = <CalendarConfig as serde::Deserialize>::deserialize(deserializer)?;
        Calendar::from_config(config).map_err(serde::de::Error::custom)
    }
}

impl schemars::JsonSchema for Calendar {
    fn schema_name() -> String {
        "Calendar".to_string()
    }
    fn schema_id() -> std::borrow::Cow<'static, str> {
        "qbizcal::calendar::Calendar".into()
    }
    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <CalendarConfig as schemars::JsonSchema>::json_schema(gen)
    }
}

//
// construction
//
impl Default for Calendar {
    /// Monday to Friday calendar without holidays.
    #[inline]
    fn default() -> Self {
        Self(Arc::new(_CalendarData {
            holidays: Vec::new(),
            working_days: DEFAULT_WORKING_DAYS.to_vec(),
            extra_working_dates: Vec::new(),
            week_mask: [true, true, true, true, true, false, false],
        }))
    }
}

impl Calendar {
    /// Create a new calendar.
    ///
    /// `working_days` falls back to Monday to Friday when it is `None` or empty.
    /// Texts in `holidays` and `extra_working_dates` are parsed month-first.
    ///
    /// # Errors
    /// Checks run in the following order and the first violation is reported.
    /// - [`CalendarError::Date`]: a date text can not be parsed
    /// - [`CalendarError::InvalidWorkingDay`]: a working day name is not a weekday
    /// - [`CalendarError::HolidayIsExtraWorkingDate`]: a date is both a holiday and an extra working date
    /// - [`CalendarError::ExtraWorkingDateOnWorkingDay`]: an extra working date falls on a working day
    pub fn new(
        holidays: Option<Vec<DateLike>>,
        working_days: Option<Vec<String>>,
        extra_working_dates: Option<Vec<DateLike>>,
    ) -> Result<Self, CalendarError> {
        let holidays = to_dates(holidays.unwrap_or_default())?;
        let extra_working_dates = to_dates(extra_working_dates.unwrap_or_default())?;
        let working_days = match working_days {
            Some(names) if !names.is_empty() => names
                .iter()
                .map(|n| parse_working_day(n))
                .collect::<Result<Vec<_>, _>>()?,
            _ => DEFAULT_WORKING_DAYS.to_vec(),
        };

        _CalendarData::new(holidays, working_days, extra_working_dates)
            .map(Arc::new)
            .map(Self)
    }

    /// Create a new calendar from its definition.
    #[inline]
    pub fn from_config(config: CalendarConfig) -> Result<Self, CalendarError> {
        Self::new(
            Some(config.holidays),
            config.working_days,
            Some(config.extra_working_dates),
        )
    }

    /// Get [CalendarBuilder] instance.
    #[inline]
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::new()
    }
}

fn to_dates(dates: Vec<DateLike>) -> Result<Vec<NaiveDate>, CalendarError> {
    dates
        .iter()
        .map(|d| d.to_date().map_err(CalendarError::from))
        .collect()
}

/// Dates of the sorted slice in `[from, to)`.
#[inline]
fn dates_within(dates: &[NaiveDate], from: NaiveDate, to: NaiveDate) -> &[NaiveDate] {
    let stt = dates.partition_point(|d| *d < from);
    let end = dates.partition_point(|d| *d < to);
    &dates[stt..end.max(stt)]
}

//
// methods
//
impl Calendar {
    /// Holidays of the calendar, sorted.
    #[inline]
    pub fn holidays(&self) -> &[NaiveDate] {
        &self.0.holidays
    }

    /// Weekdays of the working week, in the given order.
    #[inline]
    pub fn working_days(&self) -> &[Weekday] {
        &self.0.working_days
    }

    /// Extra working dates of the calendar, sorted.
    #[inline]
    pub fn extra_working_dates(&self) -> &[NaiveDate] {
        &self.0.extra_working_dates
    }

    /// Definition of this calendar. Dates are written in ISO format and weekdays as three-letter tokens.
    pub fn to_config(&self) -> CalendarConfig {
        CalendarConfig {
            holidays: self.holidays().iter().copied().map(DateLike::from).collect(),
            working_days: Some(
                self.working_days()
                    .iter()
                    .map(|wd| weekday_token(*wd).to_string())
                    .collect(),
            ),
            extra_working_dates: self
                .extra_working_dates()
                .iter()
                .copied()
                .map(DateLike::from)
                .collect(),
        }
    }

    #[inline]
    fn num_working_days_in_week(&self) -> i64 {
        self.0.week_mask.iter().filter(|b| **b).count() as i64
    }

    /// Check if the given date is one of the holidays.
    #[inline]
    pub fn is_holiday(&self, date: impl CalendarDate) -> bool {
        self.0
            .holidays
            .binary_search(&date.calendar_date())
            .is_ok()
    }

    /// Check if the weekday of the given date is in the working week.
    ///
    /// Holidays and extra working dates are not taken into account.
    #[inline]
    pub fn is_working_day(&self, date: impl CalendarDate) -> bool {
        self.0.week_mask[date.calendar_date().weekday().num_days_from_monday() as usize]
    }

    /// Check if the given date is one of the extra working dates.
    #[inline]
    pub fn is_extra_working_date(&self, date: impl CalendarDate) -> bool {
        self.0
            .extra_working_dates
            .binary_search(&date.calendar_date())
            .is_ok()
    }

    /// Check if the given date is a business day.
    #[inline]
    pub fn is_business_day(&self, date: impl CalendarDate) -> bool {
        let date = date.calendar_date();
        if self.is_holiday(date) {
            false
        } else {
            self.is_extra_working_date(date) || self.is_working_day(date)
        }
    }

    /// The given date if it is a business day, otherwise the next business day.
    ///
    /// # Errors
    /// [`CalendarError::OutOfRange`] if no business day is found before [`NaiveDate::MAX`].
    #[inline]
    pub fn roll_forward(&self, date: impl CalendarDate) -> Result<NaiveDate, CalendarError> {
        let date = date.calendar_date();
        self.iter_business_days(date)
            .next()
            .ok_or(CalendarError::OutOfRange {
                operation: "Rolling forward",
                date,
            })
    }

    /// The given date if it is a business day, otherwise the previous business day.
    ///
    /// # Errors
    /// [`CalendarError::OutOfRange`] if no business day is found after [`NaiveDate::MIN`].
    #[inline]
    pub fn roll_backward(&self, date: impl CalendarDate) -> Result<NaiveDate, CalendarError> {
        let date = date.calendar_date();
        self.iter_business_days_rev(date)
            .next()
            .ok_or(CalendarError::OutOfRange {
                operation: "Rolling backward",
                date,
            })
    }

    /// The first business day strictly after the given date.
    pub fn next_business_day(&self, date: impl CalendarDate) -> Result<NaiveDate, CalendarError> {
        let date = date.calendar_date();
        let err = CalendarError::OutOfRange {
            operation: "Searching the next business day",
            date,
        };
        let Some(start) = date.succ_opt() else {
            return Err(err);
        };
        self.iter_business_days(start).next().ok_or(err)
    }

    /// The last business day strictly before the given date.
    pub fn previous_business_day(
        &self,
        date: impl CalendarDate,
    ) -> Result<NaiveDate, CalendarError> {
        let date = date.calendar_date();
        let err = CalendarError::OutOfRange {
            operation: "Searching the previous business day",
            date,
        };
        let Some(start) = date.pred_opt() else {
            return Err(err);
        };
        self.iter_business_days_rev(start).next().ok_or(err)
    }

    /// Shift the given date by `delta` business days.
    ///
    /// A non-business day is first rolled in the direction of `delta`, forward for positive
    /// and backward for negative, and the roll itself is not counted.
    /// `delta == 0` returns the given date as it is, even if it is not a business day.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use qbizcal::calendar::Calendar;
    ///
    /// let ymd = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let cal = Calendar::builder().with_holidays(["2013-01-01"]).build().unwrap();
    ///
    /// assert_eq!(cal.add_business_days(ymd(2013, 1, 1), 0), Ok(ymd(2013, 1, 1)));
    /// assert_eq!(cal.add_business_days(ymd(2013, 1, 1), 2), Ok(ymd(2013, 1, 4)));
    /// assert_eq!(cal.add_business_days(ymd(2013, 1, 1), -1), Ok(ymd(2012, 12, 28)));
    /// ```
    pub fn add_business_days(
        &self,
        date: impl CalendarDate,
        delta: i32,
    ) -> Result<NaiveDate, CalendarError> {
        let date = date.calendar_date();
        log::debug!("Adding {delta} business days to {date}");

        let steps = delta.unsigned_abs() as usize;
        let res = match delta.signum() {
            0 => Some(date),
            1 => self.iter_business_days(date).nth(steps),
            _ => self.iter_business_days_rev(date).nth(steps),
        };
        res.ok_or(CalendarError::OutOfRange {
            operation: "Adding business days",
            date,
        })
    }

    /// Count the business days in the half-open range `[from, to)`.
    ///
    /// When `to` is before `from`, the count of `[to, from)` is returned with a negative sign.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use qbizcal::calendar::Calendar;
    ///
    /// let ymd = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let cal = Calendar::default();
    ///
    /// let from = ymd(2014, 6, 2); // Mon
    /// let to = ymd(2014, 6, 5); // Thu
    ///
    /// assert_eq!(cal.business_days_between(from, to), 3);
    /// assert_eq!(cal.business_days_between(to, from), -3);
    /// assert_eq!(cal.business_days_between(from, from), 0);
    /// ```
    pub fn business_days_between(&self, from: impl CalendarDate, to: impl CalendarDate) -> i64 {
        let (from, to) = (from.calendar_date(), to.calendar_date());
        if to < from {
            return -self.business_days_between(to, from);
        }
        log::debug!("Calculating business days between {from} and {to}");

        // whole weeks in [from, remaining_to) contain every weekday the same number of times
        let days = (to - from).num_days();
        let (full_weeks, remaining_days) = (days / 7, days % 7);
        let remaining_to = to - Days::new(remaining_days as u64);

        let estimate = full_weeks * self.num_working_days_in_week();
        let holidays = dates_within(self.holidays(), from, remaining_to)
            .iter()
            .filter(|d| self.is_working_day(**d))
            .count() as i64;
        let extras = dates_within(self.extra_working_dates(), from, remaining_to).len() as i64;
        let remainder = DateIterator::forward(remaining_to)
            .take_while(|d| *d < to)
            .filter(|d| self.is_business_day(*d))
            .count() as i64;

        estimate - holidays + extras + remainder
    }

    /// Ordinal of the given date among the business days of its month.
    ///
    /// This is the number of business days from the first of the month up to and including the date.
    /// So, a non-business day shares the ordinal of the preceding business day,
    /// and is `0` when no business day precedes it in the month.
    pub fn get_business_day_of_month(&self, date: impl CalendarDate) -> u32 {
        let date = date.calendar_date();
        let first = date - Days::new(u64::from(date.day0()));
        let before = self.business_days_between(first, date);
        (before + i64::from(self.is_business_day(date))) as u32
    }

    /// Iterator over the business days on and after the given date.
    ///
    /// The iterator ends at [`NaiveDate::MAX`].
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use qbizcal::calendar::Calendar;
    ///
    /// let ymd = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let cal = Calendar::builder().with_holidays(["2013-01-01"]).build().unwrap();
    ///
    /// let mut iter = cal.iter_business_days(ymd(2012, 12, 31));
    /// assert_eq!(iter.next(), Some(ymd(2012, 12, 31)));
    /// assert_eq!(iter.next(), Some(ymd(2013, 1, 2)));
    /// assert_eq!(iter.next(), Some(ymd(2013, 1, 3)));
    ///
    /// let mut iter = cal.iter_business_days_rev(ymd(2013, 1, 1));
    /// assert_eq!(iter.next(), Some(ymd(2012, 12, 31)));
    /// assert_eq!(iter.next(), Some(ymd(2012, 12, 28)));
    /// ```
    #[inline]
    pub fn iter_business_days(&self, start: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        DateIterator::forward(start).filter(move |d| self.is_business_day(*d))
    }

    /// Iterator over the business days on and before the given date, latest first.
    ///
    /// The iterator ends at [`NaiveDate::MIN`].
    #[inline]
    pub fn iter_business_days_rev(
        &self,
        start: NaiveDate,
    ) -> impl Iterator<Item = NaiveDate> + '_ {
        DateIterator::backward(start).filter(move |d| self.is_business_day(*d))
    }

    /// Iterator over the non-business days on and after the given date.
    #[inline]
    pub fn iter_holidays(&self, start: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        DateIterator::forward(start).filter(move |d| !self.is_business_day(*d))
    }

    /// Iterator over the non-business days on and before the given date, latest first.
    #[inline]
    pub fn iter_holidays_rev(&self, start: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        DateIterator::backward(start).filter(move |d| !self.is_business_day(*d))
    }
}

//
// date-like entry points
//
/// Each method parses its input with [`DateLike::to_date`] and runs
/// the operation of the same name without the `try_` prefix.
///
/// ```
/// use chrono::NaiveDate;
/// use qbizcal::calendar::{Calendar, CalendarError};
///
/// let cal = Calendar::default();
///
/// assert_eq!(cal.try_is_business_day("Sat 5th Jan, 2013"), Ok(false));
/// assert_eq!(
///     cal.try_roll_forward("2013-01-05"),
///     Ok(NaiveDate::from_ymd_opt(2013, 1, 7).unwrap())
/// );
/// assert!(matches!(
///     cal.try_business_days_between("someday", "2013-01-07"),
///     Err(CalendarError::Date(_))
/// ));
/// ```
impl Calendar {
    pub fn try_is_holiday(&self, date: impl Into<DateLike>) -> Result<bool, CalendarError> {
        Ok(self.is_holiday(to_date(date)?))
    }

    pub fn try_is_working_day(&self, date: impl Into<DateLike>) -> Result<bool, CalendarError> {
        Ok(self.is_working_day(to_date(date)?))
    }

    pub fn try_is_extra_working_date(
        &self,
        date: impl Into<DateLike>,
    ) -> Result<bool, CalendarError> {
        Ok(self.is_extra_working_date(to_date(date)?))
    }

    pub fn try_is_business_day(&self, date: impl Into<DateLike>) -> Result<bool, CalendarError> {
        Ok(self.is_business_day(to_date(date)?))
    }

    pub fn try_roll_forward(&self, date: impl Into<DateLike>) -> Result<NaiveDate, CalendarError> {
        self.roll_forward(to_date(date)?)
    }

    pub fn try_roll_backward(
        &self,
        date: impl Into<DateLike>,
    ) -> Result<NaiveDate, CalendarError> {
        self.roll_backward(to_date(date)?)
    }

    pub fn try_next_business_day(
        &self,
        date: impl Into<DateLike>,
    ) -> Result<NaiveDate, CalendarError> {
        self.next_business_day(to_date(date)?)
    }

    pub fn try_previous_business_day(
        &self,
        date: impl Into<DateLike>,
    ) -> Result<NaiveDate, CalendarError> {
        self.previous_business_day(to_date(date)?)
    }

    pub fn try_add_business_days(
        &self,
        date: impl Into<DateLike>,
        delta: i32,
    ) -> Result<NaiveDate, CalendarError> {
        self.add_business_days(to_date(date)?, delta)
    }

    /// `from` is parsed first, so an error in it is reported even if `to` is also invalid.
    pub fn try_business_days_between(
        &self,
        from: impl Into<DateLike>,
        to: impl Into<DateLike>,
    ) -> Result<i64, CalendarError> {
        let from = to_date(from)?;
        Ok(self.business_days_between(from, to_date(to)?))
    }

    pub fn try_get_business_day_of_month(
        &self,
        date: impl Into<DateLike>,
    ) -> Result<u32, CalendarError> {
        Ok(self.get_business_day_of_month(to_date(date)?))
    }
}

#[inline]
fn to_date(date: impl Into<DateLike>) -> Result<NaiveDate, CalendarError> {
    Ok(date.into().to_date()?)
}

// -----------------------------------------------------------------------------
// DateIterator
// -----------------------------------------------------------------------------
/// Consecutive dates from the start, in one direction.
struct DateIterator {
    cur: Option<NaiveDate>,
    backward: bool,
}

impl DateIterator {
    #[inline]
    fn forward(start: NaiveDate) -> Self {
        Self {
            cur: Some(start),
            backward: false,
        }
    }

    #[inline]
    fn backward(start: NaiveDate) -> Self {
        Self {
            cur: Some(start),
            backward: true,
        }
    }
}

impl Iterator for DateIterator {
    type Item = NaiveDate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let ret = self.cur?;
        self.cur = if self.backward {
            ret.pred_opt()
        } else {
            ret.succ_opt()
        };
        Some(ret)
    }
}

impl std::iter::FusedIterator for DateIterator {}

// -----------------------------------------------------------------------------
// CalendarBuilder
// -----------------------------------------------------------------------------
/// Builder of a calendar
///
/// Each data of [`Calendar`] can be set at most once and every setter is optional.
/// Unset data are empty, and the working week is Monday to Friday.
///
/// This builder has type parameters for each data.
/// These are used to prevent multiple calls of the same method.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use qbizcal::calendar::Calendar;
///
/// let ymd = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// let cal = Calendar::builder()
///     .with_holidays([ymd(2014, 6, 12)])
///     .with_working_days(["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"])
///     .with_extra_working_dates(["2014-06-13"])
///     .build()
///     .unwrap();
///
/// assert!(cal.is_business_day(ymd(2014, 6, 13))); // Friday, extra working date
/// assert!(!cal.is_business_day(ymd(2014, 6, 12))); // Thursday, holiday
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarBuilder<H = (), W = (), E = ()> {
    holidays: H,
    working_days: W,
    extra_working_dates: E,
}

/// Builder field which may be left unset.
pub trait MaybeProvided<T> {
    fn into_provided(self) -> Option<T>;
}

impl<T> MaybeProvided<T> for () {
    #[inline]
    fn into_provided(self) -> Option<T> {
        None
    }
}

impl<T> MaybeProvided<Vec<T>> for Vec<T> {
    #[inline]
    fn into_provided(self) -> Option<Vec<T>> {
        Some(self)
    }
}

//
// construction
//
impl Default for CalendarBuilder {
    #[inline]
    fn default() -> Self {
        Self {
            holidays: (),
            working_days: (),
            extra_working_dates: (),
        }
    }
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W, E> CalendarBuilder<(), W, E> {
    /// Set the holidays of the calendar.
    pub fn with_holidays<It>(self, holidays: It) -> CalendarBuilder<Vec<DateLike>, W, E>
    where
        It: IntoIterator,
        It::Item: Into<DateLike>,
    {
        CalendarBuilder {
            holidays: holidays.into_iter().map(Into::into).collect(),
            working_days: self.working_days,
            extra_working_dates: self.extra_working_dates,
        }
    }
}

impl<H, E> CalendarBuilder<H, (), E> {
    /// Set the weekday names of the working week. An empty list means Monday to Friday.
    pub fn with_working_days<It>(self, working_days: It) -> CalendarBuilder<H, Vec<String>, E>
    where
        It: IntoIterator,
        It::Item: Into<String>,
    {
        CalendarBuilder {
            holidays: self.holidays,
            working_days: working_days.into_iter().map(Into::into).collect(),
            extra_working_dates: self.extra_working_dates,
        }
    }
}

impl<H, W> CalendarBuilder<H, W, ()> {
    /// Set the extra working dates of the calendar.
    ///
    /// These dates must fall on weekdays outside the working week.
    pub fn with_extra_working_dates<It>(
        self,
        extra_working_dates: It,
    ) -> CalendarBuilder<H, W, Vec<DateLike>>
    where
        It: IntoIterator,
        It::Item: Into<DateLike>,
    {
        CalendarBuilder {
            holidays: self.holidays,
            working_days: self.working_days,
            extra_working_dates: extra_working_dates.into_iter().map(Into::into).collect(),
        }
    }
}

impl<H, W, E> CalendarBuilder<H, W, E>
where
    H: MaybeProvided<Vec<DateLike>>,
    W: MaybeProvided<Vec<String>>,
    E: MaybeProvided<Vec<DateLike>>,
{
    /// Build a new calendar from the given data.
    ///
    /// # Errors
    /// See [`Calendar::new`].
    pub fn build(self) -> Result<Calendar, CalendarError> {
        Calendar::new(
            self.holidays.into_provided(),
            self.working_days.into_provided(),
            self.extra_working_dates.into_provided(),
        )
    }
}
