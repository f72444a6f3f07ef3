use chrono::{NaiveDate, NaiveDateTime, TimeZone};

use super::DateParser;

// -----------------------------------------------------------------------------
// DateError
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Hash)]
pub enum DateError {
    #[error("Unexpected input type {kind}. Expected a date, a datetime or a string")]
    UnsupportedType { kind: &'static str },
    #[error("Failed to parse '{input}' as a date: {reason}")]
    Parse { input: String, reason: String },
    #[error("'{input}' does not name a calendar date")]
    OutOfRange { input: String },
}

// -----------------------------------------------------------------------------
// CalendarDate
// -----------------------------------------------------------------------------
/// Values which carry a calendar date.
///
/// Calendar operations only look at the date part, so time of day and offset are dropped.
/// For [`chrono::DateTime`], the date in its own timezone is used.
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDate for chrono::DateTime<Tz> {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        (**self).calendar_date()
    }
}

// -----------------------------------------------------------------------------
// DateLike
// -----------------------------------------------------------------------------
/// Date-like input accepted when a calendar is defined.
///
/// Dates and datetimes are taken as they are (time is discarded).
/// Texts are parsed by [`DateParser`] when they are normalized.
///
/// ```
/// use chrono::NaiveDate;
/// use qbizcal::timepoint::DateLike;
///
/// let expected = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
///
/// assert_eq!(DateLike::from(expected).to_date(), Ok(expected));
/// assert_eq!(DateLike::from("9am, Tuesday 1st Jan, 2013").to_date(), Ok(expected));
/// assert_eq!(DateLike::from("2013-01-01T10:30:00").to_date(), Ok(expected));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateLike {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

//
// construction
//
impl From<NaiveDate> for DateLike {
    #[inline]
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for DateLike {
    #[inline]
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateLike {
    #[inline]
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        Self::DateTime(dt.naive_local())
    }
}

impl From<&str> for DateLike {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for DateLike {
    #[inline]
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

//
// methods
//
impl DateLike {
    /// Normalize to a date. Texts are parsed month-first, see [`DateParser`].
    #[inline]
    pub fn to_date(&self) -> Result<NaiveDate, DateError> {
        self.to_date_with(&DateParser::default())
    }

    /// Normalize to a date, parsing texts with the given parser.
    pub fn to_date_with(&self, parser: &DateParser) -> Result<NaiveDate, DateError> {
        match self {
            Self::Date(d) => Ok(*d),
            Self::DateTime(dt) => Ok(dt.date()),
            Self::Text(s) => parser.parse(s),
        }
    }
}

//
// ser/de
//
impl serde::Serialize for DateLike {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
            Self::DateTime(dt) => serializer.collect_str(&dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> serde::Deserialize<'de> for DateLike {
    fn deserialize<D>(deserializer: D) -> Result<DateLike, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = DateLike;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a date string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<DateLike, E> {
                Ok(DateLike::Text(v.to_owned()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<DateLike, E> {
                Ok(DateLike::Text(v))
            }

            fn visit_bool<E: serde::de::Error>(self, _: bool) -> Result<DateLike, E> {
                Err(E::custom(DateError::UnsupportedType { kind: "boolean" }))
            }

            fn visit_i64<E: serde::de::Error>(self, _: i64) -> Result<DateLike, E> {
                Err(E::custom(DateError::UnsupportedType { kind: "integer" }))
            }

            fn visit_u64<E: serde::de::Error>(self, _: u64) -> Result<DateLike, E> {
                Err(E::custom(DateError::UnsupportedType { kind: "integer" }))
            }

            fn visit_f64<E: serde::de::Error>(self, _: f64) -> Result<DateLike, E> {
                Err(E::custom(DateError::UnsupportedType { kind: "float" }))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

impl schemars::JsonSchema for DateLike {
    fn schema_name() -> String {
        "DateLike".to_string()
    }
    fn schema_id() -> std::borrow::Cow<'static, str> {
        "qbizcal::timepoint::DateLike".into()
    }
    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as schemars::JsonSchema>::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveTime};
    use rstest::rstest;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_date_of_datetime() {
        let dt = ymd(2019, 1, 6).and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());

        assert_eq!(dt.calendar_date(), ymd(2019, 1, 6));
        assert_eq!((&dt).calendar_date(), ymd(2019, 1, 6));
    }

    #[test]
    fn test_calendar_date_keeps_local_date() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let dt = tz.with_ymd_and_hms(2019, 1, 6, 1, 0, 0).unwrap();

        assert_eq!(dt.calendar_date(), ymd(2019, 1, 6));
        assert_eq!(DateLike::from(dt).to_date(), Ok(ymd(2019, 1, 6)));
    }

    #[rstest]
    #[case(DateLike::from(ymd(2019, 1, 6)), ymd(2019, 1, 6))]
    #[case(
        DateLike::from(ymd(2019, 1, 6).and_hms_opt(10, 30, 0).unwrap()),
        ymd(2019, 1, 6)
    )]
    #[case(DateLike::from("2019-01-06"), ymd(2019, 1, 6))]
    #[case(DateLike::from("2019-01-06T10:30:00".to_string()), ymd(2019, 1, 6))]
    #[case(DateLike::from("Jan 1st, 2019"), ymd(2019, 1, 1))]
    fn test_to_date(#[case] input: DateLike, #[case] expected: NaiveDate) {
        assert_eq!(input.to_date(), Ok(expected));
    }

    #[test]
    fn test_to_date_day_first() {
        let input = DateLike::from("6/1/2019");

        assert_eq!(input.to_date(), Ok(ymd(2019, 6, 1)));
        assert_eq!(
            input.to_date_with(&DateParser::day_first()),
            Ok(ymd(2019, 1, 6))
        );
    }

    #[test]
    fn test_to_date_unparsable() {
        let res = DateLike::from("not a date").to_date();

        assert!(matches!(res, Err(DateError::Parse { .. })));
    }

    #[rstest]
    #[case(serde_json::json!(true), "boolean")]
    #[case(serde_json::json!(20190106), "integer")]
    #[case(serde_json::json!(-1), "integer")]
    #[case(serde_json::json!(1.5), "float")]
    fn test_deserialize_unsupported(#[case] json: serde_json::Value, #[case] kind: &str) {
        let err = serde_json::from_value::<DateLike>(json).unwrap_err();

        assert!(err.to_string().contains(kind), "{err}");
        assert!(err.to_string().contains("Unexpected input type"), "{err}");
    }

    #[test]
    fn test_deserialize_text() {
        let d: DateLike = serde_json::from_value(serde_json::json!("Sun 2014-06-01")).unwrap();

        assert_eq!(d, DateLike::Text("Sun 2014-06-01".to_string()));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value([
            DateLike::from(ymd(2019, 1, 6)),
            DateLike::from(ymd(2019, 1, 6).and_hms_opt(10, 30, 0).unwrap()),
            DateLike::from("Jan 1st, 2019"),
        ])
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!(["2019-01-06", "2019-01-06T10:30:00", "Jan 1st, 2019"])
        );
    }
}
