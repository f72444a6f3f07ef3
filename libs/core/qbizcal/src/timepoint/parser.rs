use chrono::NaiveDate;

use super::DateError;

// -----------------------------------------------------------------------------
// DateParser
// -----------------------------------------------------------------------------
/// Parser of free-form date texts.
///
/// Input is case-insensitive and the following shapes are accepted.
/// - ISO-like: `2019-01-06`, `2019/01/06`, optionally followed by a time and an offset,
///   such as `2019-01-06T10:30:00+09:00`.
/// - Numeric: `6/1/2019`, `6-1-19`, `6.1.2019`. Whether the first number is the month
///   or the day is controlled by the parser. When the preferred order names no date
///   but the swapped one does, the swapped order is used.
/// - Named months: `1st Jan, 2013`, `25th December 2014`, `Jan 1st, 2019`.
///
/// A leading weekday name (`Tuesday 1st Jan, 2013`) and a leading or trailing clock time
/// (`9am`, `9:30pm`, `10:30:00`) are allowed and ignored.
/// Two-digit years are mapped into `1969..=2068` regardless of the current date.
///
/// ```
/// use chrono::NaiveDate;
/// use qbizcal::timepoint::DateParser;
///
/// let ymd = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// assert_eq!(DateParser::new().parse("6/1/2019"), Ok(ymd(2019, 6, 1)));
/// assert_eq!(DateParser::day_first().parse("6/1/2019"), Ok(ymd(2019, 1, 6)));
/// assert_eq!(DateParser::new().parse("Sun 06 Jan 19"), Ok(ymd(2019, 1, 6)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateParser {
    day_first: bool,
}

/// Fields extracted by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parsed {
    /// Year, month and day.
    Ymd(i32, u32, u32),
    /// `a/b/y` where the order of day and month is not known yet.
    Numeric(u32, u32, i32),
}

fn expand_two_digit_year(yy: i32) -> i32 {
    if yy < 69 {
        2000 + yy
    } else {
        1900 + yy
    }
}

//
// construction
//
impl DateParser {
    /// Parser reading numeric dates month-first, `6/1/2019` is June 1st.
    #[inline]
    pub fn new() -> Self {
        Self { day_first: false }
    }

    /// Parser reading numeric dates day-first, `6/1/2019` is January 6th.
    #[inline]
    pub fn day_first() -> Self {
        Self { day_first: true }
    }
}

//
// methods
//
impl DateParser {
    #[inline]
    pub fn is_day_first(&self) -> bool {
        self.day_first
    }

    pub fn parse(&self, s: &str) -> Result<NaiveDate, DateError> {
        peg::parser!( grammar date_text() for str {
            rule _()
                = quiet!{[' ' | '\t' | ',']*}

            rule sep()
                = quiet!{[' ' | '\t' | ',']+}

            rule word_end()
                = !['a'..='z']

            rule num2() -> u32
                = n:$(['0'..='9']*<1,2>) !['0'..='9'] {? n.parse().or(Err("number")) }

            rule year4() -> i32
                = n:$(['0'..='9']*<4>) !['0'..='9'] {? n.parse().or(Err("four-digit year")) }

            rule year() -> i32
                = year4()
                / n:$(['0'..='9']*<2>) !['0'..='9'] {?
                    n.parse().map(expand_two_digit_year).or(Err("two-digit year"))
                }
                / expected!("year")

            rule ordinal()
                = "st" / "nd" / "rd" / "th"

            rule day() -> u32
                = d:num2() ordinal()? { d }

            rule month_word() -> u32
                = "january" { 1 } / "jan" { 1 }
                / "february" { 2 } / "feb" { 2 }
                / "march" { 3 } / "mar" { 3 }
                / "april" { 4 } / "apr" { 4 }
                / "may" { 5 }
                / "june" { 6 } / "jun" { 6 }
                / "july" { 7 } / "jul" { 7 }
                / "august" { 8 } / "aug" { 8 }
                / "september" { 9 } / "sept" { 9 } / "sep" { 9 }
                / "october" { 10 } / "oct" { 10 }
                / "november" { 11 } / "nov" { 11 }
                / "december" { 12 } / "dec" { 12 }

            rule month() -> u32
                = m:month_word() word_end() "."? { m }
                / expected!("month name")

            rule weekday_word()
                = "monday" / "mon"
                / "tuesday" / "tues" / "tue"
                / "wednesday" / "wed"
                / "thursday" / "thurs" / "thur" / "thu"
                / "friday" / "fri"
                / "saturday" / "sat"
                / "sunday" / "sun"

            rule weekday()
                = weekday_word() word_end() "."?

            rule meridiem()
                = ("am" / "pm" / "a.m." / "p.m.") word_end()

            rule zone()
                = "z" / ['+' | '-'] ['0'..='9']*<2> (":"? ['0'..='9']*<2>)?

            rule time()
                = num2() (":" num2())*<0,2> _ meridiem()
                / num2() (":" num2())*<1,2> ("." ['0'..='9']+)? (_ meridiem())? (_ zone())?

            rule date() -> Parsed
                = y:year4() "-" m:num2() "-" d:num2() { Parsed::Ymd(y, m, d) }
                / y:year4() "/" m:num2() "/" d:num2() { Parsed::Ymd(y, m, d) }
                / a:num2() "/" b:num2() "/" y:year() { Parsed::Numeric(a, b, y) }
                / a:num2() "-" b:num2() "-" y:year() { Parsed::Numeric(a, b, y) }
                / a:num2() "." b:num2() "." y:year() { Parsed::Numeric(a, b, y) }
                / d:day() sep() m:month() sep() y:year() { Parsed::Ymd(y, m, d) }
                / m:month() sep() d:day() sep() y:year() { Parsed::Ymd(y, m, d) }
                / expected!("date")

            pub(crate) rule parse() -> Parsed
                = _ (time() sep())? (weekday() _)? d:date() (("t" / sep()) time())? _ { d }
        });

        let lowered = s.trim().to_ascii_lowercase();
        let parsed = date_text::parse(&lowered).map_err(|e| DateError::Parse {
            input: s.to_owned(),
            reason: e.to_string(),
        })?;

        let date = match parsed {
            Parsed::Ymd(y, m, d) => NaiveDate::from_ymd_opt(y, m, d),
            Parsed::Numeric(a, b, y) => {
                let (m, d) = if self.day_first { (b, a) } else { (a, b) };
                NaiveDate::from_ymd_opt(y, m, d).or_else(|| NaiveDate::from_ymd_opt(y, d, m))
            }
        };
        date.ok_or_else(|| DateError::OutOfRange {
            input: s.to_owned(),
        })
    }
}

/// Parse a date text month-first with the default [`DateParser`].
#[inline]
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    DateParser::default().parse(s)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2019-01-06", ymd(2019, 1, 6))]
    #[case("2019/01/06", ymd(2019, 1, 6))]
    #[case("2019-1-6", ymd(2019, 1, 6))]
    #[case("2019-01-06T10:30:00", ymd(2019, 1, 6))]
    #[case("2019-01-06 10:30", ymd(2019, 1, 6))]
    #[case("2019-01-06T10:30:00.123Z", ymd(2019, 1, 6))]
    #[case("2019-01-06T23:30:00+09:00", ymd(2019, 1, 6))]
    #[case("2019-01-06T23:30:00-0500", ymd(2019, 1, 6))]
    #[case("  2019-01-06  ", ymd(2019, 1, 6))]
    #[case("Jan 1st, 2019", ymd(2019, 1, 1))]
    #[case("January 1 2019", ymd(2019, 1, 1))]
    #[case("jan. 1, 2019", ymd(2019, 1, 1))]
    #[case("1st Jan, 2013", ymd(2013, 1, 1))]
    #[case("25th December 2014", ymd(2014, 12, 25))]
    #[case("Thursday 3nd Jan, 2013", ymd(2013, 1, 3))]
    #[case("9am, Tuesday 1st Jan, 2013", ymd(2013, 1, 1))]
    #[case("9:30 pm Sunday 6th Jan, 2013", ymd(2013, 1, 6))]
    #[case("Monday 26th Mar, 2018", ymd(2018, 3, 26))]
    #[case("Sat. 2nd Sept 2017", ymd(2017, 9, 2))]
    #[case("2 May 19", ymd(2019, 5, 2))]
    #[case("2 May 70", ymd(1970, 5, 2))]
    #[case("2 May 68", ymd(2068, 5, 2))]
    #[case("2 May 69", ymd(1969, 5, 2))]
    #[case("1/2/68", ymd(2068, 1, 2))]
    #[case("Wed 4 Jun 2014 10:00am", ymd(2014, 6, 4))]
    #[case("MAR 3 2014", ymd(2014, 3, 3))]
    fn test_parse_unambiguous(
        #[case] input: &str,
        #[case] expected: NaiveDate,
        #[values(DateParser::new(), DateParser::day_first())] parser: DateParser,
    ) {
        assert_eq!(parser.parse(input), Ok(expected));
    }

    #[rstest]
    #[case("6/1/2019", ymd(2019, 6, 1), ymd(2019, 1, 6))]
    #[case("Sun 06/01/2013", ymd(2013, 6, 1), ymd(2013, 1, 6))]
    #[case("2-6-14", ymd(2014, 2, 6), ymd(2014, 6, 2))]
    #[case("2.6.2014", ymd(2014, 2, 6), ymd(2014, 6, 2))]
    #[case("12/6/2014 9am", ymd(2014, 12, 6), ymd(2014, 6, 12))]
    // only one order names a date
    #[case("13/6/2014", ymd(2014, 6, 13), ymd(2014, 6, 13))]
    #[case("6/13/2014", ymd(2014, 6, 13), ymd(2014, 6, 13))]
    fn test_parse_numeric(
        #[case] input: &str,
        #[case] month_first: NaiveDate,
        #[case] day_first: NaiveDate,
    ) {
        assert_eq!(DateParser::new().parse(input), Ok(month_first));
        assert_eq!(DateParser::day_first().parse(input), Ok(day_first));
    }

    #[rstest]
    #[case("")]
    #[case("not a date")]
    #[case("2019-01")]
    #[case("Janu 1, 2019")]
    #[case("1st Jan")]
    #[case("2019-01-06 and more")]
    #[case("20190106")]
    fn test_parse_error(#[case] input: &str) {
        let res = DateParser::new().parse(input);

        assert!(matches!(res, Err(DateError::Parse { .. })), "{res:?}");
    }

    #[rstest]
    #[case("2019-02-30")]
    #[case("13/13/2019")]
    #[case("32nd Jan 2019")]
    #[case("Feb 29th, 2019")]
    fn test_parse_no_such_date(#[case] input: &str) {
        let res = DateParser::new().parse(input);

        assert_eq!(
            res,
            Err(DateError::OutOfRange {
                input: input.to_string()
            })
        );
    }

    #[test]
    fn test_parse_error_message_keeps_input() {
        let err = parse_date("Not A Date").unwrap_err();

        assert!(err.to_string().contains("'Not A Date'"), "{err}");
    }

    #[test]
    fn test_parse_date_is_month_first() {
        assert_eq!(parse_date("6/1/2019"), Ok(ymd(2019, 6, 1)));
    }
}
