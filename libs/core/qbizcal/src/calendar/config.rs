use crate::timepoint::DateLike;

// -----------------------------------------------------------------------------
// CalendarConfig
// -----------------------------------------------------------------------------
/// Definition of a calendar as it is written in YAML or JSON.
///
/// All keys are optional and unknown keys are rejected.
///
/// ```yaml
/// holidays:
///   - 2014-12-25
///   - 26th Dec 2014
/// working_days: [monday, tuesday, wednesday, thursday, friday]
/// extra_working_dates: []
/// ```
///
/// Validation happens when the config is turned into a [`super::Calendar`].
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Dates which are never business days.
    #[serde(default)]
    pub holidays: Vec<DateLike>,

    /// Weekday names of the working week. Monday to Friday when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_days: Option<Vec<String>>,

    /// Business days whose weekday is not in the working week.
    #[serde(default)]
    pub extra_working_dates: Vec<DateLike>,
}

// -----------------------------------------------------------------------------
// ConfigKey
// -----------------------------------------------------------------------------
/// Top-level keys of [`CalendarConfig`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigKey {
    Holidays,
    WorkingDays,
    ExtraWorkingDates,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::VariantNames;

    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let cfg: CalendarConfig = serde_json::from_value(serde_json::json!({})).unwrap();

        assert_eq!(cfg, CalendarConfig::default());
    }

    #[test]
    fn test_deserialize() {
        let cfg: CalendarConfig = serde_json::from_value(serde_json::json!({
            "holidays": ["2014-12-25", "26th Dec 2014"],
            "working_days": ["monday", "friday"],
        }))
        .unwrap();

        assert_eq!(
            cfg.holidays,
            vec![
                DateLike::from("2014-12-25"),
                DateLike::from("26th Dec 2014")
            ]
        );
        assert_eq!(
            cfg.working_days,
            Some(vec!["monday".to_string(), "friday".to_string()])
        );
        assert!(cfg.extra_working_dates.is_empty());
    }

    #[test]
    fn test_deserialize_unknown_key() {
        let res = serde_json::from_value::<CalendarConfig>(serde_json::json!({
            "holiday": ["2014-12-25"],
        }));

        assert!(res.is_err());
    }

    #[test]
    fn test_deserialize_boolean_date() {
        let err = serde_json::from_value::<CalendarConfig>(serde_json::json!({
            "holidays": [true],
        }))
        .unwrap_err();

        assert!(err.to_string().contains("boolean"), "{err}");
    }

    #[rstest]
    #[case("holidays", ConfigKey::Holidays)]
    #[case("working_days", ConfigKey::WorkingDays)]
    #[case("extra_working_dates", ConfigKey::ExtraWorkingDates)]
    fn test_config_key(#[case] key: &str, #[case] expected: ConfigKey) {
        assert_eq!(ConfigKey::from_str(key), Ok(expected));
        assert_eq!(expected.to_string(), key);
    }

    #[test]
    fn test_config_key_matches_fields() {
        let json = serde_json::to_value(CalendarConfig {
            working_days: Some(vec![]),
            ..Default::default()
        })
        .unwrap();
        let mut fields = json
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        fields.sort();
        let mut keys = ConfigKey::VARIANTS.to_vec();
        keys.sort();

        assert_eq!(fields, keys);
    }
}
