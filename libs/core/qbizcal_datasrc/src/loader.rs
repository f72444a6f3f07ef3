use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use qbizcal::calendar::{Calendar, CalendarConfig, ConfigKey};
use serde_yaml::{Mapping, Value};
use strum::VariantNames;

use crate::{CalendarSrc, LoadError};

const BUNDLED: [(&str, &str); 2] = [
    ("target", include_str!("../data/target.yml")),
    ("weekdays", include_str!("../data/weekdays.yml")),
];

// -----------------------------------------------------------------------------
// CalendarLoader
// -----------------------------------------------------------------------------
/// Loader of calendar definitions written in YAML.
///
/// `load(name)` looks for `<name>.yml` in each search path in order,
/// and then among the calendars bundled with this crate.
///
/// ```
/// use qbizcal_datasrc::CalendarLoader;
///
/// let loader = CalendarLoader::new();
/// let cal = loader.load("weekdays").unwrap();
///
/// assert_eq!(cal.working_days().len(), 5);
/// assert!(loader.load("no_such_calendar").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CalendarLoader {
    search_paths: Vec<PathBuf>,
}

//
// construction
//
impl CalendarLoader {
    /// Loader of the bundled calendars only.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory searched before the bundled calendars.
    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }
}

//
// methods
//
impl CalendarLoader {
    #[inline]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Names of the calendars bundled with this crate.
    pub fn bundled_names() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(name, _)| *name)
    }

    pub fn load(&self, name: &str) -> Result<Calendar, LoadError> {
        validate_name(name)?;

        let file_name = format!("{name}.yml");
        for dir in &self.search_paths {
            let path = dir.join(&file_name);
            if path.is_file() {
                return load_file(name, &path);
            }
        }
        if let Some((_, text)) = BUNDLED.iter().find(|(n, _)| *n == name) {
            log::debug!("Extracting data from bundled calendar '{name}'");
            return parse_definition(name, text);
        }
        Err(LoadError::NotFound {
            name: name.to_owned(),
        })
    }
}

impl CalendarSrc for CalendarLoader {
    #[inline]
    fn get_calendar(&self, name: &str) -> Result<Calendar, LoadError> {
        self.load(name)
    }
}

fn validate_name(name: &str) -> Result<(), LoadError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(LoadError::InvalidName {
            name: name.to_owned(),
        })
    }
}

fn load_file(name: &str, path: &Path) -> Result<Calendar, LoadError> {
    log::debug!("Extracting data from {} yaml file", path.display());
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_definition(name, &text)
}

/// Build a calendar from its YAML definition.
///
/// Top-level keys must be among [`ConfigKey`] and an empty document is the default calendar.
pub fn parse_definition(name: &str, text: &str) -> Result<Calendar, LoadError> {
    let yaml_err = |source| LoadError::Yaml {
        name: name.to_owned(),
        source,
    };

    let mapping = if text.trim().is_empty() {
        Mapping::new()
    } else {
        match serde_yaml::from_str::<Value>(text).map_err(yaml_err)? {
            Value::Null => Mapping::new(),
            Value::Mapping(m) => m,
            _ => {
                return Err(LoadError::NotAMapping {
                    name: name.to_owned(),
                })
            }
        }
    };

    if let Some(key) = mapping
        .keys()
        .find(|k| k.as_str().and_then(|k| ConfigKey::from_str(k).ok()).is_none())
    {
        return Err(LoadError::InvalidKey {
            key: key
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| format!("{key:?}")),
            valid: ConfigKey::VARIANTS.join(", "),
        });
    }

    let config: CalendarConfig =
        serde_yaml::from_value(Value::Mapping(mapping)).map_err(yaml_err)?;
    Calendar::from_config(config).map_err(|source| LoadError::Calendar {
        name: name.to_owned(),
        source,
    })
}
