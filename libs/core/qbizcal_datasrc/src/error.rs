use std::path::PathBuf;

use qbizcal::calendar::CalendarError;

// -----------------------------------------------------------------------------
// LoadError
// -----------------------------------------------------------------------------
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid calendar name '{name}'. Only alphanumerics, '_' and '-' are allowed")]
    InvalidName { name: String },
    #[error("No such calendar '{name}'")]
    NotFound { name: String },
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse the definition of calendar '{name}'")]
    Yaml {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Definition of calendar '{name}' must be a mapping")]
    NotAMapping { name: String },
    #[error("Invalid key {key} found. Only valid keys are: {valid}")]
    InvalidKey { key: String, valid: String },
    #[error("Invalid definition of calendar '{name}'")]
    Calendar {
        name: String,
        #[source]
        source: CalendarError,
    },
}
